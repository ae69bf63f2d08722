//! Property tests: well-formed frames survive parse then plain render.

use proptest::prelude::*;
use vtrace_parse::{parse_frame, parse_trace};
use vtrace_render::{PlainStyler, Renderer};
use vtrace_source::NoSource;

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z_$][A-Za-z0-9_$]{0,10}".prop_filter("modifier keyword", |s| s != "async" && s != "new")
}

fn filename() -> impl Strategy<Value = String> {
    prop_oneof![
        "file:///[a-z]{1,8}/[a-z]{1,8}\\.(ts|js)",
        "https://[a-z]{1,8}\\.land/[a-z]{1,8}\\.ts",
        "[a-z]{1,8}\\.js",
        Just("<anonymous>".to_string()),
    ]
}

fn suffix() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (1u64..100_000).prop_map(|y| format!(":{y}")),
        (1u64..100_000, 1u64..500).prop_map(|(y, x)| format!(":{y}:{x}")),
    ]
}

prop_compose! {
    fn frame_line()(
        is_async in any::<bool>(),
        is_new in any::<bool>(),
        type_name in proptest::option::of(identifier()),
        function in proptest::option::of(identifier()),
        method in proptest::option::of(identifier()),
        file in filename(),
        suffix in suffix(),
        evals in proptest::collection::vec(
            (proptest::option::of(identifier()), proptest::option::of((1u64..50, 1u64..50))),
            0..3,
        ),
    ) -> String {
        let mut location = format!("{file}{suffix}");
        let evals = if function.is_some() { evals } else { Vec::new() };
        for (name, position) in evals.iter().rev() {
            let name = name.as_deref().unwrap_or("<anonymous>");
            location = match position {
                Some((y, x)) => format!("eval at {name} ({location}), <anonymous>:{y}:{x}"),
                None => format!("eval at {name} ({location})"),
            };
        }

        let mut line = String::from("    at ");
        if is_async {
            line.push_str("async ");
        }
        match function {
            Some(function) => {
                let qualified = type_name.is_some() && !is_new;
                let aliased = method.is_some() && !is_new && !qualified;
                if is_new {
                    line.push_str("new ");
                }
                if qualified {
                    line.push_str(&format!("{}.", type_name.unwrap_or_default()));
                }
                line.push_str(&function);
                line.push(' ');
                if aliased {
                    line.push_str(&format!("[as {}] ", method.unwrap_or_default()));
                }
                line.push_str(&format!("({location})"));
            }
            None => line.push_str(&location),
        }
        line
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0),
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn well_formed_frames_round_trip(line in frame_line()) {
        let frame = parse_frame(&line);
        prop_assert!(frame.is_parsed(), "not parsed: {line}");

        let trace = parse_trace(&format!("Error\n{line}"));
        let out = Renderer::new(&NoSource, &PlainStyler).render(&trace);
        prop_assert_eq!(out, format!("Error\n{line}"));
    }

    #[test]
    fn arbitrary_traces_render_without_panicking(
        lines in proptest::collection::vec("    at [ -~]{0,40}", 0..8)
    ) {
        let raw = format!("Error: x\n{}", lines.join("\n"));
        let trace = parse_trace(&raw);
        let out = Renderer::new(&NoSource, &PlainStyler).render(&trace);
        prop_assert!(out.starts_with("Error: x"));
    }
}
