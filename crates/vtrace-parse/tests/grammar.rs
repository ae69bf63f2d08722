//! Property tests for the frame and location grammar.

use proptest::prelude::*;
use vtrace_model::FRAME_PREFIX;
use vtrace_parse::{parse_frame, parse_named_location, parse_trace};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0),
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn non_frame_lines_stay_verbatim(line in "[^\n\r]{0,60}") {
        prop_assume!(!line.starts_with(FRAME_PREFIX));
        let frame = parse_frame(&line);
        prop_assert!(!frame.is_parsed());
        prop_assert_eq!(frame.raw, line);
    }

    #[test]
    fn frame_lines_never_panic_and_keep_raw(tail in "[ -~]{0,80}") {
        let line = format!("{FRAME_PREFIX}{tail}");
        let frame = parse_frame(&line);
        prop_assert_eq!(frame.raw, line);
    }

    #[test]
    fn location_suffix_is_split_exactly(
        name in "[a-z/._<>-]{1,16}",
        line in 1u64..1_000_000,
        column in proptest::option::of(1u64..10_000),
    ) {
        let text = match column {
            Some(column) => format!("{name}:{line}:{column}"),
            None => format!("{name}:{line}"),
        };
        let parsed = parse_named_location(&text);
        prop_assert_eq!(parsed.filename.as_str(), name.as_str());
        prop_assert_eq!(parsed.line(), Some(line));
        prop_assert_eq!(parsed.column(), column);
    }

    #[test]
    fn location_without_number_is_whole_filename(text in "[a-z/._ -]{0,24}") {
        let parsed = parse_named_location(&text);
        prop_assert_eq!(parsed.filename.as_str(), text.as_str());
        prop_assert_eq!(parsed.line(), None);
    }

    #[test]
    fn frame_count_matches_non_code_lines(
        lines in proptest::collection::vec("[a-z ():.]{0,30}", 0..12)
    ) {
        let raw = format!("Error: x\n{}", lines.join("\n"));
        let trace = parse_trace(&raw);
        let expected = raw
            .split('\n')
            .skip(1)
            .filter(|line| !line.trim_start().starts_with('|'))
            .count();
        prop_assert_eq!(trace.frames.len(), expected);
    }
}

#[test]
fn well_known_v8_shapes() {
    let trace = parse_trace(
        "TypeError: Cannot read properties of undefined (reading 'x')\n\
         \x20   at Object.<anonymous> (/srv/app/index.js:4:15)\n\
         \x20   at Module._compile (node:internal/modules/cjs/loader:1256:14)\n\
         \x20   at async Promise.all (index 0)\n\
         \x20   at new Worker (file:///srv/app/worker.ts:12:9)\n\
         \x20   at Array.forEach (<anonymous>)\n\
         \x20   at emit [as dispatch] (node:events:517:28)\n\
         \x20   at eval (eval at run (file:///srv/app/main.ts:3:1), <anonymous>:1:1)\n\
         \x20   at file:///srv/app/main.ts:20:1",
    );
    assert_eq!(trace.name, "TypeError");
    assert_eq!(
        trace.message.as_deref(),
        Some("Cannot read properties of undefined (reading 'x')")
    );
    assert_eq!(trace.frames.len(), 8);
    assert!(trace.frames.iter().all(|f| f.is_parsed()));

    let object = trace.frames[0].call().unwrap();
    assert_eq!(object.type_name.as_deref(), Some("Object"));
    assert_eq!(object.function_name.as_deref(), Some("<anonymous>"));
    assert_eq!(object.source_path(), Some("/srv/app/index.js"));

    let promise = trace.frames[2].call().unwrap();
    assert!(promise.is_async);
    assert_eq!(promise.location.filename, "index 0");

    assert!(trace.frames[3].is_new());
    assert!(trace.frames[4].is_anonymous());
    assert_eq!(
        trace.frames[5].call().unwrap().method_name.as_deref(),
        Some("dispatch")
    );
    assert!(trace.frames[6].is_eval());
    assert!(!trace.frames[7].is_function());
}
