//! Splitting a whole stack string into header and frames.

use vtrace_model::{ErrorTrace, StackFrame};

use crate::frame::parse_frame;

const HEADER_SEPARATOR: &str = ": ";

/// Split a header line into name and message on the first `": "`.
///
/// A blank message is treated as absent.
pub fn split_header(line: &str) -> (&str, Option<&str>) {
    match line.split_once(HEADER_SEPARATOR) {
        Some((name, message)) if !message.trim().is_empty() => (name, Some(message)),
        Some((name, _)) => (name, None),
        None => (line, None),
    }
}

/// Parse a raw stack string.
///
/// Lines are split on `\n` and `\r\n`. A trailing empty line is kept as an
/// empty unparsed frame, so the text re-renders byte for byte. Frames that
/// are leftover source-context lines from a previously rendered trace are
/// dropped.
pub fn parse_trace(raw: &str) -> ErrorTrace {
    let mut lines = physical_lines(raw);
    let header = lines.next().unwrap_or_default();
    let (name, message) = split_header(header);

    let mut body: Vec<&str> = lines.collect();
    if message.is_none() && body.first().is_some_and(|line| line.is_empty()) {
        body.remove(0);
    }

    ErrorTrace::new(name, message.map(str::to_string), parse_frames(body))
}

/// Parse the name, message and stack a runtime error object carries.
///
/// The header is stripped from the front of `stack`. When the stack does
/// not start with it (the name or message changed after capture), its
/// first line is skipped instead.
pub fn parse_trace_parts(name: &str, message: Option<&str>, stack: &str) -> ErrorTrace {
    let message = message.filter(|m| !m.trim().is_empty());
    let header = match message {
        Some(message) => format!("{name}{HEADER_SEPARATOR}{message}"),
        None => name.to_string(),
    };

    let body = match stack.strip_prefix(header.as_str()) {
        Some("") => None,
        Some(rest) if rest.starts_with('\n') || rest.starts_with("\r\n") => rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n')),
        _ => {
            tracing::debug!(name, "stack does not start with its header");
            stack.split_once('\n').map(|(_, rest)| rest)
        }
    };

    let frames = body.map(|body| parse_frames(physical_lines(body))).unwrap_or_default();
    ErrorTrace::new(name, message.map(str::to_string), frames)
}

/// Split on `\n`, dropping a `\r` before it. Unlike `str::lines`, a trailing
/// empty line is kept.
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn parse_frames<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<StackFrame> {
    lines
        .into_iter()
        .map(parse_frame)
        .filter(|frame| !frame.is_code_line)
        .collect()
}
