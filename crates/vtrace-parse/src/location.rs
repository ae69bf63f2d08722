//! Splitting a `:line[:column]` suffix off a filename.

use vtrace_model::{Location, NamedLocation};

/// Largest integer a V8 runtime can print exactly (2^53 - 1).
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Parse a non-negative safe integer made only of ASCII digits.
///
/// Signs, fractions, exponents, whitespace and the empty string are rejected.
pub fn parse_safe_integer(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u64>().ok().filter(|n| *n <= MAX_SAFE_INTEGER)
}

/// Split a trailing `:line` or `:line:column` off `text`.
///
/// ```
/// use vtrace_parse::parse_named_location;
///
/// let loc = parse_named_location("a/b.ts:10:4");
/// assert_eq!((loc.filename.as_str(), loc.line(), loc.column()), ("a/b.ts", Some(10), Some(4)));
///
/// // A single number is the line.
/// assert_eq!(parse_named_location("a/b.ts:10").column(), None);
///
/// // Anything that is not a plain integer stays part of the filename.
/// assert_eq!(parse_named_location("a/b.ts:-1").filename, "a/b.ts:-1");
/// ```
pub fn parse_named_location(text: &str) -> NamedLocation {
    let Some(last) = text.rfind(':') else {
        return NamedLocation::new(text, Location::none());
    };
    let Some(trailing) = parse_safe_integer(&text[last + 1..]) else {
        return NamedLocation::new(text, Location::none());
    };

    if let Some(previous) = text[..last].rfind(':')
        && let Some(line) = parse_safe_integer(&text[previous + 1..last])
    {
        return NamedLocation::new(&text[..previous], Location::line_column(line, trailing));
    }

    // Only one usable number: it is the line.
    NamedLocation::new(&text[..last], Location::line(trailing))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(text: &str) -> (String, Option<u64>, Option<u64>) {
        let loc = parse_named_location(text);
        (loc.filename.clone(), loc.line(), loc.column())
    }

    #[test]
    fn line_and_column() {
        assert_eq!(parts("a/b.ts:10:4"), ("a/b.ts".into(), Some(10), Some(4)));
        assert_eq!(
            parts("file:///C:/app/main.ts:3:7"),
            ("file:///C:/app/main.ts".into(), Some(3), Some(7))
        );
    }

    #[test]
    fn line_only() {
        assert_eq!(parts("a/b.ts:10"), ("a/b.ts".into(), Some(10), None));
        assert_eq!(parts("<anonymous>:1"), ("<anonymous>".into(), Some(1), None));
    }

    #[test]
    fn no_suffix() {
        assert_eq!(parts("a/b.ts"), ("a/b.ts".into(), None, None));
        assert_eq!(parts("native"), ("native".into(), None, None));
        assert_eq!(parts(""), ("".into(), None, None));
    }

    #[test]
    fn invalid_trailing_number_keeps_whole_filename() {
        assert_eq!(parts("a/b.ts:-1"), ("a/b.ts:-1".into(), None, None));
        assert_eq!(parts("a/b.ts:1.5"), ("a/b.ts:1.5".into(), None, None));
        assert_eq!(parts("a/b.ts:"), ("a/b.ts:".into(), None, None));
        assert_eq!(parts("a/b.ts: 3"), ("a/b.ts: 3".into(), None, None));
    }

    #[test]
    fn invalid_middle_number_falls_back_to_line() {
        assert_eq!(parts("a/b.ts:x:4"), ("a/b.ts:x".into(), Some(4), None));
        assert_eq!(parts("a:-2:4"), ("a:-2".into(), Some(4), None));
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(parts("a.js:0:0"), ("a.js".into(), Some(0), Some(0)));
    }

    #[test]
    fn safe_integer_bounds() {
        assert_eq!(parse_safe_integer("9007199254740991"), Some(MAX_SAFE_INTEGER));
        assert_eq!(parse_safe_integer("9007199254740992"), None);
        assert_eq!(parse_safe_integer("99999999999999999999999"), None);
        assert_eq!(parse_safe_integer("+1"), None);
        assert_eq!(parse_safe_integer("1e3"), None);
    }
}
