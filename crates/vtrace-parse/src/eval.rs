//! Peeling nested `eval at <name> (<location>), <anonymous>:y:x` wrappers.

use vtrace_model::{ANONYMOUS, EvalFrame, Location, NamedLocation};

use crate::error::{FrameError, Result};
use crate::location::parse_named_location;

const EVAL_PREFIX: &str = "eval at ";
const OPEN: &str = " (";
const SUFFIX_SEPARATOR: &str = ", ";

/// Eval levels (outermost first) and the innermost real location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalChain {
    pub frames: Vec<EvalFrame>,
    pub location: NamedLocation,
}

/// Resolve the eval nesting of a frame's location text.
///
/// ```
/// use vtrace_parse::resolve_eval_chain;
///
/// let chain = resolve_eval_chain("eval at f (eval at g (file.ts:1:1), <anonymous>:5:9)").unwrap();
/// assert_eq!(chain.frames.len(), 2);
/// assert_eq!(chain.frames[1].location.line_number(), Some(5));
/// assert_eq!(chain.location.to_string(), "file.ts:1:1");
/// ```
pub fn resolve_eval_chain(text: &str) -> Result<EvalChain> {
    let mut frames = Vec::new();
    let mut rest = text;

    while rest.starts_with(EVAL_PREFIX) {
        let open = rest[EVAL_PREFIX.len()..]
            .find(OPEN)
            .map(|at| EVAL_PREFIX.len() + at)
            .ok_or(FrameError::malformed_eval("missing \" (\""))?;
        let close = rest
            .rfind(')')
            .filter(|close| *close >= open + OPEN.len())
            .ok_or(FrameError::malformed_eval("unmatched \")\""))?;

        let name = &rest[EVAL_PREFIX.len()..open];
        let name = (name != ANONYMOUS).then(|| name.to_string());

        let location = level_suffix(&rest[close + 1..])?;

        frames.push(EvalFrame::new(name, location));
        rest = &rest[open + OPEN.len()..close];
    }

    Ok(EvalChain {
        frames,
        location: parse_named_location(rest),
    })
}

/// The `, <anonymous>:y[:x]` text after a level's closing paren.
///
/// Anything else there would be lost on rendering, so it is malformed.
fn level_suffix(tail: &str) -> Result<Location> {
    if tail.is_empty() {
        return Ok(Location::none());
    }
    let suffix = tail
        .strip_prefix(SUFFIX_SEPARATOR)
        .ok_or(FrameError::malformed_eval("text after \")\""))?;
    let named = parse_named_location(suffix);
    if named.filename != ANONYMOUS || named.location.is_none() {
        return Err(FrameError::malformed_eval("suffix is not <anonymous>:line"));
    }
    Ok(named.location)
}
