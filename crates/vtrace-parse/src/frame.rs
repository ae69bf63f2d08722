//! Decomposing one `    at ...` line into a call site.
//!
//! Scan steps, in order:
//!
//! 1. modifiers: `async `, `new `, or `async new `
//! 2. identity: the name token before ` (` or ` [as `, split into
//!    `Type.function`
//! 3. alias: the `[as method]` part, when present
//! 4. location: the text up to the line's last `)`, with eval nesting peeled
//!
//! Lines without an identity marker are bare locations.

use vtrace_model::{CallSite, FRAME_PREFIX, StackFrame};

use crate::cursor::Cursor;
use crate::error::{FrameError, Result};
use crate::eval::resolve_eval_chain;

const ASYNC: &str = "async ";
const NEW: &str = "new ";
const CALL_MARKER: &str = " (";
const ALIAS_MARKER: &str = " [as ";
const ALIAS_END: &str = "] (";

/// Which marker ended the name token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Call,
    Alias,
}

#[derive(Debug)]
struct Identity<'a> {
    type_name: Option<&'a str>,
    function_name: &'a str,
    marker: Marker,
}

impl Identity<'_> {
    fn is_qualified(&self) -> bool {
        self.type_name.is_some()
    }

    fn qualified(&self) -> String {
        match self.type_name {
            Some(type_name) => format!("{type_name}.{}", self.function_name),
            None => self.function_name.to_string(),
        }
    }
}

/// Parse one line into a frame, keeping it verbatim when it does not fit.
pub fn parse_frame(line: &str) -> StackFrame {
    match parse_frame_strict(line) {
        Ok(call) => StackFrame::parsed(line, call),
        Err(FrameError::NotAFrame) => StackFrame::unparsed(line),
        Err(reason) => {
            tracing::trace!(line, %reason, "frame left unparsed");
            StackFrame::unparsed(line)
        }
    }
}

/// Parse one line into a call site, reporting which step failed.
pub fn parse_frame_strict(line: &str) -> Result<CallSite> {
    let mut cursor = Cursor::new(line);
    if !cursor.eat(FRAME_PREFIX) {
        return Err(FrameError::NotAFrame);
    }

    let (is_async, is_new) = scan_modifiers(&mut cursor);
    let identity = scan_identity(&mut cursor, is_new)?;

    let mut method_name = None;
    let location_text = match &identity {
        None => cursor.rest(),
        Some(identity) => {
            if identity.marker == Marker::Alias {
                method_name = Some(scan_alias(&mut cursor, identity, is_new)?.to_string());
            } else {
                cursor.eat(CALL_MARKER);
            }
            scan_location(&mut cursor)?
        }
    };

    let chain = resolve_eval_chain(location_text)?;

    Ok(CallSite {
        is_async,
        is_new,
        type_name: identity
            .as_ref()
            .and_then(|id| id.type_name)
            .map(str::to_string),
        function_name: identity.as_ref().map(|id| id.function_name.to_string()),
        method_name,
        location: chain.location,
        eval_chain: chain.frames,
    })
}

/// Step 1: `async `, then optionally `new `; or `new ` alone.
fn scan_modifiers(cursor: &mut Cursor<'_>) -> (bool, bool) {
    let is_async = cursor.eat(ASYNC);
    let is_new = cursor.eat(NEW);
    (is_async, is_new)
}

/// Step 2: the name token before the earliest identity marker.
fn scan_identity<'a>(cursor: &mut Cursor<'a>, is_new: bool) -> Result<Option<Identity<'a>>> {
    let call = cursor.find(CALL_MARKER);
    let alias = cursor.find(ALIAS_MARKER);
    let (end, marker) = match (call, alias) {
        (None, None) => return Ok(None),
        (Some(call), None) => (call, Marker::Call),
        (None, Some(alias)) => (alias, Marker::Alias),
        (Some(call), Some(alias)) if alias < call => (alias, Marker::Alias),
        (Some(call), Some(_)) => (call, Marker::Call),
    };

    let token = cursor.take_until(end);
    let identity = match token.split_once('.') {
        Some((type_name, function_name)) => Identity {
            type_name: Some(type_name),
            function_name,
            marker,
        },
        None => Identity {
            type_name: None,
            function_name: token,
            marker,
        },
    };

    if is_new && identity.is_qualified() {
        return Err(FrameError::QualifiedConstructor {
            name: identity.qualified(),
        });
    }
    Ok(Some(identity))
}

/// Step 3: `[as method] (`.
fn scan_alias<'a>(cursor: &mut Cursor<'a>, identity: &Identity<'_>, is_new: bool) -> Result<&'a str> {
    if identity.is_qualified() {
        return Err(FrameError::QualifiedAlias {
            name: identity.qualified(),
        });
    }
    if is_new {
        return Err(FrameError::ConstructorAlias);
    }
    cursor.eat(ALIAS_MARKER);
    let end = cursor.find(ALIAS_END).ok_or(FrameError::UnterminatedAlias)?;
    let method = cursor.take_until(end);
    cursor.eat(ALIAS_END);
    Ok(method)
}

/// Step 4: everything up to the last `)` of the line.
fn scan_location<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str> {
    let close = cursor
        .line()
        .rfind(')')
        .filter(|close| *close >= cursor.pos())
        .ok_or(FrameError::MissingCloseParen)?;
    let text = cursor.take_until(close);
    cursor.seek(close + 1);
    Ok(text)
}
