//! Parser for V8-style stack-trace text.
//!
//! The grammar is ad hoc and ambiguous, so the parser never fails a whole
//! trace: a line that does not fit becomes an unparsed [`StackFrame`] that
//! keeps its raw text and is rendered verbatim.
//!
//! # Example
//!
//! ```
//! use vtrace_parse::parse_trace;
//!
//! let trace = parse_trace("TypeError: boom\n    at Foo.bar (file:///a.ts:3:7)");
//! assert_eq!(trace.name, "TypeError");
//! assert_eq!(trace.message.as_deref(), Some("boom"));
//!
//! let call = trace.frames[0].call().unwrap();
//! assert_eq!(call.type_name.as_deref(), Some("Foo"));
//! assert_eq!(call.function_name.as_deref(), Some("bar"));
//! assert_eq!(call.location.line(), Some(3));
//! ```
//!
//! [`StackFrame`]: vtrace_model::StackFrame

mod cursor;
mod error;
mod eval;
mod frame;
mod location;
mod trace;

pub use error::{FrameError, Result};
pub use eval::{EvalChain, resolve_eval_chain};
pub use frame::{parse_frame, parse_frame_strict};
pub use location::{parse_named_location, parse_safe_integer};
pub use trace::{parse_trace, parse_trace_parts, split_header};
