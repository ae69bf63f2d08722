//! Data model for V8-style stack traces.
//!
//! A raw stack string such as
//!
//! ```text
//! TypeError: boom
//!     at Foo.bar (file:///app/main.ts:3:7)
//!     at async run (file:///app/main.ts:10:3)
//! ```
//!
//! is represented as an [`ErrorTrace`] holding a header (`name`, `message`)
//! and an ordered list of [`StackFrame`]s. A frame keeps its raw text and,
//! when the line matched the frame grammar, a structured [`CallSite`].
//!
//! Parsing lives in `vtrace-parse`, rendering in `vtrace-render`.

pub mod frame;
pub mod kind;
pub mod location;
pub mod trace;

pub use frame::{CallSite, EvalFrame, StackFrame};
pub use kind::ErrorKind;
pub use location::{Location, NamedLocation, SourceLine};
pub use trace::ErrorTrace;

/// Prefix every structured frame line starts with.
pub const FRAME_PREFIX: &str = "    at ";

/// Sentinel the runtime prints for anonymous functions, eval sites and files.
pub const ANONYMOUS: &str = "<anonymous>";

/// Location reported for frames executing native code.
pub const NATIVE: &str = "native";

/// Location reported when the runtime cannot resolve a position.
pub const UNKNOWN_LOCATION: &str = "unknown location";
