//! Source-line windows for stack-trace context.
//!
//! The renderer asks a [`SourceProvider`] for a few lines around a frame's
//! reported line. [`SourceCache`] is the standard provider: it loads each
//! file once through a [`SourceLoader`], drops blank lines, optionally keeps
//! a highlighted copy from a [`Highlighter`], and memoizes the result
//! (including failures) for the life of the process.
//!
//! # Example
//!
//! ```no_run
//! use vtrace_source::{SourceProvider, global};
//!
//! if let Some(lines) = global().lines("/srv/app/main.ts", 12, 3, false) {
//!     for line in lines {
//!         println!("{:>4} | {}", line.number, line.text);
//!     }
//! }
//! ```

mod cache;
mod error;
mod file;
mod loader;

pub use cache::{SourceCache, global};
pub use error::{Result, SourceError};
pub use file::{SourceFile, select_window};
pub use loader::{FsLoader, Highlighter, SourceLoader};

use vtrace_model::SourceLine;

/// Default number of lines shown around a frame.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Anything that can produce a window of source lines.
pub trait SourceProvider {
    /// Up to `window` non-blank lines around `line` of `file`.
    ///
    /// Returns `None` when the file cannot be read or `line` is not one of
    /// its non-blank lines. `highlighted` asks for pre-highlighted text;
    /// providers without it return plain text.
    fn lines(
        &self,
        file: &str,
        line: u64,
        window: usize,
        highlighted: bool,
    ) -> Option<Vec<SourceLine>>;
}

/// A provider that never has source. Useful when context is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl SourceProvider for NoSource {
    fn lines(&self, _: &str, _: u64, _: usize, _: bool) -> Option<Vec<SourceLine>> {
        None
    }
}
