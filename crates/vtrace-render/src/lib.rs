//! Rendering of parsed stack traces.
//!
//! [`Renderer`] reconstructs canonical frame text from an [`ErrorTrace`],
//! interleaving source-context lines and a column caret. Plain and styled
//! output share the traversal and differ only in the [`Styler`] used:
//! stripping the escape sequences from styled output yields the plain text.
//!
//! ```
//! use vtrace_model::{CallSite, ErrorTrace, Location, NamedLocation, StackFrame};
//! use vtrace_render::{PlainStyler, Renderer};
//! use vtrace_source::NoSource;
//!
//! let call = CallSite {
//!     function_name: Some("main".to_string()),
//!     location: NamedLocation::new("file:///app.ts", Location::line_column(4, 2)),
//!     ..CallSite::default()
//! };
//! let trace = ErrorTrace::new(
//!     "Error",
//!     Some("boom".to_string()),
//!     vec![StackFrame::parsed("    at main (file:///app.ts:4:2)", call)],
//! );
//!
//! let text = Renderer::new(&NoSource, &PlainStyler).render(&trace);
//! assert_eq!(text, "Error: boom\n    at main (file:///app.ts:4:2)");
//! ```

mod options;
mod renderer;
mod style;

pub use options::RenderOptions;
pub use renderer::{Disposition, Renderer};
pub use style::{AnsiStyler, PlainStyler, Styler, Token};

use vtrace_model::ErrorTrace;

/// Plain rendering with source context from the process-wide cache.
pub fn render_plain(trace: &ErrorTrace) -> String {
    Renderer::new(vtrace_source::global(), &PlainStyler).render(trace)
}

/// Terminal-styled rendering with source context from the process-wide cache.
pub fn render_styled(trace: &ErrorTrace) -> String {
    Renderer::new(vtrace_source::global(), &AnsiStyler::new()).render(trace)
}

/// [`Renderer::message_for`] with terminal styling and the process-wide cache.
pub fn message_for(trace: &ErrorTrace, disposition: Disposition) -> String {
    Renderer::new(vtrace_source::global(), &AnsiStyler::new()).message_for(trace, disposition)
}
