//! Rendering options.

use vtrace_source::DEFAULT_CONTEXT_LINES;

/// Options controlling how much source context is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of source lines shown around each frame's line.
    pub context_lines: usize,

    /// Whether to show source context at all.
    pub show_source: bool,

    /// Skip the source block of a frame when the next frame is the same
    /// call site at the same position (deep recursion).
    pub collapse_repeated_context: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            show_source: true,
            collapse_repeated_context: false,
        }
    }
}

impl RenderOptions {
    /// Creates new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many source lines surround each frame.
    #[must_use]
    pub fn with_context_lines(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    /// Enables or disables source context.
    #[must_use]
    pub fn with_source(mut self, show: bool) -> Self {
        self.show_source = show;
        self
    }

    /// Disables source context entirely.
    #[must_use]
    pub fn without_source(self) -> Self {
        self.with_source(false)
    }

    /// Enables or disables collapsing of repeated context.
    #[must_use]
    pub fn with_collapse_repeated_context(mut self, collapse: bool) -> Self {
        self.collapse_repeated_context = collapse;
        self
    }

    /// Whether any source lines will be requested.
    #[must_use]
    pub fn wants_source(&self) -> bool {
        self.show_source && self.context_lines > 0
    }
}
