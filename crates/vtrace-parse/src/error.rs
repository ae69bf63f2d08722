//! Reasons a frame line did not match the frame grammar.

use thiserror::Error;

/// Why a line could not be decomposed into a call site.
///
/// These never escape [`parse_frame`](crate::parse_frame); the frame is kept
/// as unparsed text instead. [`parse_frame_strict`](crate::parse_frame_strict)
/// returns them for callers that want to know which step failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Line does not start with the four-space `at ` prefix.
    #[error("line does not start with the frame prefix")]
    NotAFrame,

    /// `new` combined with a `Type.function` name.
    #[error("constructor call with a qualified name: {name}")]
    QualifiedConstructor { name: String },

    /// `[as method]` alias combined with a `Type.function` name.
    #[error("method alias on a qualified name: {name}")]
    QualifiedAlias { name: String },

    /// `[as method]` alias combined with `new`.
    #[error("method alias on a constructor call")]
    ConstructorAlias,

    /// `[as ` without a closing `] (`.
    #[error("unterminated method alias")]
    UnterminatedAlias,

    /// No `)` closes the location.
    #[error("location is missing its closing parenthesis")]
    MissingCloseParen,

    /// Unbalanced `eval at ... (...)` nesting.
    #[error("malformed eval nesting: {reason}")]
    MalformedEval { reason: &'static str },
}

/// Result type alias for frame parsing.
pub type Result<T> = std::result::Result<T, FrameError>;

impl FrameError {
    pub(crate) fn malformed_eval(reason: &'static str) -> Self {
        Self::MalformedEval { reason }
    }
}
