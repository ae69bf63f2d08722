//! Error-kind tags.
//!
//! Hosts map these to their own exception or result types; the core never
//! constructs error types itself.

use serde::{Deserialize, Serialize};

/// Kind of error named in a trace header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Error,
    EvalError,
    InternalError,
    RangeError,
    ReferenceError,
    SyntaxError,
    TypeError,
    URIError,
    AggregateError,
    // Runtime I/O errors.
    NotFound,
    PermissionDenied,
    ConnectionRefused,
    ConnectionReset,
    ConnectionAborted,
    NotConnected,
    AddrInUse,
    AddrNotAvailable,
    BrokenPipe,
    AlreadyExists,
    InvalidData,
    TimedOut,
    Interrupted,
    WriteZero,
    UnexpectedEof,
    BadResource,
    Http,
    Busy,
    /// Any user-defined name.
    Other(String),
}

impl ErrorKind {
    const BUILTIN: [ErrorKind; 27] = [
        Self::Error,
        Self::EvalError,
        Self::InternalError,
        Self::RangeError,
        Self::ReferenceError,
        Self::SyntaxError,
        Self::TypeError,
        Self::URIError,
        Self::AggregateError,
        Self::NotFound,
        Self::PermissionDenied,
        Self::ConnectionRefused,
        Self::ConnectionReset,
        Self::ConnectionAborted,
        Self::NotConnected,
        Self::AddrInUse,
        Self::AddrNotAvailable,
        Self::BrokenPipe,
        Self::AlreadyExists,
        Self::InvalidData,
        Self::TimedOut,
        Self::Interrupted,
        Self::WriteZero,
        Self::UnexpectedEof,
        Self::BadResource,
        Self::Http,
        Self::Busy,
    ];

    /// Look up a kind by the name printed in a trace header.
    pub fn from_name(name: &str) -> Self {
        Self::BUILTIN
            .iter()
            .find(|kind| kind.as_str() == name)
            .cloned()
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }

    /// The header name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Error => "Error",
            Self::EvalError => "EvalError",
            Self::InternalError => "InternalError",
            Self::RangeError => "RangeError",
            Self::ReferenceError => "ReferenceError",
            Self::SyntaxError => "SyntaxError",
            Self::TypeError => "TypeError",
            Self::URIError => "URIError",
            Self::AggregateError => "AggregateError",
            Self::NotFound => "NotFound",
            Self::PermissionDenied => "PermissionDenied",
            Self::ConnectionRefused => "ConnectionRefused",
            Self::ConnectionReset => "ConnectionReset",
            Self::ConnectionAborted => "ConnectionAborted",
            Self::NotConnected => "NotConnected",
            Self::AddrInUse => "AddrInUse",
            Self::AddrNotAvailable => "AddrNotAvailable",
            Self::BrokenPipe => "BrokenPipe",
            Self::AlreadyExists => "AlreadyExists",
            Self::InvalidData => "InvalidData",
            Self::TimedOut => "TimedOut",
            Self::Interrupted => "Interrupted",
            Self::WriteZero => "WriteZero",
            Self::UnexpectedEof => "UnexpectedEof",
            Self::BadResource => "BadResource",
            Self::Http => "Http",
            Self::Busy => "Busy",
            Self::Other(name) => name,
        }
    }

    /// Whether this is one of the known runtime kinds.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
