//! Positions within source artifacts.

use serde::{Deserialize, Serialize};

/// One line of source text, as cached for context display.
///
/// `number` is the 1-based physical line in the original file. Blank lines
/// are never cached, so numbers in a window are not necessarily contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    pub number: u64,
    pub text: String,
}

impl SourceLine {
    /// Creates a numbered line.
    pub fn new(number: u64, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Width of the line number when printed in decimal.
    #[must_use]
    pub fn number_width(&self) -> usize {
        self.number.to_string().len()
    }
}

/// Optional line and column.
///
/// A column is never present without a line. Values come from the
/// constructors or from deserializing, which rejects a lone column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    line: Option<u64>,
    column: Option<u64>,
}

/// Unchecked wire form of [`Location`].
#[derive(Deserialize)]
struct RawLocation {
    #[serde(default)]
    line: Option<u64>,
    #[serde(default)]
    column: Option<u64>,
}

impl TryFrom<RawLocation> for Location {
    type Error = &'static str;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        match (raw.line, raw.column) {
            (None, Some(_)) => Err("location has a column but no line"),
            (line, column) => Ok(Self { line, column }),
        }
    }
}

impl Location {
    /// No position at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            line: None,
            column: None,
        }
    }

    /// A line without a column.
    #[must_use]
    pub const fn line(line: u64) -> Self {
        Self {
            line: Some(line),
            column: None,
        }
    }

    /// A line and a column.
    #[must_use]
    pub const fn line_column(line: u64, column: u64) -> Self {
        Self {
            line: Some(line),
            column: Some(column),
        }
    }

    /// 1-based line, if known.
    #[must_use]
    pub const fn line_number(&self) -> Option<u64> {
        self.line
    }

    /// 1-based column, if known. Always `None` without a line.
    #[must_use]
    pub const fn column_number(&self) -> Option<u64> {
        self.column
    }

    /// True when no line is known.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.line.is_none()
    }

    /// The `:<line>[:<column>]` suffix, empty when there is no line.
    #[must_use]
    pub fn suffix(&self) -> String {
        match (self.line, self.column) {
            (Some(line), Some(column)) => format!(":{line}:{column}"),
            (Some(line), None) => format!(":{line}"),
            _ => String::new(),
        }
    }
}

/// A filename or identifier with the position parsed off its tail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedLocation {
    pub filename: String,
    pub location: Location,
}

impl NamedLocation {
    /// Creates a named location.
    pub fn new(filename: impl Into<String>, location: Location) -> Self {
        Self {
            filename: filename.into(),
            location,
        }
    }

    /// Shorthand for the location's line.
    #[must_use]
    pub fn line(&self) -> Option<u64> {
        self.location.line_number()
    }

    /// Shorthand for the location's column.
    #[must_use]
    pub fn column(&self) -> Option<u64> {
        self.location.column_number()
    }
}

impl std::fmt::Display for NamedLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.filename, self.location.suffix())
    }
}
