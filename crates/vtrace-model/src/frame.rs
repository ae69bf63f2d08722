//! Stack frames and their structured call-site information.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::location::{Location, NamedLocation};
use crate::{ANONYMOUS, NATIVE, UNKNOWN_LOCATION};

/// Scheme prefix of runtime-reported local module URLs.
const FILE_URL_PREFIX: &str = "file://";

/// One level of `eval at <name> (...)` nesting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalFrame {
    /// Function the eval was called from; `None` for `<anonymous>`.
    pub name: Option<String>,
    /// Position inside the evaluated code, from the `, <anonymous>:y:x` suffix.
    pub location: Location,
}

impl EvalFrame {
    /// Creates one eval level.
    pub fn new(name: Option<String>, location: Location) -> Self {
        Self { name, location }
    }

    /// Name as printed, with the anonymous sentinel for unnamed levels.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }
}

/// The structured part of a frame line that matched the frame grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub is_async: bool,
    pub is_new: bool,
    pub type_name: Option<String>,
    pub function_name: Option<String>,
    pub method_name: Option<String>,
    /// Innermost non-eval location.
    pub location: NamedLocation,
    /// Eval nesting, outermost level first.
    pub eval_chain: Vec<EvalFrame>,
}

impl CallSite {
    /// Whether the frame names a function.
    #[must_use]
    pub fn is_function(&self) -> bool {
        self.function_name.is_some()
    }

    /// Whether the location is the `native` sentinel.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.location.filename == NATIVE
    }

    /// Whether the location is the `unknown location` sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.location.filename == UNKNOWN_LOCATION
    }

    /// Whether the location is the `<anonymous>` sentinel.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.location.filename == ANONYMOUS
    }

    /// Whether the location is nested in `eval at` levels.
    #[must_use]
    pub fn is_eval(&self) -> bool {
        !self.eval_chain.is_empty()
    }

    /// `Type.function`, `function`, or `None` for bare locations.
    #[must_use]
    pub fn qualified_name(&self) -> Option<String> {
        let function = self.function_name.as_deref()?;
        Some(match &self.type_name {
            Some(type_name) => format!("{type_name}.{function}"),
            None => function.to_string(),
        })
    }

    /// File to read source context from.
    ///
    /// Requires a line number. `file://` URLs have their scheme stripped;
    /// plain absolute paths are used as-is. Anything else (sentinels,
    /// remote URLs, relative names) has no readable source.
    #[must_use]
    pub fn source_path(&self) -> Option<&str> {
        self.location.line()?;
        let filename = self.location.filename.as_str();
        if let Some(path) = filename.strip_prefix(FILE_URL_PREFIX) {
            return (!path.is_empty()).then_some(path);
        }
        Path::new(filename).is_absolute().then_some(filename)
    }

    /// Same call site at the same position, ignoring modifiers.
    #[must_use]
    pub fn same_site(&self, other: &CallSite) -> bool {
        self.location == other.location
            && self.type_name == other.type_name
            && self.function_name == other.function_name
            && self.method_name == other.method_name
    }
}

/// One line of a stack trace.
///
/// `raw` is always kept. `call` is `None` when the line did not match the
/// frame grammar, in which case `raw` is authoritative and is rendered
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    pub raw: String,
    pub call: Option<CallSite>,
    /// The line is a previously rendered source-context line (`   | ...`).
    pub is_code_line: bool,
}

impl StackFrame {
    /// A frame that did not match the grammar.
    pub fn unparsed(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let is_code_line = is_code_line(&raw);
        Self {
            raw,
            call: None,
            is_code_line,
        }
    }

    /// A frame with structured call-site information.
    pub fn parsed(raw: impl Into<String>, call: CallSite) -> Self {
        let raw = raw.into();
        let is_code_line = is_code_line(&raw);
        Self {
            raw,
            call: Some(call),
            is_code_line,
        }
    }

    /// Structured call site, `None` for unparsed frames.
    #[must_use]
    pub fn call(&self) -> Option<&CallSite> {
        self.call.as_ref()
    }

    /// Whether the line matched the frame grammar.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        self.call.is_some()
    }

    /// Parsed and marked `async`.
    #[must_use]
    pub fn is_async(&self) -> bool {
        self.call.as_ref().is_some_and(|c| c.is_async)
    }

    /// Parsed and marked `new`.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.call.as_ref().is_some_and(|c| c.is_new)
    }

    /// Parsed and names a function.
    #[must_use]
    pub fn is_function(&self) -> bool {
        self.call.as_ref().is_some_and(CallSite::is_function)
    }

    /// Parsed with an `<anonymous>` location.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.call.as_ref().is_some_and(CallSite::is_anonymous)
    }

    /// Parsed with an unknown location.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.call.as_ref().is_some_and(CallSite::is_unknown)
    }

    /// Parsed with a native location.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.call.as_ref().is_some_and(CallSite::is_native)
    }

    /// Parsed with an eval chain.
    #[must_use]
    pub fn is_eval(&self) -> bool {
        self.call.as_ref().is_some_and(CallSite::is_eval)
    }

    /// See [`CallSite::source_path`].
    #[must_use]
    pub fn source_path(&self) -> Option<&str> {
        self.call.as_ref().and_then(CallSite::source_path)
    }
}

/// Optional whitespace followed by `|`.
fn is_code_line(raw: &str) -> bool {
    raw.trim_start().starts_with('|')
}
