//! Token decoration for rendered traces.

use crossterm::Command;
use crossterm::style::{Attribute, Color, ContentStyle};
use crossterm::terminal::{Clear, ClearType};

/// Every piece of a rendered trace that a [`Styler`] may decorate.
///
/// Punctuation (`(`, `)`, `:`, `.`, `at`) is never a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Header error name.
    ErrorName,
    /// Header message.
    Message,
    /// `async ` or `new `.
    Modifier,
    /// The `<anonymous>` sentinel wherever it appears.
    Anonymous,
    TypeName,
    FunctionName,
    MethodName,
    Filename,
    /// The `native` location sentinel.
    Native,
    /// The `unknown location` sentinel.
    Unknown,
    /// The `eval` keyword of an eval level.
    EvalKeyword,
    /// Named eval level.
    EvalName,
    /// Line or column number in a location suffix.
    Number,
    /// `|` separators of a source-context line.
    Gutter,
    /// Line number of a context line.
    LineNumber,
    /// Line number of the frame's own line.
    TargetLineNumber,
    /// `~~~^` marker under the frame's column.
    Caret,
}

/// Decorates tokens without changing their text.
pub trait Styler {
    /// Wraps `text` in the decoration for `token`.
    fn paint(&self, token: Token, text: &str) -> String;

    /// Whether source context should come from the highlighted copy.
    fn wants_highlighted_source(&self) -> bool {
        false
    }

    /// Sequence emitted before an uncaught trace to reset the current line.
    fn line_reset(&self) -> String {
        String::new()
    }
}

/// Leaves every token unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, _: Token, text: &str) -> String {
        text.to_string()
    }
}

/// Terminal colors and emphasis through crossterm.
#[derive(Debug, Clone, Copy)]
pub struct AnsiStyler {
    highlighted_source: bool,
}

impl AnsiStyler {
    /// Creates a styler that prefers highlighted source.
    pub fn new() -> Self {
        Self {
            highlighted_source: true,
        }
    }

    /// Use plain source text for context lines even when highlighting exists.
    #[must_use]
    pub fn without_highlighted_source(mut self) -> Self {
        self.highlighted_source = false;
        self
    }

    /// The palette entry for `token`.
    #[must_use]
    pub fn style(token: Token) -> ContentStyle {
        use Attribute::{Bold, Dim, Italic};

        match token {
            Token::ErrorName | Token::Caret | Token::TargetLineNumber => {
                style(Some(Color::DarkRed), &[Bold])
            }
            Token::Message => style(None, &[Italic]),
            Token::Modifier => style(Some(Color::DarkMagenta), &[Italic]),
            Token::Anonymous => style(None, &[Italic, Dim]),
            Token::TypeName => style(Some(Color::Yellow), &[Italic, Bold]),
            Token::FunctionName | Token::MethodName => style(Some(Color::Yellow), &[Italic]),
            Token::Filename | Token::Unknown | Token::EvalName => {
                style(Some(Color::DarkCyan), &[Italic])
            }
            Token::Native => style(Some(Color::DarkRed), &[Italic]),
            Token::EvalKeyword => style(Some(Color::DarkRed), &[]),
            Token::Number => style(Some(Color::DarkYellow), &[]),
            Token::Gutter | Token::LineNumber => style(None, &[Dim]),
        }
    }
}

impl Default for AnsiStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl Styler for AnsiStyler {
    fn paint(&self, token: Token, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        Self::style(token).apply(text).to_string()
    }

    fn wants_highlighted_source(&self) -> bool {
        self.highlighted_source
    }

    fn line_reset(&self) -> String {
        let mut reset = String::from("\r");
        if Clear(ClearType::CurrentLine).write_ansi(&mut reset).is_err() {
            reset.truncate(1);
        }
        reset
    }
}

fn style(foreground: Option<Color>, attributes: &[Attribute]) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = foreground;
    for attribute in attributes {
        style.attributes.set(*attribute);
    }
    style
}
