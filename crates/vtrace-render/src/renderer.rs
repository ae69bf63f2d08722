//! One traversal that turns an [`ErrorTrace`] back into text.

use std::fmt::Write as _;

use vtrace_model::{
    ANONYMOUS, CallSite, ErrorTrace, EvalFrame, FRAME_PREFIX, Location, NamedLocation, SourceLine,
    StackFrame,
};
use vtrace_source::SourceProvider;

use crate::options::RenderOptions;
use crate::style::{Styler, Token};

/// Indent before the gutter of a source-context line.
const CONTEXT_INDENT: &str = "     ";
const GUTTER: &str = "|";

/// Longest run of `~` drawn before the caret.
const MAX_CARET_OFFSET: u64 = 1 << 16;

/// Whether the trace is being shown for an error that was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// The host caught the error; only its message is wanted.
    Caught,
    /// The error is escaping; the full trace is shown.
    Uncaught,
}

/// Renders traces with a source provider and a styler.
pub struct Renderer<'a> {
    source: &'a dyn SourceProvider,
    styler: &'a dyn Styler,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer with default options.
    pub fn new(source: &'a dyn SourceProvider, styler: &'a dyn Styler) -> Self {
        Self {
            source,
            styler,
            options: RenderOptions::default(),
        }
    }

    /// Replaces the rendering options.
    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Header line followed by one line per frame, with source context
    /// under frames whose file could be read.
    pub fn render(&self, trace: &ErrorTrace) -> String {
        let windows = self.windows(&trace.frames);
        let width = windows
            .iter()
            .flatten()
            .flatten()
            .map(SourceLine::number_width)
            .max()
            .unwrap_or(0);

        let mut out = self.header(trace);
        for (frame, window) in trace.frames.iter().zip(&windows) {
            out.push('\n');
            let Some(call) = frame.call() else {
                out.push_str(&frame.raw);
                continue;
            };
            self.call_site(&mut out, call);
            if let Some(lines) = window {
                self.context(&mut out, call.location.location, lines, width);
            }
        }
        out
    }

    /// Text the host should show for `trace` in the given situation.
    ///
    /// A caught error yields its plain message, empty when the message is
    /// blank. An uncaught one yields the styler's line reset followed by the
    /// full rendered trace.
    pub fn message_for(&self, trace: &ErrorTrace, disposition: Disposition) -> String {
        match disposition {
            Disposition::Caught => trace.visible_message().unwrap_or_default().to_string(),
            Disposition::Uncaught => {
                let mut out = self.styler.line_reset();
                out.push_str(&self.render(trace));
                out
            }
        }
    }

    fn header(&self, trace: &ErrorTrace) -> String {
        let mut out = self.styler.paint(Token::ErrorName, &trace.name);
        if let Some(message) = trace.visible_message() {
            out.push_str(": ");
            out.push_str(&self.styler.paint(Token::Message, message));
        }
        out
    }

    fn windows(&self, frames: &[StackFrame]) -> Vec<Option<Vec<SourceLine>>> {
        frames
            .iter()
            .enumerate()
            .map(|(index, frame)| {
                let call = frame.call()?;
                if self.options.collapse_repeated_context
                    && frames
                        .get(index + 1)
                        .and_then(StackFrame::call)
                        .is_some_and(|next| next.same_site(call))
                {
                    tracing::trace!(index, "source window collapsed into next frame");
                    return None;
                }
                self.window(call)
            })
            .collect()
    }

    fn window(&self, call: &CallSite) -> Option<Vec<SourceLine>> {
        if !self.options.wants_source() {
            return None;
        }
        let path = call.source_path()?;
        let line = call.location.line()?;
        let lines = self.source.lines(
            path,
            line,
            self.options.context_lines,
            self.styler.wants_highlighted_source(),
        );
        if lines.is_none() {
            tracing::trace!(file = path, line, "no source window");
        }
        lines
    }

    fn call_site(&self, out: &mut String, call: &CallSite) {
        out.push_str(FRAME_PREFIX);
        if call.is_async {
            out.push_str(&self.styler.paint(Token::Modifier, "async "));
        }
        if call.is_new {
            out.push_str(&self.styler.paint(Token::Modifier, "new "));
        }

        let Some(function) = &call.function_name else {
            self.location(out, call);
            return;
        };

        if let Some(type_name) = &call.type_name {
            out.push_str(&self.styler.paint(Token::TypeName, type_name));
            out.push('.');
        }
        let token = if function == ANONYMOUS {
            Token::Anonymous
        } else {
            Token::FunctionName
        };
        out.push_str(&self.styler.paint(token, function));
        out.push(' ');
        if let Some(method) = &call.method_name {
            out.push_str("[as ");
            out.push_str(&self.styler.paint(Token::MethodName, method));
            out.push_str("] ");
        }
        out.push('(');
        self.location(out, call);
        out.push(')');
    }

    fn location(&self, out: &mut String, call: &CallSite) {
        for level in &call.eval_chain {
            self.eval_open(out, level);
        }
        self.named_location(out, call);
        for level in call.eval_chain.iter().rev() {
            out.push(')');
            if !level.location.is_none() {
                out.push_str(", ");
                out.push_str(&self.styler.paint(Token::Anonymous, ANONYMOUS));
                self.suffix(out, level.location);
            }
        }
    }

    fn eval_open(&self, out: &mut String, level: &EvalFrame) {
        let token = if level.name.is_some() {
            Token::EvalName
        } else {
            Token::Anonymous
        };
        out.push_str(&self.styler.paint(Token::EvalKeyword, "eval"));
        out.push_str(" at ");
        out.push_str(&self.styler.paint(token, level.display_name()));
        out.push_str(" (");
    }

    fn named_location(&self, out: &mut String, call: &CallSite) {
        let NamedLocation { filename, location } = &call.location;
        let token = if call.is_native() {
            Token::Native
        } else if call.is_unknown() {
            Token::Unknown
        } else if call.is_anonymous() {
            Token::Anonymous
        } else {
            Token::Filename
        };
        out.push_str(&self.styler.paint(token, filename));
        self.suffix(out, *location);
    }

    fn suffix(&self, out: &mut String, location: Location) {
        let Some(line) = location.line_number() else {
            return;
        };
        out.push(':');
        out.push_str(&self.styler.paint(Token::Number, &line.to_string()));
        if let Some(column) = location.column_number() {
            out.push(':');
            out.push_str(&self.styler.paint(Token::Number, &column.to_string()));
        }
    }

    fn context(&self, out: &mut String, target: Location, lines: &[SourceLine], width: usize) {
        let gutter = self.styler.paint(Token::Gutter, GUTTER);
        for line in lines {
            let is_target = target.line_number() == Some(line.number);
            let token = if is_target {
                Token::TargetLineNumber
            } else {
                Token::LineNumber
            };
            let number = format!("{:>width$}", line.number);
            let _ = write!(
                out,
                "\n{CONTEXT_INDENT}{gutter} {} {gutter} {}",
                self.styler.paint(token, &number),
                line.text
            );

            if is_target && let Some(column) = target.column_number() {
                let offset = column.saturating_sub(1).min(MAX_CARET_OFFSET);
                let caret = format!("{}^", "~".repeat(offset as usize));
                let _ = write!(
                    out,
                    "\n{CONTEXT_INDENT}{gutter} {} {gutter} {}",
                    self.styler.paint(Token::Caret, &"~".repeat(width)),
                    self.styler.paint(Token::Caret, &caret)
                );
            }
        }
    }
}
