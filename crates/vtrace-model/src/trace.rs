//! A whole parsed trace.

use serde::{Deserialize, Serialize};

use crate::frame::StackFrame;
use crate::kind::ErrorKind;

/// Header plus ordered frames of one stack trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTrace {
    pub name: String,
    pub message: Option<String>,
    pub frames: Vec<StackFrame>,
}

impl ErrorTrace {
    /// Creates a trace from its parts.
    pub fn new(name: impl Into<String>, message: Option<String>, frames: Vec<StackFrame>) -> Self {
        Self {
            name: name.into(),
            message,
            frames,
        }
    }

    /// The error kind named by the header.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_name(&self.name)
    }

    /// The message if it has any non-whitespace content.
    #[must_use]
    pub fn visible_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// `name` or `name: message`, as printed on the first line.
    #[must_use]
    pub fn header(&self) -> String {
        match self.visible_message() {
            Some(message) => format!("{}: {message}", self.name),
            None => self.name.clone(),
        }
    }

    /// Replaces the error name.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Replaces the message.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    /// Removes the message.
    pub fn clear_message(&mut self) -> &mut Self {
        self.message = None;
        self
    }

    /// Appends a frame.
    pub fn push_frame(&mut self, frame: StackFrame) -> &mut Self {
        self.frames.push(frame);
        self
    }

    /// Insert `frame` before `index`; an index past the end appends.
    pub fn insert_frame(&mut self, index: usize, frame: StackFrame) -> &mut Self {
        let index = index.min(self.frames.len());
        self.frames.insert(index, frame);
        self
    }

    /// Removes the frame at `index`, if any.
    pub fn remove_frame(&mut self, index: usize) -> Option<StackFrame> {
        (index < self.frames.len()).then(|| self.frames.remove(index))
    }

    /// Keeps only frames matching `predicate`.
    pub fn retain_frames<F>(&mut self, predicate: F) -> &mut Self
    where
        F: FnMut(&StackFrame) -> bool,
    {
        self.frames.retain(predicate);
        self
    }

    /// Mutable access to the frame list.
    pub fn frames_mut(&mut self) -> &mut Vec<StackFrame> {
        &mut self.frames
    }

    /// Number of frames with structured call-site information.
    #[must_use]
    pub fn parsed_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_parsed()).count()
    }
}
