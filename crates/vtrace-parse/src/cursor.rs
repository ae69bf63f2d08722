//! Forward-only scan position over one line.

#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn line(&self) -> &'a str {
        self.line
    }

    /// Unconsumed text.
    pub(crate) fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Consume `prefix` if the rest starts with it.
    pub(crate) fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Absolute offset of the next `needle` at or after the cursor.
    pub(crate) fn find(&self, needle: &str) -> Option<usize> {
        self.rest().find(needle).map(|at| self.pos + at)
    }

    /// Text from the cursor up to `end`, moving the cursor to `end`.
    pub(crate) fn take_until(&mut self, end: usize) -> &'a str {
        let taken = &self.line[self.pos..end];
        self.pos = end;
        taken
    }

    /// Move the cursor to an absolute offset at or after the current one.
    pub(crate) fn seek(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos && pos <= self.line.len());
        self.pos = pos;
    }
}
