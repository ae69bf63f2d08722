//! Seams for reading and highlighting source text.

use std::path::Path;

use crate::error::{Result, SourceError};

/// Reads the full text of a source file.
///
/// [`SourceCache`](crate::SourceCache) calls this while holding its lock.
/// An implementation must not query the same cache (including
/// [`global()`](crate::global) when it is that cache), or it deadlocks.
pub trait SourceLoader: Send + Sync {
    /// Full UTF-8 text of `file`.
    fn load(&self, file: &str) -> Result<String>;
}

/// Loads UTF-8 text from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, file: &str) -> Result<String> {
        std::fs::read_to_string(Path::new(file)).map_err(|e| SourceError::from_io(file, e))
    }
}

/// Produces a highlighted copy of a source file.
///
/// Implementations return `None` for files they do not handle. The result
/// must keep the original line structure; output with a different line
/// count is discarded.
///
/// Like [`SourceLoader`], it runs under the cache lock and must not query
/// the cache that owns it.
pub trait Highlighter: Send + Sync {
    /// Highlighted copy of `text`, the contents of `file`.
    fn highlight(&self, file: &str, text: &str) -> Option<String>;
}

impl<F> Highlighter for F
where
    F: Fn(&str, &str) -> Option<String> + Send + Sync,
{
    fn highlight(&self, file: &str, text: &str) -> Option<String> {
        self(file, text)
    }
}
