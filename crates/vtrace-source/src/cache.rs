//! Process-wide memo of loaded source files.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use vtrace_model::SourceLine;

use crate::SourceProvider;
use crate::file::SourceFile;
use crate::loader::{FsLoader, Highlighter, SourceLoader};

/// Loads each file at most once and remembers the outcome.
///
/// A file that fails to load is remembered as absent and never retried.
/// The lock is held across the loader and highlighter calls, so neither may
/// call back into the same cache.
pub struct SourceCache {
    loader: Box<dyn SourceLoader>,
    highlighter: Option<Box<dyn Highlighter>>,
    files: Mutex<HashMap<String, Option<Arc<SourceFile>>>>,
}

impl SourceCache {
    /// Cache backed by the local filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::with_loader(FsLoader)
    }

    /// Cache backed by a custom loader.
    #[must_use]
    pub fn with_loader(loader: impl SourceLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            highlighter: None,
            files: Mutex::new(HashMap::new()),
        }
    }

    /// Attach a highlighter run once per loaded file.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self
    }

    /// The loaded file, or `None` if it could not be read.
    pub fn file(&self, id: &str) -> Option<Arc<SourceFile>> {
        let mut files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = files.get(id) {
            return entry.clone();
        }

        let entry = self.load(id).map(Arc::new);
        files.insert(id.to_string(), entry.clone());
        entry
    }

    fn load(&self, id: &str) -> Option<SourceFile> {
        let text = match self.loader.load(id) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(file = id, error = %e, "source unavailable");
                return None;
            }
        };

        let highlighted = self
            .highlighter
            .as_ref()
            .and_then(|h| h.highlight(id, &text));
        let file = SourceFile::new(&text, highlighted.as_deref());
        tracing::debug!(
            file = id,
            lines = file.lines().len(),
            highlighted = file.has_highlighting(),
            "source loaded"
        );
        Some(file)
    }

    /// Whether `id` has been looked up before, successfully or not.
    pub fn is_cached(&self, id: &str) -> bool {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Number of files looked up so far.
    pub fn len(&self) -> usize {
        self.files.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True before the first lookup.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SourceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SourceCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceCache")
            .field("files", &self.len())
            .field("highlighter", &self.highlighter.is_some())
            .finish_non_exhaustive()
    }
}

impl SourceProvider for SourceCache {
    fn lines(
        &self,
        file: &str,
        line: u64,
        window: usize,
        highlighted: bool,
    ) -> Option<Vec<SourceLine>> {
        self.file(file)?.window(line, window, highlighted)
    }
}

static GLOBAL: OnceLock<SourceCache> = OnceLock::new();

/// The shared filesystem-backed cache.
pub fn global() -> &'static SourceCache {
    GLOBAL.get_or_init(SourceCache::new)
}
