//! A loaded source file and window selection over it.

use vtrace_model::SourceLine;

/// Non-blank lines of one file, with an optional highlighted copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    lines: Vec<SourceLine>,
    highlighted: Option<Vec<SourceLine>>,
}

impl SourceFile {
    /// Split `text` into numbered lines, dropping blank ones.
    ///
    /// `highlighted` is kept only if it has the same number of lines as
    /// `text`; the same blank lines are dropped from it.
    pub fn new(text: &str, highlighted: Option<&str>) -> Self {
        let raw: Vec<&str> = text.lines().collect();
        let keep = |index: usize| !raw[index].trim().is_empty();

        let lines = (0..raw.len())
            .filter(|i| keep(*i))
            .map(|i| SourceLine::new(i as u64 + 1, raw[i]))
            .collect();

        let highlighted = highlighted.and_then(|h| {
            let colored: Vec<&str> = h.lines().collect();
            if colored.len() != raw.len() {
                tracing::debug!(
                    expected = raw.len(),
                    actual = colored.len(),
                    "highlighted source has a different line count"
                );
                return None;
            }
            Some(
                (0..raw.len())
                    .filter(|i| keep(*i))
                    .map(|i| SourceLine::new(i as u64 + 1, colored[i]))
                    .collect(),
            )
        });

        Self { lines, highlighted }
    }

    /// The non-blank lines, in file order.
    #[must_use]
    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    /// Whether a usable highlighted copy was kept.
    #[must_use]
    pub fn has_highlighting(&self) -> bool {
        self.highlighted.is_some()
    }

    /// Window of `size` lines around `target`.
    ///
    /// With `highlighted` set, lines come from the highlighted copy when
    /// there is one.
    #[must_use]
    pub fn window(&self, target: u64, size: usize, highlighted: bool) -> Option<Vec<SourceLine>> {
        let lines = match (&self.highlighted, highlighted) {
            (Some(colored), true) => colored,
            _ => &self.lines,
        };
        select_window(lines, target, size)
    }
}

/// Pick `size` consecutive entries of `lines` centered on the one numbered
/// `target`, shifted to stay inside the slice.
///
/// Returns `None` when no entry has that number.
///
/// ```
/// use vtrace_model::SourceLine;
/// use vtrace_source::select_window;
///
/// let lines: Vec<_> = (1..=10).map(|n| SourceLine::new(n, "x")).collect();
/// let numbers = |w: Vec<SourceLine>| w.iter().map(|l| l.number).collect::<Vec<_>>();
///
/// assert_eq!(numbers(select_window(&lines, 5, 3).unwrap()), [4, 5, 6]);
/// assert_eq!(numbers(select_window(&lines, 1, 3).unwrap()), [1, 2, 3]);
/// assert_eq!(numbers(select_window(&lines, 10, 3).unwrap()), [8, 9, 10]);
/// assert!(select_window(&lines, 11, 3).is_none());
/// ```
pub fn select_window(lines: &[SourceLine], target: u64, size: usize) -> Option<Vec<SourceLine>> {
    let index = lines.iter().position(|line| line.number == target)?;
    if lines.len() <= size {
        return Some(lines.to_vec());
    }

    let mut start = index.saturating_sub(size / 2);
    if start + size > lines.len() {
        start = lines.len() - size;
    }
    Some(lines[start..start + size].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(lines: &[SourceLine]) -> Vec<u64> {
        lines.iter().map(|l| l.number).collect()
    }

    #[test]
    fn blank_lines_are_dropped_but_counted() {
        let file = SourceFile::new("a\n\n  \nb\r\nc", None);
        assert_eq!(numbers(file.lines()), [1, 4, 5]);
        assert_eq!(file.lines()[1].text, "b");
    }

    #[test]
    fn small_file_returns_everything() {
        let file = SourceFile::new("1\n2\n3", None);
        for target in [1, 2, 3] {
            assert_eq!(numbers(&file.window(target, 3, false).unwrap()), [1, 2, 3]);
        }
        assert!(file.window(4, 3, false).is_none());
    }

    #[test]
    fn blank_target_line_is_absent() {
        let file = SourceFile::new("a\n\nb", None);
        assert!(file.window(2, 3, false).is_none());
    }

    #[test]
    fn even_window_sizes() {
        let lines: Vec<_> = (1..=10).map(|n| SourceLine::new(n, "x")).collect();
        assert_eq!(numbers(&select_window(&lines, 5, 4).unwrap()), [3, 4, 5, 6]);
        assert_eq!(numbers(&select_window(&lines, 5, 1).unwrap()), [5]);
        assert!(select_window(&lines, 5, 0).unwrap().is_empty());
    }

    #[test]
    fn highlighted_copy() {
        let file = SourceFile::new("a\n\nb", Some("<a>\n\n<b>"));
        assert!(file.has_highlighting());
        let window = file.window(3, 3, true).unwrap();
        assert_eq!(window[1].text, "<b>");
        assert_eq!(window[1].number, 3);
        assert_eq!(file.window(3, 3, false).unwrap()[1].text, "b");
    }

    #[test]
    fn mismatched_highlighting_is_discarded() {
        let file = SourceFile::new("a\nb", Some("<a>"));
        assert!(!file.has_highlighting());
        assert_eq!(file.window(1, 3, true).unwrap()[0].text, "a");
    }
}
