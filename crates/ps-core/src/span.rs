use serde::{Deserialize, Serialize};

/// Inclusive 1-based line range of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering a single line.
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// Verbatim text of the spanned lines joined with `\n`.
    ///
    /// Lines outside `content` are ignored, so a span past the end of the
    /// text yields an empty string.
    pub fn slice(&self, content: &str) -> String {
        if self.start == 0 || self.end < self.start {
            return String::new();
        }
        content
            .lines()
            .skip(self.start - 1)
            .take(self.end - self.start + 1)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
