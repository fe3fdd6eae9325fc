//! In-memory source documents with offset/position conversion.

use super::finding::Position;

/// An opened source document.
///
/// Line starts are computed once at construction so that `position_at` is a
/// binary search rather than a rescan.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    text: String,
    line_starts: Vec<usize>,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Convert a byte offset into a zero-based (line, column) position.
    /// Offsets past the end of the document clamp to the end.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position {
            line: line as u32,
            column: (offset - self.line_starts[line]) as u32,
        }
    }

    /// Text of the given zero-based line, without its terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let line = line as usize;
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.text.len());
        let slice = &self.text[start..end];
        Some(slice.strip_suffix('\r').unwrap_or(slice))
    }
}
