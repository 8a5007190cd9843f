//! Source span and position types for locating directives.

use std::ops::Range;

/// A line and column position within a module file.
///
/// Both fields are zero-indexed. The column counts UTF-8 bytes from the start
/// of the line; use [`crate::LineIndex`] to obtain UTF-16 editor columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    /// Zero-indexed line number.
    pub line: u32,
    /// Zero-indexed byte offset within the line.
    pub column: u32,
}

impl LineCol {
    /// Creates a new line/column position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A half-open byte range with its line/column equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start_byte: usize,
    /// End byte offset (exclusive).
    pub end_byte: usize,
    /// Start position as line and column.
    pub start: LineCol,
    /// End position as line and column.
    pub end: LineCol,
}

impl Span {
    /// Creates a new span from byte offsets and line/column positions.
    #[must_use]
    pub const fn new(start_byte: usize, end_byte: usize, start: LineCol, end: LineCol) -> Self {
        Self {
            start_byte,
            end_byte,
            start,
            end,
        }
    }

    /// Builds a span that lies on a single line.
    ///
    /// `line_start` is the byte offset of the first byte of `line`; `start`
    /// and `end` are absolute byte offsets within the text.
    #[must_use]
    pub fn on_line(line: u32, line_start: usize, start: usize, end: usize) -> Self {
        Self {
            start_byte: start,
            end_byte: end,
            start: LineCol::new(line, column(start.saturating_sub(line_start))),
            end: LineCol::new(line, column(end.saturating_sub(line_start))),
        }
    }

    /// Builds a zero-width span at the given byte offset.
    #[must_use]
    pub const fn empty_at(offset: usize, position: LineCol) -> Self {
        Self::new(offset, offset, position, position)
    }

    /// Returns the byte range covered by this span.
    #[must_use]
    pub const fn byte_range(&self) -> Range<usize> {
        self.start_byte..self.end_byte
    }

    /// Returns true when the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start_byte == self.end_byte
    }

    /// Extracts the text covered by this span from `source`.
    ///
    /// Returns `None` when the span does not describe a valid slice of
    /// `source`.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.byte_range())
    }
}

fn column(bytes: usize) -> u32 {
    // Module files never approach u32::MAX bytes per line.
    u32::try_from(bytes).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_line_measures_columns_from_line_start() {
        let span = Span::on_line(2, 10, 13, 20);
        assert_eq!(span.start, LineCol::new(2, 3));
        assert_eq!(span.end, LineCol::new(2, 10));
        assert_eq!(span.byte_range(), 13..20);
    }

    #[test]
    fn text_extracts_covered_bytes() {
        let source = "module a\ngo 1.21\n";
        let span = Span::on_line(1, 9, 9, 16);
        assert_eq!(span.text(source), Some("go 1.21"));
    }

    #[test]
    fn empty_span_has_no_text() {
        let span = Span::empty_at(0, LineCol::new(0, 0));
        assert!(span.is_empty());
        assert_eq!(span.text("module a"), Some(""));
    }
}
