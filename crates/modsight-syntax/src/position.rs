//! Conversion between byte offsets and editor positions.
//!
//! Editor positions count lines from zero and characters in UTF-16 code
//! units, which is what `lsp_types::Position` expects.

use lsp_types::{Position, Range};

use crate::error::PositionError;
use crate::span::Span;

/// Converts a byte offset into a zero-based line and UTF-16 character.
///
/// # Errors
///
/// Returns [`PositionError`] when the offset lies past the end of `text` or
/// inside a multi-byte code point.
pub fn to_protocol_position(text: &str, offset: usize) -> Result<Position, PositionError> {
    LineIndex::new(text).position(text, offset)
}

/// Converts an editor position back into a byte offset.
///
/// # Errors
///
/// Returns [`PositionError`] when the line does not exist, the character is
/// wider than the line, or the character splits a surrogate pair.
pub fn to_byte_offset(text: &str, position: Position) -> Result<usize, PositionError> {
    LineIndex::new(text).offset(text, position)
}

/// Line start offsets for one text, reused across conversions.
///
/// The index does not own the text; every query takes the same text the
/// index was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Scans `text` for line starts.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                text.bytes()
                    .enumerate()
                    .filter(|(_, byte)| *byte == b'\n')
                    .map(|(index, _)| index + 1),
            )
            .collect();
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Number of lines, counting a trailing empty line after a final newline.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset into an editor position.
    ///
    /// # Errors
    ///
    /// See [`to_protocol_position`].
    pub fn position(&self, text: &str, offset: usize) -> Result<Position, PositionError> {
        if offset > self.len {
            return Err(PositionError::OffsetOutOfBounds {
                offset,
                len: self.len,
            });
        }
        if !text.is_char_boundary(offset) {
            return Err(PositionError::NotCharBoundary { offset });
        }

        let line = self
            .line_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let prefix = text
            .get(line_start..offset)
            .ok_or(PositionError::NotCharBoundary { offset })?;
        Ok(Position {
            line: saturating_u32(line),
            character: saturating_u32(prefix.encode_utf16().count()),
        })
    }

    /// Converts an editor position into a byte offset.
    ///
    /// # Errors
    ///
    /// See [`to_byte_offset`].
    pub fn offset(&self, text: &str, position: Position) -> Result<usize, PositionError> {
        let line_index = usize::try_from(position.line).unwrap_or(usize::MAX);
        let line_start = self
            .line_starts
            .get(line_index)
            .copied()
            .ok_or(PositionError::LineOutOfBounds {
                line: position.line,
            })?;
        let line_end = self
            .line_starts
            .get(line_index + 1)
            .map_or(self.len, |next| next.saturating_sub(1));
        let line_content = text.get(line_start..line_end).unwrap_or_default();

        let mut utf16_units = 0_u32;
        for (index, character) in line_content.char_indices() {
            if utf16_units == position.character {
                return Ok(line_start + index);
            }
            utf16_units += saturating_u32(character.len_utf16());
            if utf16_units > position.character {
                return Err(PositionError::SplitsSurrogatePair {
                    line: position.line,
                    character: position.character,
                });
            }
        }

        if utf16_units == position.character {
            return Ok(line_end);
        }
        Err(PositionError::CharacterOutOfBounds {
            line: position.line,
            character: position.character,
            width: utf16_units,
        })
    }

    /// Converts a byte span into an editor range.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] when either end of the span cannot be
    /// mapped.
    pub fn range(&self, text: &str, span: &Span) -> Result<Range, PositionError> {
        Ok(Range {
            start: self.position(text, span.start_byte)?,
            end: self.position(text, span.end_byte)?,
        })
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests use expect to fail loudly on setup errors"
    )]

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("module a\n", 0, 0, 0)]
    #[case("module a\n", 7, 0, 7)]
    #[case("module a\n", 9, 1, 0)]
    #[case("module a\ngo 1.21", 12, 1, 3)]
    #[case("// é\nx", 5, 0, 4)]
    #[case("// 😀x", 7, 0, 5)]
    fn maps_offsets_to_utf16_positions(
        #[case] text: &str,
        #[case] offset: usize,
        #[case] line: u32,
        #[case] character: u32,
    ) {
        let position = to_protocol_position(text, offset).expect("offset maps");
        assert_eq!(position, Position { line, character });
    }

    #[test]
    fn rejects_offset_past_end() {
        let error = to_protocol_position("go", 3).expect_err("offset past end");
        assert_eq!(error, PositionError::OffsetOutOfBounds { offset: 3, len: 2 });
    }

    #[test]
    fn rejects_offset_inside_code_point() {
        let error = to_protocol_position("é", 1).expect_err("inside code point");
        assert_eq!(error, PositionError::NotCharBoundary { offset: 1 });
    }

    #[test]
    fn inverse_of_position_mapping() {
        let text = "module a\n// 😀 note\nrequire b v1.0.0\n";
        let index = LineIndex::new(text);
        for (offset, _) in text.char_indices() {
            let position = index.position(text, offset).expect("offset maps");
            assert_eq!(index.offset(text, position), Ok(offset));
        }
    }

    #[test]
    fn rejects_character_inside_surrogate_pair() {
        let position = Position {
            line: 0,
            character: 4,
        };
        let error = to_byte_offset("// 😀", position).expect_err("splits pair");
        assert_eq!(
            error,
            PositionError::SplitsSurrogatePair {
                line: 0,
                character: 4
            }
        );
    }

    #[test]
    fn rejects_missing_line_and_wide_character() {
        let text = "go 1.21\n";
        assert_eq!(
            to_byte_offset(text, Position { line: 5, character: 0 }),
            Err(PositionError::LineOutOfBounds { line: 5 })
        );
        assert_eq!(
            to_byte_offset(text, Position { line: 0, character: 9 }),
            Err(PositionError::CharacterOutOfBounds {
                line: 0,
                character: 9,
                width: 7
            })
        );
    }

    #[test]
    fn trailing_newline_counts_as_extra_line() {
        assert_eq!(LineIndex::new("a\nb\n").line_count(), 3);
    }
}
