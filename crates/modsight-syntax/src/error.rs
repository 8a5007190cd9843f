//! Error types for coordinate conversion.

use thiserror::Error;

/// Errors raised when translating between byte offsets and editor positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PositionError {
    /// The byte offset lies past the end of the text.
    #[error("offset {offset} is beyond text length {len}")]
    OffsetOutOfBounds {
        /// Requested byte offset.
        offset: usize,
        /// Length of the text in bytes.
        len: usize,
    },

    /// The byte offset falls inside a multi-byte code point.
    #[error("offset {offset} is not at a UTF-8 character boundary")]
    NotCharBoundary {
        /// Requested byte offset.
        offset: usize,
    },

    /// The line lies past the end of the text.
    #[error("line {line} is beyond the end of the document")]
    LineOutOfBounds {
        /// Requested zero-based line.
        line: u32,
    },

    /// The character offset exceeds the width of its line.
    #[error("character {character} exceeds line {line} UTF-16 width {width}")]
    CharacterOutOfBounds {
        /// Zero-based line.
        line: u32,
        /// Requested UTF-16 character offset.
        character: u32,
        /// UTF-16 width of the line.
        width: u32,
    },

    /// The character offset points between the two halves of a surrogate pair.
    #[error("character {character} on line {line} splits a UTF-16 surrogate pair")]
    SplitsSurrogatePair {
        /// Zero-based line.
        line: u32,
        /// Requested UTF-16 character offset.
        character: u32,
    },
}
