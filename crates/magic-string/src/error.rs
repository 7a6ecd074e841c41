use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced by [`crate::MagicString`] edits.
///
/// All offsets are byte offsets into the original text.
pub enum MagicStringError {
    #[error("index {index} is out of bounds (original length {len})")]
    /// An offset lies past the end of the original text.
    OutOfBounds {
        /// The offending offset.
        index: usize,
        /// Byte length of the original text.
        len: usize,
    },

    #[error("index {index} is not on a UTF-8 character boundary")]
    /// An offset splits a multi-byte character.
    NotCharBoundary {
        /// The offending offset.
        index: usize,
    },

    #[error("invalid range {start}..{end}")]
    /// `start` is greater than `end`.
    InvalidRange {
        /// Inclusive start offset.
        start: usize,
        /// Exclusive end offset.
        end: usize,
    },

    #[error("cannot overwrite a zero-length range at {index}, insert with append_left instead")]
    /// An overwrite targeted an empty range.
    ZeroLengthRange {
        /// Offset of the empty range.
        index: usize,
    },

    #[error("cannot overwrite {start}..{end}: the range has already been edited")]
    /// Some chunk inside the range was already overwritten, removed or trimmed.
    AlreadyEdited {
        /// Inclusive start offset.
        start: usize,
        /// Exclusive end offset.
        end: usize,
    },

    #[error("cannot overwrite {start}..{end} across a split point")]
    /// The range covers chunks that are no longer adjacent (after a move).
    AcrossSplitPoint {
        /// Inclusive start offset.
        start: usize,
        /// Exclusive end offset.
        end: usize,
    },

    #[error("cannot split a chunk that has already been edited ({line}:{column} - {original:?})")]
    /// An offset falls strictly inside an edited chunk with non-empty content.
    SplitEditedChunk {
        /// Zero-based line of the offset.
        line: usize,
        /// Zero-based UTF-16 column of the offset.
        column: usize,
        /// Original text of the edited chunk.
        original: String,
    },

    #[error("cannot move {start}..{end} to {index}: a selection cannot move inside itself")]
    /// The move target lies inside the moved range.
    MoveInsideSelection {
        /// Inclusive start offset.
        start: usize,
        /// Exclusive end offset.
        end: usize,
        /// Target offset.
        index: usize,
    },

    #[error("cannot use replaced character {index} as slice start anchor")]
    /// The slice starts strictly inside an edited chunk.
    SliceStartAnchor {
        /// The offending offset.
        index: usize,
    },

    #[error("cannot use replaced character {index} as slice end anchor")]
    /// The slice ends strictly inside an edited chunk.
    SliceEndAnchor {
        /// The offending offset.
        index: usize,
    },

    #[error("invalid trim character class '{char_type}': {message}")]
    /// The character class passed to a trim method is not a valid regex.
    InvalidCharType {
        /// The character class as given.
        char_type: String,
        /// The regex compiler message.
        message: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = MagicStringError> = std::result::Result<T, E>;
