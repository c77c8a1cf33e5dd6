/// Errors raised while reading CIGAR or edit-sequence text
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CigarError {
    /// An operation character with no run length in front of it.
    #[error("operation at position {position} has no run length")]
    MissingLength { position: usize },
    /// Digits at the end of the string with no operation after them.
    #[error("run length starting at position {position} is not followed by an operation")]
    TrailingLength { position: usize },
    #[error("zero-length run at position {position}")]
    ZeroLength { position: usize },
    #[error("run length starting at position {position} does not fit in usize")]
    LengthOverflow { position: usize },
    /// The runs add up to more operations than can be held in memory.
    #[error("expanded CIGAR length overflows")]
    ExpandedLengthOverflow,
    #[error("unknown operation {op:?} at position {position}")]
    UnknownOperation { op: char, position: usize },
}

/// Errors raised while converting between rows, sequences and edits
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("aligned rows differ in length ({left} vs {right})")]
    RowLengthMismatch { left: usize, right: usize },
    #[error("both rows are gapped at column {column}")]
    DoubleGap { column: usize },
    #[error("gap marker at position {position} in an ungapped sequence")]
    GapInSequence { position: usize },
    /// The edits ask for more symbols than the named sequence holds.
    #[error("edit {column} needs a symbol past the end of the {which} sequence")]
    EditsExhausted { column: usize, which: &'static str },
    /// The edits ended before the named sequence was used up.
    #[error("{remaining} trailing symbols of the {which} sequence are not covered by the edits")]
    UnconsumedSequence { remaining: usize, which: &'static str },
    #[error("offset {offset} is past the end of a reference of length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },
    #[error(transparent)]
    Cigar(#[from] CigarError),
}

#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
