use derive_more::{Display, Error};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// An operation that needs at least one residue got an empty sequence.
    #[display("input sequence is empty")]
    EmptySequence,
    /// Distance vectors differ in length or are empty.
    #[display("vectors must be non-empty and of equal length: {len1} vs {len2}")]
    DimensionMismatch { len1: usize, len2: usize },
}
