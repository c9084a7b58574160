use derive_more::{Display, Error};

pub type Result<T> = std::result::Result<T, Error>;

/// Typed failures of scoring construction and alignment.
///
/// Unknown residue pairs are never an error - they resolve through the
/// identity fallback of [`crate::Scoring`].
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum Error {
    /// The requested named substitution matrix is not in the registry.
    #[display("matrix '{name}' is not available, select one of: {}", available.join(", "))]
    UnknownMatrix {
        name: String,
        available: Vec<String>,
    },
    /// The two seed strings differ in length.
    #[display("seed strings differ in length: {len1} vs {len2}")]
    SeedLengthMismatch { len1: usize, len2: usize },
    /// A seed's gap-stripped form is not a literal prefix of its sequence.
    #[display("seed '{stripped}' is not a prefix of sequence '{sequence}'")]
    SeedPrefixMismatch { stripped: String, sequence: String },
    /// A raw input sequence contains a literal gap marker.
    #[display("input sequence contains the gap marker '-' at position {position}")]
    InvalidGapCharacter { position: usize },
}
