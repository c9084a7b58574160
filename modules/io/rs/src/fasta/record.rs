use derive_getters::{Dissolve, Getters};
use derive_more::Into;
use eyre::{ensure, Result};

/// A single FASTA record with the following guarantees:
/// - The ID is non-empty and contains no newline characters.
/// - The sequence is non-empty and contains only ASCII alphabetic characters.
///
/// There are no guarantees on the biological meaningfulness of the stored
/// sequence; DNA and protein records look the same at this level.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Dissolve, Getters, Into)]
pub struct Record {
    id: String,
    seq: String,
}

impl Record {
    pub fn new(id: String, seq: String) -> Result<Self> {
        Self::validate(&id, &seq)?;
        Ok(Self { id, seq })
    }

    pub fn validate(id: &str, seq: &str) -> Result<()> {
        ensure!(!id.is_empty(), "FASTA ID cannot be empty");
        ensure!(
            !id.contains(&['\n', '\r'] as &[char]),
            "Newline characters are not allowed in the FASTA ID: {id}"
        );
        ensure!(!seq.is_empty(), "FASTA sequence cannot be empty");
        for (i, x) in seq.chars().enumerate() {
            ensure!(
                x.is_ascii_alphabetic(),
                "Non-alphabetic character at index {i} = {x:?}"
            );
        }
        Ok(())
    }
}

impl TryFrom<(&str, &str)> for Record {
    type Error = eyre::Report;

    fn try_from(value: (&str, &str)) -> Result<Self> {
        Self::new(value.0.to_string(), value.1.to_string())
    }
}
