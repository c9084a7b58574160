use derive_getters::{Dissolve, Getters};

use crate::{Error, Result, GAP};

/// A pair of already-aligned prefix strings anchoring a seeded alignment.
///
/// Both strings may contain gap markers and must be equal in length so they
/// line up positionally. Whether their gap-stripped forms are prefixes of
/// the target sequences is checked by [`crate::seeded_align`], which knows
/// the sequences.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Dissolve)]
pub struct Seed {
    seq1: String,
    seq2: String,
}

impl Seed {
    pub fn new(seq1: impl Into<String>, seq2: impl Into<String>) -> Result<Self> {
        let (seq1, seq2) = (seq1.into(), seq2.into());
        let (len1, len2) = (seq1.chars().count(), seq2.chars().count());
        if len1 != len2 {
            return Err(Error::SeedLengthMismatch { len1, len2 });
        }
        Ok(Self { seq1, seq2 })
    }

    /// First seed string with gap markers removed.
    pub fn stripped1(&self) -> String {
        self.seq1.chars().filter(|&x| x != GAP).collect()
    }

    /// Second seed string with gap markers removed.
    pub fn stripped2(&self) -> String {
        self.seq2.chars().filter(|&x| x != GAP).collect()
    }
}
