use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, Into};

use crate::{Score, GAP};

/// A finished pairwise alignment: two gapped strings of equal length plus
/// the accumulated score. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Getters, Dissolve, Constructor, Into)]
pub struct Alignment<S: Score> {
    seq1: String,
    seq2: String,
    score: S,
}

impl<S: Score> Alignment<S> {
    /// Number of columns in the alignment.
    pub fn len(&self) -> usize {
        self.seq1.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }

    /// The first input sequence with gap markers removed.
    pub fn stripped1(&self) -> String {
        self.seq1.chars().filter(|&x| x != GAP).collect()
    }

    /// The second input sequence with gap markers removed.
    pub fn stripped2(&self) -> String {
        self.seq2.chars().filter(|&x| x != GAP).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_recovers_inputs() {
        let aln = Alignment::new("AC-GT".to_string(), "ACTGT".to_string(), 3);
        assert_eq!(aln.len(), 5);
        assert_eq!(aln.stripped1(), "ACGT");
        assert_eq!(aln.stripped2(), "ACTGT");
    }
}
