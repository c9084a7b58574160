pub use registry::{Builtin, MatrixRegistry};

pub mod registry;

use ahash::AHashMap;
use derive_getters::Dissolve;
use derive_more::From;

use crate::{Error, Result, Score};

/// A symmetric residue-pair scoring scheme backed by a sparse mapping.
///
/// The mapping is stored exactly as supplied and never mutated; symmetry is
/// enforced at lookup time by probing the mirrored pair. Pairs absent in both
/// orientations resolve through the identity fallback: 1 for identical
/// residues, 0 otherwise.
///
/// A `Scoring` is immutable after construction and can be shared read-only
/// across any number of concurrent alignment calls.
#[derive(Debug, Clone, Dissolve, From)]
pub struct Scoring<S: Score> {
    matrix: AHashMap<(char, char), S>,
}

impl Scoring<i32> {
    /// Resolve a named substitution matrix against the given registry.
    pub fn from_name(name: &str, registry: &impl MatrixRegistry) -> Result<Self> {
        match registry.resolve(name) {
            Some(matrix) => Ok(Self { matrix }),
            None => Err(Error::UnknownMatrix {
                name: name.to_string(),
                available: registry.names().iter().map(|x| x.to_string()).collect(),
            }),
        }
    }
}

impl<S: Score> Scoring<S> {
    /// Wrap a raw residue-pair mapping, stored as given.
    pub fn from_pairs(matrix: AHashMap<(char, char), S>) -> Self {
        Self { matrix }
    }

    /// Identity scheme: every pair resolves through the fallback.
    pub fn identity() -> Self {
        Self {
            matrix: AHashMap::new(),
        }
    }

    /// Score a residue pair. Case-sensitive, pure, order-independent.
    pub fn score(&self, res1: char, res2: char) -> S {
        if let Some(&score) = self.matrix.get(&(res1, res2)) {
            return score;
        }
        if let Some(&score) = self.matrix.get(&(res2, res1)) {
            return score;
        }
        if res1 == res2 {
            S::one()
        } else {
            S::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_fallback() {
        let scoring = Scoring::<i32>::identity();
        assert_eq!(scoring.score('A', 'A'), 1);
        assert_eq!(scoring.score('A', 'G'), 0);
    }

    #[test]
    fn mirror_lookup() {
        let mut matrix = AHashMap::new();
        matrix.insert(('A', 'G'), 5);
        let scoring = Scoring::from_pairs(matrix);

        assert_eq!(scoring.score('A', 'G'), 5);
        assert_eq!(scoring.score('G', 'A'), 5);
    }

    #[test]
    fn stored_pair_wins_over_fallback() {
        let mut matrix = AHashMap::new();
        matrix.insert(('A', 'A'), -3);
        let scoring = Scoring::from_pairs(matrix);

        assert_eq!(scoring.score('A', 'A'), -3);
        // Untouched pairs still fall back
        assert_eq!(scoring.score('C', 'C'), 1);
    }

    #[test]
    fn float_scores() {
        let mut matrix = AHashMap::new();
        matrix.insert(('A', 'C'), 0.5f64);
        let scoring = Scoring::from_pairs(matrix);

        assert_eq!(scoring.score('C', 'A'), 0.5);
        assert_eq!(scoring.score('G', 'G'), 1.0);
    }

    #[test]
    fn unknown_matrix_lists_names() {
        let err = Scoring::from_name("BLOSUM1000", &Builtin).unwrap_err();
        match err {
            Error::UnknownMatrix { name, available } => {
                assert_eq!(name, "BLOSUM1000");
                assert!(available.contains(&"BLOSUM62".to_string()));
                assert!(available.contains(&"PAM250".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn named_matrix_symmetry() {
        let scoring = Scoring::from_name("BLOSUM62", &Builtin).unwrap();
        for (a, b) in [('A', 'R'), ('W', 'W'), ('Q', '*'), ('N', 'D')] {
            assert_eq!(scoring.score(a, b), scoring.score(b, a));
        }
        assert_eq!(scoring.score('W', 'W'), 11);
        assert_eq!(scoring.score('A', 'R'), -1);
    }
}
