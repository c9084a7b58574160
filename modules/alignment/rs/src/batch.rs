use rayon::prelude::*;

use crate::{align_with, Alignment, Result, Score, Scoring};

/// Align many independent pairs in parallel over one shared [`Scoring`].
///
/// `Scoring` is read-only after construction, so no synchronization is
/// needed; the first failed pair aborts the batch.
pub fn align_batch<S, T>(
    pairs: &[(T, T)],
    scoring: &Scoring<S>,
    gap: S,
) -> Result<Vec<Alignment<S>>>
where
    S: Score,
    T: AsRef<str> + Sync,
{
    pairs
        .par_iter()
        .map(|(seq1, seq2)| align_with(seq1.as_ref(), seq2.as_ref(), scoring, gap))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn batch_matches_sequential() -> eyre::Result<()> {
        let scoring = Scoring::<i32>::identity();
        let pairs = vec![("ACGT", "ACGT"), ("ACGTAA", "ACGT"), ("", "ACGT")];

        let batch = align_batch(&pairs, &scoring, -1)?;
        assert_eq!(batch.len(), pairs.len());
        for ((seq1, seq2), result) in pairs.iter().zip(&batch) {
            assert_eq!(result, &align_with(seq1, seq2, &scoring, -1)?);
        }
        Ok(())
    }

    #[test]
    fn batch_surfaces_failures() {
        let scoring = Scoring::<i32>::identity();
        let pairs = vec![("ACGT", "ACGT"), ("AC-GT", "ACGT")];

        let err = align_batch(&pairs, &scoring, -1).unwrap_err();
        assert_eq!(err, Error::InvalidGapCharacter { position: 2 });
    }
}
