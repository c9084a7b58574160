pub use alignment::Alignment;
pub use seed::Seed;

pub mod alignment;
pub mod seed;

use crate::{Error, Result, Score, Scoring, GAP};

fn validate_raw(seq: &str) -> Result<()> {
    match seq.chars().position(|c| c == GAP) {
        Some(position) => Err(Error::InvalidGapCharacter { position }),
        None => Ok(()),
    }
}

/// Greedy one-step-lookahead alignment with the default gap penalty of -1.
pub fn align<S: Score>(seq1: &str, seq2: &str, scoring: &Scoring<S>) -> Result<Alignment<S>> {
    align_with(seq1, seq2, scoring, -S::one())
}

/// Greedy one-step-lookahead alignment of two sequences.
///
/// A single left-to-right pass, O(len1 + len2), no backtracking. At every
/// position three candidates are scored: matching the current characters,
/// gapping the first sequence while consuming the second, and the reverse.
/// Ties resolve match > insertion > deletion, so the result is deterministic
/// but not guaranteed to be globally optimal.
///
/// Scoring is case-insensitive; the returned strings keep the input casing.
/// Raw inputs must not contain the gap marker.
pub fn align_with<S: Score>(
    seq1: &str,
    seq2: &str,
    scoring: &Scoring<S>,
    gap: S,
) -> Result<Alignment<S>> {
    validate_raw(seq1)?;
    validate_raw(seq2)?;

    let chars1: Vec<char> = seq1.chars().collect();
    let chars2: Vec<char> = seq2.chars().collect();
    let upper1: Vec<char> = chars1.iter().map(|x| x.to_ascii_uppercase()).collect();
    let upper2: Vec<char> = chars2.iter().map(|x| x.to_ascii_uppercase()).collect();

    let mut aln1 = String::with_capacity(chars1.len() + chars2.len());
    let mut aln2 = String::with_capacity(chars1.len() + chars2.len());
    let mut score = S::zero();

    let (mut i, mut j) = (0, 0);
    while i < chars1.len() && j < chars2.len() {
        // Candidate 1: align the current characters to each other.
        let c1 = scoring.score(upper1[i], upper2[j]);

        // Candidates 2 and 3 look one position ahead in the opposite
        // sequence. Once the lookahead would run off either sequence, a
        // doubled gap penalty stands in for both candidates, discouraging
        // indels at the boundary. Callers depend on this exact sentinel.
        let within = i + 1 < chars1.len() && j + 1 < chars2.len();
        let c2 = if within {
            scoring.score(upper1[i], upper2[j + 1]) + gap
        } else {
            gap + gap
        };
        let c3 = if within {
            scoring.score(upper1[i + 1], upper2[j]) + gap
        } else {
            gap + gap
        };

        if c1 >= c2 && c1 >= c3 {
            // Match wins all ties
            aln1.push(chars1[i]);
            aln2.push(chars2[j]);
            score = score + c1;
            i += 1;
            j += 1;
        } else if c2 > c1 && c2 > c3 {
            // Deletion: gap in the first sequence, consume the second
            aln1.push(GAP);
            aln2.push(chars2[j]);
            score = score + gap;
            j += 1;
        } else {
            // Insertion: consume the first sequence, gap in the second.
            // Wins ties against deletion.
            aln1.push(chars1[i]);
            aln2.push(GAP);
            score = score + gap;
            i += 1;
        }
    }

    // Emit whatever remains of the longer sequence against gaps
    while i < chars1.len() {
        aln1.push(chars1[i]);
        aln2.push(GAP);
        score = score + gap;
        i += 1;
    }
    while j < chars2.len() {
        aln1.push(GAP);
        aln2.push(chars2[j]);
        score = score + gap;
        j += 1;
    }

    Ok(Alignment::new(aln1, aln2, score))
}

/// Seeded alignment with the default gap penalty of -1.
pub fn seeded_align<S: Score>(
    seq1: &str,
    seq2: &str,
    scoring: &Scoring<S>,
    seed: &Seed,
) -> Result<Alignment<S>> {
    seeded_align_with(seq1, seq2, scoring, seed, -S::one())
}

/// Alignment anchored to a pre-aligned seed prefix.
///
/// The seed's gap-stripped strings must be literal prefixes of the inputs;
/// the remaining suffixes are aligned greedily and concatenated onto the
/// seed. The seed contributes its own score: 0 for gap-vs-gap columns, the
/// gap penalty for gap-vs-residue columns, and the pair score otherwise.
pub fn seeded_align_with<S: Score>(
    seq1: &str,
    seq2: &str,
    scoring: &Scoring<S>,
    seed: &Seed,
    gap: S,
) -> Result<Alignment<S>> {
    validate_raw(seq1)?;
    validate_raw(seq2)?;

    let prefix1 = seed.stripped1();
    let prefix2 = seed.stripped2();
    if !seq1.starts_with(&prefix1) {
        return Err(Error::SeedPrefixMismatch {
            stripped: prefix1,
            sequence: seq1.to_string(),
        });
    }
    if !seq2.starts_with(&prefix2) {
        return Err(Error::SeedPrefixMismatch {
            stripped: prefix2,
            sequence: seq2.to_string(),
        });
    }

    // The prefixes are literal prefixes, so byte offsets are char boundaries
    let suffix = align_with(&seq1[prefix1.len()..], &seq2[prefix2.len()..], scoring, gap)?;

    let mut seed_score = S::zero();
    for (a, b) in seed.seq1().chars().zip(seed.seq2().chars()) {
        if a == GAP && b == GAP {
            continue;
        } else if a == GAP || b == GAP {
            seed_score = seed_score + gap;
        } else {
            seed_score = seed_score + scoring.score(a, b);
        }
    }

    let (aln1, aln2, score) = suffix.dissolve();
    Ok(Alignment::new(
        format!("{}{}", seed.seq1(), aln1),
        format!("{}{}", seed.seq2(), aln2),
        seed_score + score,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_gap_markers_in_raw_input() {
        let scoring = Scoring::<i32>::identity();
        let err = align("AC-GT", "ACGT", &scoring).unwrap_err();
        assert_eq!(err, Error::InvalidGapCharacter { position: 2 });

        let err = align("ACGT", "ACGT-", &scoring).unwrap_err();
        assert_eq!(err, Error::InvalidGapCharacter { position: 4 });
    }

    #[test]
    fn preserves_casing_but_scores_uppercase() {
        let scoring = Scoring::<i32>::identity();
        let result = align("acgt", "ACGT", &scoring).unwrap();
        assert_eq!(result.seq1(), "acgt");
        assert_eq!(result.seq2(), "ACGT");
        assert_eq!(*result.score(), 4);
    }

    #[test]
    fn identical_sequences_align_without_gaps() {
        let scoring = Scoring::<i32>::identity();
        let result = align("ACGT", "ACGT", &scoring).unwrap();
        assert_eq!(result.seq1(), "ACGT");
        assert_eq!(result.seq2(), "ACGT");
        assert_eq!(*result.score(), 4);
    }

    #[test]
    fn trailing_tail_is_gapped() {
        let scoring = Scoring::<i32>::identity();
        let result = align("ACGTAA", "ACGT", &scoring).unwrap();
        assert_eq!(result.seq1(), "ACGTAA");
        assert_eq!(result.seq2(), "ACGT--");
        assert_eq!(*result.score(), 2);
    }

    #[test]
    fn float_gap_penalty() {
        let scoring = Scoring::<f64>::identity();
        let result = align_with("ACGT", "", &scoring, -0.5).unwrap();
        assert_eq!(result.seq2(), "----");
        assert_eq!(*result.score(), -2.0);
    }
}
