use std::sync::OnceLock;

use regex::Regex;

use crate::translation::translate;

fn orf_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // An ORF runs from a methionine up to (excluding) the next stop codon
    PATTERN.get_or_init(|| Regex::new(r"(M[A-Z]*)\*").unwrap())
}

/// The `n`-th (0-based, non-overlapping) open reading frame in an amino-acid
/// sequence: a stretch from a methionine up to the next stop codon. Input is
/// uppercased first; `None` when there are fewer than `n + 1` ORFs.
pub fn open_reading_frame(aaseq: &str, n: usize) -> Option<String> {
    let aaseq = aaseq.to_ascii_uppercase();
    orf_pattern()
        .captures_iter(&aaseq)
        .nth(n)
        .map(|x| x[1].to_string())
}

/// The longest open reading frame in the first forward frame of a DNA
/// sequence. `None` when the frame holds no ORF at all.
pub fn candidate_protein(dna: &str) -> Option<String> {
    let frames = translate(dna);
    let aaseq = frames.f1();

    // The first of the longest ORFs wins
    orf_pattern()
        .captures_iter(aaseq)
        .map(|x| x[1].to_string())
        .reduce(|best, orf| if orf.len() > best.len() { orf } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_nth_orf() {
        let aaseq = "AAMGGG*CCMT*MQQQQ*";
        assert_eq!(open_reading_frame(aaseq, 0).as_deref(), Some("MGGG"));
        assert_eq!(open_reading_frame(aaseq, 1).as_deref(), Some("MT"));
        assert_eq!(open_reading_frame(aaseq, 2).as_deref(), Some("MQQQQ"));
        assert_eq!(open_reading_frame(aaseq, 3), None);
    }

    #[test]
    fn orf_requires_stop() {
        // Methionine without a downstream stop is not an ORF
        assert_eq!(open_reading_frame("MGGG", 0), None);
        assert_eq!(open_reading_frame("", 0), None);
    }

    #[test]
    fn lowercase_input_is_uppercased() {
        assert_eq!(open_reading_frame("aamggg*", 0).as_deref(), Some("MGGG"));
    }

    #[test]
    fn candidate_is_longest_orf() {
        // f1: M T * M K K V * -> ORFs "MT" and "MKKV"
        let dna = "ATGACTTAAATGAAAAAAGTGTGA";
        assert_eq!(candidate_protein(dna).as_deref(), Some("MKKV"));
    }

    #[test]
    fn candidate_without_orf() {
        assert_eq!(candidate_protein("GGGGGG"), None);
    }
}
