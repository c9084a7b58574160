use derive_getters::{Dissolve, Getters};

/// Translations of one DNA sequence over all six reading frames.
///
/// `f1..f3` are the three forward offsets; `r1..r3` are the same offsets of
/// the *reversed* sequence. Note that the reverse frames read the sequence
/// backwards without complementing it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Dissolve)]
pub struct ReadingFrames {
    f1: String,
    f2: String,
    f3: String,
    r1: String,
    r2: String,
    r3: String,
}

impl ReadingFrames {
    /// All six frames labelled by their conventional names.
    pub fn named(&self) -> [(&'static str, &str); 6] {
        [
            ("f1", &self.f1),
            ("f2", &self.f2),
            ("f3", &self.f3),
            ("r1", &self.r1),
            ("r2", &self.r2),
            ("r3", &self.r3),
        ]
    }
}

/// Translate a DNA sequence into amino acids over all six reading frames.
///
/// Input is uppercased before codon lookup. `*` marks stop codons, `X`
/// marks unknown codons (ambiguity codes and incomplete trailing codons).
pub fn translate(dna: &str) -> ReadingFrames {
    let forward: Vec<u8> = dna.bytes().map(|x| x.to_ascii_uppercase()).collect();
    let reverse: Vec<u8> = forward.iter().rev().copied().collect();

    ReadingFrames {
        f1: translate_frame(&forward),
        f2: translate_frame(&forward[1.min(forward.len())..]),
        f3: translate_frame(&forward[2.min(forward.len())..]),
        r1: translate_frame(&reverse),
        r2: translate_frame(&reverse[1.min(reverse.len())..]),
        r3: translate_frame(&reverse[2.min(reverse.len())..]),
    }
}

fn translate_frame(frame: &[u8]) -> String {
    frame.chunks(3).map(codon_to_aa).collect()
}

fn codon_to_aa(codon: &[u8]) -> char {
    match codon {
        b"TTT" | b"TTC" => 'F',
        b"TTA" | b"TTG" | b"CTT" | b"CTC" | b"CTA" | b"CTG" => 'L',
        b"TCT" | b"TCC" | b"TCA" | b"TCG" | b"AGT" | b"AGC" => 'S',
        b"TAT" | b"TAC" => 'Y',
        b"TAA" | b"TAG" | b"TGA" => '*',
        b"TGT" | b"TGC" => 'C',
        b"TGG" => 'W',
        b"CCT" | b"CCC" | b"CCA" | b"CCG" => 'P',
        b"CAT" | b"CAC" => 'H',
        b"CAA" | b"CAG" => 'Q',
        b"CGT" | b"CGC" | b"CGA" | b"CGG" | b"AGA" | b"AGG" => 'R',
        b"ATT" | b"ATC" | b"ATA" => 'I',
        b"ATG" => 'M',
        b"ACT" | b"ACC" | b"ACA" | b"ACG" => 'T',
        b"AAT" | b"AAC" => 'N',
        b"AAA" | b"AAG" => 'K',
        b"GTT" | b"GTC" | b"GTA" | b"GTG" => 'V',
        b"GCT" | b"GCC" | b"GCA" | b"GCG" => 'A',
        b"GAT" | b"GAC" => 'D',
        b"GAA" | b"GAG" => 'E',
        b"GGT" | b"GGC" | b"GGA" | b"GGG" => 'G',
        _ => 'X',
    }
}
