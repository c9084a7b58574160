use derive_getters::{Dissolve, Getters};

use crate::{Error, Result};

const POLAR: &[char] = &['W', 'H', 'K', 'R', 'Y', 'T', 'C', 'S', 'N', 'Q', 'D', 'E'];
const SMALL: &[char] = &['D', 'N', 'T', 'S', 'C', 'A', 'G', 'P', 'V'];
const HYDROPHOBIC: &[char] = &['I', 'V', 'L', 'M', 'F', 'Y', 'W', 'H', 'K', 'T', 'C', 'A'];

/// Proportions of polar, small and hydrophobic residues in a sequence.
/// The classes overlap, so the three values need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Dissolve)]
pub struct Composition {
    polar: f64,
    small: f64,
    hydrophobic: f64,
}

impl Composition {
    pub fn as_array(&self) -> [f64; 3] {
        [self.polar, self.small, self.hydrophobic]
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Classify every residue of an amino-acid sequence and return the class
/// proportions, each rounded to 3 decimals. Case-insensitive.
pub fn aa_types(aaseq: &str) -> Result<Composition> {
    if aaseq.is_empty() {
        return Err(Error::EmptySequence);
    }

    let total = aaseq.chars().count() as f64;
    let proportion = |class: &[char]| {
        let count = aaseq
            .chars()
            .map(|x| x.to_ascii_uppercase())
            .filter(|x| class.contains(x))
            .count();
        round3(count as f64 / total)
    };

    Ok(Composition {
        polar: proportion(POLAR),
        small: proportion(SMALL),
        hydrophobic: proportion(HYDROPHOBIC),
    })
}
