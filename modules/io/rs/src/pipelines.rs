use std::num::NonZeroUsize;
use std::path::Path;

use eyre::{eyre, Result};
use log::debug;

use bioseq_seq_rs::candidate_protein;

use crate::fasta::{Reader, Record, Writer, DEFAULT_LINE_WIDTH};

/// Extract the longest open reading frame of a DNA FASTA file and write it
/// as a single protein record named `protein_name`.
pub fn maximal_orf(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    protein_name: &str,
) -> Result<()> {
    let dna = Reader::from_path(input.as_ref())?.read_concatenated()?;
    let orf = candidate_protein(&dna).ok_or_else(|| {
        eyre!(
            "no open reading frame found in {}",
            input.as_ref().display()
        )
    })?;
    debug!("longest ORF has {} residues", orf.len());

    let record = Record::new(protein_name.to_string(), orf)?;
    let width = NonZeroUsize::new(DEFAULT_LINE_WIDTH).unwrap();
    let mut writer = Writer::from_path(output.as_ref(), width)?;
    writer.write_record(&record)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_longest_orf() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("dna.fasta");
        let output = dir.path().join("protein.fasta");

        // f1: M T * M K K V * -> longest ORF is MKKV
        fs::write(&input, ">dna\nATGACTTAAATGAAAAAAGTGTGA\n")?;
        maximal_orf(&input, &output, "candidate")?;

        let records = Reader::from_path(&output)?.read_to_end()?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], ("candidate", "MKKV").try_into()?);
        Ok(())
    }

    #[test]
    fn fails_without_orf() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("dna.fasta");
        fs::write(&input, ">dna\nGGGGGG\n")?;

        let result = maximal_orf(&input, dir.path().join("out.fasta"), "candidate");
        assert!(result.is_err());
        Ok(())
    }
}
