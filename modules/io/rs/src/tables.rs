use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use eyre::{ensure, Result, WrapErr};
use itertools::Itertools;
use log::warn;

use bioseq_seq_rs::{aa_types, distance, Metric};

use crate::fasta::Reader;

/// Compute per-file amino-acid composition and write it as a CSV table with
/// a `#Filename,Polar,Small,Hydrophobic` header. Unreadable files are
/// skipped with a warning, matching the tolerant batch behavior expected of
/// this report.
pub fn write_composition_table(
    files: &[impl AsRef<Path>],
    out: impl AsRef<Path>,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(out.as_ref())?;
    writer.write_record(["#Filename", "Polar", "Small", "Hydrophobic"])?;

    for file in files {
        let file = file.as_ref();
        let seq = match Reader::from_path(file).and_then(|mut x| x.read_concatenated()) {
            Ok(seq) => seq,
            Err(error) => {
                warn!("skipping {}: {error}", file.display());
                continue;
            }
        };
        let stats = aa_types(&seq)?;
        writer.write_record([
            file.display().to_string(),
            stats.polar().to_string(),
            stats.small().to_string(),
            stats.hydrophobic().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse a composition CSV back into `(filename, [polar, small, hydrophobic])`
/// rows, preserving row order.
pub fn read_composition_table(path: impl AsRef<Path>) -> Result<Vec<(String, [f64; 3])>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .from_path(path.as_ref())?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        ensure!(
            record.len() == 4,
            "composition rows must have 4 fields, got {}",
            record.len()
        );
        let mut values = [0.0; 3];
        for (value, field) in values.iter_mut().zip(record.iter().skip(1)) {
            *value = field
                .trim()
                .parse()
                .wrap_err_with(|| format!("non-numeric composition value: {field}"))?;
        }
        rows.push((record[0].to_string(), values));
    }
    Ok(rows)
}

/// Compute the all-vs-all distance matrix of a composition table and write
/// it as TSV: a `# filename` header row, then one row per input file with
/// distances formatted to 3 decimals.
pub fn write_distance_matrix(
    input: impl AsRef<Path>,
    out: impl AsRef<Path>,
    metric: Metric,
) -> Result<()> {
    let rows = read_composition_table(input)?;
    let mut writer = BufWriter::new(File::create(out.as_ref())?);

    let names = rows.iter().map(|(name, _)| name.as_str()).join("\t");
    writeln!(writer, "# filename\t{names}")?;

    for (name, veca) in &rows {
        write!(writer, "{name}")?;
        for (_, vecb) in &rows {
            write!(writer, "\t{:.3}", distance(veca, vecb, metric)?)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn composition_roundtrip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let fasta1 = dir.path().join("a.fasta");
        let fasta2 = dir.path().join("b.fasta");
        let table = dir.path().join("composition.csv");

        fs::write(&fasta1, ">a\nWAD\n")?;
        fs::write(&fasta2, ">b\nGGGG\n")?;

        // One missing file is skipped, not fatal
        let missing = dir.path().join("missing.fasta");
        write_composition_table(&[&fasta1, &fasta2, &missing], &table)?;

        let rows = read_composition_table(&table)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, fasta1.display().to_string());
        assert_eq!(rows[0].1, aa_types("WAD")?.as_array());
        assert_eq!(rows[1].1, [0.0, 1.0, 0.0]);
        Ok(())
    }

    #[test]
    fn distance_matrix_shape() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let table = dir.path().join("composition.csv");
        let matrix = dir.path().join("distances.dmf");

        fs::write(&table, "#Filename,Polar,Small,Hydrophobic\na,0,0,0\nb,3,4,0\n")?;
        write_distance_matrix(&table, &matrix, Metric::Euclidean)?;

        let produced = fs::read_to_string(&matrix)?;
        let lines: Vec<&str> = produced.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "# filename\ta\tb");
        assert_eq!(lines[1], "a\t0.000\t5.000");
        assert_eq!(lines[2], "b\t5.000\t0.000");
        Ok(())
    }
}
