use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use derive_getters::Dissolve;
use eyre::{ensure, Result};
use flate2::read::MultiGzDecoder;
use log::debug;

use super::record::Record;

/// A line-based FASTA reader yielding one record at a time. Tolerates
/// Windows line endings and empty lines between records; everything else is
/// validated strictly (see [`Record`]).
#[derive(Debug, Dissolve)]
pub struct Reader<R> {
    reader: R,
    // Lookahead header line carried over from the previous record
    pending: Option<String>,
}

impl Reader<Box<dyn BufRead>> {
    /// Open a FASTA file, transparently decoding gzip based on the `.gz`
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let reader: Box<dyn BufRead> = if path.extension().is_some_and(|x| x == "gz") {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        debug!("reading FASTA records from {}", path.display());
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Parse the next record. Returns `Ok(None)` at end of input.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        // Find the header, either buffered or on the next non-empty line
        let header = match self.pending.take() {
            Some(x) => x,
            None => loop {
                match self.next_line()? {
                    None => return Ok(None),
                    Some(x) if x.is_empty() => continue,
                    Some(x) => break x,
                }
            },
        };
        ensure!(
            header.starts_with('>'),
            "Expected '>' at the start of the FASTA record, got: {header}"
        );
        let id = header[1..].to_string();

        // Sequence lines run until the next header or end of input
        let mut seq = String::new();
        loop {
            match self.next_line()? {
                None => break,
                Some(x) if x.starts_with('>') => {
                    self.pending = Some(x);
                    break;
                }
                Some(x) => seq.push_str(&x),
            }
        }

        Record::new(id, seq).map(Some)
    }

    /// Read all remaining records.
    pub fn read_to_end(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        debug!("read {} FASTA records", records.len());
        Ok(records)
    }

    /// All remaining sequence data concatenated into one string, headers
    /// dropped. Mirrors consuming a whole file as a single sequence.
    pub fn read_concatenated(&mut self) -> Result<String> {
        let mut seq = String::new();
        for record in self.read_to_end()? {
            seq.push_str(record.seq());
        }
        ensure!(!seq.is_empty(), "FASTA input holds no sequence data");
        Ok(seq)
    }
}
