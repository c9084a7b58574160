use std::fs::File;
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::Path;

use derive_getters::Dissolve;
use eyre::Result;

use super::record::Record;

/// Sequence line width used when none is specified.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// A FASTA writer wrapping sequences at a fixed line width.
#[derive(Debug, Dissolve)]
pub struct Writer<W> {
    writer: W,
    line_width: NonZeroUsize,
}

impl Writer<BufWriter<File>> {
    pub fn from_path(path: impl AsRef<Path>, line_width: NonZeroUsize) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file), line_width))
    }
}

impl<W: Write> Writer<W> {
    pub fn new(writer: W, line_width: NonZeroUsize) -> Self {
        Self { writer, line_width }
    }

    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.writer, ">{}", record.id())?;
        for chunk in record.seq().as_bytes().chunks(self.line_width.get()) {
            self.writer.write_all(chunk)?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn write_records(&mut self, records: &[Record]) -> Result<usize> {
        let mut count = 0;
        for record in records {
            self.write_record(record)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
