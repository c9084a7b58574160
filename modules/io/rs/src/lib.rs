pub use fasta::{Reader, Record, Writer};

pub mod fasta;
pub mod pipelines;
pub mod tables;
