pub use batch::align_batch;
pub use error::{Error, Result};
pub use greedy::{align, align_with, seeded_align, seeded_align_with, Alignment, Seed};
pub use scoring::Scoring;

pub mod batch;
mod error;
pub mod greedy;
pub mod scoring;

/// The gap marker used in aligned sequences and seeds.
pub const GAP: char = '-';

/// Numeric type of an alignment score.
///
/// Integer substitution matrices (BLOSUM, PAM) and float-valued custom
/// mappings both qualify; the bound is signed because gap penalties are
/// negative.
pub trait Score: num::Signed + Copy + PartialOrd + std::fmt::Debug + Send + Sync {}

impl<T: num::Signed + Copy + PartialOrd + std::fmt::Debug + Send + Sync> Score for T {}
