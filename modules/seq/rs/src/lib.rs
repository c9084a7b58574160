pub use composition::{aa_types, Composition};
pub use distance::{distance, Metric};
pub use error::{Error, Result};
pub use orf::{candidate_protein, open_reading_frame};
pub use translation::{translate, ReadingFrames};

pub mod composition;
pub mod distance;
mod error;
pub mod orf;
pub mod translation;
