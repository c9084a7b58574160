pub use reader::Reader;
pub use record::Record;
pub use writer::{Writer, DEFAULT_LINE_WIDTH};

pub mod reader;
pub mod record;
pub mod writer;
