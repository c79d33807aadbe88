pub mod emoji;
pub mod io;
pub mod labels;
pub mod sanitizer;

// Re-export key types for easier usage
pub use emoji::{EMOJI_RANGES, Stripped, is_emoji, strip_emoji};
pub use io::{IoError, WriteMode, read_document, write_document};
pub use labels::{Delimiter, Quoted, quote_all_labels, quote_labels};
pub use sanitizer::*;
