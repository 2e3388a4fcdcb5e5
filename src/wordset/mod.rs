//! Word sets: words tagged with attribute flags.
//!
//! - [`word_set`]: the container and its insertion rules
//! - [`scrub`]: per-language character scrubbing
//! - [`text_source`]: loading from a text word list
//! - [`archive`]: gzip archive save and load

pub mod archive;
pub mod scrub;
pub mod text_source;
pub mod word_set;

pub use archive::{ARCHIVE_FORMAT, ARCHIVE_VERSION};
pub use scrub::ScrubLanguage;
pub use word_set::WordSet;
