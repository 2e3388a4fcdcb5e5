//! # wordset - Vocabulary word lists with attribute flags
//!
//! This crate builds vocabulary word lists (for language-learning flashcards
//! and the like) from PDF and text sources, tags each word with grammatical
//! and locale attributes, and persists the result as a compressed archive.
//!
//! ## Features
//!
//! - **PDF extraction**: Pull text lines out of PDF word listings
//! - **Line cleanup**: Drop headers, footers and bullets from extracted lines
//! - **Attribute registry**: 32 abbreviations (`n`, `v`, `phrv`, `en_GB`, ...), one bit each
//! - **Word sets**: Parse `word (attrib1, attrib2) (locale)` entries, scrub words per language
//! - **Archives**: Save and load word sets as gzip compressed JSON
//!
//! ## Quick Start
//!
//! ```
//! use wordset::{WordSet, attributes::abbrev_to_flag};
//!
//! # fn main() -> wordset::Result<()> {
//! let mut words = WordSet::new("EN", true)?;
//! words.insert("run (v, phrv)", None)?;
//! words.insert("cat", None)?;
//!
//! let run = words.get("run").unwrap();
//! assert!(run.contains(abbrev_to_flag("phrv")?));
//! assert!(words.get("cat").unwrap().is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! ```no_run
//! use wordset::extract::{extract_pdf_to_text, clean_word_list, LineFilterConfig};
//! use wordset::WordSet;
//!
//! # fn main() -> wordset::Result<()> {
//! extract_pdf_to_text("flyers-word-list.pdf", "flyers-raw.txt");
//! clean_word_list("flyers-raw.txt", "flyers.txt", &LineFilterConfig::default())?;
//! // manual cleanup of flyers.txt happens here
//! let words = WordSet::from_text_file("EN", "flyers.txt")?;
//! words.save("flyers.words.gz")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are represented by
//! [`WordSetError`]. The crate uses the `snafu` library for error handling with
//! backtraces.

pub mod attributes;
pub mod error;
pub mod extract;
pub mod utils;
pub mod wordset;

// Re-export commonly used types for convenience
pub use attributes::{AttributeFlags, abbrev_to_flag, flag_to_text};
pub use wordset::{ScrubLanguage, WordSet};

// Re-export error types for convenience
pub use error::{WordSetError, Result, snafu};
