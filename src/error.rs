//! Error types and result type for the wordset crate.
//!
//! This module defines all error variants that can occur when building, loading
//! or saving word sets and when extracting word lists from PDF or text sources.
//! It uses the `snafu` library for ergonomic error handling with automatic
//! backtrace capture.
//!
//! # Examples
//!
//! ```
//! use wordset::{Result, WordSetError};
//!
//! fn check_word(word: &str) -> Result<()> {
//!     if word.trim().is_empty() {
//!         return Err(WordSetError::invalid_word("key must not be empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_word("  ").unwrap_err().is_validation());
//! ```
//!
//! # Error Variants
//!
//! Validation errors, reported for malformed input:
//! - [`WordSetError::InvalidWord`]: empty word key (before or after scrubbing)
//! - [`WordSetError::MixedAttributeSources`]: explicit and embedded attributes in one insertion
//! - [`WordSetError::UnknownAbbreviation`]: abbreviation missing from the attribute registry
//! - [`WordSetError::UnknownLanguage`]: scrubbing requested for an unknown language code
//!
//! Type errors, reported for values of the wrong kind:
//! - [`WordSetError::InvalidFlag`]: a value that is not exactly one attribute flag
//! - [`WordSetError::ArchiveTypeMismatch`]: an archive that does not hold a word set
//!
//! I/O and format errors:
//! - [`WordSetError::Io`], [`WordSetError::ParserError`], [`WordSetError::InvalidDataFormat`], [`WordSetError::Pdf`]

use std::io;
use snafu::{Snafu, Backtrace};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the wordset crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `WordSetError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum WordSetError {
    /// I/O error occurred during file operations.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// Error parsing or writing the JSON archive document.
    #[snafu(display("Parser error: {source}"))]
    ParserError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        backtrace: Backtrace,
    },

    /// Archive or text data is malformed.
    #[snafu(display("Invalid data format: {message}"))]
    InvalidDataFormat {
        message: String,
        backtrace: Backtrace,
    },

    /// The PDF reader failed to open or decode a document.
    #[snafu(display("PDF error: {source}"))]
    Pdf {
        source: lopdf::Error,
        backtrace: Backtrace,
    },

    /// Word key is empty, or nothing is left of it after scrubbing.
    #[snafu(display("Invalid word: {message}"))]
    InvalidWord {
        message: String,
        backtrace: Backtrace,
    },

    /// Attributes were given both explicitly and embedded in the word.
    #[snafu(display("Word '{word}': attributes must be supplied either as value or embedded in word, not both"))]
    MixedAttributeSources {
        word: String,
        backtrace: Backtrace,
    },

    /// Abbreviation is not part of the attribute registry.
    #[snafu(display("Abbreviation '{abbrev}' is not valid"))]
    UnknownAbbreviation {
        abbrev: String,
        backtrace: Backtrace,
    },

    /// Scrubbing was requested for a language without a scrub pattern.
    #[snafu(display("Scrub enabled for unknown language code '{code}'"))]
    UnknownLanguage {
        code: String,
        backtrace: Backtrace,
    },

    /// Value is not a single attribute flag.
    #[snafu(display("Expected a single attribute flag, got {value:#010x}"))]
    InvalidFlag {
        value: u32,
        backtrace: Backtrace,
    },

    /// Loaded archive does not hold a word set.
    #[snafu(display("Loaded archive is not a word set (found {found})"))]
    ArchiveTypeMismatch {
        found: String,
        backtrace: Backtrace,
    },
}

impl From<io::Error> for WordSetError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<serde_json::Error> for WordSetError {
    fn from(source: serde_json::Error) -> Self {
        Self::ParserError {
            source: Box::new(source),
            backtrace: Backtrace::capture(),
        }
    }
}

impl From<lopdf::Error> for WordSetError {
    fn from(source: lopdf::Error) -> Self {
        Self::Pdf { source, backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl WordSetError {
    /// Creates an `InvalidWord` error with the given message.
    pub fn invalid_word<S: Into<String>>(message: S) -> Self {
        Self::InvalidWord {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidDataFormat` error with the given message.
    pub fn invalid_data_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidDataFormat {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `MixedAttributeSources` error for the given word.
    pub fn mixed_attribute_sources<S: Into<String>>(word: S) -> Self {
        Self::MixedAttributeSources {
            word: word.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `UnknownAbbreviation` error for the given abbreviation.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::WordSetError;
    ///
    /// let error = WordSetError::unknown_abbreviation("xyz");
    /// assert_eq!(error.to_string(), "Abbreviation 'xyz' is not valid");
    /// ```
    pub fn unknown_abbreviation<S: Into<String>>(abbrev: S) -> Self {
        Self::UnknownAbbreviation {
            abbrev: abbrev.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `UnknownLanguage` error for the given language code.
    pub fn unknown_language<S: Into<String>>(code: S) -> Self {
        Self::UnknownLanguage {
            code: code.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidFlag` error for a value that is not a single flag.
    pub fn invalid_flag(value: u32) -> Self {
        Self::InvalidFlag {
            value,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `ArchiveTypeMismatch` error describing what was found instead.
    pub fn archive_type_mismatch<S: Into<String>>(found: S) -> Self {
        Self::ArchiveTypeMismatch {
            found: found.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error rejects malformed input (word, abbreviation, language).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WordSetError::InvalidWord { .. }
                | WordSetError::MixedAttributeSources { .. }
                | WordSetError::UnknownAbbreviation { .. }
                | WordSetError::UnknownLanguage { .. }
        )
    }

    /// Checks if this error rejects a value of the wrong kind (flag or archive).
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            WordSetError::InvalidFlag { .. } | WordSetError::ArchiveTypeMismatch { .. }
        )
    }
}

/// A specialized `Result` type for wordset operations.
///
/// This is a convenience type alias that uses [`WordSetError`] as the error type.
pub type Result<T> = std::result::Result<T, WordSetError>;
