//! Compressed archive persistence for [`WordSet`].
//!
//! An archive is a gzip stream holding one JSON document:
//!
//! ```json
//! {"format": "WordSet", "version": 1, "scrub": "EN", "words": {"cat": 1, "run": 258}}
//! ```
//!
//! `words` keeps insertion order. Loading checks the `format` tag before
//! anything else, so a gzip file holding some other JSON value (a plain
//! mapping, for instance) is rejected as a type mismatch.

use std::io::{Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attributes::AttributeFlags;
use crate::utils::io_utils::{create_writer, open_reader};
use crate::wordset::scrub::ScrubLanguage;
use crate::wordset::word_set::WordSet;
use crate::{Result, WordSetError};

/// Tag identifying a word set archive document.
pub const ARCHIVE_FORMAT: &str = "WordSet";
/// Current archive layout version.
pub const ARCHIVE_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct ArchiveRef<'a> {
    format: &'a str,
    version: u32,
    scrub: Option<ScrubLanguage>,
    words: &'a IndexMap<String, AttributeFlags>,
}

#[derive(Debug, Deserialize)]
struct ArchiveOwned {
    version: u32,
    scrub: Option<ScrubLanguage>,
    words: IndexMap<String, AttributeFlags>,
}

impl WordSet {
    /// Saves the set, including its scrub configuration, as a gzip archive.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let writer = create_writer(path)?;
        self.write_to(writer)?;
        info!("Saved {} words to {}", self.len(), path.display());
        Ok(())
    }

    /// Writes the gzip archive to `writer` and flushes it.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let archive = ArchiveRef {
            format: ARCHIVE_FORMAT,
            version: ARCHIVE_VERSION,
            scrub: self.language(),
            words: self.entries(),
        };
        let mut encoder = GzEncoder::new(writer, Compression::default());
        serde_json::to_writer(&mut encoder, &archive)?;
        let mut writer = encoder.finish()?;
        writer.flush()?;
        Ok(())
    }

    /// Loads a set saved by [`WordSet::save`].
    ///
    /// # Errors
    ///
    /// Returns [`WordSetError::ArchiveTypeMismatch`] if the archive does not
    /// hold a word set, [`WordSetError::InvalidDataFormat`] for an unsupported
    /// version, and I/O or parser errors for unreadable data.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = Self::read_from(open_reader(path)?)?;
        info!("Loaded {} words from {}", words.len(), path.display());
        Ok(words)
    }

    /// Reads a gzip archive from `reader`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::WordSet;
    ///
    /// let mut words = WordSet::new("EN", true)?;
    /// words.insert("cat (n)", None)?;
    ///
    /// let mut buffer = Vec::new();
    /// words.write_to(&mut buffer)?;
    /// let loaded = WordSet::read_from(buffer.as_slice())?;
    /// assert_eq!(loaded, words);
    /// # Ok::<(), wordset::WordSetError>(())
    /// ```
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        let document: Value = serde_json::from_reader(GzDecoder::new(reader))?;
        check_format(&document)?;

        let archive: ArchiveOwned = serde_json::from_value(document)?;
        if archive.version != ARCHIVE_VERSION {
            return Err(WordSetError::invalid_data_format(format!(
                "unsupported archive version {}",
                archive.version
            )));
        }
        debug!(
            "Loaded archive version {} ({} words, scrub {:?})",
            archive.version,
            archive.words.len(),
            archive.scrub
        );

        let mut words = WordSet::with_language(archive.scrub);
        for (key, flags) in archive.words {
            words.insert_raw(key, flags);
        }
        Ok(words)
    }
}

fn check_format(document: &Value) -> Result<()> {
    match document.get("format").and_then(Value::as_str) {
        Some(ARCHIVE_FORMAT) => Ok(()),
        Some(other) => Err(WordSetError::archive_type_mismatch(format!("format '{}'", other))),
        None => Err(WordSetError::archive_type_mismatch(describe_value(document))),
    }
}

fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "plain mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gzip_json(value: &Value) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        serde_json::to_writer(&mut encoder, value).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_round_trip_keeps_order_and_config() {
        let mut words = WordSet::new("HE", true).unwrap();
        words.insert("שלום (n)", None).unwrap();
        words.insert("אבא", Some(AttributeFlags::from_bits(1 << 31))).unwrap();
        words.insert("בית (n, sing)", None).unwrap();

        let mut buffer = Vec::new();
        words.write_to(&mut buffer).unwrap();
        let loaded = WordSet::read_from(buffer.as_slice()).unwrap();

        assert_eq!(loaded.language(), Some(ScrubLanguage::He));
        assert_eq!(loaded.words().collect::<Vec<_>>(), vec!["שלום", "אבא", "בית"]);
        assert_eq!(loaded, words);
    }

    #[test]
    fn test_unscrubbed_set_round_trips() {
        let mut words = WordSet::new("", false).unwrap();
        words.insert("hello, world!", None).unwrap();
        let mut buffer = Vec::new();
        words.write_to(&mut buffer).unwrap();
        let loaded = WordSet::read_from(buffer.as_slice()).unwrap();
        assert_eq!(loaded.language(), None);
        assert!(loaded.contains("hello, world!"));
    }

    #[test]
    fn test_plain_mapping_is_type_mismatch() {
        let data = gzip_json(&json!({"cat": 1, "dog": 1}));
        let err = WordSet::read_from(data.as_slice()).unwrap_err();
        assert!(matches!(err, WordSetError::ArchiveTypeMismatch { ref found, .. } if found == "plain mapping"));
        assert!(err.is_type_error());
    }

    #[test]
    fn test_other_format_is_type_mismatch() {
        let data = gzip_json(&json!({"format": "Dictionary", "version": 1}));
        assert!(WordSet::read_from(data.as_slice()).unwrap_err().is_type_error());
        let data = gzip_json(&json!(["cat", "dog"]));
        assert!(WordSet::read_from(data.as_slice()).unwrap_err().is_type_error());
    }

    #[test]
    fn test_unsupported_version() {
        let data = gzip_json(&json!({"format": "WordSet", "version": 9, "scrub": null, "words": {}}));
        assert!(matches!(
            WordSet::read_from(data.as_slice()),
            Err(WordSetError::InvalidDataFormat { .. })
        ));
    }

    #[test]
    fn test_not_gzip_is_io_error() {
        let err = WordSet::read_from(&b"not a gzip stream"[..]).unwrap_err();
        assert!(matches!(err, WordSetError::ParserError { .. } | WordSetError::Io { .. }));
    }

    #[test]
    fn test_raw_keys_survive_load_unmodified() {
        let data = gzip_json(&json!({
            "format": "WordSet",
            "version": 1,
            "scrub": "EN",
            "words": {"kept as is!": 5}
        }));
        let loaded = WordSet::read_from(data.as_slice()).unwrap();
        assert_eq!(loaded.get("kept as is!").unwrap().bits(), 5);
    }
}
