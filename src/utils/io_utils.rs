//! I/O utility functions shared by the word list tools.
//!
//! This module provides helper functions for:
//! - Opening buffered readers and writers on file paths
//! - UTF-8 BOM handling for text sources
//! - Deriving archive paths from source paths
//!
//! # Examples
//!
//! ```
//! use std::path::{Path, PathBuf};
//! use wordset::utils::io_utils::{archive_path_for, skip_utf8_bom};
//!
//! assert_eq!(archive_path_for("lists/flyers.txt"), PathBuf::from("lists/flyers.words.gz"));
//! assert_eq!(skip_utf8_bom("\u{FEFF}apple"), "apple");
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

use crate::Result;

/// Extension given to word set archives.
pub const ARCHIVE_EXTENSION: &str = "words.gz";

/// Strips a leading UTF-8 BOM, which appears as `\u{FEFF}` once decoded.
pub fn skip_utf8_bom(line: &str) -> &str {
    line.strip_prefix('\u{FEFF}').unwrap_or(line)
}

/// Opens a file path as a buffered reader.
pub fn open_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Creates (or truncates) a file path and returns a buffered writer.
pub fn create_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

/// Reads all bytes from a file path.
pub fn bytes_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let mut reader = open_reader(path)?;
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Archive path for a word list source: same directory and stem, `.words.gz` extension.
pub fn archive_path_for<P: AsRef<Path>>(source: P) -> PathBuf {
    source.as_ref().with_extension(ARCHIVE_EXTENSION)
}
