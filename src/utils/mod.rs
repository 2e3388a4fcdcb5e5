// Utility functions and helpers
//
// This module provides general-purpose I/O helpers shared by the extractor,
// the text loader and the archive code.

pub mod io_utils;

pub use io_utils::{archive_path_for, bytes_from_file, create_writer, open_reader, skip_utf8_bom, ARCHIVE_EXTENSION};
