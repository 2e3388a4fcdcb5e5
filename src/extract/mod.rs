//! Getting raw word lists out of source documents.
//!
//! - [`pdf`]: best-effort PDF to text line extraction
//! - [`cleaner`]: dropping page furniture from extracted lines

pub mod cleaner;
pub mod pdf;

pub use cleaner::{clean_lines, clean_word_list, CleanSummary, LineFilterConfig, LineWarning, WarningKind};
pub use pdf::{extract_pdf_to_text, try_extract_pdf_to_text, write_page_lines, ExtractSummary};
