//! Cleanup of extracted word list lines.
//!
//! Extracted listings carry page furniture (copyright footers, running
//! headers, bullet lines, stray single characters). The cleaner drops those
//! and flags lines that do not look like `word (attributes)` entries. Flagged
//! lines are still written; fixing them is left to manual editing.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::utils::io_utils::{create_writer, open_reader};
use crate::{Result, WordSetError};

/// Rules for dropping lines, loadable from JSON.
///
/// # Examples
///
/// ```
/// use wordset::extract::LineFilterConfig;
///
/// let config: LineFilterConfig = serde_json::from_str(r#"{"skip_prefixes": ["Page "]}"#).unwrap();
/// assert_eq!(config.min_length, 2);
/// assert_eq!(config.skip_prefixes, vec!["Page ".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineFilterConfig {
    /// Lines with fewer characters than this are dropped.
    pub min_length: usize,
    /// Lines starting with any of these are dropped.
    pub skip_prefixes: Vec<String>,
}

impl Default for LineFilterConfig {
    fn default() -> Self {
        Self {
            min_length: 2,
            skip_prefixes: vec![
                "© Cambridge University Press".to_string(),
                "•".to_string(),
                "B1 Preliminary ".to_string(),
            ],
        }
    }
}

impl LineFilterConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = open_reader(path)?;
        Ok(serde_json::from_reader(reader)?)
    }

    fn keeps(&self, line: &str) -> bool {
        line.chars().count() >= self.min_length
            && !self.skip_prefixes.iter().any(|prefix| line.starts_with(prefix.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Line does not end with a parenthesized group.
    MissingAttributes,
    /// Line starts with a parenthesized group.
    LeadingAttributes,
}

/// A kept line that looks suspicious.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based line number in the input.
    pub line_no: usize,
    pub kind: WarningKind,
    pub line: String,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::MissingAttributes => write!(
                f,
                "Line {} does not end with text in parentheses: {}",
                self.line_no, self.line
            ),
            WarningKind::LeadingAttributes => write!(
                f,
                "Line {} starts with text in parentheses: {}",
                self.line_no, self.line
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub lines_read: usize,
    pub lines_written: usize,
    pub warnings: Vec<LineWarning>,
}

/// Filters `reader` into `writer` line by line.
pub fn clean_lines<R: BufRead, W: Write>(reader: R, writer: &mut W, config: &LineFilterConfig) -> Result<CleanSummary> {
    let mut summary = CleanSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        summary.lines_read = line_no;

        let line = line.trim();
        if !config.keeps(line) {
            continue;
        }

        if !line.ends_with(')') || !line.contains('(') {
            summary.warnings.push(LineWarning {
                line_no,
                kind: WarningKind::MissingAttributes,
                line: line.to_string(),
            });
        }
        if line.starts_with('(') {
            summary.warnings.push(LineWarning {
                line_no,
                kind: WarningKind::LeadingAttributes,
                line: line.to_string(),
            });
        }

        writeln!(writer, "{}", line)?;
        summary.lines_written += 1;
    }

    for warning in &summary.warnings {
        warn!("{}", warning);
    }
    Ok(summary)
}

/// Cleans the word list at `input_path` into `output_path`.
pub fn clean_word_list<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    config: &LineFilterConfig,
) -> Result<CleanSummary> {
    let input_path = input_path.as_ref();
    if input_path == output_path.as_ref() {
        return Err(WordSetError::invalid_data_format(format!(
            "cannot clean {} in place",
            input_path.display()
        )));
    }

    let reader = open_reader(input_path)?;
    let mut writer = create_writer(output_path.as_ref())?;
    let summary = clean_lines(reader, &mut writer, config)?;
    writer.flush()?;

    info!(
        "Cleaned {}: kept {} of {} lines, {} warnings",
        input_path.display(),
        summary.lines_written,
        summary.lines_read,
        summary.warnings.len()
    );
    Ok(summary)
}
