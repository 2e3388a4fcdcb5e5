//! Building a [`WordSet`] from a plain text word list.
//!
//! The text format is:
//!
//! ```text
//! n: noun
//! v: verb
//! phrv: phrasal verb
//!
//! cat (n)
//! run (v, phrv)
//! colour (n) (en_GB)
//! ```
//!
//! Up to the first blank line, lines holding `:` are `abbrev: description`
//! legend entries and every other line is a word. Every legend abbreviation
//! must be registered. After the first blank line words follow, one per line,
//! until the end of the file or the next blank line.

use std::io::BufRead;
use std::path::Path;

use log::{debug, error, info};

use crate::attributes::{canonical_abbrev, is_known_abbrev};
use crate::utils::io_utils::{open_reader, skip_utf8_bom};
use crate::wordset::word_set::WordSet;
use crate::{Result, WordSetError};

const LEGEND_SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Legend,
    Words,
}

impl WordSet {
    /// Loads a word list file with scrubbing enabled for `lang_code`.
    ///
    /// # Errors
    ///
    /// Fails on an unknown language code, an unregistered legend abbreviation,
    /// any word line rejected by [`WordSet::insert`], or I/O errors.
    pub fn from_text_file<P: AsRef<Path>>(lang_code: &str, path: P) -> Result<Self> {
        Self::new(lang_code, true)?.extend_from_text_file(path)
    }

    /// Same as [`WordSet::from_text_file`] over any buffered reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::WordSet;
    ///
    /// let text = "n: noun\nv: verb\n\ncat (n)\nrun (v)\n";
    /// let words = WordSet::from_reader("EN", text.as_bytes())?;
    /// assert_eq!(words.len(), 2);
    /// # Ok::<(), wordset::WordSetError>(())
    /// ```
    pub fn from_reader<R: BufRead>(lang_code: &str, reader: R) -> Result<Self> {
        Self::new(lang_code, true)?.extend_from_reader(reader)
    }

    /// Adds the words of a word list file to this set, keeping its scrub configuration.
    pub fn extend_from_text_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = self.extend_from_reader(open_reader(path)?)?;
        info!("Loaded {} words from {}", words.len(), path.display());
        Ok(words)
    }

    /// Adds the words of a word list read from `reader` to this set.
    pub fn extend_from_reader<R: BufRead>(mut self, mut reader: R) -> Result<Self> {
        let mut phase = Phase::Legend;
        let mut line_buffer = String::new();
        let mut line_no = 0usize;

        loop {
            line_buffer.clear();
            if reader.read_line(&mut line_buffer)? == 0 {
                break;
            }
            line_no += 1;

            let mut line = line_buffer.as_str();
            if line_no == 1 {
                line = skip_utf8_bom(line);
            }
            let line = line.trim();

            match phase {
                Phase::Legend if line.is_empty() => phase = Phase::Words,
                Phase::Legend => match line.split_once(LEGEND_SEPARATOR) {
                    Some((abbrev, description)) => {
                        let abbrev = canonical_abbrev(abbrev.trim());
                        if !is_known_abbrev(&abbrev) {
                            error!("line {}: unknown attribute abbreviation in '{}'", line_no, line);
                            return Err(WordSetError::unknown_abbreviation(abbrev));
                        }
                        debug!("legend {} = {}", abbrev, description.trim());
                    }
                    None => self.insert_line(line, line_no)?,
                },
                Phase::Words if line.is_empty() => break,
                Phase::Words => self.insert_line(line, line_no)?,
            }
        }
        Ok(self)
    }

    fn insert_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        self.insert(line, None).map(|_| ()).map_err(|e| {
            error!("line {}: {}", line_no, e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::abbrev_to_flag;

    #[test]
    fn test_legend_then_words() {
        let text = "n: noun\nphrv : phrasal verb\nprep phr: prepositional phrase\n\ncat (n)\nrun (v, phrv)\nby the way (prep_phr)\n";
        let words = WordSet::from_reader("EN", text.as_bytes()).unwrap();
        assert_eq!(words.words().collect::<Vec<_>>(), vec!["cat", "run", "by the way"]);
        assert_eq!(
            words.get("run"),
            Some(abbrev_to_flag("v").unwrap() | abbrev_to_flag("phrv").unwrap())
        );
    }

    #[test]
    fn test_without_legend() {
        let text = "\u{FEFF}apple (n)\nbanana (n)\n";
        let words = WordSet::from_reader("EN", text.as_bytes()).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("apple"));
    }

    #[test]
    fn test_blank_line_ends_word_list() {
        let text = "n: noun\n\ncat (n)\n\ndog (n)\n";
        let words = WordSet::from_reader("EN", text.as_bytes()).unwrap();
        assert_eq!(words.len(), 1);
        assert!(!words.contains("dog"));
    }

    #[test]
    fn test_words_before_first_blank_line_then_second_block() {
        let words = WordSet::from_reader("EN", "cat\n\ndog\n".as_bytes()).unwrap();
        assert_eq!(words.words().collect::<Vec<_>>(), vec!["cat", "dog"]);

        let text = "apple (n)\nbanana (n)\n\ncherry (n)\n\ndate (n)\n";
        let words = WordSet::from_reader("EN", text.as_bytes()).unwrap();
        assert_eq!(words.words().collect::<Vec<_>>(), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_unknown_legend_abbrev_fails_load() {
        let text = "n: noun\nzz: unknown\n\ncat (n)\n";
        let err = WordSet::from_reader("EN", text.as_bytes()).unwrap_err();
        assert!(matches!(err, WordSetError::UnknownAbbreviation { ref abbrev, .. } if abbrev == "zz"));
    }

    #[test]
    fn test_bad_word_line_fails_load() {
        let text = "cat (n)\nrun (x)\n";
        assert!(WordSet::from_reader("EN", text.as_bytes()).is_err());
    }

    #[test]
    fn test_extend_unscrubbed_set() {
        let words = WordSet::new("EN", false)
            .unwrap()
            .extend_from_reader("o'clock (n)\n".as_bytes())
            .unwrap();
        assert!(words.contains("o'clock"));
    }

    #[test]
    fn test_unknown_language() {
        assert!(matches!(
            WordSet::from_reader("ZZ", "cat".as_bytes()),
            Err(WordSetError::UnknownLanguage { .. })
        ));
    }
}
