//! Per-language character scrubbing for word keys.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Result, WordSetError};

static EN_SCRUB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());
static HE_SCRUB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^א-ת\s\-]").unwrap());

/// Languages with a scrub pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrubLanguage {
    /// Latin letters and whitespace.
    #[serde(rename = "EN")]
    En,
    /// Hebrew letters, whitespace and hyphen.
    #[serde(rename = "HE")]
    He,
}

impl ScrubLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            ScrubLanguage::En => "EN",
            ScrubLanguage::He => "HE",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            ScrubLanguage::En => &EN_SCRUB_RE,
            ScrubLanguage::He => &HE_SCRUB_RE,
        }
    }

    /// Removes every character outside the language alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::ScrubLanguage;
    ///
    /// assert_eq!(ScrubLanguage::En.scrub("don't stop!"), "dont stop");
    /// assert_eq!(ScrubLanguage::He.scrub("בית-ספר 2"), "בית-ספר ");
    /// ```
    pub fn scrub(&self, word: &str) -> String {
        self.pattern().replace_all(word, "").into_owned()
    }
}

/// Parses a language code, ignoring ASCII case.
impl FromStr for ScrubLanguage {
    type Err = WordSetError;

    fn from_str(code: &str) -> Result<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "EN" => Ok(ScrubLanguage::En),
            "HE" => Ok(ScrubLanguage::He),
            _ => Err(WordSetError::unknown_language(code)),
        }
    }
}

impl fmt::Display for ScrubLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
