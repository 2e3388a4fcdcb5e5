//! The word set container.
//!
//! A [`WordSet`] maps words to their [`AttributeFlags`]. Words are inserted
//! either with an explicit flag value or with attributes embedded in the word
//! text, following the listing syntax
//!
//! ```text
//! <word> (<attrib1>, <attrib2>, ...) (<locale>)
//! ```
//!
//! where every parenthesized group is a comma separated list of registered
//! abbreviations. When the set is configured with a [`ScrubLanguage`], the
//! bare word has all characters outside that language's alphabet removed
//! before it is stored.

use indexmap::IndexMap;
use indexmap::map::Iter;
use log::trace;

use crate::attributes::{abbrev_to_flag, AttributeFlags};
use crate::wordset::scrub::ScrubLanguage;
use crate::{Result, WordSetError};

/// Opens an embedded attribute group.
const GROUP_OPEN: char = '(';
/// Separates abbreviations inside a group.
const ABBREV_DELIMITER: char = ',';

/// Insertion-ordered mapping from word to attribute flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordSet {
    words: IndexMap<String, AttributeFlags>,
    language: Option<ScrubLanguage>,
}

impl WordSet {
    /// Creates an empty set.
    ///
    /// With `scrub` enabled the language code must name a known scrub
    /// language; without it the code is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`WordSetError::UnknownLanguage`] if scrubbing is requested for
    /// an unknown language code.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::WordSet;
    ///
    /// let mut words = WordSet::new("EN", true)?;
    /// assert_eq!(words.insert("run (v, phrv)", None)?, "run");
    /// assert_eq!(words.get("run").unwrap().to_string(), "v, phrv");
    /// assert!(WordSet::new("XX", true).is_err());
    /// assert!(WordSet::new("XX", false).is_ok());
    /// # Ok::<(), wordset::WordSetError>(())
    /// ```
    pub fn new(lang_code: &str, scrub: bool) -> Result<Self> {
        let language = if scrub {
            Some(lang_code.parse::<ScrubLanguage>()?)
        } else {
            None
        };
        Ok(Self::with_language(language))
    }

    pub fn with_language(language: Option<ScrubLanguage>) -> Self {
        Self {
            words: IndexMap::new(),
            language,
        }
    }

    /// The scrub language, if scrubbing is enabled.
    pub fn language(&self) -> Option<ScrubLanguage> {
        self.language
    }

    /// Inserts a word and returns the key it was stored under.
    ///
    /// Attributes come from exactly one source: `attributes`, or groups
    /// embedded in `word`. Empty explicit flags count as no explicit value. A
    /// bare word without explicit attributes is stored with empty flags.
    /// Inserting an existing key replaces its flags.
    ///
    /// # Errors
    ///
    /// - [`WordSetError::InvalidWord`] if the word is empty after trimming or scrubbing
    /// - [`WordSetError::MixedAttributeSources`] if both sources are given
    /// - [`WordSetError::UnknownAbbreviation`] for an unregistered embedded abbreviation
    pub fn insert(&mut self, word: &str, attributes: Option<AttributeFlags>) -> Result<String> {
        let word = word.trim();
        if word.is_empty() {
            return Err(WordSetError::invalid_word("key must not be empty"));
        }

        let mut parts = word.split(GROUP_OPEN);
        let bare = parts.next().unwrap_or_default();
        let groups: Vec<&str> = parts.collect();

        let flags = match attributes.filter(|flags| !flags.is_empty()) {
            Some(_) if !groups.is_empty() => {
                return Err(WordSetError::mixed_attribute_sources(word));
            }
            Some(flags) => flags,
            None => parse_attribute_groups(&groups)?,
        };

        let key = self.normalize(bare);
        if key.is_empty() {
            return Err(WordSetError::invalid_word(format!(
                "nothing left of '{}' after removing attributes and scrubbing",
                word
            )));
        }

        trace!("insert '{}' as '{}' ({:#x})", word, key, flags.bits());
        self.words.insert(key.clone(), flags);
        Ok(key)
    }

    /// Stores a key as-is. Only for rebuilding a set from an archive, where
    /// keys were already normalized when first inserted.
    pub(crate) fn insert_raw(&mut self, key: String, flags: AttributeFlags) {
        self.words.insert(key, flags);
    }

    fn normalize(&self, bare: &str) -> String {
        let bare = bare.trim();
        match self.language {
            Some(language) => language.scrub(bare).trim().to_string(),
            None => bare.to_string(),
        }
    }

    pub fn get(&self, word: &str) -> Option<AttributeFlags> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates `(word, flags)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, String, AttributeFlags> {
        self.words.iter()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub(crate) fn entries(&self) -> &IndexMap<String, AttributeFlags> {
        &self.words
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = (&'a String, &'a AttributeFlags);
    type IntoIter = Iter<'a, String, AttributeFlags>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// ORs together every abbreviation of every group, e.g. `["v, phrv) ", "en_US)"]`.
fn parse_attribute_groups(groups: &[&str]) -> Result<AttributeFlags> {
    let mut flags = AttributeFlags::empty();
    for group in groups {
        for abbrev in group.split(ABBREV_DELIMITER) {
            let abbrev = abbrev.trim_matches(|c: char| c == ')' || c.is_whitespace());
            flags |= abbrev_to_flag(abbrev)?;
        }
    }
    Ok(flags)
}
