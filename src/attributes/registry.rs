//! The fixed registry of word attribute abbreviations.
//!
//! Abbreviations follow the Cambridge vocabulary listings; locale codes use
//! IETF BCP 47 style identifiers. The table holds exactly 32 entries so that
//! any combination of attributes fits a `u32`. Entry `i` owns bit `i`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::attributes::flags::AttributeFlags;
use crate::{Result, WordSetError};

/// Number of attribute slots, one per bit of the flag word.
pub const MAX_ATTRIBUTES: usize = 32;

/// Separator used in place of spaces inside abbreviations.
pub const ABBREV_SEPARATOR: &str = "_";

/// Ordered `(abbreviation, description)` table.
pub static ABBREVIATIONS: [(&str, &str); MAX_ATTRIBUTES] = [
    ("n", "noun"),
    ("v", "verb"),
    ("adj", "adjective"),
    ("adv", "adverb"),
    ("av", "auxiliary verb"),
    ("conj", "conjunction"),
    ("det", "determiner"),
    ("exclam", "exclamation"),
    ("phrv", "phrasal verb"),
    ("pron", "pronoun"),
    ("prep", "preposition"),
    ("prep_phr", "prepositional phrase"),
    ("pl", "plural"),
    ("sing", "singular"),
    ("pn", "proper noun"),
    ("mv", "modal verb"),
    ("r14", "reserved"),
    ("r13", "reserved"),
    ("r12", "reserved"),
    ("r11", "reserved"),
    ("r10", "reserved"),
    ("r9", "reserved"),
    ("r8", "reserved"),
    ("r7", "reserved"),
    ("r6", "reserved"),
    ("r5", "reserved"),
    ("r4", "reserved"),
    ("r3", "reserved"),
    ("r2", "reserved"),
    ("r1", "reserved"),
    ("en_US", "American/US English"),
    ("en_GB", "British English"),
];

static BIT_BY_ABBREV: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    ABBREVIATIONS
        .iter()
        .enumerate()
        .map(|(bit, (abbrev, _))| (*abbrev, bit as u32))
        .collect()
});

/// One registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub abbrev: &'static str,
    pub description: &'static str,
    pub bit: u32,
}

impl Attribute {
    /// The single-bit flag owned by this attribute.
    pub fn flag(&self) -> AttributeFlags {
        AttributeFlags::from_bits(1 << self.bit)
    }
}

/// Iterates the registry in bit order.
pub fn registry() -> impl Iterator<Item = Attribute> {
    ABBREVIATIONS
        .iter()
        .enumerate()
        .map(|(bit, &(abbrev, description))| Attribute {
            abbrev,
            description,
            bit: bit as u32,
        })
}

/// Replaces spaces with the canonical separator, so `"prep phr"` reads as `"prep_phr"`.
pub fn canonical_abbrev(abbrev: &str) -> String {
    abbrev.replace(' ', ABBREV_SEPARATOR)
}

/// Looks up a registry entry by abbreviation, after canonicalizing spaces.
pub fn lookup(abbrev: &str) -> Option<Attribute> {
    let canonical = canonical_abbrev(abbrev);
    BIT_BY_ABBREV.get(canonical.as_str()).map(|&bit| {
        let (abbrev, description) = ABBREVIATIONS[bit as usize];
        Attribute { abbrev, description, bit }
    })
}

/// Checks whether an abbreviation is registered.
pub fn is_known_abbrev(abbrev: &str) -> bool {
    lookup(abbrev).is_some()
}

/// Returns the single-bit flag assigned to an abbreviation.
///
/// Spaces are accepted in place of `_`.
///
/// # Errors
///
/// Returns [`WordSetError::UnknownAbbreviation`] if the abbreviation is not registered.
///
/// # Examples
///
/// ```
/// use wordset::attributes::{abbrev_to_flag, flag_to_text};
///
/// let flag = abbrev_to_flag("prep phr")?;
/// assert_eq!(flag_to_text(flag)?, "prepositional phrase");
/// assert!(abbrev_to_flag("xyz").is_err());
/// # Ok::<(), wordset::WordSetError>(())
/// ```
pub fn abbrev_to_flag(abbrev: &str) -> Result<AttributeFlags> {
    lookup(abbrev)
        .map(|attribute| attribute.flag())
        .ok_or_else(|| WordSetError::unknown_abbreviation(canonical_abbrev(abbrev)))
}

/// Returns the description of a single attribute flag.
///
/// # Errors
///
/// Returns [`WordSetError::InvalidFlag`] unless exactly one bit is set.
pub fn flag_to_text(flag: AttributeFlags) -> Result<&'static str> {
    let bits = flag.bits();
    if bits.count_ones() != 1 {
        return Err(WordSetError::invalid_flag(bits));
    }
    Ok(ABBREVIATIONS[bits.trailing_zeros() as usize].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_abbrev_round_trips_to_its_description() {
        for (abbrev, description) in ABBREVIATIONS.iter() {
            let flag = abbrev_to_flag(abbrev).unwrap();
            assert_eq!(flag_to_text(flag).unwrap(), *description);
        }
    }

    #[test]
    fn test_each_abbrev_owns_one_distinct_bit() {
        let mut seen = 0u32;
        for attribute in registry() {
            let bits = attribute.flag().bits();
            assert_eq!(bits.count_ones(), 1, "{}", attribute.abbrev);
            assert_eq!(seen & bits, 0, "{} collides", attribute.abbrev);
            seen |= bits;
        }
        assert_eq!(seen, u32::MAX);
    }

    #[test]
    fn test_abbrevs_are_unique() {
        assert_eq!(BIT_BY_ABBREV.len(), MAX_ATTRIBUTES);
    }

    #[test]
    fn test_space_is_canonicalized() {
        assert_eq!(abbrev_to_flag("prep phr").unwrap(), abbrev_to_flag("prep_phr").unwrap());
        assert_eq!(abbrev_to_flag("en US").unwrap().bits(), 1 << 30);
    }

    #[test]
    fn test_unknown_abbrev() {
        let err = abbrev_to_flag("noun").unwrap_err();
        assert!(matches!(err, WordSetError::UnknownAbbreviation { ref abbrev, .. } if abbrev == "noun"));
        assert!(err.is_validation());
        assert!(abbrev_to_flag("").is_err());
        assert!(!is_known_abbrev("N"));
    }

    #[test]
    fn test_flag_to_text_rejects_non_single_flags() {
        assert!(flag_to_text(AttributeFlags::empty()).unwrap_err().is_type_error());
        let noun_verb = abbrev_to_flag("n").unwrap() | abbrev_to_flag("v").unwrap();
        assert!(matches!(
            flag_to_text(noun_verb),
            Err(WordSetError::InvalidFlag { value: 3, .. })
        ));
    }

    #[test]
    fn test_locale_bits() {
        assert_eq!(flag_to_text(AttributeFlags::from_bits(1 << 31)).unwrap(), "British English");
        assert_eq!(lookup("en_GB").unwrap().bit, 31);
    }
}
