//! Grammatical and locale attributes for words.
//!
//! Each registered abbreviation owns one bit of a 32-bit flag word, so a word
//! can carry several tags at once (e.g. noun and plural) as a single integer.

pub mod flags;
pub mod registry;

pub use flags::AttributeFlags;
pub use registry::{
    abbrev_to_flag, flag_to_text, is_known_abbrev, lookup, registry, canonical_abbrev,
    Attribute, ABBREVIATIONS, ABBREV_SEPARATOR, MAX_ATTRIBUTES,
};
