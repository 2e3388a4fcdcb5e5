use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::attributes::registry::ABBREVIATIONS;

/// A combination of attribute bits.
///
/// Serialized as the plain integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeFlags(u32);

impl AttributeFlags {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every 32-bit value is a valid combination since all bits are registered.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn contains(&self, other: AttributeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: AttributeFlags) {
        self.0 |= other.0;
    }

    /// Iterates the single-bit flags set in this value, lowest bit first.
    pub fn iter(&self) -> impl Iterator<Item = AttributeFlags> + use<> {
        let bits = self.0;
        (0..u32::BITS)
            .map(|bit| 1u32 << bit)
            .filter(move |mask| bits & mask != 0)
            .map(AttributeFlags)
    }

    pub fn abbreviations(&self) -> Vec<&'static str> {
        self.iter()
            .map(|flag| ABBREVIATIONS[flag.0.trailing_zeros() as usize].0)
            .collect()
    }

    pub fn descriptions(&self) -> Vec<&'static str> {
        self.iter()
            .map(|flag| ABBREVIATIONS[flag.0.trailing_zeros() as usize].1)
            .collect()
    }
}

impl From<u32> for AttributeFlags {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<AttributeFlags> for u32 {
    fn from(flags: AttributeFlags) -> Self {
        flags.0
    }
}

impl BitOr for AttributeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AttributeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for AttributeFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Formats as comma separated abbreviations, e.g. `v, phrv`.
impl fmt::Display for AttributeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviations().join(", "))
    }
}
