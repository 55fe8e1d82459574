//! Preset operator families
//!
//! Four closed families, united under [`Preset`]. A preset is meaningful
//! only paired with a property; whether a pair is valid follows from the
//! property's value kind via [`Preset::applies_to`].

use sq_properties::PropertyKind;
use std::fmt;

/// Equality and membership, valid for every property kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericPreset {
    EqualTo,
    NotEqualTo,
    AnyIn,
    NotAnyIn,
}

/// Regex matching over string-kinded properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringPreset {
    MatchesRegex,
}

/// Numeric ordering over integer-kinded properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerPreset {
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
}

/// Relative-age comparison over datetime-kinded properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimePreset {
    OlderThan,
    OlderThanOrEqualTo,
    YoungerThan,
    YoungerThanOrEqualTo,
}

/// A preset from exactly one of the four families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Generic(GenericPreset),
    String(StringPreset),
    Integer(IntegerPreset),
    DateTime(DateTimePreset),
}

impl Preset {
    /// Parse from the spelled-out name or the comparison symbol
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "equal_to" | "==" => Some(GenericPreset::EqualTo.into()),
            "not_equal_to" | "!=" => Some(GenericPreset::NotEqualTo.into()),
            "any_in" | "in" => Some(GenericPreset::AnyIn.into()),
            "not_any_in" | "not_in" => Some(GenericPreset::NotAnyIn.into()),
            "matches_regex" | "regex" => Some(StringPreset::MatchesRegex.into()),
            "less_than" | "<" => Some(IntegerPreset::LessThan.into()),
            "less_than_or_equal_to" | "<=" => Some(IntegerPreset::LessThanOrEqualTo.into()),
            "greater_than" | ">" => Some(IntegerPreset::GreaterThan.into()),
            "greater_than_or_equal_to" | ">=" => {
                Some(IntegerPreset::GreaterThanOrEqualTo.into())
            }
            "older_than" => Some(DateTimePreset::OlderThan.into()),
            "older_than_or_equal_to" => Some(DateTimePreset::OlderThanOrEqualTo.into()),
            "younger_than" => Some(DateTimePreset::YoungerThan.into()),
            "younger_than_or_equal_to" => Some(DateTimePreset::YoungerThanOrEqualTo.into()),
            _ => None,
        }
    }

    /// The spelled-out preset name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic(GenericPreset::EqualTo) => "equal_to",
            Self::Generic(GenericPreset::NotEqualTo) => "not_equal_to",
            Self::Generic(GenericPreset::AnyIn) => "any_in",
            Self::Generic(GenericPreset::NotAnyIn) => "not_any_in",
            Self::String(StringPreset::MatchesRegex) => "matches_regex",
            Self::Integer(IntegerPreset::LessThan) => "less_than",
            Self::Integer(IntegerPreset::LessThanOrEqualTo) => "less_than_or_equal_to",
            Self::Integer(IntegerPreset::GreaterThan) => "greater_than",
            Self::Integer(IntegerPreset::GreaterThanOrEqualTo) => "greater_than_or_equal_to",
            Self::DateTime(DateTimePreset::OlderThan) => "older_than",
            Self::DateTime(DateTimePreset::OlderThanOrEqualTo) => "older_than_or_equal_to",
            Self::DateTime(DateTimePreset::YoungerThan) => "younger_than",
            Self::DateTime(DateTimePreset::YoungerThanOrEqualTo) => "younger_than_or_equal_to",
        }
    }

    /// Whether this preset is valid for a property of the given kind
    pub fn applies_to(&self, kind: PropertyKind) -> bool {
        match self {
            Self::Generic(_) => true,
            Self::String(_) => kind == PropertyKind::String,
            Self::Integer(_) => kind == PropertyKind::Integer,
            Self::DateTime(_) => kind == PropertyKind::DateTime,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GenericPreset> for Preset {
    fn from(p: GenericPreset) -> Self {
        Self::Generic(p)
    }
}

impl From<StringPreset> for Preset {
    fn from(p: StringPreset) -> Self {
        Self::String(p)
    }
}

impl From<IntegerPreset> for Preset {
    fn from(p: IntegerPreset) -> Self {
        Self::Integer(p)
    }
}

impl From<DateTimePreset> for Preset {
    fn from(p: DateTimePreset) -> Self {
        Self::DateTime(p)
    }
}
