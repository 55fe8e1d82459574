//! Property values
//!
//! `PropertyValue` is the single value vocabulary of the engine: property
//! extraction produces it, predicates compare it, grouping keys on it, and
//! projection renders it. The `NotFound` variant is the sentinel for data a
//! resource does not carry; extraction is total and never panics.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// The literal rendered for properties a resource does not carry
pub const NOT_FOUND: &str = "Not Found";

/// A value extracted from a resource property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    /// Boolean flag (e.g. a flavor's public visibility)
    Bool(bool),
    /// Integer quantity (e.g. RAM in megabytes)
    Int(i64),
    /// UTC timestamp (e.g. a server's creation date)
    DateTime(DateTime<Utc>),
    /// Free-form string (ids, names, statuses)
    String(String),
    /// The resource does not carry this property
    NotFound,
}

impl PropertyValue {
    /// Variant rank used to give values of different kinds a total order
    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) => 1,
            Self::DateTime(_) => 2,
            Self::String(_) => 3,
            Self::NotFound => 4,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::String(s) => write!(f, "{}", s),
            Self::NotFound => write!(f, "{}", NOT_FOUND),
        }
    }
}

/// Total order: same-kind values compare naturally, mixed kinds compare by
/// variant rank, `NotFound` sorts last. Required for stable multi-key
/// sorting.
impl Ord for PropertyValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::DateTime(a), Self::DateTime(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for PropertyValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::DateTime(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Self::String(s) => serializer.serialize_str(s),
            Self::NotFound => serializer.serialize_str(NOT_FOUND),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

/// `None` becomes the `NotFound` sentinel, which keeps extractors total
impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_not_found_renders_literal() {
        assert_eq!(PropertyValue::NotFound.to_string(), "Not Found");
        assert!(PropertyValue::NotFound.is_not_found());
    }

    #[test]
    fn test_option_conversion() {
        let some: PropertyValue = Some("up").into();
        assert_eq!(some, PropertyValue::String("up".to_string()));

        let none: PropertyValue = Option::<i64>::None.into();
        assert!(none.is_not_found());
    }

    #[test]
    fn test_same_kind_ordering() {
        assert!(PropertyValue::Int(1) < PropertyValue::Int(2));
        assert!(PropertyValue::String("a".into()) < PropertyValue::String("b".into()));

        let older = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(PropertyValue::DateTime(older) < PropertyValue::DateTime(newer));
    }

    #[test]
    fn test_not_found_sorts_last() {
        let mut values = vec![
            PropertyValue::NotFound,
            PropertyValue::Int(3),
            PropertyValue::String("x".into()),
        ];
        values.sort();
        assert!(values[2].is_not_found());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&PropertyValue::Int(8)).unwrap(),
            "8"
        );
        assert_eq!(
            serde_json::to_string(&PropertyValue::NotFound).unwrap(),
            "\"Not Found\""
        );
    }
}
