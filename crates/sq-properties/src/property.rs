//! The resource-property contract
//!
//! A property is one readable attribute of a resource kind. Implementations
//! are closed enums, so the set of valid properties per resource type is a
//! compile-time fact and (preset, property) support tables reduce to
//! exhaustive matches.

use sq_core::PropertyValue;
use std::fmt;
use std::hash::Hash;

/// Value kind of a property, used to decide which preset families apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Free-form strings: ids, names, statuses
    String,
    /// Integer quantities
    Integer,
    /// Boolean flags
    Boolean,
    /// UTC timestamps
    DateTime,
}

/// One property of a resource kind
pub trait ResourceProperty:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Sized + Send + Sync + 'static
{
    /// The raw resource this property reads from
    type Resource: Clone + PartialEq + Send + Sync + 'static;

    /// Resource type name used in error messages
    const RESOURCE_NAME: &'static str;

    /// Every property of this resource type
    const ALL: &'static [Self];

    /// Canonical property name
    fn name(self) -> &'static str;

    /// Alternative names accepted by `resolve`, matched case-insensitively
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Value kind, used for preset applicability
    fn kind(self) -> PropertyKind;

    /// Read this property from a resource. Total: data the resource does
    /// not carry yields `PropertyValue::NotFound`, never a panic.
    fn extract(self, resource: &Self::Resource) -> PropertyValue;

    /// The property used as the pagination cursor, if the resource type
    /// designates one
    fn marker() -> Option<Self> {
        None
    }

    /// Whether this property is the resource's unique identifier (enables
    /// the get-by-id pushdown fast path)
    fn is_id(self) -> bool {
        false
    }
}
