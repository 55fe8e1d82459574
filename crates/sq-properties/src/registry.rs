//! Property registry
//!
//! Uniform access to a resource type's property table: name/alias
//! resolution, total extraction, and the pagination-marker lookup.

use crate::property::ResourceProperty;
use sq_core::{PropertyValue, QueryError, QueryResult};
use std::marker::PhantomData;

/// Registry over one resource type's property enum
pub struct PropertyRegistry<P>(PhantomData<P>);

impl<P: ResourceProperty> PropertyRegistry<P> {
    /// Resolve a property by canonical name or alias, case-insensitively
    pub fn resolve(name: &str) -> QueryResult<P> {
        let wanted = name.trim().to_lowercase();
        for prop in P::ALL {
            if prop.name().to_lowercase() == wanted {
                return Ok(*prop);
            }
            if prop
                .aliases()
                .iter()
                .any(|alias| alias.to_lowercase() == wanted)
            {
                return Ok(*prop);
            }
        }
        Err(QueryError::UnknownProperty {
            resource: P::RESOURCE_NAME,
            name: name.to_string(),
        })
    }

    /// Extract a property value. Never fails: data the resource does not
    /// carry comes back as the `NotFound` sentinel.
    pub fn extract(resource: &P::Resource, property: P) -> PropertyValue {
        property.extract(resource)
    }

    /// The pagination-marker property of this resource type
    pub fn marker() -> QueryResult<P> {
        P::marker().ok_or_else(|| {
            QueryError::Usage(format!(
                "resource type {} defines no pagination marker",
                P::RESOURCE_NAME
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerProperty;

    #[test]
    fn test_resolve_canonical_name() {
        let prop = PropertyRegistry::<ServerProperty>::resolve("status").unwrap();
        assert_eq!(prop, ServerProperty::Status);
    }

    #[test]
    fn test_resolve_alias_case_insensitive() {
        let prop = PropertyRegistry::<ServerProperty>::resolve("VM_NAME").unwrap();
        assert_eq!(prop, ServerProperty::Name);
    }

    #[test]
    fn test_resolve_unknown_property() {
        let err = PropertyRegistry::<ServerProperty>::resolve("colour").unwrap_err();
        assert!(matches!(err, QueryError::UnknownProperty { resource: "server", .. }));
    }

    #[test]
    fn test_marker() {
        let marker = PropertyRegistry::<ServerProperty>::marker().unwrap();
        assert_eq!(marker, ServerProperty::Id);
    }
}
