//! Server-side pushdown
//!
//! Some (preset, property) pairs have a native equivalent in the listing
//! API: equality on a name becomes `{"name": value}`, equality on the id
//! becomes a direct get. This handler produces those filter sets. When no
//! mapping exists the caller falls back to the client-side predicate —
//! never to silently dropping the filter.

use crate::args::PresetArgs;
use crate::preset::{GenericPreset, Preset};
use sq_cloud::{FilterParams, ServerFilters};
use sq_core::PropertyValue;
use sq_properties::{
    FlavorProperty, ProjectProperty, ResourceProperty, ServerProperty, UserProperty,
};
use std::marker::PhantomData;

/// Properties that may carry a native filter key in the listing API
pub trait PushdownProperty: ResourceProperty {
    /// The native filter key for equality on this property, if the remote
    /// accepts one
    fn filter_key(self) -> Option<&'static str> {
        None
    }
}

impl PushdownProperty for ServerProperty {
    fn filter_key(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("name"),
            Self::Status => Some("status"),
            Self::UserId => Some("user_id"),
            Self::ProjectId => Some("project_id"),
            Self::FlavorId => Some("flavor"),
            _ => None,
        }
    }
}

impl PushdownProperty for FlavorProperty {
    fn filter_key(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("name"),
            Self::IsPublic => Some("is_public"),
            _ => None,
        }
    }
}

impl PushdownProperty for ProjectProperty {
    fn filter_key(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("name"),
            Self::DomainId => Some("domain_id"),
            Self::Enabled => Some("enabled"),
            _ => None,
        }
    }
}

impl PushdownProperty for UserProperty {
    fn filter_key(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("name"),
            Self::DomainId => Some("domain_id"),
            _ => None,
        }
    }
}

/// Pushdown filter factory for one resource type
pub struct ServerSideHandler<P>(PhantomData<P>);

impl<P: PushdownProperty> ServerSideHandler<P> {
    /// Whether the (preset, property) pair has a native equivalent
    pub fn supports(preset: Preset, property: P) -> bool {
        let pushable = property.is_id() || property.filter_key().is_some();
        matches!(
            preset,
            Preset::Generic(GenericPreset::EqualTo) | Preset::Generic(GenericPreset::AnyIn)
        ) && pushable
    }

    /// Build the native filter sets for this clause, one listing call per
    /// set. `None` means no mapping exists and filtering stays client-side.
    ///
    /// Argument shape is validated by the client-side build, which always
    /// runs first; an unexpected shape here simply disables pushdown.
    pub fn build_filters(
        preset: Preset,
        property: P,
        args: &PresetArgs,
    ) -> Option<Vec<ServerFilters>> {
        if !Self::supports(preset, property) {
            return None;
        }

        let values: Vec<&PropertyValue> = match (preset, args) {
            (Preset::Generic(GenericPreset::EqualTo), PresetArgs::Value(v)) => vec![v],
            (Preset::Generic(GenericPreset::AnyIn), PresetArgs::Values(vs)) => {
                vs.iter().collect()
            }
            _ => return None,
        };

        values
            .into_iter()
            .map(|value| Self::filter_for(property, value))
            .collect()
    }

    /// One filter set for one concrete value
    fn filter_for(property: P, value: &PropertyValue) -> Option<ServerFilters> {
        if value.is_not_found() {
            // Matching "absent" cannot be expressed natively
            return None;
        }
        if property.is_id() {
            return value
                .as_str()
                .map(|id| ServerFilters::ById(id.to_string()));
        }
        let key = property.filter_key()?;
        let json = match value {
            PropertyValue::String(s) => serde_json::Value::from(s.as_str()),
            PropertyValue::Int(i) => serde_json::Value::from(*i),
            PropertyValue::Bool(b) => serde_json::Value::from(*b),
            PropertyValue::DateTime(dt) => serde_json::Value::from(dt.to_rfc3339()),
            PropertyValue::NotFound => return None,
        };
        Some(ServerFilters::Params(FilterParams::new().with(key, json)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_to_on_keyed_property() {
        let filters = ServerSideHandler::<ServerProperty>::build_filters(
            GenericPreset::EqualTo.into(),
            ServerProperty::UserId,
            &PresetArgs::Value("u-7".into()),
        )
        .unwrap();

        assert_eq!(filters.len(), 1);
        match &filters[0] {
            ServerFilters::Params(params) => {
                assert_eq!(params.get("user_id"), Some(&serde_json::Value::from("u-7")));
            }
            other => panic!("expected params, got {:?}", other),
        }
    }

    #[test]
    fn test_equal_to_on_id_is_direct_get() {
        let filters = ServerSideHandler::<ServerProperty>::build_filters(
            GenericPreset::EqualTo.into(),
            ServerProperty::Id,
            &PresetArgs::Value("s-42".into()),
        )
        .unwrap();

        assert_eq!(filters, vec![ServerFilters::ById("s-42".to_string())]);
    }

    #[test]
    fn test_any_in_expands_to_one_set_per_value() {
        let filters = ServerSideHandler::<ServerProperty>::build_filters(
            GenericPreset::AnyIn.into(),
            ServerProperty::Status,
            &PresetArgs::Values(vec!["ACTIVE".into(), "SHUTOFF".into(), "ERROR".into()]),
        )
        .unwrap();

        assert_eq!(filters.len(), 3);
        assert!(filters.iter().all(|f| matches!(f, ServerFilters::Params(_))));
    }

    #[test]
    fn test_unkeyed_property_has_no_pushdown() {
        let filters = ServerSideHandler::<ServerProperty>::build_filters(
            GenericPreset::EqualTo.into(),
            ServerProperty::Description,
            &PresetArgs::Value("anything".into()),
        );
        assert!(filters.is_none());
    }

    #[test]
    fn test_not_equal_has_no_pushdown() {
        let filters = ServerSideHandler::<ServerProperty>::build_filters(
            GenericPreset::NotEqualTo.into(),
            ServerProperty::Status,
            &PresetArgs::Value("ACTIVE".into()),
        );
        assert!(filters.is_none());
    }

    #[test]
    fn test_not_found_value_disables_pushdown() {
        let filters = ServerSideHandler::<ServerProperty>::build_filters(
            GenericPreset::EqualTo.into(),
            ServerProperty::Status,
            &PresetArgs::Value(PropertyValue::NotFound),
        );
        assert!(filters.is_none());
    }
}
