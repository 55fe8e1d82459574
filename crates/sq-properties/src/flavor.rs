//! Flavor properties

use crate::property::{PropertyKind, ResourceProperty};
use sq_core::PropertyValue;
use sq_models::Flavor;
use std::fmt;

/// Queryable properties of a flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlavorProperty {
    Id,
    Name,
    Vcpus,
    RamMb,
    DiskGb,
    SwapMb,
    IsPublic,
    Description,
}

impl ResourceProperty for FlavorProperty {
    type Resource = Flavor;

    const RESOURCE_NAME: &'static str = "flavor";

    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Vcpus,
        Self::RamMb,
        Self::DiskGb,
        Self::SwapMb,
        Self::IsPublic,
        Self::Description,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Vcpus => "vcpus",
            Self::RamMb => "ram_mb",
            Self::DiskGb => "disk_gb",
            Self::SwapMb => "swap_mb",
            Self::IsPublic => "is_public",
            Self::Description => "description",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Id => &["flavor_id"],
            Self::Name => &["flavor_name"],
            Self::Vcpus => &["cpus"],
            Self::RamMb => &["ram", "memory_mb"],
            Self::DiskGb => &["disk"],
            Self::SwapMb => &["swap"],
            Self::IsPublic => &["public"],
            Self::Description => &[],
        }
    }

    fn kind(self) -> PropertyKind {
        match self {
            Self::Vcpus | Self::RamMb | Self::DiskGb | Self::SwapMb => PropertyKind::Integer,
            Self::IsPublic => PropertyKind::Boolean,
            _ => PropertyKind::String,
        }
    }

    fn extract(self, flavor: &Flavor) -> PropertyValue {
        match self {
            Self::Id => flavor.id.as_str().into(),
            Self::Name => flavor.name.as_str().into(),
            Self::Vcpus => flavor.vcpus.into(),
            Self::RamMb => flavor.ram_mb.into(),
            Self::DiskGb => flavor.disk_gb.into(),
            Self::SwapMb => flavor.swap_mb.into(),
            Self::IsPublic => flavor.is_public.into(),
            Self::Description => flavor.description.as_deref().into(),
        }
    }

    fn marker() -> Option<Self> {
        Some(Self::Id)
    }

    fn is_id(self) -> bool {
        self == Self::Id
    }
}

impl fmt::Display for FlavorProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_kinds() {
        assert_eq!(FlavorProperty::RamMb.kind(), PropertyKind::Integer);
        assert_eq!(FlavorProperty::IsPublic.kind(), PropertyKind::Boolean);
        assert_eq!(FlavorProperty::Name.kind(), PropertyKind::String);
    }

    #[test]
    fn test_extract() {
        let flavor = Flavor {
            id: "m1.small".to_string(),
            name: "m1.small".to_string(),
            vcpus: 2,
            ram_mb: 2048,
            disk_gb: 20,
            swap_mb: None,
            is_public: true,
            description: None,
        };
        assert_eq!(FlavorProperty::Vcpus.extract(&flavor), PropertyValue::Int(2));
        assert_eq!(
            FlavorProperty::IsPublic.extract(&flavor),
            PropertyValue::Bool(true)
        );
        assert!(FlavorProperty::SwapMb.extract(&flavor).is_not_found());
        assert!(FlavorProperty::Description.extract(&flavor).is_not_found());
    }
}
