//! Project properties

use crate::property::{PropertyKind, ResourceProperty};
use sq_core::PropertyValue;
use sq_models::Project;
use std::fmt;

/// Queryable properties of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectProperty {
    Id,
    Name,
    Description,
    Enabled,
    DomainId,
}

impl ResourceProperty for ProjectProperty {
    type Resource = Project;

    const RESOURCE_NAME: &'static str = "project";

    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Description,
        Self::Enabled,
        Self::DomainId,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Description => "description",
            Self::Enabled => "enabled",
            Self::DomainId => "domain_id",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Id => &["project_id", "tenant_id"],
            Self::Name => &["project_name"],
            Self::DomainId => &["domain"],
            _ => &[],
        }
    }

    fn kind(self) -> PropertyKind {
        match self {
            Self::Enabled => PropertyKind::Boolean,
            _ => PropertyKind::String,
        }
    }

    fn extract(self, project: &Project) -> PropertyValue {
        match self {
            Self::Id => project.id.as_str().into(),
            Self::Name => project.name.as_str().into(),
            Self::Description => project.description.as_deref().into(),
            Self::Enabled => project.enabled.into(),
            Self::DomainId => project.domain_id.as_str().into(),
        }
    }

    fn marker() -> Option<Self> {
        Some(Self::Id)
    }

    fn is_id(self) -> bool {
        self == Self::Id
    }
}

impl fmt::Display for ProjectProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
