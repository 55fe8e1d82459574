//! Server properties

use crate::property::{PropertyKind, ResourceProperty};
use sq_core::PropertyValue;
use sq_models::Server;
use std::fmt;

/// Queryable properties of a server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerProperty {
    Id,
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
    FlavorId,
    ImageId,
    UserId,
    ProjectId,
    Addresses,
    Description,
}

impl ResourceProperty for ServerProperty {
    type Resource = Server;

    const RESOURCE_NAME: &'static str = "server";

    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Status,
        Self::CreatedAt,
        Self::UpdatedAt,
        Self::FlavorId,
        Self::ImageId,
        Self::UserId,
        Self::ProjectId,
        Self::Addresses,
        Self::Description,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Status => "status",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::FlavorId => "flavor_id",
            Self::ImageId => "image_id",
            Self::UserId => "user_id",
            Self::ProjectId => "project_id",
            Self::Addresses => "addresses",
            Self::Description => "description",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Id => &["uuid", "server_id"],
            Self::Name => &["server_name", "vm_name"],
            Self::Status => &["state", "vm_state"],
            Self::CreatedAt => &["created", "creation_date"],
            Self::UpdatedAt => &["updated", "last_updated_date"],
            Self::FlavorId => &["flavor"],
            Self::ImageId => &["image"],
            Self::UserId => &["user"],
            Self::ProjectId => &["project", "tenant_id"],
            Self::Addresses => &["ips", "vm_ips"],
            Self::Description => &[],
        }
    }

    fn kind(self) -> PropertyKind {
        match self {
            Self::CreatedAt | Self::UpdatedAt => PropertyKind::DateTime,
            _ => PropertyKind::String,
        }
    }

    fn extract(self, server: &Server) -> PropertyValue {
        match self {
            Self::Id => server.id.as_str().into(),
            Self::Name => server.name.as_str().into(),
            Self::Status => server.status.as_str().into(),
            Self::CreatedAt => server.created_at.into(),
            Self::UpdatedAt => server.updated_at.into(),
            Self::FlavorId => server.flavor_id.as_str().into(),
            Self::ImageId => server.image_id.as_deref().into(),
            Self::UserId => server.user_id.as_str().into(),
            Self::ProjectId => server.project_id.as_str().into(),
            Self::Addresses => {
                if server.addresses.is_empty() {
                    PropertyValue::NotFound
                } else {
                    server.address_list().into()
                }
            }
            Self::Description => server.description.as_deref().into(),
        }
    }

    fn marker() -> Option<Self> {
        Some(Self::Id)
    }

    fn is_id(self) -> bool {
        self == Self::Id
    }
}

impl fmt::Display for ServerProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
