//! User properties

use crate::property::{PropertyKind, ResourceProperty};
use sq_core::PropertyValue;
use sq_models::User;
use std::fmt;

/// Queryable properties of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserProperty {
    Id,
    Name,
    Email,
    DomainId,
    Enabled,
    Description,
}

impl ResourceProperty for UserProperty {
    type Resource = User;

    const RESOURCE_NAME: &'static str = "user";

    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Email,
        Self::DomainId,
        Self::Enabled,
        Self::Description,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::DomainId => "domain_id",
            Self::Enabled => "enabled",
            Self::Description => "description",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Id => &["user_id", "uuid"],
            Self::Name => &["username", "user_name"],
            Self::Email => &["email_address", "mail"],
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

    fn extract(self, user: &User) -> PropertyValue {
        match self {
            Self::Id => user.id.as_str().into(),
            Self::Name => user.name.as_str().into(),
            Self::Email => user.email.as_deref().into(),
            Self::DomainId => user.domain_id.as_str().into(),
            Self::Enabled => user.enabled.into(),
            Self::Description => user.description.as_deref().into(),
        }
    }

    fn marker() -> Option<Self> {
        Some(Self::Id)
    }

    fn is_id(self) -> bool {
        self == Self::Id
    }
}

impl fmt::Display for UserProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
