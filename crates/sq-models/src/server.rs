//! Server model
//!
//! A compute instance as returned by the cloud's server listing endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a server
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServerStatus {
    #[default]
    Active,
    Build,
    Error,
    Migrating,
    Paused,
    Rescue,
    Shutoff,
    Shelved,
    Unknown,
}

impl ServerStatus {
    /// Parse from the API's status string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Some(Self::Active),
            "BUILD" => Some(Self::Build),
            "ERROR" => Some(Self::Error),
            "MIGRATING" => Some(Self::Migrating),
            "PAUSED" => Some(Self::Paused),
            "RESCUE" => Some(Self::Rescue),
            "SHUTOFF" => Some(Self::Shutoff),
            "SHELVED" => Some(Self::Shelved),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Convert to the API's status string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Build => "BUILD",
            Self::Error => "ERROR",
            Self::Migrating => "MIGRATING",
            Self::Paused => "PAUSED",
            Self::Rescue => "RESCUE",
            Self::Shutoff => "SHUTOFF",
            Self::Shelved => "SHELVED",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Active | Self::Migrating)
    }
}

/// A compute instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Server {
    /// Server UUID (also the pagination marker for server listings)
    pub id: String,

    /// Display name
    pub name: String,

    /// Lifecycle state
    pub status: ServerStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp, absent for servers never touched after boot
    pub updated_at: Option<DateTime<Utc>>,

    /// Flavor the server was booted with
    pub flavor_id: String,

    /// Image the server was booted from, absent for volume-backed servers
    pub image_id: Option<String>,

    /// Owning user
    pub user_id: String,

    /// Owning project
    pub project_id: String,

    /// Assigned addresses, in allocation order
    #[serde(default)]
    pub addresses: Vec<String>,

    pub description: Option<String>,
}

impl Server {
    /// Addresses joined into one displayable string, empty when none are
    /// assigned
    pub fn address_list(&self) -> String {
        self.addresses.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!(ServerStatus::from_str("ACTIVE"), Some(ServerStatus::Active));
        assert_eq!(ServerStatus::from_str("shutoff"), Some(ServerStatus::Shutoff));
        assert_eq!(ServerStatus::from_str("nonsense"), None);
        assert_eq!(ServerStatus::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_status_is_running() {
        assert!(ServerStatus::Active.is_running());
        assert!(!ServerStatus::Shutoff.is_running());
    }

    #[test]
    fn test_deserialize_from_api_json() {
        let raw = serde_json::json!({
            "id": "7a1b",
            "name": "worker-01",
            "status": "SHUTOFF",
            "created_at": "2024-01-10T08:30:00Z",
            "updated_at": null,
            "flavor_id": "m1.small",
            "image_id": "img-9",
            "user_id": "u-1",
            "project_id": "p-1",
            "addresses": ["10.0.0.4"],
            "description": null
        });

        let server: Server = serde_json::from_value(raw).unwrap();
        assert_eq!(server.name, "worker-01");
        assert_eq!(server.status, ServerStatus::Shutoff);
        assert!(server.updated_at.is_none());
        assert_eq!(server.address_list(), "10.0.0.4");
    }
}
