//! Project model
//!
//! A tenancy boundary owning servers and users.

use serde::{Deserialize, Serialize};

/// A project (tenant)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Project id (pagination marker for project listings)
    pub id: String,

    /// Display name
    pub name: String,

    pub description: Option<String>,

    /// Whether the project accepts new workloads
    pub enabled: bool,

    /// Owning identity domain
    pub domain_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_api_json() {
        let raw = serde_json::json!({
            "id": "p-42",
            "name": "astronomy",
            "description": null,
            "enabled": true,
            "domain_id": "default"
        });

        let project: Project = serde_json::from_value(raw).unwrap();
        assert_eq!(project.name, "astronomy");
        assert!(project.description.is_none());
    }
}
