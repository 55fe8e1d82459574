//! Flavor model
//!
//! A hardware template (vCPUs, RAM, disk) servers are booted with.

use serde::{Deserialize, Serialize};

/// A hardware flavor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flavor {
    /// Flavor id (pagination marker for flavor listings)
    pub id: String,

    /// Display name (e.g. "m1.small")
    pub name: String,

    /// Virtual CPU count
    pub vcpus: i64,

    /// RAM in megabytes
    pub ram_mb: i64,

    /// Root disk in gigabytes
    pub disk_gb: i64,

    /// Swap in megabytes, absent when the flavor defines none
    pub swap_mb: Option<i64>,

    /// Whether the flavor is visible to all projects
    pub is_public: bool,

    pub description: Option<String>,
}
