//! Engine configuration
//!
//! Pagination parameters for the runner. Defaults match the remote API's
//! maximum page size; both values can be overridden through the
//! environment, mirroring how deployments tune them without code changes.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Runner configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Number of resources requested per listing call
    pub page_size: i64,

    /// Hard ceiling on listing calls per run. Pagination that does not
    /// naturally terminate within this many pages is aborted with a warning.
    pub max_pages: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: 1000,
            max_pages: 1000,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(size) = std::env::var("STACKQUERY_PAGE_SIZE") {
            config.page_size = size.parse().unwrap_or(config.page_size);
        }
        if let Ok(pages) = std::env::var("STACKQUERY_MAX_PAGES") {
            config.max_pages = pages.parse().unwrap_or(config.max_pages);
        }

        config
    }

    /// Process-wide configuration, read from the environment once
    pub fn global() -> &'static Self {
        static GLOBAL: Lazy<EngineConfig> = Lazy::new(EngineConfig::from_env);
        &GLOBAL
    }
}
