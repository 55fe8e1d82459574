//! Paging and filter parameter types
//!
//! One listing call fetches one page: a limit, an optional marker (the
//! identifier of the last item of the previous page), and native filter
//! parameters the remote evaluates before data leaves it.

use serde_json::Value;
use std::collections::BTreeMap;

/// Native filter parameters for a listing call
///
/// Keys come from the per-property pushdown tables and the scope
/// meta-parameters; values are whatever JSON shape the remote accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams(BTreeMap<&'static str, Value>);

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter (builder pattern)
    pub fn with(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.0.insert(key, value.into());
        self
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<Value>) {
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge another parameter set in, later entries winning
    pub fn merge(&mut self, other: FilterParams) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }
}

/// One pushdown filter set, issued as one remote call
///
/// Equality on the identifier property short-circuits to a direct get; any
/// other supported pair becomes native listing parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerFilters {
    /// Fetch exactly the resource with this identifier
    ById(String),
    /// List with these native filter parameters
    Params(FilterParams),
}

/// Parameters for one page of a listing call
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// Maximum number of items the remote should return
    pub limit: i64,

    /// Identifier of the last item of the previous page, None for the first
    pub marker: Option<String>,

    /// Native filter parameters, empty when filtering is client-side
    pub filters: FilterParams,
}

impl PageRequest {
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            marker: None,
            filters: FilterParams::new(),
        }
    }

    pub fn with_filters(mut self, filters: FilterParams) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_params_builder() {
        let params = FilterParams::new()
            .with("status", "ACTIVE")
            .with("all_tenants", true);

        assert_eq!(params.get("status"), Some(&Value::from("ACTIVE")));
        assert_eq!(params.get("all_tenants"), Some(&Value::from(true)));
        assert!(params.get("user_id").is_none());
    }

    #[test]
    fn test_merge_later_entries_win() {
        let mut params = FilterParams::new().with("status", "ACTIVE");
        params.merge(FilterParams::new().with("status", "SHUTOFF"));
        assert_eq!(params.get("status"), Some(&Value::from("SHUTOFF")));
    }

    #[test]
    fn test_page_request() {
        let page = PageRequest::new(100).with_marker("s-9");
        assert_eq!(page.limit, 100);
        assert_eq!(page.marker.as_deref(), Some("s-9"));
        assert!(page.filters.is_empty());
    }
}
