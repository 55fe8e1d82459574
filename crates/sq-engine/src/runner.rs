//! Listing execution
//!
//! Drives the remote listing with marker-based pagination and two
//! safeguards against API pagination defects: consecutive-duplicate
//! detection (logged, page terminated early) and a hard page ceiling
//! (logged, loop aborted). Both are absorbed locally; genuine API errors
//! propagate unmodified and are never retried here.
//!
//! When a clause resolved to pushdown filter sets, the runner issues one
//! listing (or direct get) per set and concatenates. Otherwise it lists
//! unfiltered and applies the client-side predicate to the full listing.

use crate::builder::ResolvedClause;
use serde::de::DeserializeOwned;
use sq_cloud::{FilterParams, PageRequest, ResourceLister, ServerFilters};
use sq_core::{EngineConfig, QueryError, QueryResult};
use sq_properties::{PropertyRegistry, ResourceProperty};
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Listing executor for one resource type
pub struct Runner<P: ResourceProperty> {
    config: EngineConfig,
    _properties: PhantomData<P>,
}

impl<P: ResourceProperty> Runner<P> {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            _properties: PhantomData,
        }
    }

    /// Execute the remote listing. `scopes` holds one parameter set per
    /// listing pass (project scoping); an empty slice means one unscoped
    /// pass.
    pub fn run<C: ResourceLister<P::Resource>>(
        &self,
        client: &C,
        resolved: Option<&ResolvedClause<P::Resource>>,
        scopes: &[FilterParams],
    ) -> QueryResult<Vec<P::Resource>> {
        let unscoped = [FilterParams::new()];
        let scopes: &[FilterParams] = if scopes.is_empty() { &unscoped } else { scopes };

        let mut results = Vec::new();
        match resolved.and_then(|r| r.pushdown.as_ref()) {
            Some(filter_sets) => {
                for set in filter_sets {
                    match set {
                        ServerFilters::ById(id) => {
                            if let Some(resource) = client.get_by_id(id)? {
                                results.push(resource);
                            }
                        }
                        ServerFilters::Params(params) => {
                            for scope in scopes {
                                let mut merged = scope.clone();
                                merged.merge(params.clone());
                                results.extend(self.paginate(client, merged)?);
                            }
                        }
                    }
                }
            }
            None => {
                for scope in scopes {
                    results.extend(self.paginate(client, scope.clone())?);
                }
                // Pushdown was unavailable: the predicate is the only filter
                if let Some(resolved) = resolved {
                    results.retain(|resource| (resolved.predicate)(resource));
                }
            }
        }
        Ok(results)
    }

    /// Substitute a pre-fetched subset for the network listing. Every
    /// element must parse as the expected resource kind; the client-side
    /// predicate still applies (there is nothing to push down to).
    pub fn run_on_subset(
        &self,
        subset: Vec<serde_json::Value>,
        resolved: Option<&ResolvedClause<P::Resource>>,
    ) -> QueryResult<Vec<P::Resource>>
    where
        P::Resource: DeserializeOwned,
    {
        let mut results = subset
            .into_iter()
            .map(|raw| {
                serde_json::from_value::<P::Resource>(raw.clone()).map_err(|e| {
                    QueryError::Parse(format!(
                        "not a {} resource ({}): {}",
                        P::RESOURCE_NAME, e, raw
                    ))
                })
            })
            .collect::<QueryResult<Vec<_>>>()?;

        if let Some(resolved) = resolved {
            results.retain(|resource| (resolved.predicate)(resource));
        }
        Ok(results)
    }

    /// One full marker-pagination pass with the given filter parameters
    fn paginate<C: ResourceLister<P::Resource>>(
        &self,
        client: &C,
        filters: FilterParams,
    ) -> QueryResult<Vec<P::Resource>> {
        let marker_property = PropertyRegistry::<P>::marker()?;
        let mut items: Vec<P::Resource> = Vec::new();
        let mut marker: Option<String> = None;
        let mut pages = 0usize;

        loop {
            if pages >= self.config.max_pages {
                warn!(
                    max_pages = self.config.max_pages,
                    "pagination ceiling reached, aborting listing loop"
                );
                break;
            }

            let mut request =
                PageRequest::new(self.config.page_size).with_filters(filters.clone());
            if let Some(m) = marker.clone() {
                request = request.with_marker(m);
            }

            let page = client.list_page(&request)?;
            pages += 1;
            let full_page = page.len() as i64 >= self.config.page_size;
            debug!(page = pages, items = page.len(), "fetched listing page");

            let mut anomaly = false;
            for item in page {
                if items.last() == Some(&item) {
                    warn!("listing returned consecutive duplicate items, terminating pagination early");
                    anomaly = true;
                    break;
                }
                items.push(item);
            }

            if anomaly || !full_page {
                break;
            }
            match items.last() {
                Some(last) => {
                    marker =
                        Some(PropertyRegistry::<P>::extract(last, marker_property).to_string());
                }
                None => break,
            }
        }
        Ok(items)
    }
}
