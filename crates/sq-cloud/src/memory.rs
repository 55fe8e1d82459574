//! In-memory cloud
//!
//! A stand-in [`ResourceLister`] backed by a plain vector. Used by the
//! runner and facade tests, and by the pushdown-vs-client conformance
//! checks, which need both filter paths served from identical data. Paging
//! behaves like the real API: marker-relative slices of the filtered view.

use crate::client::{CloudConnect, ResourceLister};
use crate::page::{FilterParams, PageRequest};
use sq_core::ApiError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Resource store serving marker-paginated, natively-filtered listings
pub struct InMemoryCloud<R> {
    items: Vec<R>,
    id_of: fn(&R) -> String,
    matches: fn(&R, &FilterParams) -> bool,
    list_calls: AtomicUsize,
}

impl<R: Clone + PartialEq + Send + Sync> InMemoryCloud<R> {
    /// Build a cloud over `items`. `id_of` yields the identifier used for
    /// markers and gets; `matches` evaluates native filter parameters the
    /// way the remote would.
    pub fn new(
        items: Vec<R>,
        id_of: fn(&R) -> String,
        matches: fn(&R, &FilterParams) -> bool,
    ) -> Self {
        Self {
            items,
            id_of,
            matches,
            list_calls: AtomicUsize::new(0),
        }
    }

    /// A cloud that ignores filter parameters entirely
    pub fn unfiltered(items: Vec<R>, id_of: fn(&R) -> String) -> Self {
        Self::new(items, id_of, |_, _| true)
    }

    /// Number of listing calls served so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::Relaxed)
    }
}

impl<R: Clone + PartialEq + Send + Sync> ResourceLister<R> for InMemoryCloud<R> {
    fn list_page(&self, page: &PageRequest) -> Result<Vec<R>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);

        let filtered: Vec<&R> = self
            .items
            .iter()
            .filter(|item| (self.matches)(item, &page.filters))
            .collect();

        // A marker that no longer matches anything restarts from the top,
        // as the real API does when the marker resource was deleted.
        let start = match &page.marker {
            None => 0,
            Some(marker) => filtered
                .iter()
                .position(|item| (self.id_of)(item) == *marker)
                .map(|pos| pos + 1)
                .unwrap_or(0),
        };

        Ok(filtered
            .into_iter()
            .skip(start)
            .take(page.limit.max(0) as usize)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, id: &str) -> Result<Option<R>, ApiError> {
        Ok(self.items.iter().find(|item| (self.id_of)(item) == id).cloned())
    }
}

impl<R: Clone + PartialEq + Send + Sync> CloudConnect for InMemoryCloud<R> {
    type Session = Self;

    fn connect(&self) -> Result<Self::Session, ApiError> {
        Ok(Self {
            items: self.items.clone(),
            id_of: self.id_of,
            matches: self.matches,
            list_calls: AtomicUsize::new(0),
        })
    }
}
