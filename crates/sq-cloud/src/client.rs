//! Client capability traits
//!
//! The seam between the engine and whatever SDK actually speaks to the
//! cloud. Implementations are injected as opaque handles; the engine sees
//! one page per call and nothing of sessions or tokens.

use crate::page::PageRequest;
use sq_core::ApiError;

/// Lists one resource kind, one page at a time
pub trait ResourceLister<R>: Send + Sync {
    /// Fetch one page. The remote applies `page.filters` natively and
    /// returns at most `page.limit` items after `page.marker`.
    fn list_page(&self, page: &PageRequest) -> Result<Vec<R>, ApiError>;

    /// Fetch a single resource by identifier, None when it does not exist
    fn get_by_id(&self, id: &str) -> Result<Option<R>, ApiError>;
}

/// Bootstrap capability: turns account/region details into a usable
/// session handle. Credentials never cross this boundary into the engine.
pub trait CloudConnect {
    type Session;

    fn connect(&self) -> Result<Self::Session, ApiError>;
}
