//! # sq-cloud
//!
//! The engine's contract with its cloud collaborator.
//!
//! The query engine never talks to a network itself: it consumes a listing
//! capability ([`ResourceLister`]) and a bootstrap capability
//! ([`CloudConnect`]) and stays ignorant of authentication, regions, and
//! transport. Filter parameters travel as loosely-typed key/value pairs,
//! the same shape the remote API accepts natively.

pub mod client;
pub mod memory;
pub mod page;

// Re-exports for convenience
pub use client::{CloudConnect, ResourceLister};
pub use memory::InMemoryCloud;
pub use page::{FilterParams, PageRequest, ServerFilters};
