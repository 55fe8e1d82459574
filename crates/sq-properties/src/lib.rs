//! # sq-properties
//!
//! Property tables for StackQuery RS.
//!
//! Each resource type carries one closed property enum implementing
//! [`ResourceProperty`]: canonical name, case-insensitive aliases, value
//! kind, a total extraction function, and the pagination-marker
//! designation. The tables are compile-time configuration — support for a
//! property is checked by exhaustive matching, not runtime string lookup.

pub mod flavor;
pub mod project;
pub mod property;
pub mod registry;
pub mod server;
pub mod user;

// Re-exports for convenience
pub use flavor::FlavorProperty;
pub use project::ProjectProperty;
pub use property::{PropertyKind, ResourceProperty};
pub use registry::PropertyRegistry;
pub use server::ServerProperty;
pub use user::UserProperty;
