//! # sq-models
//!
//! Typed raw-resource models for StackQuery RS.
//!
//! Each struct is the deserialized form of one resource kind as returned by
//! the cloud's listing API. The engine treats these as opaque until a
//! property extractor reads a field; optional fields map to the `NotFound`
//! sentinel at extraction time rather than failing.

pub mod flavor;
pub mod project;
pub mod server;
pub mod user;

// Re-exports for convenience
pub use flavor::Flavor;
pub use project::Project;
pub use server::{Server, ServerStatus};
pub use user::User;
