//! # sq-presets
//!
//! Preset comparison families for StackQuery RS.
//!
//! A preset is a named comparison operator applied to a property: equality
//! and membership (Generic), regex matching (String), numeric ordering
//! (Integer), and relative-age comparison (DateTime). Each family is a
//! closed enum; pairing validity with a property is decided by the
//! property's value kind through exhaustive matching.
//!
//! Two handlers consume a (preset, property, args) triple:
//! - [`client_side::ClientSideHandler`] builds a pure local predicate
//! - [`server_side::ServerSideHandler`] builds native API filter
//!   parameters when the remote supports the same semantics

pub mod args;
pub mod client_side;
pub mod preset;
pub mod server_side;

// Re-exports for convenience
pub use args::{PresetArgs, RelativeAge};
pub use client_side::{ClientSideHandler, Predicate};
pub use preset::{DateTimePreset, GenericPreset, IntegerPreset, Preset, StringPreset};
pub use server_side::{PushdownProperty, ServerSideHandler};
