//! # sq-engine
//!
//! The query facade for StackQuery RS.
//!
//! A [`Query`] is configured with a selection, at most one filter clause,
//! sort keys, and a grouping, then executed exactly once against an
//! injected cloud handle. Execution resolves the clause into a client-side
//! predicate plus optional server-side pushdown, drives marker pagination,
//! sorts and groups the results, and exposes projection and rendering.
//! A finished query can be chained into a dependent query over a different
//! resource type via [`Query::then`].
//!
//! ## Structure
//!
//! - `clause` - The single filter clause a query may hold
//! - `builder` - Clause resolution into predicate + pushdown filters
//! - `runner` - Marker pagination, safeguards, subset substitution
//! - `parser` - Post-run sorting and grouping
//! - `results` - Result wrappers and group structures
//! - `output` - Selection, projection, and table rendering
//! - `chainer` - Forwarded-property links between queries
//! - `query` - The fluent facade composing all of the above
//!
//! ## Example
//!
//! ```no_run
//! use sq_cloud::InMemoryCloud;
//! use sq_engine::{Query, SortDirection};
//! use sq_models::Server;
//! use sq_presets::{GenericPreset, PresetArgs};
//! use sq_properties::ServerProperty;
//!
//! # fn demo(cloud: &InMemoryCloud<Server>) -> sq_core::QueryResult<()> {
//! let mut query = Query::<ServerProperty>::new();
//! query
//!     .select(&[ServerProperty::Id, ServerProperty::Name])?
//!     .where_(
//!         GenericPreset::EqualTo,
//!         ServerProperty::Status,
//!         PresetArgs::Value("SHUTOFF".into()),
//!     )?
//!     .sort_by(&[(ServerProperty::Name, SortDirection::Asc)])?
//!     .run(cloud)?;
//! println!("{}", query.to_string()?);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod chainer;
pub mod clause;
pub mod output;
pub mod parser;
pub mod query;
pub mod results;
pub mod runner;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use builder::{QueryBuilder, ResolvedClause};
pub use chainer::ChainLink;
pub use clause::FilterClause;
pub use output::{QueryOutput, Record, SelectSpec};
pub use parser::{GroupSpec, QueryParser, SortDirection};
pub use query::Query;
pub use results::{QueryItem, ResultGroup, ResultSet};
pub use runner::Runner;
