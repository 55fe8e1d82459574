//! Clause resolution
//!
//! Turns a filter clause into the two filtering tiers: a client-side
//! predicate (always built, so argument validation is identical on both
//! paths) and native pushdown filter sets when the remote supports the
//! same semantics. When pushdown exists it is trusted as sufficient and
//! the predicate is not re-applied — the runner filters locally only on
//! the no-pushdown path.

use crate::clause::FilterClause;
use sq_cloud::ServerFilters;
use sq_core::QueryResult;
use sq_presets::{ClientSideHandler, Predicate, PushdownProperty, ServerSideHandler};

/// A clause resolved into its executable form
pub struct ResolvedClause<R> {
    /// Local filter, applied only when `pushdown` is `None`
    pub predicate: Predicate<R>,
    /// Native filter sets, one remote call per entry
    pub pushdown: Option<Vec<ServerFilters>>,
}

impl<R> std::fmt::Debug for ResolvedClause<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedClause")
            .field("pushdown", &self.pushdown)
            .finish_non_exhaustive()
    }
}

/// Resolves filter clauses for one resource type
pub struct QueryBuilder;

impl QueryBuilder {
    pub fn resolve<P: PushdownProperty>(
        handler: &ClientSideHandler<P>,
        clause: &FilterClause<P>,
    ) -> QueryResult<ResolvedClause<P::Resource>> {
        let predicate = handler.build(clause.preset, clause.property, &clause.args)?;
        let pushdown =
            ServerSideHandler::build_filters(clause.preset, clause.property, &clause.args);
        Ok(ResolvedClause {
            predicate,
            pushdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sq_core::QueryError;
    use sq_presets::{GenericPreset, IntegerPreset, PresetArgs};
    use sq_properties::ServerProperty;

    #[test]
    fn test_pushdown_available_for_keyed_equality() {
        let handler = ClientSideHandler::new();
        let clause = FilterClause::new(
            GenericPreset::EqualTo,
            ServerProperty::Status,
            PresetArgs::Value("ACTIVE".into()),
        );
        let resolved = QueryBuilder::resolve(&handler, &clause).unwrap();
        assert!(resolved.pushdown.is_some());
    }

    #[test]
    fn test_no_pushdown_for_unkeyed_property() {
        let handler = ClientSideHandler::new();
        let clause = FilterClause::new(
            GenericPreset::EqualTo,
            ServerProperty::Description,
            PresetArgs::Value("batch".into()),
        );
        let resolved = QueryBuilder::resolve(&handler, &clause).unwrap();
        assert!(resolved.pushdown.is_none());
    }

    #[test]
    fn test_invalid_pairing_fails_resolution() {
        let handler = ClientSideHandler::new();
        let clause = FilterClause::new(
            IntegerPreset::GreaterThan,
            ServerProperty::Name,
            PresetArgs::Threshold(4),
        );
        let err = QueryBuilder::resolve(&handler, &clause).unwrap_err();
        assert!(matches!(err, QueryError::UnsupportedPreset { .. }));
    }
}
