//! The query facade
//!
//! Composes selection, the single filter clause, sorting, grouping,
//! execution, output, and chaining behind one fluent type. The lifecycle
//! is strict: configure, run exactly once, then read. Misuse — a second
//! `where_`, a re-run, reading before running, mixing `select` with
//! `select_all`, or ambiguous project scoping — is a usage error, never a
//! silent no-op.

use crate::builder::{QueryBuilder, ResolvedClause};
use crate::chainer::ChainLink;
use crate::clause::FilterClause;
use crate::output::{
    render_html, render_html_grouped, render_text, render_text_grouped, QueryOutput, Record,
    SelectSpec,
};
use crate::parser::{QueryParser, SortDirection};
use crate::results::{QueryItem, ResultSet};
use crate::runner::Runner;
use serde::de::DeserializeOwned;
use sq_cloud::{CloudConnect, FilterParams, ResourceLister};
use sq_core::{Clock, EngineConfig, PropertyValue, QueryError, QueryResult, SystemClock};
use sq_presets::{ClientSideHandler, Preset, PresetArgs, PushdownProperty};
use sq_properties::ResourceProperty;
use std::sync::Arc;
use tracing::debug;

/// A declarative query over one resource type
pub struct Query<P: PushdownProperty> {
    clock: Arc<dyn Clock>,
    config: EngineConfig,
    selection: Vec<P>,
    select_all: bool,
    clause: Option<FilterClause<P>>,
    resolved: Option<ResolvedClause<P::Resource>>,
    parser: QueryParser<P>,
    projects: Vec<String>,
    across_all_projects: bool,
    chain: Option<(P, ChainLink)>,
    results: Option<ResultSet<P::Resource>>,
}

impl<P: PushdownProperty> std::fmt::Debug for Query<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("selection", &self.selection)
            .field("select_all", &self.select_all)
            .field("projects", &self.projects)
            .field("across_all_projects", &self.across_all_projects)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

impl<P: PushdownProperty> Default for Query<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PushdownProperty> Query<P> {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().clone())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            config,
            selection: Vec::new(),
            select_all: false,
            clause: None,
            resolved: None,
            parser: QueryParser::new(),
            projects: Vec::new(),
            across_all_projects: false,
            chain: None,
            results: None,
        }
    }

    /// Use an explicit clock for relative-age presets
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // Configuration

    /// Add properties to the selection. Additive and idempotent: repeated
    /// mentions keep their first position.
    pub fn select(&mut self, properties: &[P]) -> QueryResult<&mut Self> {
        self.ensure_configurable("select")?;
        if self.select_all {
            return Err(QueryError::Usage(
                "select() cannot be combined with select_all() on the same query".to_string(),
            ));
        }
        for property in properties {
            if !self.selection.contains(property) {
                self.selection.push(*property);
            }
        }
        Ok(self)
    }

    /// Select every registered property of the resource type
    pub fn select_all(&mut self) -> QueryResult<&mut Self> {
        self.ensure_configurable("select_all")?;
        if !self.selection.is_empty() {
            return Err(QueryError::Usage(
                "select_all() cannot be combined with select() on the same query".to_string(),
            ));
        }
        self.select_all = true;
        Ok(self)
    }

    /// Set the query's single filter clause. The clause is resolved — and
    /// its arguments validated — immediately, before any network call.
    pub fn where_(
        &mut self,
        preset: impl Into<Preset>,
        property: P,
        args: PresetArgs,
    ) -> QueryResult<&mut Self> {
        self.ensure_configurable("where_")?;
        if self.clause.is_some() {
            return Err(QueryError::Usage(
                "where_() may only be called once per query".to_string(),
            ));
        }
        let clause = FilterClause::new(preset, property, args);
        let handler = ClientSideHandler::with_clock(Arc::clone(&self.clock));
        let resolved = QueryBuilder::resolve(&handler, &clause)?;
        debug!(
            preset = %clause.preset,
            property = %clause.property,
            pushdown = resolved.pushdown.is_some(),
            "filter clause resolved"
        );
        self.clause = Some(clause);
        self.resolved = Some(resolved);
        Ok(self)
    }

    /// Replace the sort specification; the first key is the primary key
    pub fn sort_by(&mut self, keys: &[(P, SortDirection)]) -> QueryResult<&mut Self> {
        self.ensure_configurable("sort_by")?;
        self.parser.sort_by(keys);
        Ok(self)
    }

    /// Group results by distinct values of a property
    pub fn group_by(&mut self, property: P) -> QueryResult<&mut Self> {
        self.ensure_configurable("group_by")?;
        self.parser.group_by(property);
        Ok(self)
    }

    /// Group results into named value ranges, optionally collecting
    /// unmatched results into an extra group
    pub fn group_by_ranges(
        &mut self,
        property: P,
        ranges: Vec<(String, Vec<PropertyValue>)>,
        include_missing: bool,
    ) -> QueryResult<&mut Self> {
        self.ensure_configurable("group_by_ranges")?;
        if ranges.is_empty() {
            return Err(QueryError::MissingParam {
                name: "ranges",
                reason: "group_by_ranges requires at least one named range".to_string(),
            });
        }
        self.parser.group_by_ranges(property, ranges, include_missing);
        Ok(self)
    }

    /// Scope the listing to specific projects, one listing pass per id
    pub fn from_projects(&mut self, project_ids: &[&str]) -> QueryResult<&mut Self> {
        self.ensure_configurable("from_projects")?;
        if self.across_all_projects {
            return Err(QueryError::Usage(
                "from_projects() conflicts with all_projects() on the same query".to_string(),
            ));
        }
        if project_ids.is_empty() {
            return Err(QueryError::MissingParam {
                name: "project",
                reason: "from_projects requires at least one project id".to_string(),
            });
        }
        for id in project_ids {
            let trimmed = id.trim();
            if trimmed.is_empty() {
                return Err(QueryError::MissingParam {
                    name: "project",
                    reason: "project id must not be empty or whitespace".to_string(),
                });
            }
            self.projects.push(trimmed.to_string());
        }
        Ok(self)
    }

    /// Scope the listing across every project visible to the session
    pub fn all_projects(&mut self) -> QueryResult<&mut Self> {
        self.ensure_configurable("all_projects")?;
        if !self.projects.is_empty() {
            return Err(QueryError::Usage(
                "all_projects() conflicts with from_projects() on the same query".to_string(),
            ));
        }
        self.across_all_projects = true;
        Ok(self)
    }

    // Execution

    /// Execute the query against a listing handle. Runs exactly once.
    pub fn run<C: ResourceLister<P::Resource>>(&mut self, client: &C) -> QueryResult<&mut Self> {
        self.ensure_not_run()?;
        let runner = Runner::<P>::new(self.config.clone());
        let raw = runner.run(client, self.resolved.as_ref(), &self.scopes())?;
        debug!(count = raw.len(), resource = P::RESOURCE_NAME, "query listed resources");
        self.finish(raw);
        Ok(self)
    }

    /// Connect through the bootstrap capability, then execute
    pub fn run_via<C>(&mut self, cloud: &C) -> QueryResult<&mut Self>
    where
        C: CloudConnect,
        C::Session: ResourceLister<P::Resource>,
    {
        let session = cloud.connect()?;
        self.run(&session)
    }

    /// Execute against a pre-fetched subset instead of the network.
    /// Elements that fail to parse as this resource kind are an error.
    pub fn run_on_subset(&mut self, subset: Vec<serde_json::Value>) -> QueryResult<&mut Self>
    where
        P::Resource: DeserializeOwned,
    {
        self.ensure_not_run()?;
        let runner = Runner::<P>::new(self.config.clone());
        let raw = runner.run_on_subset(subset, self.resolved.as_ref())?;
        self.finish(raw);
        Ok(self)
    }

    fn finish(&mut self, raw: Vec<P::Resource>) {
        let mut items: Vec<QueryItem<P::Resource>> =
            raw.into_iter().map(QueryItem::new).collect();

        if let Some((target, link)) = &mut self.chain {
            for item in &mut items {
                let key = target.extract(item.resource());
                let record = link.take(&key);
                item.attach_forwarded(record.fields().to_vec());
            }
        }

        self.parser.sort(&mut items);
        self.results = Some(self.parser.group(items));
    }

    // Chaining

    /// Forward this query's projected records into a new query over a
    /// different resource type, joined on `source` (here) = `target`
    /// (there)
    pub fn then<Q: PushdownProperty>(&self, source: P, target: Q) -> QueryResult<Query<Q>> {
        let results = self.results.as_ref().ok_or_else(|| {
            QueryError::Usage("then() requires a query that has been run".to_string())
        })?;

        let output = self.output();
        let sample = results.iter().next();
        let mut link = ChainLink::new(output.column_names(sample));
        for item in results.iter() {
            let key = source.extract(item.resource());
            link.push(key, output.project_one(item));
        }

        let mut child = Query::<Q>::with_config(self.config.clone());
        child.clock = Arc::clone(&self.clock);
        child.chain = Some((target, link));
        Ok(child)
    }

    // Output

    /// Raw resources in result order
    pub fn to_resources(&self) -> QueryResult<Vec<&P::Resource>> {
        Ok(self.finished()?.iter().map(QueryItem::resource).collect())
    }

    /// Projected records in result order
    pub fn to_props(&self) -> QueryResult<Vec<Record>> {
        let output = self.output();
        Ok(output.project(self.finished()?.iter()))
    }

    /// Plain-text table, one labelled sub-table per group when grouped
    pub fn to_string(&self) -> QueryResult<String> {
        let output = self.output();
        Ok(match self.finished()? {
            ResultSet::Flat(items) => render_text(&output.project(items.iter())),
            ResultSet::Grouped(groups) => {
                render_text_grouped(&Self::grouped_records(&output, groups))
            }
        })
    }

    /// HTML table, one labelled sub-table per group when grouped
    pub fn to_html(&self) -> QueryResult<String> {
        let output = self.output();
        Ok(match self.finished()? {
            ResultSet::Flat(items) => render_html(&output.project(items.iter())),
            ResultSet::Grouped(groups) => {
                render_html_grouped(&Self::grouped_records(&output, groups))
            }
        })
    }

    /// Projected records as JSON: an array, or an object keyed by group
    pub fn to_json(&self) -> QueryResult<serde_json::Value> {
        let output = self.output();
        Ok(match self.finished()? {
            ResultSet::Flat(items) => serde_json::Value::Array(
                items.iter().map(|item| output.project_one(item).to_json()).collect(),
            ),
            ResultSet::Grouped(groups) => {
                let mut map = serde_json::Map::new();
                for group in groups {
                    map.insert(
                        group.key.to_string(),
                        serde_json::Value::Array(
                            group
                                .items
                                .iter()
                                .map(|item| output.project_one(item).to_json())
                                .collect(),
                        ),
                    );
                }
                serde_json::Value::Object(map)
            }
        })
    }

    /// The result set itself, for callers that want direct access
    pub fn results(&self) -> QueryResult<&ResultSet<P::Resource>> {
        self.finished()
    }

    // Internals

    fn output(&self) -> QueryOutput<P> {
        let spec = if self.selection.is_empty() {
            SelectSpec::All
        } else {
            SelectSpec::Explicit(self.selection.clone())
        };
        QueryOutput::new(spec)
    }

    fn grouped_records(
        output: &QueryOutput<P>,
        groups: &[crate::results::ResultGroup<P::Resource>],
    ) -> Vec<(String, Vec<Record>)> {
        groups
            .iter()
            .map(|group| (group.key.to_string(), output.project(group.items.iter())))
            .collect()
    }

    fn scopes(&self) -> Vec<FilterParams> {
        if self.across_all_projects {
            vec![FilterParams::new().with("all_tenants", true)]
        } else if !self.projects.is_empty() {
            self.projects
                .iter()
                .map(|id| {
                    FilterParams::new()
                        .with("project_id", id.as_str())
                        .with("all_tenants", true)
                })
                .collect()
        } else {
            Vec::new()
        }
    }

    fn ensure_configurable(&self, operation: &str) -> QueryResult<()> {
        if self.results.is_some() {
            return Err(QueryError::Usage(format!(
                "{}() is not allowed after the query has run",
                operation
            )));
        }
        Ok(())
    }

    fn ensure_not_run(&self) -> QueryResult<()> {
        if self.results.is_some() {
            return Err(QueryError::Usage(
                "a query runs exactly once; build a new query instead".to_string(),
            ));
        }
        Ok(())
    }

    fn finished(&self) -> QueryResult<&ResultSet<P::Resource>> {
        self.results.as_ref().ok_or_else(|| {
            QueryError::Usage("query has not been run yet".to_string())
        })
    }
}
