//! Result wrappers
//!
//! Raw resources are wrapped once per item after listing. A wrapped item
//! is read-only from then on, with one exception: chaining may attach
//! forwarded properties originating from a parent query.

use sq_core::PropertyValue;

/// One listed resource plus any properties forwarded from a parent query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryItem<R> {
    resource: R,
    forwarded: Vec<(String, PropertyValue)>,
}

impl<R> QueryItem<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            forwarded: Vec::new(),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn into_resource(self) -> R {
        self.resource
    }

    /// Properties attached by chaining, in forwarding order
    pub fn forwarded(&self) -> &[(String, PropertyValue)] {
        &self.forwarded
    }

    pub fn attach_forwarded(&mut self, fields: Vec<(String, PropertyValue)>) {
        self.forwarded = fields;
    }
}

/// One group of results, keyed by the grouping value or range name
#[derive(Debug, Clone)]
pub struct ResultGroup<R> {
    pub key: PropertyValue,
    pub items: Vec<QueryItem<R>>,
}

/// Results of a finished query: an ordered list, or ordered groups when
/// grouping was configured
#[derive(Debug, Clone)]
pub enum ResultSet<R> {
    Flat(Vec<QueryItem<R>>),
    Grouped(Vec<ResultGroup<R>>),
}

impl<R> ResultSet<R> {
    /// Total number of items across all groups
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(items) => items.len(),
            Self::Grouped(groups) => groups.iter().map(|g| g.items.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every item in result order, crossing group boundaries
    pub fn iter(&self) -> Box<dyn Iterator<Item = &QueryItem<R>> + '_> {
        match self {
            Self::Flat(items) => Box::new(items.iter()),
            Self::Grouped(groups) => {
                Box::new(groups.iter().flat_map(|g| g.items.iter()))
            }
        }
    }

    /// Mutable iteration, used when chaining attaches forwarded properties
    pub fn iter_mut(&mut self) -> Box<dyn Iterator<Item = &mut QueryItem<R>> + '_> {
        match self {
            Self::Flat(items) => Box::new(items.iter_mut()),
            Self::Grouped(groups) => {
                Box::new(groups.iter_mut().flat_map(|g| g.items.iter_mut()))
            }
        }
    }
}
