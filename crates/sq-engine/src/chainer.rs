//! Query chaining
//!
//! A finished query forwards its projected records into a dependent query
//! over a different resource type, joined on a shared property value. The
//! link is a multi-map with an explicit cursor per key, so the two
//! forwarding policies are visible state transitions:
//!
//! - a key holding exactly one record broadcasts a copy to every child
//!   that shares the value (many-to-one, non-destructive);
//! - a key holding several records hands them out in order, one per
//!   child, and is exhausted when the cursor passes the end (one-to-many).
//!
//! A child whose value has no record, or whose queue ran dry, receives a
//! default record with every forwarded field set to the sentinel.

use crate::output::Record;
use sq_core::PropertyValue;

/// Queue of parent records for one link value
#[derive(Debug, Clone)]
struct ForwardQueue {
    records: Vec<Record>,
    cursor: usize,
}

/// Forwarded-property link between a parent and a child query
#[derive(Debug, Clone)]
pub struct ChainLink {
    /// Field names of the default record handed to unmatched children
    field_names: Vec<String>,
    forwarded: Vec<(PropertyValue, ForwardQueue)>,
}

impl ChainLink {
    pub fn new(field_names: Vec<String>) -> Self {
        Self {
            field_names,
            forwarded: Vec::new(),
        }
    }

    /// Append one parent record under its link value
    pub fn push(&mut self, key: PropertyValue, record: Record) {
        match self.forwarded.iter_mut().find(|(k, _)| *k == key) {
            Some((_, queue)) => queue.records.push(record),
            None => self.forwarded.push((
                key,
                ForwardQueue {
                    records: vec![record],
                    cursor: 0,
                },
            )),
        }
    }

    /// Number of distinct link values held
    pub fn len(&self) -> usize {
        self.forwarded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forwarded.is_empty()
    }

    /// Hand out the forwarded record for one child with this link value
    pub fn take(&mut self, key: &PropertyValue) -> Record {
        match self.forwarded.iter_mut().find(|(k, _)| k == key) {
            Some((_, queue)) if queue.records.len() == 1 => queue.records[0].clone(),
            Some((_, queue)) => {
                if queue.cursor < queue.records.len() {
                    let record = queue.records[queue.cursor].clone();
                    queue.cursor += 1;
                    record
                } else {
                    self.default_record()
                }
            }
            None => self.default_record(),
        }
    }

    /// The record handed to children with no forwarded data
    fn default_record(&self) -> Record {
        Record::new(
            self.field_names
                .iter()
                .map(|name| (name.clone(), PropertyValue::NotFound))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(vec![("name".to_string(), name.into())])
    }

    fn link() -> ChainLink {
        ChainLink::new(vec!["name".to_string()])
    }

    #[test]
    fn test_many_to_one_broadcasts_copies() {
        let mut link = link();
        link.push("x".into(), record("A"));

        // Two children share the value; both get the same record
        assert_eq!(link.take(&"x".into()), record("A"));
        assert_eq!(link.take(&"x".into()), record("A"));
        assert_eq!(link.take(&"x".into()), record("A"));
    }

    #[test]
    fn test_one_to_many_consumes_in_order_then_defaults() {
        let mut link = link();
        link.push("x".into(), record("rec1"));
        link.push("x".into(), record("rec2"));

        assert_eq!(link.take(&"x".into()), record("rec1"));
        assert_eq!(link.take(&"x".into()), record("rec2"));

        // Queue exhausted: the default sentinel record
        let third = link.take(&"x".into());
        assert_eq!(third.get("name"), Some(&PropertyValue::NotFound));
    }

    #[test]
    fn test_unknown_value_receives_default_record() {
        let mut link = link();
        link.push("x".into(), record("A"));

        let unmatched = link.take(&"y".into());
        assert_eq!(unmatched.fields().len(), 1);
        assert_eq!(unmatched.get("name"), Some(&PropertyValue::NotFound));
    }

    #[test]
    fn test_distinct_keys_kept_separate() {
        let mut link = link();
        link.push("x".into(), record("A"));
        link.push("y".into(), record("B"));

        assert_eq!(link.len(), 2);
        assert_eq!(link.take(&"y".into()), record("B"));
        assert_eq!(link.take(&"x".into()), record("A"));
    }
}
