//! Post-run sorting and grouping
//!
//! Sorting is a stable composed sort over property values: keys are
//! applied least-significant-first, so the first key of the most recent
//! `sort_by` call dominates and ties preserve prior relative order.
//! Grouping buckets results by extracted value (one group per distinct
//! value, first-observation order) or by named value ranges. Sorting runs
//! before grouping, so group members come out ordered.

use crate::results::{QueryItem, ResultGroup, ResultSet};
use sq_core::PropertyValue;
use sq_properties::ResourceProperty;

/// Sort direction for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Group key for results whose value matched no named range
pub const UNGROUPED: &str = "ungrouped";

/// Grouping configuration
#[derive(Debug, Clone)]
pub enum GroupSpec<P> {
    /// No grouping: results stay an ordered list
    None,
    /// One group per distinct value, keys in first-observation order
    Auto(P),
    /// Named groups by value-set membership, in declared order
    Ranges {
        property: P,
        ranges: Vec<(String, Vec<PropertyValue>)>,
        /// Collect results matching no range into an extra group
        include_missing: bool,
    },
}

impl<P> Default for GroupSpec<P> {
    fn default() -> Self {
        Self::None
    }
}

/// Sorter and grouper for one resource type
#[derive(Debug, Clone)]
pub struct QueryParser<P> {
    sort_keys: Vec<(P, SortDirection)>,
    group: GroupSpec<P>,
}

impl<P> Default for QueryParser<P> {
    fn default() -> Self {
        Self {
            sort_keys: Vec::new(),
            group: GroupSpec::None,
        }
    }
}

impl<P: ResourceProperty> QueryParser<P> {
    pub fn new() -> Self {
        Self {
            sort_keys: Vec::new(),
            group: GroupSpec::None,
        }
    }

    /// Replace the sort specification. The first key is the primary key.
    pub fn sort_by(&mut self, keys: &[(P, SortDirection)]) {
        self.sort_keys = keys.to_vec();
    }

    /// Group by distinct values of a property
    pub fn group_by(&mut self, property: P) {
        self.group = GroupSpec::Auto(property);
    }

    /// Group by named value ranges
    pub fn group_by_ranges(
        &mut self,
        property: P,
        ranges: Vec<(String, Vec<PropertyValue>)>,
        include_missing: bool,
    ) {
        self.group = GroupSpec::Ranges {
            property,
            ranges,
            include_missing,
        };
    }

    pub fn is_grouped(&self) -> bool {
        !matches!(self.group, GroupSpec::None)
    }

    /// Stable composed sort: iterate keys in reverse so the first-listed
    /// key ends up dominating
    pub fn sort(&self, items: &mut [QueryItem<P::Resource>]) {
        for (property, direction) in self.sort_keys.iter().rev() {
            items.sort_by(|a, b| {
                let ordering = property
                    .extract(a.resource())
                    .cmp(&property.extract(b.resource()));
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
    }

    /// Bucket sorted items according to the grouping configuration
    pub fn group(&self, items: Vec<QueryItem<P::Resource>>) -> ResultSet<P::Resource> {
        match &self.group {
            GroupSpec::None => ResultSet::Flat(items),
            GroupSpec::Auto(property) => {
                let mut groups: Vec<ResultGroup<P::Resource>> = Vec::new();
                for item in items {
                    let key = property.extract(item.resource());
                    match groups.iter_mut().find(|g| g.key == key) {
                        Some(group) => group.items.push(item),
                        None => groups.push(ResultGroup {
                            key,
                            items: vec![item],
                        }),
                    }
                }
                ResultSet::Grouped(groups)
            }
            GroupSpec::Ranges {
                property,
                ranges,
                include_missing,
            } => {
                let mut groups: Vec<ResultGroup<P::Resource>> = ranges
                    .iter()
                    .map(|(name, _)| ResultGroup {
                        key: PropertyValue::String(name.clone()),
                        items: Vec::new(),
                    })
                    .collect();
                let mut missing: Vec<QueryItem<P::Resource>> = Vec::new();

                for item in items {
                    let value = property.extract(item.resource());
                    match ranges.iter().position(|(_, members)| members.contains(&value)) {
                        Some(index) => groups[index].items.push(item),
                        None if *include_missing => missing.push(item),
                        None => {}
                    }
                }

                if *include_missing {
                    groups.push(ResultGroup {
                        key: PropertyValue::String(UNGROUPED.to_string()),
                        items: missing,
                    });
                }
                ResultSet::Grouped(groups)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{server, servers_to_items};
    use sq_models::ServerStatus;
    use sq_properties::ServerProperty;

    #[test]
    fn test_sort_direction_parsing() {
        assert_eq!(SortDirection::from_str("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::from_str("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::from_str("sideways"), None);
    }

    #[test]
    fn test_two_key_sort_primary_dominates() {
        // Primary: flavor desc. Secondary: name asc within equal flavors.
        let mut items = servers_to_items(vec![
            server("b", ServerStatus::Active, "m1.small"),
            server("a", ServerStatus::Active, "m1.small"),
            server("c", ServerStatus::Active, "m1.xlarge"),
        ]);

        let mut parser = QueryParser::new();
        parser.sort_by(&[
            (ServerProperty::FlavorId, SortDirection::Desc),
            (ServerProperty::Name, SortDirection::Asc),
        ]);
        parser.sort(&mut items);

        let names: Vec<_> = items
            .iter()
            .map(|item| item.resource().name.clone())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_is_stable_for_unsorted_properties() {
        let mut items = servers_to_items(vec![
            server("z", ServerStatus::Active, "m1.small"),
            server("y", ServerStatus::Active, "m1.small"),
            server("x", ServerStatus::Active, "m1.small"),
        ]);

        let mut parser = QueryParser::new();
        parser.sort_by(&[(ServerProperty::FlavorId, SortDirection::Asc)]);
        parser.sort(&mut items);

        // All flavors equal: input order must be preserved
        let names: Vec<_> = items
            .iter()
            .map(|item| item.resource().name.clone())
            .collect();
        assert_eq!(names, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_auto_grouping_partitions_by_distinct_value() {
        let items = servers_to_items(vec![
            server("1", ServerStatus::Active, "a"),
            server("2", ServerStatus::Active, "a"),
            server("3", ServerStatus::Active, "b"),
            server("4", ServerStatus::Active, "c"),
            server("5", ServerStatus::Active, "b"),
        ]);

        let mut parser = QueryParser::new();
        parser.group_by(ServerProperty::FlavorId);

        match parser.group(items) {
            ResultSet::Grouped(groups) => {
                assert_eq!(groups.len(), 3);
                // First-observation order: a, b, c
                assert_eq!(groups[0].key, PropertyValue::String("a".into()));
                assert_eq!(groups[0].items.len(), 2);
                assert_eq!(groups[1].key, PropertyValue::String("b".into()));
                assert_eq!(groups[1].items.len(), 2);
                assert_eq!(groups[2].key, PropertyValue::String("c".into()));
                assert_eq!(groups[2].items.len(), 1);
                for group in &groups {
                    assert!(group.items.iter().all(|item| {
                        ServerProperty::FlavorId.extract(item.resource()) == group.key
                    }));
                }
            }
            ResultSet::Flat(_) => panic!("expected grouped results"),
        }
    }

    #[test]
    fn test_range_grouping_with_missing_catch_all() {
        let items = servers_to_items(vec![
            server("1", ServerStatus::Active, "m1.small"),
            server("2", ServerStatus::Shutoff, "m1.small"),
            server("3", ServerStatus::Error, "m1.small"),
        ]);

        let mut parser = QueryParser::new();
        parser.group_by_ranges(
            ServerProperty::Status,
            vec![("running".to_string(), vec!["ACTIVE".into()])],
            true,
        );

        match parser.group(items) {
            ResultSet::Grouped(groups) => {
                assert_eq!(groups.len(), 2);
                assert_eq!(groups[0].key, PropertyValue::String("running".into()));
                assert_eq!(groups[0].items.len(), 1);
                assert_eq!(groups[1].key, PropertyValue::String(UNGROUPED.into()));
                assert_eq!(groups[1].items.len(), 2);
            }
            ResultSet::Flat(_) => panic!("expected grouped results"),
        }
    }

    #[test]
    fn test_range_grouping_without_catch_all_drops_unmatched() {
        let items = servers_to_items(vec![
            server("1", ServerStatus::Active, "m1.small"),
            server("2", ServerStatus::Error, "m1.small"),
        ]);

        let mut parser = QueryParser::new();
        parser.group_by_ranges(
            ServerProperty::Status,
            vec![("running".to_string(), vec!["ACTIVE".into()])],
            false,
        );

        let grouped = parser.group(items);
        assert_eq!(grouped.len(), 1);
    }
}
