//! Selection, projection, and rendering
//!
//! Projects selected properties of each result into records, then renders
//! records as a plain-text table, an HTML table, or JSON. Forwarded
//! properties attached by chaining are appended after the selected
//! columns. An empty record set always renders an explicit message rather
//! than a bare table skeleton.

use crate::results::QueryItem;
use sq_core::PropertyValue;
use sq_properties::ResourceProperty;

/// Message rendered when a query matched nothing
pub const NO_RESULTS: &str = "No results found";

/// Which properties a query projects
#[derive(Debug, Clone)]
pub enum SelectSpec<P> {
    /// Every registered property of the resource type
    All,
    /// An explicit, insertion-ordered list
    Explicit(Vec<P>),
}

impl<P> Default for SelectSpec<P> {
    fn default() -> Self {
        Self::All
    }
}

/// One projected result: (property name, value) pairs in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, PropertyValue)>,
}

impl Record {
    pub fn new(fields: Vec<(String, PropertyValue)>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[(String, PropertyValue)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (name, value) in &self.fields {
            map.insert(name.clone(), serde_json::to_value(value).unwrap_or_default());
        }
        serde_json::Value::Object(map)
    }
}

/// Projector for one resource type
#[derive(Debug, Clone)]
pub struct QueryOutput<P> {
    spec: SelectSpec<P>,
}

impl<P> Default for QueryOutput<P> {
    fn default() -> Self {
        Self {
            spec: SelectSpec::All,
        }
    }
}

impl<P: ResourceProperty> QueryOutput<P> {
    pub fn new(spec: SelectSpec<P>) -> Self {
        Self { spec }
    }

    /// The properties this output projects, in column order
    pub fn properties(&self) -> Vec<P> {
        match &self.spec {
            SelectSpec::All => P::ALL.to_vec(),
            SelectSpec::Explicit(props) => props.clone(),
        }
    }

    /// Column names, including any forwarded columns visible on `sample`
    pub fn column_names(&self, sample: Option<&QueryItem<P::Resource>>) -> Vec<String> {
        let mut names: Vec<String> = self
            .properties()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        if let Some(item) = sample {
            names.extend(item.forwarded().iter().map(|(name, _)| name.clone()));
        }
        names
    }

    /// Project one result; missing data surfaces as the sentinel value
    pub fn project_one(&self, item: &QueryItem<P::Resource>) -> Record {
        let mut fields: Vec<(String, PropertyValue)> = self
            .properties()
            .iter()
            .map(|p| (p.name().to_string(), p.extract(item.resource())))
            .collect();
        fields.extend(item.forwarded().iter().cloned());
        Record::new(fields)
    }

    pub fn project<'a>(
        &self,
        items: impl Iterator<Item = &'a QueryItem<P::Resource>>,
    ) -> Vec<Record>
    where
        P::Resource: 'a,
    {
        items.map(|item| self.project_one(item)).collect()
    }
}

/// Render records as an aligned plain-text table
pub fn render_text(records: &[Record]) -> String {
    if records.is_empty() {
        return NO_RESULTS.to_string();
    }

    let headers: Vec<&str> = records[0]
        .fields()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            record
                .fields()
                .iter()
                .map(|(_, value)| value.to_string())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() && cell.len() > widths[index] {
                widths[index] = cell.len();
            }
        }
    }

    let mut out = String::new();
    render_text_row(&mut out, &headers, &widths);
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let separator_refs: Vec<&str> = separators.iter().map(String::as_str).collect();
    render_text_row(&mut out, &separator_refs, &widths);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        render_text_row(&mut out, &cells, &widths);
    }
    out
}

fn render_text_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let mut parts = Vec::with_capacity(cells.len());
    for (index, cell) in cells.iter().enumerate() {
        let width = widths.get(index).copied().unwrap_or(cell.len());
        parts.push(format!("{:<width$}", cell, width = width));
    }
    out.push_str(parts.join("  ").trim_end());
    out.push('\n');
}

/// Render labelled groups as one plain-text sub-table each, in group order
pub fn render_text_grouped(groups: &[(String, Vec<Record>)]) -> String {
    if groups.is_empty() {
        return NO_RESULTS.to_string();
    }
    let mut sections = Vec::with_capacity(groups.len());
    for (label, records) in groups {
        sections.push(format!("{}:\n{}", label, render_text(records)));
    }
    sections.join("\n")
}

/// Render records as an HTML table
pub fn render_html(records: &[Record]) -> String {
    if records.is_empty() {
        return format!("<p>{}</p>", NO_RESULTS);
    }

    let mut out = String::from("<table>\n<thead>\n<tr>");
    for (name, _) in records[0].fields() {
        out.push_str(&format!("<th>{}</th>", escape_html(name)));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for record in records {
        out.push_str("<tr>");
        for (_, value) in record.fields() {
            out.push_str(&format!("<td>{}</td>", escape_html(&value.to_string())));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>");
    out
}

/// Render labelled groups as one HTML sub-table each, in group order
pub fn render_html_grouped(groups: &[(String, Vec<Record>)]) -> String {
    if groups.is_empty() {
        return format!("<p>{}</p>", NO_RESULTS);
    }
    let mut sections = Vec::with_capacity(groups.len());
    for (label, records) in groups {
        sections.push(format!(
            "<h3>{}</h3>\n{}",
            escape_html(label),
            render_html(records)
        ));
    }
    sections.join("\n")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{server, servers_to_items};
    use sq_models::ServerStatus;
    use sq_properties::ServerProperty;

    fn output() -> QueryOutput<ServerProperty> {
        QueryOutput::new(SelectSpec::Explicit(vec![
            ServerProperty::Id,
            ServerProperty::Name,
            ServerProperty::Description,
        ]))
    }

    #[test]
    fn test_projection_uses_sentinel_for_missing_data() {
        let items = servers_to_items(vec![server("web", ServerStatus::Active, "m1.small")]);
        let records = output().project(items.iter());

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get("name"),
            Some(&PropertyValue::String("web".into()))
        );
        // description is absent on the fixture
        assert_eq!(records[0].get("description"), Some(&PropertyValue::NotFound));
    }

    #[test]
    fn test_projection_appends_forwarded_columns() {
        let mut items = servers_to_items(vec![server("web", ServerStatus::Active, "m1.small")]);
        items[0].attach_forwarded(vec![("owner".to_string(), "alice".into())]);

        let record = output().project_one(&items[0]);
        assert_eq!(
            record.fields().last().unwrap(),
            &("owner".to_string(), PropertyValue::String("alice".into()))
        );
    }

    #[test]
    fn test_text_table_layout() {
        let items = servers_to_items(vec![
            server("web", ServerStatus::Active, "m1.small"),
            server("db", ServerStatus::Shutoff, "m1.large"),
        ]);
        let rendered = render_text(&output().project(items.iter()));

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].starts_with("--"));
        assert!(lines[2].contains("web"));
        assert!(lines[3].contains("Not Found"));
    }

    #[test]
    fn test_empty_records_render_message() {
        assert_eq!(render_text(&[]), NO_RESULTS);
        assert!(render_html(&[]).contains(NO_RESULTS));
    }

    #[test]
    fn test_html_table_escapes_cells() {
        let records = vec![Record::new(vec![(
            "name".to_string(),
            PropertyValue::String("a<b>&c".into()),
        )])];
        let html = render_html(&records);
        assert!(html.contains("<td>a&lt;b&gt;&amp;c</td>"));
        assert!(html.starts_with("<table>"));
    }

    #[test]
    fn test_grouped_rendering_labels_sub_tables() {
        let items = servers_to_items(vec![server("web", ServerStatus::Active, "m1.small")]);
        let records = output().project(items.iter());
        let rendered = render_text_grouped(&[
            ("ACTIVE".to_string(), records),
            ("SHUTOFF".to_string(), vec![]),
        ]);

        assert!(rendered.starts_with("ACTIVE:\n"));
        assert!(rendered.contains("SHUTOFF:\n"));
        assert!(rendered.contains(NO_RESULTS));
    }

    #[test]
    fn test_record_to_json() {
        let record = Record::new(vec![
            ("id".to_string(), PropertyValue::String("s-1".into())),
            ("vcpus".to_string(), PropertyValue::Int(4)),
        ]);
        let json = record.to_json();
        assert_eq!(json["id"], "s-1");
        assert_eq!(json["vcpus"], 4);
    }
}
