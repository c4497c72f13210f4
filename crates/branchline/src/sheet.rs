//! Sheet documents.
//!
//! Node collections are stored as named sheets. A document on disk may hold a
//! workbook of sheets, a single sheet, or a bare node array; [`Workbook::from_json`]
//! accepts all three:
//!
//! ```json
//! { "sheets": [ { "name": "Roadmap", "nodes": [ ... ], "collapsed": ["n3"] } ] }
//! { "name": "Roadmap", "nodes": [ ... ] }
//! [ { "id": "n1", "date": "2024-01-01", "parentIds": [] } ]
//! ```

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use branchline_core::{identifier::NodeId, node::Node};

use crate::error::BranchlineError;

fn default_sheet_name() -> String {
    "Untitled".to_string()
}

/// A named node collection with its collapse state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    #[serde(default = "default_sheet_name")]
    name: String,

    #[serde(default)]
    nodes: Vec<Node>,

    /// Ids of nodes whose descendants are folded away.
    #[serde(default)]
    collapsed: Vec<NodeId>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            nodes,
            collapsed: Vec::new(),
        }
    }

    pub fn with_collapsed<I, C>(mut self, collapsed: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<NodeId>,
    {
        self.collapsed = collapsed.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The collapse state as a set.
    pub fn collapsed(&self) -> HashSet<NodeId> {
        self.collapsed.iter().copied().collect()
    }
}

/// An ordered collection of sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Parses a workbook, a single sheet, or a bare node array.
    ///
    /// # Errors
    ///
    /// Returns [`BranchlineError::Json`] when the text is not valid JSON or a
    /// node does not match the expected shape.
    pub fn from_json(source: &str) -> Result<Self, BranchlineError> {
        let value: Value = serde_json::from_str(source)?;

        let workbook = match value {
            Value::Array(_) => {
                let nodes: Vec<Node> = serde_json::from_value(value)?;
                Self::new(vec![Sheet::new(default_sheet_name(), nodes)])
            }
            Value::Object(ref fields) if fields.contains_key("sheets") => {
                serde_json::from_value(value)?
            }
            _ => Self::new(vec![serde_json::from_value(value)?]),
        };

        debug!(sheet_count = workbook.sheets.len(); "Workbook parsed");
        Ok(workbook)
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Looks up a sheet by name, or returns the first sheet when `name` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BranchlineError::Sheet`] when the workbook is empty or no
    /// sheet carries `name`.
    pub fn sheet(&self, name: Option<&str>) -> Result<&Sheet, BranchlineError> {
        match name {
            Some(name) => self
                .sheets
                .iter()
                .find(|sheet| sheet.name == name)
                .ok_or_else(|| {
                    let known: Vec<&str> = self.sheets.iter().map(Sheet::name).collect();
                    BranchlineError::Sheet(format!(
                        "no sheet named `{name}` (available: {})",
                        known.join(", ")
                    ))
                }),
            None => self
                .sheets
                .first()
                .ok_or_else(|| BranchlineError::Sheet("workbook has no sheets".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_node_array() {
        let workbook = Workbook::from_json(
            r#"[{"id": "a", "date": "2024-01-01"}, {"id": "b", "date": "2024-01-02", "parentIds": ["a"]}]"#,
        )
        .unwrap();

        let sheet = workbook.sheet(None).unwrap();
        assert_eq!(sheet.name(), "Untitled");
        assert_eq!(sheet.nodes().len(), 2);
        assert!(sheet.collapsed().is_empty());
    }

    #[test]
    fn test_single_sheet_with_collapsed() {
        let workbook = Workbook::from_json(
            r#"{"name": "Plan", "nodes": [{"id": "a", "date": "2024-01-01"}], "collapsed": ["a"]}"#,
        )
        .unwrap();

        let sheet = workbook.sheet(Some("Plan")).unwrap();
        assert!(sheet.collapsed().contains(&NodeId::new("a")));
    }

    #[test]
    fn test_workbook_lookup_by_name() {
        let workbook = Workbook::from_json(
            r#"{"sheets": [
                {"name": "One", "nodes": []},
                {"name": "Two", "nodes": [{"id": "x", "date": "2024-05-05T12:00:00Z"}]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(workbook.sheets().len(), 2);
        assert_eq!(workbook.sheet(None).unwrap().name(), "One");
        assert_eq!(workbook.sheet(Some("Two")).unwrap().nodes().len(), 1);
    }

    #[test]
    fn test_missing_sheet_lists_names() {
        let workbook = Workbook::new(vec![Sheet::new("Alpha", Vec::new())]);
        let err = workbook.sheet(Some("Beta")).unwrap_err();

        assert!(matches!(err, BranchlineError::Sheet(_)));
        assert!(err.to_string().contains("Alpha"));
    }

    #[test]
    fn test_empty_workbook() {
        let err = Workbook::default().sheet(None).unwrap_err();
        assert!(err.to_string().contains("no sheets"));
    }

    #[test]
    fn test_invalid_node_is_json_error() {
        let err = Workbook::from_json(r#"[{"id": "a", "date": "soon"}]"#).unwrap_err();
        assert!(matches!(err, BranchlineError::Json(_)));
    }
}
