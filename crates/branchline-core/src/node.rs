//! The timeline node model.
//!
//! A [`Node`] is one work item on the timeline. Nodes point at their parents
//! through an ordered list of [`NodeId`]s; an empty list marks a root. The
//! first parent is the one a node follows when lanes are assigned.
//!
//! Nodes deserialize from the camel-cased JSON the editor stores:
//!
//! ```
//! use branchline_core::node::{Node, NodeStatus};
//!
//! let node: Node = serde_json::from_str(r#"{
//!     "id": "n2",
//!     "date": "2024-03-01",
//!     "status": "standby",
//!     "content": "Prototype the importer",
//!     "parentIds": ["n1"]
//! }"#).unwrap();
//!
//! assert_eq!(node.status(), NodeStatus::Standby);
//! assert_eq!(node.parent_ids().len(), 1);
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

use crate::identifier::NodeId;

/// Error returned when a node date cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid date `{input}`: expected RFC 3339 or YYYY-MM-DD")]
pub struct DateError {
    input: String,
}

/// Parses a node date.
///
/// Accepts an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date which is read
/// as midnight UTC.
pub fn parse_date(text: &str) -> Result<OffsetDateTime, DateError> {
    if let Ok(date) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(date);
    }

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| DateError {
            input: text.to_string(),
        })
}

mod date_format {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::{OffsetDateTime, format_description::well_known::Rfc3339};

    pub(super) fn serialize<S: Serializer>(
        date: &OffsetDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let text = date.format(&Rfc3339).map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OffsetDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_date(&text).map_err(de::Error::custom)
    }
}

/// Progress state of a node.
///
/// Status only affects presentation: the resolved color and whether the edge
/// leading into the node is drawn dashed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    #[default]
    Active,
    Completed,
    Abandoned,
    Standby,
}

impl NodeStatus {
    /// Whether an edge into a node with this status is drawn dashed.
    pub fn is_dashed(self) -> bool {
        matches!(self, Self::Abandoned | Self::Standby)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
            Self::Standby => "standby",
        };
        f.write_str(name)
    }
}

impl FromStr for NodeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "abandoned" => Ok(Self::Abandoned),
            "standby" => Ok(Self::Standby),
            _ => Err(format!(
                "invalid status `{s}`, valid values: active, completed, abandoned, standby"
            )),
        }
    }
}

/// A single work item on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    id: NodeId,

    #[serde(with = "date_format")]
    date: OffsetDateTime,

    #[serde(default)]
    status: NodeStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(default)]
    content: String,

    #[serde(default)]
    parent_ids: Vec<NodeId>,
}

impl Node {
    /// Creates an active root node with empty content.
    pub fn new(id: impl Into<NodeId>, date: OffsetDateTime) -> Self {
        Self {
            id: id.into(),
            date,
            status: NodeStatus::default(),
            title: None,
            content: String::new(),
            parent_ids: Vec::new(),
        }
    }

    /// Sets the parent list, first parent first.
    pub fn with_parents<I, P>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<NodeId>,
    {
        self.parent_ids = parents.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn date(&self) -> OffsetDateTime {
        self.date
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Parent ids in the order they were listed.
    pub fn parent_ids(&self) -> &[NodeId] {
        &self.parent_ids
    }

    /// Returns true if the node lists no parents at all.
    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }
}

/// Flow direction of the graph diagram.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Ranks grow downward, lanes grow rightward.
    #[default]
    Vertical,
    /// Ranks grow rightward, lanes grow downward.
    Horizontal,
}

/// How a sheet is presented.
///
/// `Timeline` is a plain chronological list and never goes through the graph
/// layout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Vertical,
    Horizontal,
    Timeline,
}

impl ViewMode {
    /// The graph orientation for this mode, or `None` for the chronological list.
    pub fn orientation(self) -> Option<Orientation> {
        match self {
            Self::Vertical => Some(Orientation::Vertical),
            Self::Horizontal => Some(Orientation::Horizontal),
            Self::Timeline => None,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Timeline => "timeline",
        };
        f.write_str(name)
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            "timeline" => Ok(Self::Timeline),
            _ => Err(format!(
                "invalid view mode `{s}`, valid values: vertical, horizontal, timeline"
            )),
        }
    }
}
