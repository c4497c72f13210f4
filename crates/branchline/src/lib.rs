//! Branchline - layout for branching, mergeable timelines.
//!
//! Dated nodes with zero or more parents form a DAG. This crate assigns each
//! node a rank and a lane, colors it, and produces box positions and Bezier
//! connectors for a vertical or horizontal graph, or a plain chronological
//! list for the timeline view.

pub mod config;
pub mod layout;
pub mod sheet;
pub mod view;

mod error;
mod structure;

pub use branchline_core::{color, geometry, identifier, node};

pub use error::BranchlineError;

use log::{debug, info};
use serde::Serialize;

use config::AppConfig;
use geometry::Size;
use layout::{Engine, Layout};
use node::{Node, Orientation, ViewMode};
use sheet::Sheet;

/// The result of rendering a sheet in one of the view modes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum View<'a> {
    /// A positioned graph in vertical or horizontal flow.
    Graph {
        orientation: Orientation,
        #[serde(flatten)]
        layout: Layout<'a>,
    },
    /// Nodes in date order, without layout.
    Timeline { nodes: Vec<&'a Node> },
}

impl<'a> View<'a> {
    /// The graph layout, if this is a graph view.
    pub fn layout(&self) -> Option<&Layout<'a>> {
        match self {
            View::Graph { layout, .. } => Some(layout),
            View::Timeline { .. } => None,
        }
    }
}

/// Builder for laying out timelines.
///
/// # Examples
///
/// ```
/// use branchline::{TimelineBuilder, geometry::Size, node::ViewMode, sheet::Workbook};
///
/// let source = r#"[
///     {"id": "plan", "date": "2024-01-01"},
///     {"id": "build", "date": "2024-01-08", "parentIds": ["plan"]}
/// ]"#;
///
/// let workbook = Workbook::from_json(source).expect("Failed to parse");
/// let sheet = workbook.sheet(None).expect("No sheet");
///
/// let builder = TimelineBuilder::default();
/// let view = builder
///     .render(sheet, ViewMode::Vertical, Size::default())
///     .expect("Failed to render");
///
/// assert_eq!(view.layout().map(|layout| layout.edges().len()), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    config: AppConfig,
}

impl TimelineBuilder {
    /// Create a new timeline builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build a layout engine from the configured spacing and colors.
    ///
    /// # Errors
    ///
    /// Returns [`BranchlineError::Config`] when a configured color does not parse.
    pub fn engine(&self) -> Result<Engine, BranchlineError> {
        let palette = self.config.style().palette().map_err(BranchlineError::Config)?;
        Ok(Engine::new(self.config.layout().clone(), palette))
    }

    /// Lay out `nodes` in the given flow direction.
    ///
    /// # Errors
    ///
    /// Returns [`BranchlineError::Config`] when a configured color does not parse.
    pub fn layout<'a, I>(
        &self,
        nodes: I,
        orientation: Orientation,
        viewport: Size,
    ) -> Result<Layout<'a>, BranchlineError>
    where
        I: IntoIterator<Item = &'a Node>,
    {
        Ok(self.engine()?.calculate(nodes, orientation, viewport))
    }

    /// Render the visible part of `sheet` in the requested view mode.
    ///
    /// Collapsed nodes hide their descendants before layout. The timeline mode
    /// skips the graph layout and lists the visible nodes by date.
    ///
    /// # Errors
    ///
    /// Returns [`BranchlineError::Config`] when a configured color does not parse.
    pub fn render<'a>(
        &self,
        sheet: &'a Sheet,
        mode: ViewMode,
        viewport: Size,
    ) -> Result<View<'a>, BranchlineError> {
        info!(sheet = sheet.name(), mode:%; "Rendering sheet");

        let collapsed = sheet.collapsed();
        let visible = view::visible_nodes(sheet.nodes(), &collapsed);
        debug!(
            total = sheet.nodes().len(),
            visible = visible.len();
            "Collapse filter applied"
        );

        let rendered = match mode.orientation() {
            Some(orientation) => View::Graph {
                orientation,
                layout: self.layout(visible, orientation, viewport)?,
            },
            None => View::Timeline {
                nodes: view::chronological(visible),
            },
        };

        Ok(rendered)
    }
}
