//! Configuration types for Branchline layouts.
//!
//! This module provides configuration structures that control how timelines
//! are laid out and painted. All types implement [`serde::Deserialize`] for
//! loading from external sources, and every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Node box size, gaps, margins, and the default view mode.
//! - [`StyleConfig`] - Lane palette and status override colors.
//!
//! # Example
//!
//! ```
//! # use branchline::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().palette().is_ok());
//! assert_eq!(config.layout().node_width(), 240.0);
//! ```

use serde::Deserialize;

use branchline_core::{
    color::{
        Color, DEFAULT_ABANDONED, DEFAULT_ABANDONED_EDGE, DEFAULT_STANDBY, DEFAULT_STANDBY_EDGE,
    },
    geometry::Size,
    node::ViewMode,
};

use crate::layout::Palette;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Spacing and sizing of the graph diagram.
///
/// In vertical flow a node sits at
/// `(lane * (node_width + lane_gap) + margin, rank * (node_height + rank_gap) + margin)`;
/// in horizontal flow at
/// `(rank * horizontal_rank_gap + margin, lane * (node_height + lane_gap) + margin)`.
/// The canvas extends `padding` past the farthest node edge.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    node_width: f32,
    node_height: f32,
    lane_gap: f32,
    rank_gap: f32,
    horizontal_rank_gap: f32,
    margin: f32,
    padding: f32,
    /// View mode used when the caller does not pick one.
    mode: ViewMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 240.0,
            node_height: 96.0,
            lane_gap: 32.0,
            rank_gap: 48.0,
            horizontal_rank_gap: 320.0,
            margin: 40.0,
            padding: 40.0,
            mode: ViewMode::default(),
        }
    }
}

impl LayoutConfig {
    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    pub fn node_height(&self) -> f32 {
        self.node_height
    }

    /// Size of every node box.
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    /// Gap between neighbouring lanes.
    pub fn lane_gap(&self) -> f32 {
        self.lane_gap
    }

    /// Gap between neighbouring ranks in vertical flow.
    pub fn rank_gap(&self) -> f32 {
        self.rank_gap
    }

    /// Distance between rank origins in horizontal flow.
    pub fn horizontal_rank_gap(&self) -> f32 {
        self.horizontal_rank_gap
    }

    /// Offset of the first rank and lane from the canvas origin.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Space kept past the farthest node edge.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Sets the node box size.
    pub fn with_node_size(mut self, size: Size) -> Self {
        self.node_width = size.width();
        self.node_height = size.height();
        self
    }

    /// Sets the lane gap and the vertical-flow rank gap.
    pub fn with_gaps(mut self, lane_gap: f32, rank_gap: f32) -> Self {
        self.lane_gap = lane_gap;
        self.rank_gap = rank_gap;
        self
    }

    pub fn with_horizontal_rank_gap(mut self, gap: f32) -> Self {
        self.horizontal_rank_gap = gap;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Visual styling configuration.
///
/// Colors are CSS color strings. Unset fields fall back to the built-in
/// palette.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Lane colors, cycled by lane index.
    #[serde(default)]
    palette: Vec<String>,

    #[serde(default)]
    abandoned_color: Option<String>,

    #[serde(default)]
    standby_color: Option<String>,

    #[serde(default)]
    abandoned_edge_color: Option<String>,

    #[serde(default)]
    standby_edge_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style with the given lane colors and default status colors.
    pub fn with_palette<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            palette: colors.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parses the configured colors into a [`Palette`].
    ///
    /// # Errors
    ///
    /// Returns an error naming the first color string that cannot be parsed.
    pub fn palette(&self) -> Result<Palette, String> {
        let lanes = self
            .palette
            .iter()
            .map(|color| Color::new(color))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("Invalid palette color in config: {err}"))?;

        let status_color = |configured: &Option<String>, fallback: &str, name: &str| {
            Color::new(configured.as_deref().unwrap_or(fallback))
                .map_err(|err| format!("Invalid {name} in config: {err}"))
        };

        Ok(Palette::new(
            lanes,
            status_color(&self.abandoned_color, DEFAULT_ABANDONED, "abandoned_color")?,
            status_color(&self.standby_color, DEFAULT_STANDBY, "standby_color")?,
            status_color(
                &self.abandoned_edge_color,
                DEFAULT_ABANDONED_EDGE,
                "abandoned_edge_color",
            )?,
            status_color(
                &self.standby_edge_color,
                DEFAULT_STANDBY_EDGE,
                "standby_edge_color",
            )?,
        ))
    }
}
