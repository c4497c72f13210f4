//! Lane and status colors.

use branchline_core::{
    color::{
        Color, DEFAULT_ABANDONED, DEFAULT_ABANDONED_EDGE, DEFAULT_PALETTE, DEFAULT_STANDBY,
        DEFAULT_STANDBY_EDGE,
    },
    node::NodeStatus,
};

/// Colors used to paint nodes and edges.
///
/// Nodes take the lane color `lanes[lane % lanes.len()]` unless their status
/// overrides it. Edges take the parent's resolved color unless the child's
/// status overrides it with the lighter edge variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    lanes: Vec<Color>,
    abandoned: Color,
    standby: Color,
    abandoned_edge: Color,
    standby_edge: Color,
}

impl Palette {
    /// Creates a palette. An empty lane list keeps the built-in lane colors.
    pub fn new(
        lanes: Vec<Color>,
        abandoned: Color,
        standby: Color,
        abandoned_edge: Color,
        standby_edge: Color,
    ) -> Self {
        let lanes = if lanes.is_empty() {
            Self::default().lanes
        } else {
            lanes
        };
        Self {
            lanes,
            abandoned,
            standby,
            abandoned_edge,
            standby_edge,
        }
    }

    pub fn lanes(&self) -> &[Color] {
        &self.lanes
    }

    pub fn lane_color(&self, lane: usize) -> Color {
        self.lanes[lane % self.lanes.len()]
    }

    /// Resolved color of a node sitting on `lane`.
    pub fn node_color(&self, lane: usize, status: NodeStatus) -> Color {
        match status {
            NodeStatus::Abandoned => self.abandoned,
            NodeStatus::Standby => self.standby,
            NodeStatus::Active | NodeStatus::Completed => self.lane_color(lane),
        }
    }

    /// Resolved color of the edge from a parent painted `parent_color` into a
    /// child with `child_status`.
    pub fn edge_color(&self, parent_color: Color, child_status: NodeStatus) -> Color {
        match child_status {
            NodeStatus::Abandoned => self.abandoned_edge,
            NodeStatus::Standby => self.standby_edge,
            NodeStatus::Active | NodeStatus::Completed => parent_color,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let builtin = |hex: &str| Color::new(hex).expect("built-in colors are valid");
        Self {
            lanes: DEFAULT_PALETTE.iter().map(|hex| builtin(hex)).collect(),
            abandoned: builtin(DEFAULT_ABANDONED),
            standby: builtin(DEFAULT_STANDBY),
            abandoned_edge: builtin(DEFAULT_ABANDONED_EDGE),
            standby_edge: builtin(DEFAULT_STANDBY_EDGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(hex: &str) -> Color {
        Color::new(hex).unwrap()
    }

    #[test]
    fn test_lane_colors_wrap() {
        let palette = Palette::default();
        let count = palette.lanes().len();

        assert_eq!(palette.lane_color(0), palette.lane_color(count));
        assert_ne!(palette.lane_color(0), palette.lane_color(1));
    }

    #[test]
    fn test_status_overrides_node_color() {
        let palette = Palette::default();

        assert_eq!(palette.node_color(3, NodeStatus::Active), palette.lane_color(3));
        assert_eq!(
            palette.node_color(3, NodeStatus::Completed),
            palette.lane_color(3)
        );
        assert_eq!(
            palette.node_color(3, NodeStatus::Abandoned),
            color(DEFAULT_ABANDONED)
        );
        assert_eq!(
            palette.node_color(3, NodeStatus::Standby),
            color(DEFAULT_STANDBY)
        );
    }

    #[test]
    fn test_edge_color_follows_parent_unless_child_overrides() {
        let palette = Palette::default();
        let parent = color("#123456");

        assert_eq!(palette.edge_color(parent, NodeStatus::Active), parent);
        assert_eq!(palette.edge_color(parent, NodeStatus::Completed), parent);
        assert_eq!(
            palette.edge_color(parent, NodeStatus::Abandoned),
            color(DEFAULT_ABANDONED_EDGE)
        );
        assert_eq!(
            palette.edge_color(parent, NodeStatus::Standby),
            color(DEFAULT_STANDBY_EDGE)
        );
    }

    #[test]
    fn test_empty_lane_list_keeps_defaults() {
        let palette = Palette::new(
            Vec::new(),
            color("gray"),
            color("orange"),
            color("silver"),
            color("gold"),
        );

        assert_eq!(palette.lanes(), Palette::default().lanes());
        assert_eq!(palette.node_color(0, NodeStatus::Standby), color("orange"));
    }

    #[test]
    fn test_custom_single_color_palette() {
        let palette = Palette::new(
            vec![color("red")],
            color("gray"),
            color("orange"),
            color("silver"),
            color("gold"),
        );

        assert_eq!(palette.lane_color(0), color("red"));
        assert_eq!(palette.lane_color(5), color("red"));
    }
}
