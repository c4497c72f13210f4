//! Graph layout for branching timelines.
//!
//! The [`Engine`] turns a list of dated nodes into positioned boxes and
//! connectors in four passes:
//!
//! 1. **Ranks**: generation depth by bounded fixpoint iteration.
//! 2. **Lanes**: greedy track packing that lets a node follow its first parent.
//! 3. **Colors**: lane palette with status overrides.
//! 4. **Geometry**: box origins, Bezier connectors, and canvas size.
//!
//! The engine is a pure function of its inputs and never fails. Dangling
//! parent ids are ignored, cycles degrade to date-order ranks, and an empty
//! node list yields a canvas the size of the viewport.

mod edge;
mod lane;
mod palette;
mod placement;
mod rank;

pub use edge::CubicBezier;
pub use palette::Palette;

use log::{debug, info};
use serde::Serialize;

use branchline_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    identifier::NodeId,
    node::{Node, NodeStatus, Orientation},
};

use crate::{config::LayoutConfig, structure::NodeGraph};

/// A node with its resolved rank, lane, position, and color.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedNode<'a> {
    #[serde(flatten)]
    node: &'a Node,
    rank: usize,
    lane: usize,
    #[serde(flatten)]
    position: Point,
    color: Color,
}

impl<'a> RenderedNode<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    /// Top-left corner of the node box.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// A connector from a parent to one of its children.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedEdge {
    source: NodeId,
    target: NodeId,
    from: Point,
    to: Point,
    path: CubicBezier,
    color: Color,
    status: NodeStatus,
}

impl RenderedEdge {
    /// Id of the parent node.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Id of the child node.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Anchor point on the parent box.
    pub fn from(&self) -> Point {
        self.from
    }

    /// Anchor point on the child box.
    pub fn to(&self) -> Point {
        self.to
    }

    pub fn path(&self) -> CubicBezier {
        self.path
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Status of the child node; drives the dash style.
    pub fn status(&self) -> NodeStatus {
        self.status
    }

    /// Whether the connector should be drawn dashed.
    pub fn is_dashed(&self) -> bool {
        self.status.is_dashed()
    }
}

/// Renderable geometry for one set of nodes.
#[derive(Debug, Clone, Serialize)]
pub struct Layout<'a> {
    nodes: Vec<RenderedNode<'a>>,
    edges: Vec<RenderedEdge>,
    canvas: Size,
}

impl<'a> Layout<'a> {
    /// Rendered nodes, in the order the nodes were supplied.
    pub fn nodes(&self) -> &[RenderedNode<'a>] {
        &self.nodes
    }

    /// Rendered edges, grouped by child in supply order, parents in listed order.
    pub fn edges(&self) -> &[RenderedEdge] {
        &self.edges
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// The first rendered node carrying `id`.
    pub fn node(&self, id: NodeId) -> Option<&RenderedNode<'a>> {
        self.nodes.iter().find(|rendered| rendered.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The timeline layout engine.
///
/// # Examples
///
/// ```
/// use branchline::{
///     geometry::Size,
///     layout::Engine,
///     node::{Node, Orientation},
/// };
/// use time::macros::datetime;
///
/// let nodes = vec![
///     Node::new("plan", datetime!(2024-01-01 0:00 UTC)),
///     Node::new("build", datetime!(2024-01-08 0:00 UTC)).with_parents(["plan"]),
/// ];
///
/// let layout = Engine::default().calculate(&nodes, Orientation::Vertical, Size::default());
/// assert_eq!(layout.nodes().len(), 2);
/// assert_eq!(layout.edges().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: LayoutConfig,
    palette: Palette,
}

impl Engine {
    /// Create a new engine with the given spacing and colors.
    pub fn new(config: LayoutConfig, palette: Palette) -> Self {
        Self { config, palette }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Lay out `nodes` in the given flow direction.
    ///
    /// `viewport` only acts as a floor on the returned canvas size.
    pub fn calculate<'a, I>(&self, nodes: I, orientation: Orientation, viewport: Size) -> Layout<'a>
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let graph = NodeGraph::new(nodes);
        if graph.is_empty() {
            debug!("No nodes to lay out");
            return Layout {
                nodes: Vec::new(),
                edges: Vec::new(),
                canvas: viewport,
            };
        }

        let ranks = rank::assign(&graph);
        let lanes = lane::assign(&graph, ranks.as_slice());
        debug!(
            node_count = graph.len(),
            rank_passes = ranks.passes(),
            rank_converged = ranks.converged(),
            rank_fallback = ranks.fallback(),
            lane_count = lanes.lane_count();
            "Ranks and lanes assigned"
        );

        let colors: Vec<Color> = (0..graph.len())
            .map(|index| {
                self.palette
                    .node_color(lanes.get(index), graph.node(index).status())
            })
            .collect();
        let boxes: Vec<Bounds> = (0..graph.len())
            .map(|index| {
                placement::node_bounds(&self.config, orientation, ranks.get(index), lanes.get(index))
            })
            .collect();

        let rendered_nodes: Vec<RenderedNode<'a>> = graph
            .input_order()
            .map(|index| RenderedNode {
                node: graph.node(index),
                rank: ranks.get(index),
                lane: lanes.get(index),
                position: boxes[index].min_point(),
                color: colors[index],
            })
            .collect();

        let edges: Vec<RenderedEdge> = graph
            .input_order()
            .flat_map(|child| {
                graph.parents(child).iter().map(move |&parent| (parent, child))
            })
            .map(|(parent, child)| {
                let path = edge::connect(orientation, boxes[parent], boxes[child]);
                let status = graph.node(child).status();
                RenderedEdge {
                    source: graph.node(parent).id(),
                    target: graph.node(child).id(),
                    from: path.start(),
                    to: path.end(),
                    path,
                    color: self.palette.edge_color(colors[parent], status),
                    status,
                }
            })
            .collect();

        let canvas = placement::canvas_size(&self.config, boxes.iter().copied(), viewport);

        info!(
            orientation:?,
            node_count = rendered_nodes.len(),
            edge_count = edges.len(),
            canvas_width = canvas.width(),
            canvas_height = canvas.height();
            "Layout calculated"
        );

        Layout {
            nodes: rendered_nodes,
            edges,
            canvas,
        }
    }
}

/// Lay out `nodes` with the default spacing and palette.
pub fn compute_layout<'a, I>(nodes: I, orientation: Orientation, viewport: Size) -> Layout<'a>
where
    I: IntoIterator<Item = &'a Node>,
{
    Engine::default().calculate(nodes, orientation, viewport)
}


#[cfg(test)]
mod proptest_tests {
    use std::collections::{HashMap, HashSet};

    use proptest::prelude::*;
    use time::{Duration, macros::datetime};

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Acyclic node lists where every parent is dated before its child.
    fn dag_strategy() -> impl Strategy<Value = Vec<Node>> {
        prop::collection::vec(prop::collection::vec(any::<usize>(), 0..3), 1..16).prop_map(
            |picks| {
                picks
                    .into_iter()
                    .enumerate()
                    .map(|(index, raw)| {
                        let parents: Vec<String> = if index == 0 {
                            Vec::new()
                        } else {
                            raw.iter().map(|pick| format!("n{}", pick % index)).collect()
                        };
                        Node::new(
                            format!("n{index}"),
                            datetime!(2024-01-01 0:00 UTC) + Duration::days(index as i64),
                        )
                        .with_parents(parents)
                    })
                    .collect()
            },
        )
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Roots sit at rank 0 and every other node one past its deepest parent.
    fn check_rank_follows_parents(nodes: &[Node]) -> Result<(), TestCaseError> {
        let layout = compute_layout(nodes, Orientation::Vertical, Size::default());

        for rendered in layout.nodes() {
            let deepest = rendered
                .node()
                .parent_ids()
                .iter()
                .filter_map(|&parent| layout.node(parent))
                .map(RenderedNode::rank)
                .max();
            let expected = deepest.map_or(0, |rank| rank + 1);
            prop_assert_eq!(rendered.rank(), expected, "node {}", rendered.id());
        }
        Ok(())
    }

    /// No two nodes of the same rank share a lane.
    fn check_rank_lane_pairs_unique(nodes: &[Node]) -> Result<(), TestCaseError> {
        let layout = compute_layout(nodes, Orientation::Vertical, Size::default());

        let mut seen = HashSet::new();
        for rendered in layout.nodes() {
            prop_assert!(
                seen.insert((rendered.rank(), rendered.lane())),
                "rank {} lane {} assigned twice",
                rendered.rank(),
                rendered.lane()
            );
        }
        Ok(())
    }

    /// A node that is the only child following its first parent stays in that parent's lane.
    fn check_single_follower_inherits(nodes: &[Node]) -> Result<(), TestCaseError> {
        let layout = compute_layout(nodes, Orientation::Vertical, Size::default());

        let mut followers: HashMap<NodeId, usize> = HashMap::new();
        for node in nodes {
            if let Some(&first) = node.parent_ids().first() {
                *followers.entry(first).or_default() += 1;
            }
        }

        for rendered in layout.nodes() {
            let Some(&first) = rendered.node().parent_ids().first() else {
                continue;
            };
            if followers.get(&first) == Some(&1) {
                let parent = layout.node(first).map(RenderedNode::lane);
                prop_assert_eq!(Some(rendered.lane()), parent, "node {}", rendered.id());
            }
        }
        Ok(())
    }

    /// Laying out the same input twice yields the same geometry.
    fn check_deterministic(nodes: &[Node]) -> Result<(), TestCaseError> {
        let first = compute_layout(nodes, Orientation::Horizontal, Size::default());
        let second = compute_layout(nodes, Orientation::Horizontal, Size::default());

        fn positions(layout: &Layout<'_>) -> Vec<(Point, usize, usize)> {
            layout
                .nodes()
                .iter()
                .map(|rendered| (rendered.position(), rendered.rank(), rendered.lane()))
                .collect()
        }

        prop_assert_eq!(positions(&first), positions(&second));
        prop_assert_eq!(first.canvas(), second.canvas());
        prop_assert_eq!(first.edges().len(), second.edges().len());
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn rank_follows_parents(nodes in dag_strategy()) {
            check_rank_follows_parents(&nodes)?;
        }

        #[test]
        fn rank_lane_pairs_unique(nodes in dag_strategy()) {
            check_rank_lane_pairs_unique(&nodes)?;
        }

        #[test]
        fn single_follower_inherits(nodes in dag_strategy()) {
            check_single_follower_inherits(&nodes)?;
        }

        #[test]
        fn deterministic(nodes in dag_strategy()) {
            check_deterministic(&nodes)?;
        }
    }
}
