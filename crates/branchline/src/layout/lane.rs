//! Lane (parallel track) assignment.
//!
//! Nodes are visited by rank, then by date. Each lane remembers the node that
//! claimed it last. A node keeps its first listed parent's lane while that
//! parent is still the lane's claimant, which keeps a primary branch straight; otherwise
//! it takes the lowest lane nobody claims. The pass is greedy and only locally
//! consistent: merges always follow the first listed parent and no crossing
//! minimization happens beyond that.

use log::trace;

use crate::structure::NodeGraph;

/// Current claimant of every lane opened so far.
#[derive(Debug, Default)]
struct LaneClaims {
    holders: Vec<Option<usize>>,
}

impl LaneClaims {
    fn holder(&self, lane: usize) -> Option<usize> {
        self.holders.get(lane).copied().flatten()
    }

    /// Lowest lane index without a claimant, opening a new lane if needed.
    fn first_free(&self) -> usize {
        self.holders
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.holders.len())
    }

    fn claim(&mut self, lane: usize, node: usize) {
        if lane >= self.holders.len() {
            self.holders.resize(lane + 1, None);
        }
        self.holders[lane] = Some(node);
    }

    fn len(&self) -> usize {
        self.holders.len()
    }
}

/// Result of lane assignment over a [`NodeGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lanes {
    /// Lane per date-order index.
    lanes: Vec<usize>,
    /// Number of lane indices opened.
    lane_count: usize,
}

impl Lanes {
    pub(crate) fn get(&self, index: usize) -> usize {
        self.lanes[index]
    }

    pub(crate) fn lane_count(&self) -> usize {
        self.lane_count
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[usize] {
        &self.lanes
    }
}

pub(crate) fn assign(graph: &NodeGraph, ranks: &[usize]) -> Lanes {
    // The graph is already in date order, so a stable sort by rank yields
    // rank-then-date order.
    let mut visit_order: Vec<usize> = (0..graph.len()).collect();
    visit_order.sort_by_key(|&index| ranks[index]);

    let mut claims = LaneClaims::default();
    let mut lanes: Vec<Option<usize>> = vec![None; graph.len()];

    for &index in &visit_order {
        let inherited = graph.first_listed_parent(index).and_then(|parent| {
            lanes[parent].filter(|&lane| claims.holder(lane) == Some(parent))
        });
        let lane = inherited.unwrap_or_else(|| claims.first_free());

        trace!(
            node_id:% = graph.node(index).id(),
            lane,
            inherited = inherited.is_some();
            "Lane assigned"
        );

        claims.claim(lane, index);
        lanes[index] = Some(lane);
    }

    Lanes {
        lanes: lanes.into_iter().map(Option::unwrap_or_default).collect(),
        lane_count: claims.len(),
    }
}
