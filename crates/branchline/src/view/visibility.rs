//! Collapse filtering.
//!
//! A node is visible when it lists no parents, or when at least one of its
//! parents is visible and not collapsed. The rule is evaluated as a least
//! fixpoint with a bounded loop, so nodes whose only ancestry is dangling or
//! cyclic stay hidden rather than recursing forever.

use std::collections::HashSet;

use log::debug;

use branchline_core::{identifier::NodeId, node::Node};

use crate::structure::NodeGraph;

/// Nodes left on screen by the `collapsed` set, in the order supplied.
pub fn visible_nodes<'a, I>(nodes: I, collapsed: &HashSet<NodeId>) -> Vec<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
{
    let graph = NodeGraph::new(nodes);
    let count = graph.len();

    let mut visible: Vec<bool> = (0..count).map(|index| graph.node(index).is_root()).collect();

    // Each pass reveals at least one node or stops, so count + 1 passes suffice.
    for _ in 0..=count {
        let mut changed = false;
        for index in 0..count {
            if visible[index] {
                continue;
            }
            let revealed = graph
                .parents(index)
                .iter()
                .any(|&parent| visible[parent] && !collapsed.contains(&graph.node(parent).id()));
            if revealed {
                visible[index] = true;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    let shown: Vec<&'a Node> = graph
        .input_order()
        .filter(|&index| visible[index])
        .map(|index| graph.node(index))
        .collect();

    debug!(
        node_count = count,
        visible_count = shown.len(),
        collapsed_count = collapsed.len();
        "Visible nodes resolved"
    );

    shown
}

/// Ids of nodes that are the parent of at least one other node, i.e. the
/// nodes a collapse toggle applies to.
pub fn collapsible_ids<'a, I>(nodes: I) -> HashSet<NodeId>
where
    I: IntoIterator<Item = &'a Node>,
{
    let graph = NodeGraph::new(nodes);
    (0..graph.len())
        .flat_map(|index| {
            graph
                .parents(index)
                .iter()
                .copied()
                .filter(move |&parent| parent != index)
        })
        .map(|parent| graph.node(parent).id())
        .collect()
}

/// Number of descendants of `id` that the `collapsed` set hides.
///
/// Returns 0 when `id` is not among `nodes`.
pub fn hidden_descendants<'a, I>(nodes: I, collapsed: &HashSet<NodeId>, id: NodeId) -> usize
where
    I: IntoIterator<Item = &'a Node> + Clone,
{
    let shown: HashSet<NodeId> = visible_nodes(nodes.clone(), collapsed)
        .iter()
        .map(|node| node.id())
        .collect();

    let graph = NodeGraph::new(nodes);
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); graph.len()];
    for child in 0..graph.len() {
        for &parent in graph.parents(child) {
            children[parent].push(child);
        }
    }

    let Some(start) = (0..graph.len()).find(|&index| graph.node(index).id() == id) else {
        return 0;
    };

    let mut reached = vec![false; graph.len()];
    let mut stack = vec![start];
    while let Some(index) = stack.pop() {
        for &child in &children[index] {
            if !reached[child] {
                reached[child] = true;
                stack.push(child);
            }
        }
    }

    (0..graph.len())
        .filter(|&index| reached[index] && index != start)
        .filter(|&index| !shown.contains(&graph.node(index).id()))
        .count()
}
