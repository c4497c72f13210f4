//! Index-based view of a node list.
//!
//! [`NodeGraph`] resolves the id-based parent lists of a node slice into
//! indices once, so the layout passes can work on plain vectors. Nodes are
//! stored in date order; every index handed out by this module is an index
//! into that order.
//!
//! Resolution drops parent ids that do not name a node in the list
//! (dangling) and repeated parent ids (only the first occurrence is kept). A
//! node listing itself stays its own parent, a one-node cycle.
//!
//! When the same id appears on several nodes, references resolve to the
//! earliest-dated of them.

use std::collections::HashSet;

use indexmap::IndexMap;

use branchline_core::{identifier::NodeId, node::Node};

#[derive(Debug)]
pub(crate) struct NodeGraph<'a> {
    /// Nodes sorted by date, ties in input order.
    nodes: Vec<&'a Node>,
    /// Date-order index of each input position.
    input_order: Vec<usize>,
    /// Resolved parents of each node, in listed order.
    parents: Vec<Vec<usize>>,
    /// The first listed parent id of each node, if it names a node.
    first_listed: Vec<Option<usize>>,
}

impl<'a> NodeGraph<'a> {
    pub(crate) fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let mut by_date: Vec<(usize, &'a Node)> = nodes.into_iter().enumerate().collect();
        by_date.sort_by_key(|(_, node)| node.date());

        let mut input_order = vec![0; by_date.len()];
        for (sorted, (position, _)) in by_date.iter().enumerate() {
            input_order[*position] = sorted;
        }
        let nodes: Vec<&'a Node> = by_date.into_iter().map(|(_, node)| node).collect();

        let mut index_of: IndexMap<NodeId, usize> = IndexMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            index_of.entry(node.id()).or_insert(index);
        }

        let parents = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let mut seen = HashSet::new();
                node.parent_ids()
                    .iter()
                    .filter_map(|parent_id| index_of.get(parent_id).copied())
                    .filter(|&parent| seen.insert(parent))
                    .collect()
            })
            .collect();

        let first_listed = nodes
            .iter()
            .map(|node| {
                node.parent_ids()
                    .first()
                    .and_then(|parent_id| index_of.get(parent_id).copied())
            })
            .collect();

        Self {
            nodes,
            input_order,
            parents,
            first_listed,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, index: usize) -> &'a Node {
        self.nodes[index]
    }

    /// Resolved parents of the node at `index`, first listed parent first.
    pub(crate) fn parents(&self, index: usize) -> &[usize] {
        &self.parents[index]
    }

    /// The first listed parent, or `None` when the node lists no parents or
    /// its first parent id is dangling.
    pub(crate) fn first_listed_parent(&self, index: usize) -> Option<usize> {
        self.first_listed[index]
    }

    /// Date-order indices in the order the nodes were supplied.
    pub(crate) fn input_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.input_order.iter().copied()
    }
}
