//! Rank (generation depth) assignment.
//!
//! Ranks are propagated by a bounded fixpoint loop instead of a topological
//! sort, so cycles and partial graphs never abort the layout. Ranks only grow,
//! and the loop stops after a quiet pass or `N + 2` passes, whichever comes
//! first. Nodes that never receive a propagated rank (cycles with no ranked
//! entry) take their position in date order.

use crate::structure::NodeGraph;

/// Result of rank propagation over a [`NodeGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Ranks {
    /// Rank per date-order index.
    ranks: Vec<usize>,
    /// Passes executed, including the final quiet pass.
    passes: usize,
    /// Whether a pass finished without any change.
    converged: bool,
    /// Nodes that received the date-order fallback rank.
    fallback: usize,
}

impl Ranks {
    pub(crate) fn get(&self, index: usize) -> usize {
        self.ranks[index]
    }

    pub(crate) fn as_slice(&self) -> &[usize] {
        &self.ranks
    }

    pub(crate) fn passes(&self) -> usize {
        self.passes
    }

    pub(crate) fn converged(&self) -> bool {
        self.converged
    }

    pub(crate) fn fallback(&self) -> usize {
        self.fallback
    }
}

pub(crate) fn assign(graph: &NodeGraph) -> Ranks {
    let count = graph.len();

    // Nodes without a present parent are roots of the visible graph.
    let mut ranks: Vec<Option<usize>> = (0..count)
        .map(|index| graph.parents(index).is_empty().then_some(0))
        .collect();

    let max_passes = count + 2;
    let mut passes = 0;
    let mut converged = false;

    while passes < max_passes {
        passes += 1;
        let mut changed = false;

        for index in 0..count {
            let deepest = graph
                .parents(index)
                .iter()
                .filter_map(|&parent| ranks[parent])
                .max();
            let Some(deepest) = deepest else {
                continue;
            };

            let candidate = deepest + 1;
            if ranks[index].is_none_or(|rank| candidate > rank) {
                ranks[index] = Some(candidate);
                changed = true;
            }
        }

        if !changed {
            converged = true;
            break;
        }
    }

    let mut fallback = 0;
    let ranks = ranks
        .into_iter()
        .enumerate()
        .map(|(index, rank)| {
            rank.unwrap_or_else(|| {
                fallback += 1;
                index
            })
        })
        .collect();

    Ranks {
        ranks,
        passes,
        converged,
        fallback,
    }
}
