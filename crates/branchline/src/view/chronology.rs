//! Plain chronological ordering for the timeline list view.

use branchline_core::node::Node;

/// Nodes sorted by date, oldest first. Nodes sharing a date keep the order
/// they were supplied in.
pub fn chronological<'a, I>(nodes: I) -> Vec<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut ordered: Vec<&'a Node> = nodes.into_iter().collect();
    ordered.sort_by_key(|node| node.date());
    ordered
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_oldest_first_and_stable() {
        let nodes = vec![
            Node::new("late", datetime!(2024-06-01 0:00 UTC)),
            Node::new("tie-1", datetime!(2024-02-01 0:00 UTC)),
            Node::new("early", datetime!(2024-01-01 0:00 UTC)),
            Node::new("tie-2", datetime!(2024-02-01 0:00 UTC)),
        ];
        let ordered: Vec<String> = chronological(&nodes)
            .iter()
            .map(|node| node.id().to_string())
            .collect();

        assert_eq!(ordered, ["early", "tie-1", "tie-2", "late"]);
    }

    #[test]
    fn test_parents_do_not_affect_order() {
        let nodes = vec![
            Node::new("child", datetime!(2024-01-01 0:00 UTC)).with_parents(["parent"]),
            Node::new("parent", datetime!(2024-01-02 0:00 UTC)),
        ];
        let ordered = chronological(&nodes);

        assert_eq!(ordered[0].id(), "child");
    }
}
