//! Example: Laying out a timeline built in code
//!
//! This example builds a small release history with a feature branch, a merge,
//! and an abandoned experiment, then prints where every node lands.

use branchline::{
    TimelineBuilder,
    geometry::Size,
    node::{Node, NodeStatus, Orientation, parse_date},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let nodes = vec![
        Node::new("kickoff", parse_date("2024-01-02")?).with_title("Kickoff"),
        Node::new("core", parse_date("2024-01-15")?)
            .with_title("Core engine")
            .with_parents(["kickoff"])
            .with_status(NodeStatus::Completed),
        Node::new("ui", parse_date("2024-01-20")?)
            .with_title("UI prototype")
            .with_parents(["kickoff"]),
        Node::new("spike", parse_date("2024-01-22")?)
            .with_title("Rendering spike")
            .with_parents(["core"])
            .with_status(NodeStatus::Abandoned),
        Node::new("beta", parse_date("2024-02-10T09:30:00Z")?)
            .with_title("Beta")
            .with_parents(["core", "ui"]),
    ];

    let builder = TimelineBuilder::default();

    for orientation in [Orientation::Vertical, Orientation::Horizontal] {
        let layout = builder.layout(&nodes, orientation, Size::new(800.0, 600.0))?;

        println!("{orientation:?} layout");
        for rendered in layout.nodes() {
            let position = rendered.position();
            println!(
                "  {:<8} rank {} lane {} at ({:>6.1}, {:>6.1}) {}",
                rendered.id().to_string(),
                rendered.rank(),
                rendered.lane(),
                position.x(),
                position.y(),
                rendered.color(),
            );
        }
        for edge in layout.edges() {
            let style = if edge.is_dashed() { "dashed" } else { "solid" };
            println!("  {} -> {} ({style}): {}", edge.source(), edge.target(), edge.path());
        }

        let canvas = layout.canvas();
        println!("  canvas {} x {}\n", canvas.width(), canvas.height());
    }

    Ok(())
}
