//! Pixel placement of ranked, laned nodes and the canvas that holds them.

use branchline_core::{
    geometry::{Bounds, Point, Size},
    node::Orientation,
};

use crate::config::LayoutConfig;

/// Top-left corner of the node box at (`rank`, `lane`).
pub(crate) fn node_origin(
    config: &LayoutConfig,
    orientation: Orientation,
    rank: usize,
    lane: usize,
) -> Point {
    let rank = rank as f32;
    let lane = lane as f32;
    let margin = config.margin();

    match orientation {
        Orientation::Vertical => Point::new(
            lane * (config.node_width() + config.lane_gap()) + margin,
            rank * (config.node_height() + config.rank_gap()) + margin,
        ),
        Orientation::Horizontal => Point::new(
            rank * config.horizontal_rank_gap() + margin,
            lane * (config.node_height() + config.lane_gap()) + margin,
        ),
    }
}

/// Box occupied by the node at (`rank`, `lane`).
pub(crate) fn node_bounds(
    config: &LayoutConfig,
    orientation: Orientation,
    rank: usize,
    lane: usize,
) -> Bounds {
    Bounds::new_from_top_left(
        node_origin(config, orientation, rank, lane),
        config.node_size(),
    )
}

/// Canvas covering every node box plus padding, never smaller than `viewport`.
pub(crate) fn canvas_size<I>(config: &LayoutConfig, boxes: I, viewport: Size) -> Size
where
    I: IntoIterator<Item = Bounds>,
{
    let Some(extent) = boxes.into_iter().reduce(|acc, bounds| acc.merge(&bounds)) else {
        return viewport;
    };

    Size::new(
        extent.max_x() + config.padding(),
        extent.max_y() + config.padding(),
    )
    .max(viewport)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
            .with_node_size(Size::new(200.0, 80.0))
            .with_gaps(40.0, 60.0)
            .with_horizontal_rank_gap(300.0)
            .with_margin(20.0)
            .with_padding(50.0)
    }

    #[test]
    fn test_vertical_origin() {
        let origin = node_origin(&config(), Orientation::Vertical, 2, 1);

        assert_approx_eq!(f32, origin.x(), 1.0 * 240.0 + 20.0);
        assert_approx_eq!(f32, origin.y(), 2.0 * 140.0 + 20.0);
    }

    #[test]
    fn test_horizontal_origin() {
        let origin = node_origin(&config(), Orientation::Horizontal, 2, 1);

        assert_approx_eq!(f32, origin.x(), 2.0 * 300.0 + 20.0);
        assert_approx_eq!(f32, origin.y(), 1.0 * 120.0 + 20.0);
    }

    #[test]
    fn test_origin_at_zero_is_margin() {
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            assert_eq!(
                node_origin(&config(), orientation, 0, 0),
                Point::new(20.0, 20.0)
            );
        }
    }

    #[test]
    fn test_canvas_covers_farthest_node() {
        let config = config();
        let boxes = [
            node_bounds(&config, Orientation::Vertical, 0, 0),
            node_bounds(&config, Orientation::Vertical, 3, 2),
        ];
        let canvas = canvas_size(&config, boxes, Size::new(100.0, 100.0));

        // Farthest box: x = 2 * 240 + 20, y = 3 * 140 + 20.
        assert_approx_eq!(f32, canvas.width(), 500.0 + 200.0 + 50.0);
        assert_approx_eq!(f32, canvas.height(), 440.0 + 80.0 + 50.0);
    }

    #[test]
    fn test_canvas_floored_by_viewport() {
        let config = config();
        let boxes = [node_bounds(&config, Orientation::Horizontal, 0, 0)];
        let canvas = canvas_size(&config, boxes, Size::new(1920.0, 1080.0));

        assert_eq!(canvas, Size::new(1920.0, 1080.0));
    }

    #[test]
    fn test_empty_canvas_is_viewport() {
        let canvas = canvas_size(&config(), Vec::new(), Size::new(640.0, 480.0));
        assert_eq!(canvas, Size::new(640.0, 480.0));
    }
}
