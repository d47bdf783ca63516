//! Deterministic position assignment
//!
//! The engine places nodes on a single line: node *i* sits one spacing step
//! further along the layout axis than node *i - 1*. Placement depends only
//! on node order, so the same source text always produces the same
//! coordinates. There is no force-directed or constraint-based pass.

use crate::layout::LayoutConfig;
use crate::model::{DiagramLayout, DiagramNode, LayoutDirection, Point};

/// Assign a position to every node in place.
///
/// Nodes arrive unpositioned from the parsers; their order is the order
/// the layout walks. The `alignment` field of the layout is carried
/// through to the renderer untouched and does not vary the spacing here.
pub fn arrange(nodes: &mut [DiagramNode], layout: &DiagramLayout, config: &LayoutConfig) {
    let origin = config.origin;

    for (i, node) in nodes.iter_mut().enumerate() {
        let step = i as f64;
        node.position = match layout.direction {
            LayoutDirection::Vertical => {
                Point::new(origin.x, origin.y + step * layout.spacing.y)
            }
            // TODO: genuine radial placement (angle = i * tau / n around the
            // origin); until a renderer consumes it, radial lays out like
            // horizontal.
            LayoutDirection::Horizontal | LayoutDirection::Radial => {
                Point::new(origin.x + step * layout.spacing.x, origin.y)
            }
        };
    }
}
