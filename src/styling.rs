//! Node styling resolution
//!
//! Maps a semantic node category onto a fully populated [`NodeStyling`]
//! using the shared palette. Pure lookup, no I/O; identical input always
//! yields an identical result, so concurrent extractions can share one
//! palette reference freely.

use crate::model::{FontWeight, NodeStyling, NodeType};
use crate::palette::Palette;

/// Label font size shared by every node family.
const LABEL_FONT_SIZE: f64 = 12.0;

/// Resolve the visual style for a node category.
///
/// Start and end markers take the success color with bold labels, decisions
/// the warning color with dark text, process steps the primary brand color
/// and data stores the secondary one. Person and system participants (and
/// any category added later) fall back to a neutral fill with dark text.
pub fn resolve_node_styling(node_type: NodeType, palette: &Palette) -> NodeStyling {
    let border = palette.resolve_or_default("neutral-dark");

    match node_type {
        NodeType::Start | NodeType::End => NodeStyling {
            background: palette.resolve_or_default("success"),
            border,
            text_color: palette.resolve_or_default("neutral-light"),
            font_weight: FontWeight::Bold,
            font_size: LABEL_FONT_SIZE,
        },
        NodeType::Decision => NodeStyling {
            background: palette.resolve_or_default("warning"),
            border,
            text_color: palette.resolve_or_default("neutral-dark"),
            font_weight: FontWeight::Normal,
            font_size: LABEL_FONT_SIZE,
        },
        NodeType::Process => NodeStyling {
            background: palette.resolve_or_default("primary"),
            border,
            text_color: palette.resolve_or_default("neutral-light"),
            font_weight: FontWeight::Normal,
            font_size: LABEL_FONT_SIZE,
        },
        NodeType::Data => NodeStyling {
            background: palette.resolve_or_default("secondary"),
            border,
            text_color: palette.resolve_or_default("neutral-light"),
            font_weight: FontWeight::Normal,
            font_size: LABEL_FONT_SIZE,
        },
        NodeType::Person | NodeType::System => NodeStyling {
            background: palette.resolve_or_default("neutral-light"),
            border,
            text_color: palette.resolve_or_default("neutral-dark"),
            font_weight: FontWeight::Normal,
            font_size: LABEL_FONT_SIZE,
        },
    }
}

/// Resolve the stroke color used by every connection, independent of the
/// colors of the nodes it joins.
pub fn connection_color(palette: &Palette) -> String {
    palette.resolve_or_default("neutral-dark")
}
