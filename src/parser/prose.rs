//! Heuristic prose-step parser
//!
//! Turns a keyword-matched prose section into a linear process diagram:
//! the heading becomes the title and every numbered or bulleted line
//! becomes a step. The end-node rule tags the step sitting on the
//! second-to-last *line* of the section body, not the second-to-last
//! discovered step; with blank or prose lines between steps the two can
//! differ. Known imprecision, kept for output compatibility.

use crate::extractor::ExtractContext;
use crate::model::{
    Alignment, ConnectionType, DiagramData, DiagramLayout, DiagramType, LayoutDirection, NodeType,
};
use crate::parser::GraphBuilder;

/// Title used when a section heading is nothing but markers.
const FALLBACK_TITLE: &str = "Process Overview";

pub(crate) fn parse(section: &str, ctx: &ExtractContext) -> Option<DiagramData> {
    let mut lines = section.lines();
    let heading = lines.next()?;
    let title = heading.trim().trim_start_matches('#').trim();
    let title = if title.is_empty() { FALLBACK_TITLE } else { title };

    let body: Vec<&str> = lines.collect();
    let end_line = body.len().checked_sub(2);

    let mut graph = GraphBuilder::new(ctx, ctx.layout.flow_node_size);
    let mut previous: Option<String> = None;

    for (i, line) in body.iter().enumerate() {
        let Some(text) = step_text(line) else {
            continue;
        };

        let node_type = if graph.is_empty() {
            NodeType::Start
        } else if Some(i) == end_line {
            NodeType::End
        } else {
            NodeType::Process
        };

        let id = format!("step{}", graph.node_count() + 1);
        graph.declare(&id, Some(text), node_type);
        if let Some(previous) = &previous {
            graph.connect(previous, &id, None, ConnectionType::Solid);
        }
        previous = Some(id);
    }

    (!graph.is_empty()).then(|| {
        graph.finish(
            DiagramType::Process,
            title,
            DiagramLayout {
                direction: LayoutDirection::Horizontal,
                spacing: ctx.layout.flow_spacing,
                alignment: Alignment::Center,
            },
        )
    })
}

fn step_text(line: &str) -> Option<&str> {
    numbered_step(line).or_else(|| bulleted_step(line))
}

/// `<n>. text` list items.
fn numbered_step(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digits == 0 {
        return None;
    }
    let text = trimmed[digits..].strip_prefix('.')?.trim();
    (!text.is_empty()).then_some(text)
}

/// `- text` or `* text` list items.
fn bulleted_step(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let text = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))?
        .trim();
    (!text.is_empty()).then_some(text)
}
