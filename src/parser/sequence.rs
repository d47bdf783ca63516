//! Sequence-interaction block parser
//!
//! Participants are collected in discovery order, whether they come from
//! explicit `participant`/`actor` lines or from interaction lines like
//! `Alice->>Bob: Hello`. The output reuses the generic architecture
//! diagram category.

use crate::extractor::ExtractContext;
use crate::model::{
    Alignment, ConnectionType, DiagramData, DiagramLayout, DiagramType, LayoutDirection, NodeType,
};
use crate::parser::{significant_lines, GraphBuilder};

/// Arrow notations, most specific first so `-->>` never splits as `-->`.
const ARROWS: [&str; 4] = ["-->>", "->>", "-->", "->"];

pub(crate) fn parse(block: &str, ctx: &ExtractContext) -> Option<DiagramData> {
    let mut lines = significant_lines(block);
    if !lines.next()?.to_lowercase().starts_with("sequencediagram") {
        return None;
    }

    let mut graph = GraphBuilder::new(ctx, ctx.layout.participant_size);

    for line in lines {
        if let Some(rest) = keyword_rest(line, "participant") {
            if let Some(id) = participant_id(rest) {
                graph.declare(id, None, NodeType::System);
            }
        } else if let Some(rest) = keyword_rest(line, "actor") {
            if let Some(id) = participant_id(rest) {
                graph.declare(id, None, NodeType::Person);
            }
        } else if let Some((from, to, message)) = interaction(line) {
            graph.declare(from, None, NodeType::System);
            graph.declare(to, None, NodeType::System);
            graph.connect(from, to, Some(message.to_string()), ConnectionType::Solid);
        }
    }

    (!graph.is_empty()).then(|| {
        graph.finish(
            DiagramType::Architecture,
            "System Architecture",
            DiagramLayout {
                direction: LayoutDirection::Horizontal,
                spacing: ctx.layout.sequence_spacing,
                alignment: Alignment::Center,
            },
        )
    })
}

/// Strip a leading keyword followed by whitespace.
fn keyword_rest<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    rest.starts_with(char::is_whitespace)
        .then(|| rest.trim_start())
}

/// The participant id is the first word; an `as Alias` tail is accepted
/// but the alias is not surfaced on the node.
fn participant_id(rest: &str) -> Option<&str> {
    rest.split_whitespace().next()
}

/// Match `from ARROW to : message`; lines without a message part are not
/// interactions.
fn interaction(line: &str) -> Option<(&str, &str, &str)> {
    for arrow in ARROWS {
        if let Some(position) = line.find(arrow) {
            let from = line[..position].trim();
            let rest = &line[position + arrow.len()..];
            let (to, message) = rest.split_once(':')?;
            let to = to.trim();
            if from.is_empty() || to.is_empty() {
                return None;
            }
            return Some((from, to, message.trim()));
        }
    }
    None
}
