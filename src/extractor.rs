//! Extraction dispatcher
//!
//! Scans raw document text for fenced diagram blocks and heuristic prose
//! sections, classifies each candidate and invokes the matching
//! sub-language parser. A candidate that fails to parse contributes zero
//! diagrams; extraction never fails, whatever the input looks like.

use log::{debug, trace};

use crate::layout::LayoutConfig;
use crate::model::DiagramData;
use crate::palette::Palette;
use crate::parser::{flowchart, prose, sequence, timeline};

/// Shared read-only context for one extraction call.
pub(crate) struct ExtractContext<'a> {
    pub layout: &'a LayoutConfig,
    pub palette: &'a Palette,
}

/// Fence tags that mark a block as diagram source.
const FENCE_TAGS: [&str; 7] = [
    "mermaid",
    "flowchart",
    "graph",
    "sequence",
    "sequencediagram",
    "gantt",
    "timeline",
];

/// Keywords that open a heuristic prose section.
const SECTION_KEYWORDS: [&str; 7] = [
    "workflow",
    "process flow",
    "architecture",
    "flowchart",
    "organization chart",
    "timeline",
    "steps",
];

/// Extract every diagram the text contains, fenced blocks first, then
/// heuristic sections. Within each pass the diagrams keep source order;
/// the two passes are not interleaved, so callers needing strict source
/// order across both must re-sort.
pub(crate) fn extract_diagrams(text: &str, ctx: &ExtractContext) -> Vec<DiagramData> {
    let mut diagrams = Vec::new();

    for block in fenced_blocks(text) {
        if let Some(diagram) = parse_block(&block, ctx) {
            debug!("fenced block parsed as {:?}", diagram.diagram_type);
            diagrams.push(diagram);
        }
    }

    for section in heuristic_sections(text) {
        if let Some(diagram) = prose::parse(&section, ctx) {
            debug!("heuristic section parsed: {}", diagram.title);
            diagrams.push(diagram);
        }
    }

    debug!("extracted {} diagram(s)", diagrams.len());
    diagrams
}

/// Try the sub-language parsers in fixed order; each one rejects content
/// whose first line it does not recognize.
fn parse_block(body: &str, ctx: &ExtractContext) -> Option<DiagramData> {
    flowchart::parse(body, ctx)
        .or_else(|| sequence::parse(body, ctx))
        .or_else(|| timeline::parse(body, ctx))
}

/// Bodies of fenced blocks carrying a known diagram tag, in source order.
fn fenced_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Option<(bool, String)> = None;

    for line in text.lines() {
        let trimmed = line.trim_start();
        if let Some(info) = trimmed.strip_prefix("```") {
            match current.take() {
                Some((recognized, body)) => {
                    if recognized {
                        blocks.push(body);
                    }
                }
                None => {
                    let tag = info
                        .split_whitespace()
                        .next()
                        .unwrap_or("")
                        .to_ascii_lowercase();
                    let recognized = FENCE_TAGS.contains(&tag.as_str());
                    if !recognized && !tag.is_empty() {
                        trace!("skipping fenced block tagged '{tag}'");
                    }
                    current = Some((recognized, String::new()));
                }
            }
        } else if let Some((_, body)) = current.as_mut() {
            body.push_str(line);
            body.push('\n');
        }
    }

    // A fence left open at end of text still counts as a block.
    if let Some((true, body)) = current {
        blocks.push(body);
    }
    blocks
}

/// Two-state scanner for heuristic sections: `Scanning` until a keyword
/// line opens one, then `InSection` (the accumulator below) until a
/// heading line arrives after content has accumulated, or the text ends.
/// Fenced regions are invisible to this pass so no parser ever runs on
/// overlapping text.
fn heuristic_sections(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Option<Vec<&str>> = None;
    let mut in_fence = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        match current.as_mut() {
            None => {
                if contains_keyword(trimmed) {
                    trace!("heuristic section opened at: {trimmed}");
                    current = Some(vec![line]);
                }
            }
            Some(buffer) => {
                if is_heading(trimmed) && buffer.len() > 1 {
                    sections.push(buffer.join("\n"));
                    current = contains_keyword(trimmed).then(|| vec![line]);
                } else {
                    buffer.push(line);
                }
            }
        }
    }

    if let Some(buffer) = current {
        sections.push(buffer.join("\n"));
    }
    sections
}

fn is_heading(line: &str) -> bool {
    line.starts_with('#')
}

fn contains_keyword(line: &str) -> bool {
    let lower = line.to_lowercase();
    SECTION_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}
