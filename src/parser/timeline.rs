//! Timeline/task block parser
//!
//! Gantt-style blocks reduce to a vertical chain of tasks: every
//! `label : rest` line becomes one task node connected to the one before
//! it. Directive lines (title, date format and friends) carry no tasks
//! and are skipped.

use crate::extractor::ExtractContext;
use crate::model::{
    Alignment, ConnectionType, DiagramData, DiagramLayout, DiagramType, LayoutDirection, NodeType,
};
use crate::parser::{significant_lines, GraphBuilder};

/// First-line keywords that declare a timeline block.
const DECLARATIONS: [&str; 2] = ["gantt", "timeline"];

/// Declaration-only directives; matched against the first word of a line.
const DIRECTIVES: [&str; 5] = ["title", "dateformat", "axisformat", "section", "excludes"];

pub(crate) fn parse(block: &str, ctx: &ExtractContext) -> Option<DiagramData> {
    let mut lines = significant_lines(block);
    if !is_declaration(lines.next()?) {
        return None;
    }

    let mut graph = GraphBuilder::new(ctx, ctx.layout.task_size);
    let mut previous: Option<String> = None;

    for line in lines {
        if is_directive(line) {
            continue;
        }
        let Some((label, _rest)) = line.split_once(':') else {
            continue;
        };
        let label = label.trim();
        if label.is_empty() {
            continue;
        }

        let id = format!("task{}", graph.node_count() + 1);
        graph.declare(&id, Some(label), NodeType::Process);
        if let Some(previous) = &previous {
            graph.connect(previous, &id, None, ConnectionType::Solid);
        }
        previous = Some(id);
    }

    (!graph.is_empty()).then(|| {
        graph.finish(
            DiagramType::Timeline,
            "Project Timeline",
            DiagramLayout {
                direction: LayoutDirection::Vertical,
                spacing: ctx.layout.timeline_spacing,
                alignment: Alignment::Left,
            },
        )
    })
}

fn is_declaration(line: &str) -> bool {
    let lower = line.to_lowercase();
    DECLARATIONS.iter().any(|keyword| lower.starts_with(keyword))
}

fn is_directive(line: &str) -> bool {
    let Some(first_word) = line.split_whitespace().next() else {
        return false;
    };
    let lower = first_word.to_ascii_lowercase();
    DIRECTIVES.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutConfig;
    use crate::palette::Palette;

    fn parse_with_defaults(block: &str) -> Option<DiagramData> {
        let config = LayoutConfig::default();
        let palette = Palette::default();
        let ctx = ExtractContext {
            layout: &config,
            palette: &palette,
        };
        parse(block, &ctx)
    }

    #[test]
    fn test_tasks_chain_in_order() {
        let block = "gantt\ntitle Release Plan\nDesign : d1, 2026-01-01, 10d\nBuild : d2, 2026-01-11, 20d\nShip : d3, 2026-02-01, 5d\n";
        let diagram = parse_with_defaults(block).expect("timeline block parses");

        assert_eq!(diagram.diagram_type, DiagramType::Timeline);
        assert_eq!(diagram.nodes.len(), 3);
        assert_eq!(diagram.connections.len(), 2);

        let labels: Vec<&str> = diagram.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Design", "Build", "Ship"]);

        for (i, connection) in diagram.connections.iter().enumerate() {
            assert_eq!(connection.from, diagram.nodes[i].id);
            assert_eq!(connection.to, diagram.nodes[i + 1].id);
            assert_eq!(connection.connection_type, ConnectionType::Solid);
        }
    }

    #[test]
    fn test_title_directive_is_ignored() {
        // `title` lines with a colon in the text must not become tasks.
        let block = "gantt\ntitle Timeline: Phase 1\nKickoff : k, 1d\nWrap-up : w, 1d\n";
        let diagram = parse_with_defaults(block).expect("timeline block parses");

        assert_eq!(diagram.nodes.len(), 2);
        assert_eq!(diagram.title, "Project Timeline");
    }

    #[test]
    fn test_directives_and_sections_are_skipped() {
        let block = "gantt\ndateFormat YYYY-MM-DD\nsection Delivery\nPack : p, 1d\n";
        let diagram = parse_with_defaults(block).expect("timeline block parses");
        assert_eq!(diagram.nodes.len(), 1);
    }

    #[test]
    fn test_vertical_layout() {
        let block = "gantt\nFirst : a, 1d\nSecond : b, 1d\n";
        let diagram = parse_with_defaults(block).expect("timeline block parses");
        let config = LayoutConfig::default();

        assert_eq!(diagram.layout.direction, LayoutDirection::Vertical);
        assert_eq!(diagram.nodes[0].position.x, diagram.nodes[1].position.x);
        assert_eq!(
            diagram.nodes[1].position.y - diagram.nodes[0].position.y,
            config.timeline_spacing.y
        );
    }

    #[test]
    fn test_single_task_has_no_connections() {
        let block = "timeline\nOnly : o, 1d\n";
        let diagram = parse_with_defaults(block).expect("timeline block parses");
        assert_eq!(diagram.nodes.len(), 1);
        assert!(diagram.connections.is_empty());
    }

    #[test]
    fn test_unrecognized_first_line() {
        assert!(parse_with_defaults("flowchart TD\nA --> B\n").is_none());
    }

    #[test]
    fn test_no_tasks_yields_nothing() {
        assert!(parse_with_defaults("gantt\ntitle Empty Plan\n").is_none());
    }
}
