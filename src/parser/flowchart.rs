//! Flow/graph block parser
//!
//! Parses mermaid-style flow blocks: node definitions like `A[Fetch]` and
//! edges like `A --> B`. The bracket shape decides the node category and
//! the edge token decides the connection style; lines matching neither
//! pattern are skipped.

use log::trace;

use crate::extractor::ExtractContext;
use crate::model::{
    Alignment, ConnectionType, DiagramData, DiagramLayout, DiagramType, LayoutDirection, NodeType,
};
use crate::parser::lexer::{lex_line, FlowToken};
use crate::parser::{significant_lines, GraphBuilder};

/// First-line keywords that declare a flow/graph block.
const DECLARATIONS: [&str; 2] = ["flowchart", "graph"];

/// One side of an edge: the identifier plus an inline shape, if the line
/// declares one right there (`A --> B{Valid?}`).
struct Endpoint<'t> {
    id: &'t str,
    shape: Option<(NodeType, &'t str)>,
}

pub(crate) fn parse(block: &str, ctx: &ExtractContext) -> Option<DiagramData> {
    let mut lines = significant_lines(block);
    if !is_declaration(lines.next()?) {
        return None;
    }

    let mut graph = GraphBuilder::new(ctx, ctx.layout.flow_node_size);

    for line in lines {
        let tokens = lex_line(line);
        if let Some(edge_index) = tokens.iter().position(FlowToken::is_edge) {
            let kind = edge_kind(&tokens[edge_index]);
            let (Some(from), Some(to)) = (
                endpoint(&tokens[..edge_index]),
                endpoint(&tokens[edge_index + 1..]),
            ) else {
                trace!("skipping edge line without two endpoints: {line}");
                continue;
            };
            declare_endpoint(&mut graph, &from);
            declare_endpoint(&mut graph, &to);
            graph.connect(from.id, to.id, None, kind);
        } else if let Some((id, (node_type, label))) = definition(&tokens) {
            graph.declare(id, Some(label), node_type);
        }
        // Anything else is noise inside the block.
    }

    (!graph.is_empty()).then(|| {
        graph.finish(
            DiagramType::Flowchart,
            "Flowchart",
            DiagramLayout {
                direction: LayoutDirection::Horizontal,
                spacing: ctx.layout.flow_spacing,
                alignment: Alignment::Center,
            },
        )
    })
}

fn is_declaration(line: &str) -> bool {
    let lower = line.to_lowercase();
    DECLARATIONS.iter().any(|keyword| lower.starts_with(keyword))
}

/// Bracket shape to node category, most specific wrapper first.
fn shape_category(token: &FlowToken) -> Option<(NodeType, &str)> {
    match token {
        FlowToken::Pill(label) => Some((NodeType::Start, label)),
        FlowToken::Diamond(label) => Some((NodeType::Decision, label)),
        FlowToken::Box(label) => Some((NodeType::Process, label)),
        FlowToken::Round(label) => Some((NodeType::Data, label)),
        _ => None,
    }
}

fn edge_kind(token: &FlowToken) -> ConnectionType {
    match token {
        FlowToken::DottedArrow => ConnectionType::Dotted,
        _ => ConnectionType::Solid,
    }
}

/// First identifier in a token run, with the shape attached to it if the
/// next token is one.
fn endpoint<'t>(tokens: &'t [FlowToken]) -> Option<Endpoint<'t>> {
    for (i, token) in tokens.iter().enumerate() {
        if let FlowToken::Ident(id) = token {
            return Some(Endpoint {
                id,
                shape: tokens.get(i + 1).and_then(shape_category),
            });
        }
    }
    None
}

/// Node-definition line: an identifier immediately followed by a shape.
fn definition(tokens: &[FlowToken]) -> Option<(&str, (NodeType, &str))> {
    match tokens {
        [FlowToken::Ident(id), shape, ..] => shape_category(shape).map(|s| (id.as_str(), s)),
        _ => None,
    }
}

/// An endpoint with an inline shape is a full declaration; one without is
/// only guaranteed to exist, defaulting to `process` when never declared.
fn declare_endpoint(graph: &mut GraphBuilder, endpoint: &Endpoint) {
    match endpoint.shape {
        Some((node_type, label)) => graph.declare(endpoint.id, Some(label), node_type),
        None => graph.ensure(endpoint.id),
    }
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
    fn test_definition_then_edge_with_inline_shape() {
        let block = "flowchart TD\nA[Start]\nA --> B{Check}\n";
        let diagram = parse_with_defaults(block).expect("flow block parses");

        assert_eq!(diagram.diagram_type, DiagramType::Flowchart);
        assert_eq!(diagram.nodes.len(), 2);
        assert_eq!(diagram.connections.len(), 1);

        let a = diagram.node("A").expect("node A exists");
        assert_eq!(a.label, "Start");
        assert_eq!(a.node_type, NodeType::Process);

        let b = diagram.node("B").expect("node B exists");
        assert_eq!(b.label, "Check");
        assert_eq!(b.node_type, NodeType::Decision);

        assert_eq!(diagram.connections[0].from, "A");
        assert_eq!(diagram.connections[0].to, "B");
        assert_eq!(diagram.connections[0].connection_type, ConnectionType::Solid);
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let block = "graph LR\nC[Third]\nA[First]\nB[Second]\nA --> B\n";
        let diagram = parse_with_defaults(block).expect("flow block parses");
        let ids: Vec<&str> = diagram.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_shape_categories() {
        let block = "flowchart TD\nS((Begin))\nD{Choose}\nP[Work]\nQ(Records)\n";
        let diagram = parse_with_defaults(block).expect("flow block parses");

        assert_eq!(diagram.node("S").unwrap().node_type, NodeType::Start);
        assert_eq!(diagram.node("D").unwrap().node_type, NodeType::Decision);
        assert_eq!(diagram.node("P").unwrap().node_type, NodeType::Process);
        assert_eq!(diagram.node("Q").unwrap().node_type, NodeType::Data);
    }

    #[test]
    fn test_dotted_edge() {
        let block = "flowchart LR\nA -.-> B\n";
        let diagram = parse_with_defaults(block).expect("flow block parses");
        assert_eq!(
            diagram.connections[0].connection_type,
            ConnectionType::Dotted
        );
    }

    #[test]
    fn test_undeclared_endpoints_become_process_nodes() {
        let block = "flowchart LR\nA --> B\n";
        let diagram = parse_with_defaults(block).expect("flow block parses");
        for node in &diagram.nodes {
            assert_eq!(node.node_type, NodeType::Process);
            assert_eq!(node.label, node.id);
        }
    }

    #[test]
    fn test_redeclaration_is_ignored() {
        let block = "flowchart TD\nA[First]\nA{Second}\n";
        let diagram = parse_with_defaults(block).expect("flow block parses");
        assert_eq!(diagram.nodes.len(), 1);
        assert_eq!(diagram.nodes[0].label, "First");
        assert_eq!(diagram.nodes[0].node_type, NodeType::Process);
    }

    #[test]
    fn test_unrecognized_first_line() {
        assert!(parse_with_defaults("sequenceDiagram\nA->>B: hi\n").is_none());
        assert!(parse_with_defaults("just some text\n").is_none());
    }

    #[test]
    fn test_declaration_only_block_yields_nothing() {
        assert!(parse_with_defaults("flowchart TD\n").is_none());
    }

    #[test]
    fn test_noise_lines_are_skipped() {
        let block = "flowchart TD\nthis line is prose without any pattern!!\nA[Start]\n";
        let diagram = parse_with_defaults(block).expect("flow block parses");
        assert_eq!(diagram.nodes.len(), 1);
    }

    #[test]
    fn test_nodes_are_positioned_horizontally() {
        let block = "flowchart LR\nA --> B\nB --> C\n";
        let diagram = parse_with_defaults(block).expect("flow block parses");
        let config = LayoutConfig::default();
        for (i, node) in diagram.nodes.iter().enumerate() {
            assert_eq!(
                node.position.x,
                config.origin.x + i as f64 * config.flow_spacing.x
            );
            assert_eq!(node.position.y, config.origin.y);
        }
    }
}
