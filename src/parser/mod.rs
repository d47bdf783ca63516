//! Sub-language parsers sharing one output contract
//!
//! Each parser receives the body of one candidate region and returns
//! `Some(DiagramData)` when it recognizes the content, `None` otherwise.
//! Malformed lines inside a recognized region are skipped; no parser ever
//! fails. The shared [`GraphBuilder`] enforces the structural invariants:
//! unique node ids in first-seen order, idempotent redeclaration, and
//! lazy creation of nodes that are only ever named by a connection.

pub(crate) mod flowchart;
pub(crate) mod lexer;
pub(crate) mod prose;
pub(crate) mod sequence;
pub(crate) mod timeline;

use indexmap::IndexMap;

use crate::extractor::ExtractContext;
use crate::layout;
use crate::model::{
    ConnectionType, DiagramConnection, DiagramData, DiagramLayout, DiagramNode, DiagramType,
    NodeType, Point, Size,
};
use crate::styling;

/// Trimmed, non-blank lines of a block, with `%%` comment lines dropped.
pub(crate) fn significant_lines(block: &str) -> impl Iterator<Item = &str> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("%%"))
}

/// Accumulates nodes and connections for one diagram.
///
/// Nodes live in an insertion-ordered map keyed by id, so a connection can
/// reference a node before (or instead of) its declaration line: the
/// endpoint is checked-and-inserted at connection time with a default
/// `process` category.
pub(crate) struct GraphBuilder<'a> {
    ctx: &'a ExtractContext<'a>,
    node_size: Size,
    nodes: IndexMap<String, DiagramNode>,
    connections: Vec<DiagramConnection>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(ctx: &'a ExtractContext<'a>, node_size: Size) -> Self {
        Self {
            ctx,
            node_size,
            nodes: IndexMap::new(),
            connections: Vec::new(),
        }
    }

    /// Declare a node. The first declaration of an id wins; later
    /// redeclarations (including synthesized endpoints) are ignored.
    pub fn declare(&mut self, id: &str, label: Option<&str>, node_type: NodeType) {
        if self.nodes.contains_key(id) {
            return;
        }
        let label = match label {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => id.to_string(),
        };
        let styling = styling::resolve_node_styling(node_type, self.ctx.palette);
        self.nodes.insert(
            id.to_string(),
            DiagramNode {
                id: id.to_string(),
                label,
                node_type,
                position: Point::default(),
                size: self.node_size,
                styling,
            },
        );
    }

    /// Make sure an id referenced by a connection exists as a node,
    /// synthesizing a `process` node labeled with the id if it does not.
    pub fn ensure(&mut self, id: &str) {
        self.declare(id, None, NodeType::Process);
    }

    /// Append a connection, creating missing endpoints first so every
    /// `from`/`to` always names an existing node.
    pub fn connect(
        &mut self,
        from: &str,
        to: &str,
        label: Option<String>,
        connection_type: ConnectionType,
    ) {
        self.ensure(from);
        self.ensure(to);
        self.connections.push(DiagramConnection {
            from: from.to_string(),
            to: to.to_string(),
            label,
            connection_type,
            color: styling::connection_color(self.ctx.palette),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Run the layout engine and seal the diagram.
    pub fn finish(
        self,
        diagram_type: DiagramType,
        title: impl Into<String>,
        diagram_layout: DiagramLayout,
    ) -> DiagramData {
        let mut nodes: Vec<DiagramNode> = self.nodes.into_values().collect();
        layout::arrange(&mut nodes, &diagram_layout, self.ctx.layout);
        DiagramData {
            diagram_type,
            title: title.into(),
            nodes,
            connections: self.connections,
            layout: diagram_layout,
        }
    }
}
