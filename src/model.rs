//! Data model for extracted diagrams
//!
//! Every parser produces the same normalized structure: a [`DiagramData`]
//! with styled, positioned nodes and typed connections, ready for a
//! vector-graphics renderer. Instances are built in a single extraction
//! call and never mutated afterwards.

use serde::Serialize;

/// Rendering intent of a diagram, as declared or inferred from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramType {
    Flowchart,
    /// Sequence-interaction blocks map onto the generic architecture
    /// category; renderers do not currently discriminate further.
    Architecture,
    Timeline,
    Process,
}

/// Semantic role of a node, driving styling and step special-casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Start,
    Process,
    Decision,
    End,
    Data,
    Person,
    System,
}

/// Line style of a connection, derived from the source edge notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Solid,
    Dashed,
    Dotted,
}

/// Axis along which nodes are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    Horizontal,
    Vertical,
    /// Accepted as configuration; currently laid out like `Horizontal`.
    Radial,
}

/// Alignment hint carried through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Font weight of node labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// A 2D point in renderer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a node, fixed per diagram family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixel deltas between successive nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spacing {
    pub x: f64,
    pub y: f64,
}

impl Spacing {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fully resolved visual style for one node.
///
/// Always populated before a node is returned to the caller; the resolver
/// never leaves a field undecided.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyling {
    pub background: String,
    pub border: String,
    pub text_color: String,
    pub font_weight: FontWeight,
    pub font_size: f64,
}

/// One node of a diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    /// Unique within one diagram; duplicate declarations are idempotent.
    pub id: String,
    /// Display text; defaults to the id when the source has no label.
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Set by the layout engine, never by a parser.
    pub position: Point,
    pub size: Size,
    pub styling: NodeStyling,
}

/// A typed edge between two nodes of the same diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramConnection {
    pub from: String,
    pub to: String,
    /// Sequence interactions carry their message text here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    pub color: String,
}

/// Placement policy for one diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramLayout {
    pub direction: LayoutDirection,
    pub spacing: Spacing,
    pub alignment: Alignment,
}

/// One fully parsed diagram.
///
/// Node order is first-seen order in the source text and connection order
/// is declaration order; deterministic layout depends on both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramData {
    #[serde(rename = "type")]
    pub diagram_type: DiagramType,
    pub title: String,
    pub nodes: Vec<DiagramNode>,
    pub connections: Vec<DiagramConnection>,
    pub layout: DiagramLayout,
}

impl DiagramData {
    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
