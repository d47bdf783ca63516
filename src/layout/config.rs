//! Configuration for the layout engine

use crate::model::{Point, Size, Spacing};

/// Configuration options for diagram layout
///
/// Node sizes are fixed per diagram family: flow and prose-step nodes share
/// one size class, sequence participants another, timeline tasks a third.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Position assigned to the first node of every diagram
    pub origin: Point,

    /// Size for flowchart and prose-step nodes (width, height)
    pub flow_node_size: Size,

    /// Size for sequence participants
    pub participant_size: Size,

    /// Size for timeline tasks
    pub task_size: Size,

    /// Spacing between successive flowchart or prose-step nodes
    pub flow_spacing: Spacing,

    /// Spacing between sequence participants (wider than flow nodes)
    pub sequence_spacing: Spacing,

    /// Spacing between timeline tasks
    pub timeline_spacing: Spacing,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(100.0, 100.0),
            flow_node_size: Size::new(120.0, 60.0),
            participant_size: Size::new(140.0, 70.0),
            task_size: Size::new(160.0, 50.0),
            flow_spacing: Spacing::new(180.0, 120.0),
            sequence_spacing: Spacing::new(220.0, 140.0),
            timeline_spacing: Spacing::new(180.0, 90.0),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position of the first node
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    /// Set the size of flowchart and prose-step nodes
    pub fn with_flow_node_size(mut self, width: f64, height: f64) -> Self {
        self.flow_node_size = Size::new(width, height);
        self
    }

    /// Set the size of sequence participants
    pub fn with_participant_size(mut self, width: f64, height: f64) -> Self {
        self.participant_size = Size::new(width, height);
        self
    }

    /// Set the size of timeline tasks
    pub fn with_task_size(mut self, width: f64, height: f64) -> Self {
        self.task_size = Size::new(width, height);
        self
    }

    /// Set the spacing between flowchart or prose-step nodes
    pub fn with_flow_spacing(mut self, x: f64, y: f64) -> Self {
        self.flow_spacing = Spacing::new(x, y);
        self
    }

    /// Set the spacing between sequence participants
    pub fn with_sequence_spacing(mut self, x: f64, y: f64) -> Self {
        self.sequence_spacing = Spacing::new(x, y);
        self
    }

    /// Set the spacing between timeline tasks
    pub fn with_timeline_spacing(mut self, x: f64, y: f64) -> Self {
        self.timeline_spacing = Spacing::new(x, y);
        self
    }
}
