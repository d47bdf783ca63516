//! Diagram Extractor - finds embedded diagrams in document text
//!
//! This library scans free-form document text for diagram mini-languages
//! (flow/graph blocks, sequence interactions, timelines and heuristic
//! prose step lists) and normalizes each hit into a [`DiagramData`] with
//! styled, positioned nodes, ready for a vector-graphics renderer.
//!
//! Extraction is best-effort by design: malformed regions contribute zero
//! diagrams and nothing ever fails. Calls are pure apart from reading the
//! configured palette, so separate documents can be processed concurrently
//! with a shared configuration.
//!
//! # Example
//!
//! ```rust
//! let text = "```mermaid\nflowchart TD\nA[Fetch] --> B{Valid?}\n```";
//! let diagrams = diagram_extractor::extract(text);
//!
//! assert_eq!(diagrams.len(), 1);
//! assert_eq!(diagrams[0].nodes.len(), 2);
//! ```

pub mod layout;
pub mod model;
pub mod palette;
pub mod styling;

mod extractor;
mod parser;

pub use layout::LayoutConfig;
pub use model::{
    DiagramConnection, DiagramData, DiagramLayout, DiagramNode, DiagramType, NodeStyling, NodeType,
};
pub use palette::{Palette, PaletteError};

/// Configuration for an extraction call
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// Palette used to resolve node and connection colors
    pub palette: Palette,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            palette: Palette::default(),
        }
    }
}

impl ExtractConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set the palette used for color resolution
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// Extract all diagrams from document text with default configuration
///
/// This is the main entry point for the library. Fenced diagram blocks are
/// extracted first, then heuristic prose sections; see
/// [`extract_with_config`] for details on ordering.
pub fn extract(text: &str) -> Vec<DiagramData> {
    extract_with_config(text, &ExtractConfig::default())
}

/// Extract all diagrams from document text with custom configuration
///
/// Returns fenced-block diagrams in source order followed by
/// heuristic-section diagrams in source order. Any region that does not
/// parse is silently dropped; the result may be empty but the call never
/// fails.
///
/// # Example
///
/// ```rust
/// use diagram_extractor::{extract_with_config, ExtractConfig, LayoutConfig};
///
/// let config = ExtractConfig::new()
///     .with_layout(LayoutConfig::default().with_origin(0.0, 0.0));
///
/// let diagrams = extract_with_config("## Setup Steps\n1. Install\n2. Configure\n", &config);
/// assert_eq!(diagrams.len(), 1);
/// assert_eq!(diagrams[0].nodes[0].position.x, 0.0);
/// ```
pub fn extract_with_config(text: &str, config: &ExtractConfig) -> Vec<DiagramData> {
    let ctx = extractor::ExtractContext {
        layout: &config.layout,
        palette: &config.palette,
    };
    extractor::extract_diagrams(text, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_flowchart() {
        let text = "```mermaid\nflowchart TD\nA[Start] --> B[Finish]\n```";
        let diagrams = extract(text);
        assert_eq!(diagrams.len(), 1);
        assert_eq!(diagrams[0].diagram_type, DiagramType::Flowchart);
    }

    #[test]
    fn test_extract_empty_document() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_extract_with_custom_palette() {
        let palette = Palette::from_toml("[colors]\nprimary = \"#000000\"\n")
            .expect("palette parses");
        let config = ExtractConfig::new().with_palette(palette);

        let text = "```mermaid\nflowchart TD\nA[Only]\n```";
        let diagrams = extract_with_config(text, &config);
        assert_eq!(diagrams[0].nodes[0].styling.background, "#000000");
    }

    #[test]
    fn test_config_builder() {
        let config = ExtractConfig::new()
            .with_layout(LayoutConfig::default().with_origin(10.0, 20.0));
        assert_eq!(config.layout.origin.x, 10.0);
        assert_eq!(config.layout.origin.y, 20.0);
    }
}
