//! Brand palette support
//!
//! The extraction engine consumes a read-only mapping of semantic color
//! names (primary, secondary, success, warning, neutral-light, neutral-dark)
//! to concrete values. Palettes load from TOML so a document pipeline can
//! swap brand guidelines without touching the engine.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a palette
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A palette mapping semantic color names to concrete values
#[derive(Debug, Clone)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: semantic name -> hex color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - a restrained blue/violet scheme with green/amber status colors
const DEFAULT_PALETTE: &str = r##"
[colors]
# Brand colors
primary = "#1f6feb"
secondary = "#6e40c9"

# Status colors
success = "#2da44e"
warning = "#d4a72c"

# Neutrals (light for fills and label text, dark for borders and body text)
neutral-light = "#f6f8fa"
neutral-dark = "#24292f"
"##;

impl Palette {
    /// Load a palette from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a palette from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a semantic color name to a concrete value
    ///
    /// Returns None if the name is not defined in this palette.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(|s| s.as_str())
    }

    /// Resolve a semantic color name with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. Check this palette for the exact name
    /// 2. Check the default palette for the exact name
    /// 3. Use a category default (neutral-* → gray scale, everything else → primary blue)
    pub fn resolve_or_default(&self, name: &str) -> String {
        if let Some(color) = self.resolve(name) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(name) {
            return color.to_string();
        }

        if name.starts_with("neutral-light") {
            return "#f6f8fa".to_string();
        }
        if name.starts_with("neutral") {
            return "#24292f".to_string();
        }

        // Unknown semantic name - fall back to the primary brand color
        "#1f6feb".to_string()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_toml(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
