//! Configuration types for Mapscribe exports.
//!
//! This module provides configuration structures that control how a captured
//! diagram is read, how the outline is rendered and how the SVG export is
//! annotated. All types implement [`serde::Deserialize`] for flexible loading
//! from external sources; every field has a default, so any subset may be
//! given.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`ExtractConfig`] - Class names locating the diagram parts.
//! - [`OutlineConfig`] - Heading depth limit and orphan levelling.
//! - [`AnnotateConfig`] - Appearance of the SVG toggle controls.
//! - [`ExportConfig`] - Naming of exported artifacts.
//!
//! # Example
//!
//! ```
//! # use mapscribe::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.outline().max_heading_level(), 6);
//! assert_eq!(config.export().filename_prefix(), "notebookllm");
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use mapscribe_parser::Selectors;

/// Deepest heading level Markdown supports.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    extract: ExtractConfig,

    #[serde(default)]
    outline: OutlineConfig,

    #[serde(default)]
    annotate: AnnotateConfig,

    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        extract: ExtractConfig,
        outline: OutlineConfig,
        annotate: AnnotateConfig,
        export: ExportConfig,
    ) -> Self {
        Self {
            extract,
            outline,
            annotate,
            export,
        }
    }

    pub fn extract(&self) -> &ExtractConfig {
        &self.extract
    }

    pub fn outline(&self) -> &OutlineConfig {
        &self.outline
    }

    pub fn annotate(&self) -> &AnnotateConfig {
        &self.annotate
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Class names of the rendered diagram parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Class of the element wrapping the diagram.
    container_class: String,
    /// Class of the `g` element of each node.
    node_class: String,
    /// Class of the `text` element holding a node label.
    label_class: String,
    /// Class of the `path` element of each link.
    link_class: String,
}

impl ExtractConfig {
    /// Returns the element selectors for these class names.
    pub fn selectors(&self) -> Selectors {
        Selectors::from_classes(
            &self.container_class,
            &self.node_class,
            &self.label_class,
            &self.link_class,
        )
    }

    /// Configured class names keyed by their setting name.
    pub fn class_names(&self) -> [(&'static str, &str); 4] {
        [
            ("container_class", self.container_class.as_str()),
            ("node_class", self.node_class.as_str()),
            ("label_class", self.label_class.as_str()),
            ("link_class", self.link_class.as_str()),
        ]
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            container_class: "mindmap".to_string(),
            node_class: "node".to_string(),
            label_class: "node-name".to_string(),
            link_class: "link".to_string(),
        }
    }
}

/// How nodes that the traversal never reached are levelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanLeveling {
    /// Every recovered node becomes a level-1 heading.
    #[default]
    None,
    /// Nodes are grouped by the fill colour of their box.
    Fill,
    /// Nodes are grouped by the configured `[outline.colors]` table.
    Table,
}

/// Outline rendering settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    max_heading_level: usize,
    orphan_leveling: OrphanLeveling,
    /// Label to colour key, used with [`OrphanLeveling::Table`].
    colors: IndexMap<String, String>,
}

impl OutlineConfig {
    pub fn new(
        max_heading_level: usize,
        orphan_leveling: OrphanLeveling,
        colors: IndexMap<String, String>,
    ) -> Self {
        Self {
            max_heading_level,
            orphan_leveling,
            colors,
        }
    }

    /// Deepest heading level emitted, clamped to `1..=6`.
    pub fn max_heading_level(&self) -> usize {
        self.max_heading_level.clamp(1, MAX_HEADING_LEVEL)
    }

    /// The level as written in the configuration, before clamping.
    pub fn requested_heading_level(&self) -> usize {
        self.max_heading_level
    }

    pub fn orphan_leveling(&self) -> OrphanLeveling {
        self.orphan_leveling
    }

    pub fn colors(&self) -> &IndexMap<String, String> {
        &self.colors
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            max_heading_level: MAX_HEADING_LEVEL,
            orphan_leveling: OrphanLeveling::default(),
            colors: IndexMap::new(),
        }
    }
}

/// Appearance of the collapse/expand toggles added to exported SVGs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnnotateConfig {
    /// Glyph shown while the node's children are visible.
    expand_glyph: String,
    /// Glyph shown while the node's children are hidden.
    collapse_glyph: String,
    font_size: u32,
    fill: String,
}

impl AnnotateConfig {
    pub fn expand_glyph(&self) -> &str {
        &self.expand_glyph
    }

    pub fn collapse_glyph(&self) -> &str {
        &self.collapse_glyph
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            expand_glyph: "<".to_string(),
            collapse_glyph: ">".to_string(),
            font_size: 14,
            fill: "#4f8cff".to_string(),
        }
    }
}

/// Naming of exported artifacts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    filename_prefix: String,
}

impl ExportConfig {
    pub fn filename_prefix(&self) -> &str {
        &self.filename_prefix
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_prefix: "notebookllm".to_string(),
        }
    }
}
