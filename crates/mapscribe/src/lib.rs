//! Mapscribe - Markdown outlines and interactive SVGs from rendered mind maps.
//!
//! A mind map rendered into a web page keeps its structure only as geometry:
//! positioned node boxes and the link paths between them. Mapscribe reads a
//! captured page, infers which node is the parent of which from where the
//! links start and end, and exports the tree as a Markdown outline. A second,
//! independent export copies the diagram's SVG and adds collapse/expand
//! toggles to it.

pub mod annotate;
pub mod config;
pub mod host;
pub mod matcher;
pub mod outline;
pub mod root;
pub mod tree;

mod error;

pub use mapscribe_core::{geometry, name, record, stats};
pub use mapscribe_parser::{Extraction, Selectors, markup};

pub use error::MapscribeError;

use log::{debug, info, trace};

use mapscribe_parser::markup::Document;

use annotate::SvgAnnotator;
use config::{AppConfig, OrphanLeveling};
use host::{ExportKind, HostResponse};
use matcher::EndpointMatcher;
use outline::{ColorLookup, ColorTable, FillColors, MarkdownExport};
use tree::Tree;

/// Entry point for exporting captured mind maps.
///
/// The exporter holds configuration only; every call works on its own
/// snapshot and nothing is carried over between calls.
///
/// # Examples
///
/// ```rust
/// use mapscribe::{MindmapExporter, host::ExportKind};
///
/// let page = r#"<div class="mindmap"><svg>
///     <g class="node" transform="translate(0,0)">
///         <rect width="100" height="40"/><text class="node-name">Topic</text>
///     </g>
///     <g class="node" transform="translate(200,0)">
///         <rect width="100" height="40"/><text class="node-name">Detail</text>
///     </g>
///     <path class="link" d="M100,20 C150,20 150,20 200,20"/>
/// </svg></div>"#;
///
/// let exporter = MindmapExporter::default();
/// let document = exporter.snapshot(page);
///
/// let export = exporter.export_markdown(&document)
///     .expect("Failed to export");
/// assert_eq!(export.markdown, "# Topic\n## Detail");
///
/// let svg = exporter.export_svg(&document)
///     .expect("Failed to export");
/// assert!(svg.contains("toggle-btn"));
///
/// assert_eq!(exporter.root_label(&document).as_deref(), Some("Topic"));
/// assert!(exporter.respond(&document, ExportKind::Markdown).error().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MindmapExporter {
    config: AppConfig,
}

impl MindmapExporter {
    /// Create a new exporter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including selectors, outline
    ///   and annotation settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a captured page into a document snapshot.
    ///
    /// Parsing never fails; malformed markup is read as well as possible.
    pub fn snapshot(&self, source: &str) -> Document {
        info!(bytes = source.len(); "Reading captured page");
        let document = Document::parse(source);
        trace!(elements = document.descendants().count(); "Page parsed");
        document
    }

    /// Extract node records and link endpoints from a snapshot.
    pub fn extract(&self, document: &Document) -> Extraction {
        mapscribe_parser::extract(document, &self.config.extract().selectors())
    }

    /// Rebuild the mind map's tree and render it as a Markdown outline.
    ///
    /// # Errors
    ///
    /// Returns [`MapscribeError::GenerateFailed`] when no heading could be
    /// produced, which happens when the snapshot holds no usable node.
    pub fn export_markdown(&self, document: &Document) -> Result<MarkdownExport, MapscribeError> {
        info!("Exporting Markdown outline");

        let extraction = self.extract(document);
        let mut matcher = EndpointMatcher::new(extraction.nodes());
        let tree = Tree::build(extraction.links(), &mut matcher);

        let root = root::resolve_root(extraction.nodes(), &tree);
        debug!(root:? = root.map(|name| extraction.name(name)); "Root selected");

        let outline_config = self.config.outline();
        let table;
        let fills;
        let colors: Option<&dyn ColorLookup> = match outline_config.orphan_leveling() {
            OrphanLeveling::None => None,
            OrphanLeveling::Fill => {
                fills = FillColors::new(&extraction);
                Some(&fills)
            }
            OrphanLeveling::Table => {
                table = ColorTable::new(outline_config.colors().clone());
                Some(&table)
            }
        };

        let export = outline::render_outline(
            &extraction,
            &tree,
            root,
            outline_config.max_heading_level(),
            colors,
        );

        if export.markdown.is_empty() {
            return Err(MapscribeError::GenerateFailed);
        }

        info!(
            total = export.stats.total,
            normal = export.stats.normal,
            missing = export.stats.missing;
            "Markdown outline exported"
        );
        Ok(export)
    }

    /// Copy the diagram's SVG with collapse/expand toggles added.
    ///
    /// # Errors
    ///
    /// Returns [`MapscribeError::NoContainer`] or [`MapscribeError::NoSvg`]
    /// when the snapshot lacks the diagram container or its SVG.
    pub fn export_svg(&self, document: &Document) -> Result<String, MapscribeError> {
        info!("Exporting annotated SVG");
        SvgAnnotator::new(self.config.annotate())
            .annotate_document(document, &self.config.extract().selectors())
    }

    /// Label of the first node inside the diagram container.
    pub fn root_label(&self, document: &Document) -> Option<String> {
        mapscribe_parser::root_label(document, &self.config.extract().selectors())
    }

    /// Runs the export named by `kind` and wraps its artifact in the matching
    /// [`HostResponse`] variant.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`Self::export_markdown`] or
    /// [`Self::export_svg`].
    pub fn export(
        &self,
        document: &Document,
        kind: ExportKind,
    ) -> Result<HostResponse, MapscribeError> {
        match kind {
            ExportKind::Markdown => self.export_markdown(document).map(HostResponse::from),
            ExportKind::Svg => self
                .export_svg(document)
                .map(|svg_content| HostResponse::Svg { svg_content }),
        }
    }

    /// Run one export and package its outcome for a host, failures included.
    pub fn respond(&self, document: &Document, kind: ExportKind) -> HostResponse {
        self.export(document, kind).unwrap_or_else(|err| {
            info!(kind:% = kind, error:% = err; "Export failed");
            HostResponse::from(err)
        })
    }
}
