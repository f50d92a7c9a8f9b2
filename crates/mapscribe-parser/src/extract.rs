//! Geometry extraction from a captured mind-map document.
//!
//! The extractor walks the whole document once for node groups and once for
//! link paths. Elements without usable geometry are skipped silently; their
//! absence surfaces later as missing nodes in the export statistics.

use indexmap::IndexMap;
use log::{debug, trace};

use mapscribe_core::{
    geometry::{Point, Size},
    name::{NameTable, NodeName},
    record::{LinkEndpoints, NodeRecord},
};

use crate::{
    markup::{Document, Element, Selector},
    values::{numeric_tokens, parse_length, parse_translate, style_property},
};

/// Element selectors locating the parts of a rendered mind map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    container: Selector,
    node: Selector,
    label: Selector,
    link: Selector,
}

impl Selectors {
    /// Builds selectors from the class names used by the diagram renderer.
    ///
    /// Node groups are `g` elements, labels `text` elements and links `path`
    /// elements; the container may be any element.
    pub fn from_classes(container: &str, node: &str, label: &str, link: &str) -> Self {
        Self {
            container: Selector::class(container),
            node: Selector::tag("g").with_class(node),
            label: Selector::tag("text").with_class(label),
            link: Selector::tag("path").with_class(link),
        }
    }

    pub fn container(&self) -> &Selector {
        &self.container
    }

    pub fn node(&self) -> &Selector {
        &self.node
    }

    pub fn label(&self) -> &Selector {
        &self.label
    }

    pub fn link(&self) -> &Selector {
        &self.link
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::from_classes("mindmap", "node", "node-name", "link")
    }
}

/// Everything one extraction pass found in a document.
///
/// Node names are interned into the pass's own [`NameTable`]; a
/// [`NodeName`] from one extraction must not be resolved against another.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    names: NameTable,
    nodes: Vec<NodeRecord>,
    positions: IndexMap<NodeName, Point>,
    links: Vec<LinkEndpoints>,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a node and returns its interned name.
    ///
    /// A label seen before maps to the same name; its position is
    /// overwritten while the earlier record stays in the node list.
    pub fn add_node(
        &mut self,
        label: &str,
        position: Point,
        size: Size,
        fill: Option<&str>,
    ) -> NodeName {
        let name = self.names.intern(label);
        let mut record = NodeRecord::new(name, position, size);
        if let Some(fill) = fill {
            record = record.with_fill(fill);
        }

        self.nodes.push(record);
        self.positions.insert(name, position);
        name
    }

    pub fn add_link(&mut self, link: LinkEndpoints) {
        self.links.push(link);
    }

    /// Node records in document order.
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// Link endpoints in document order.
    pub fn links(&self) -> &[LinkEndpoints] {
        &self.links
    }

    /// Last recorded top-left position of each name.
    pub fn positions(&self) -> &IndexMap<NodeName, Point> {
        &self.positions
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Resolves a name of this extraction to its label text.
    pub fn name(&self, name: NodeName) -> &str {
        self.names.resolve(name)
    }

    /// Looks up the name of a label, if a node with that label was extracted.
    pub fn lookup(&self, label: &str) -> Option<NodeName> {
        self.names.get(label)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Fill of a node box: the `fill` attribute, else an inline `fill:` style.
fn box_fill(rect: &Element) -> Option<String> {
    let fill = rect
        .attribute("fill")
        .map(|fill| fill.trim().to_string())
        .filter(|fill| !fill.is_empty());

    fill.or_else(|| {
        let style = rect.attribute("style")?;
        style_property(&style, "fill").map(str::to_string)
    })
}

fn length_attribute(element: &Element, name: &str) -> f64 {
    element
        .attribute(name)
        .and_then(|value| parse_length(&value))
        .unwrap_or(0.0)
}

fn extract_node(node: &Element, selectors: &Selectors, extraction: &mut Extraction) {
    let Some(position) = node
        .attribute("transform")
        .and_then(|transform| parse_translate(&transform))
    else {
        trace!(element = node.name(); "Skipping node without a translate transform");
        return;
    };

    let label = node
        .select_first(selectors.label())
        .map(|label| label.text_content())
        .unwrap_or_default();
    let label = label.trim();
    if label.is_empty() {
        trace!(x = position.x(), y = position.y(); "Skipping node without a label");
        return;
    }

    let rect = node.select_first(&Selector::tag("rect"));
    let size = rect
        .map(|rect| Size::new(length_attribute(rect, "width"), length_attribute(rect, "height")))
        .unwrap_or_default();
    let fill = rect.and_then(box_fill);

    trace!(label = label, x = position.x(), y = position.y(); "Extracted node");
    extraction.add_node(label, position, size, fill.as_deref());
}

fn extract_link(path: &Element, extraction: &mut Extraction) {
    let data = path.attribute("d").unwrap_or_default();
    let tokens = numeric_tokens(&data);

    match LinkEndpoints::from_tokens(&tokens) {
        Some(link) => {
            trace!(start:% = link.start(), end:% = link.end(); "Extracted link");
            extraction.add_link(link);
        }
        None => trace!(tokens = tokens.len(); "Skipping link with fewer than four coordinates"),
    }
}

/// Extracts node records and link endpoints from `document`.
///
/// The whole document is scanned, not only the diagram container.
///
/// # Examples
///
/// ```
/// use mapscribe_parser::{Selectors, extract, markup::Document};
///
/// let document = Document::parse(
///     r#"<svg>
///          <g class="node" transform="translate(0,0)">
///            <rect width="100" height="40"/><text class="node-name">Root</text>
///          </g>
///          <path class="link" d="M100,20 L200,20"/>
///        </svg>"#,
/// );
///
/// let extraction = extract(&document, &Selectors::default());
/// assert_eq!(extraction.nodes().len(), 1);
/// assert_eq!(extraction.links().len(), 1);
/// assert_eq!(extraction.name(extraction.nodes()[0].name()), "Root");
/// ```
pub fn extract(document: &Document, selectors: &Selectors) -> Extraction {
    let mut extraction = Extraction::new();

    for node in document.select(selectors.node()) {
        extract_node(node, selectors, &mut extraction);
    }
    for path in document.select(selectors.link()) {
        extract_link(path, &mut extraction);
    }

    debug!(
        nodes = extraction.nodes.len(),
        unique_names = extraction.names.len(),
        links = extraction.links.len();
        "Geometry extracted"
    );

    extraction
}

/// Label of the first node inside the diagram container.
///
/// This is the label the diagram renders first, which is the root for the
/// renderers this tool targets. Returns `None` when there is no container,
/// no label, or the label is blank.
pub fn root_label(document: &Document, selectors: &Selectors) -> Option<String> {
    let container = document.select_first(selectors.container())?;
    let label = container.select_first(selectors.label())?;
    let text = label.text_content();
    let text = text.trim();

    (!text.is_empty()).then(|| text.to_string())
}
