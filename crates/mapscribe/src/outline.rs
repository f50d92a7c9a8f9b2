//! Markdown outline rendering and orphan recovery.
//!
//! The outline is a pre-order walk of the inferred [`Tree`] from its root, one
//! heading per node with the heading level following the depth. Nodes the
//! walk never reached are appended afterwards so that no extracted node is
//! dropped, and counted in the returned [`ExportStats`].
//!
//! # Example
//!
//! ```
//! # use mapscribe_core::geometry::{Point, Size};
//! # use mapscribe_parser::Extraction;
//! # use mapscribe::{outline::render_outline, tree::Tree};
//! let mut extraction = Extraction::new();
//! let a = extraction.add_node("A", Point::default(), Size::default(), None);
//! let b = extraction.add_node("B", Point::default(), Size::default(), None);
//!
//! let mut tree = Tree::new();
//! tree.insert(a, b);
//!
//! let export = render_outline(&extraction, &tree, Some(a), 6, None);
//! assert_eq!(export.markdown, "# A\n## B");
//! assert!(export.stats.is_complete());
//! ```

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use mapscribe_core::{name::NodeName, stats::ExportStats};
use mapscribe_parser::Extraction;

use crate::{config::MAX_HEADING_LEVEL, tree::Tree};

// =============================================================================
// Colour lookups
// =============================================================================

/// Maps a node label to a colour or category key.
///
/// Recovered nodes are levelled like the reached nodes sharing their key.
pub trait ColorLookup {
    fn color(&self, label: &str) -> Option<&str>;
}

/// Explicit label to colour key table.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    colors: IndexMap<String, String>,
}

impl ColorTable {
    pub fn new(colors: IndexMap<String, String>) -> Self {
        Self { colors }
    }
}

impl ColorLookup for ColorTable {
    fn color(&self, label: &str) -> Option<&str> {
        self.colors.get(label).map(String::as_str)
    }
}

/// Colour keys taken from the fill of each extracted node box.
///
/// For repeated labels the last box with a fill wins.
#[derive(Debug, Clone)]
pub struct FillColors<'a> {
    fills: IndexMap<&'a str, &'a str>,
}

impl<'a> FillColors<'a> {
    pub fn new(extraction: &'a Extraction) -> Self {
        let fills = extraction
            .nodes()
            .iter()
            .filter_map(|node| Some((extraction.name(node.name()), node.fill()?)))
            .collect();
        Self { fills }
    }
}

impl ColorLookup for FillColors<'_> {
    fn color(&self, label: &str) -> Option<&str> {
        self.fills.get(label).copied()
    }
}

// =============================================================================
// Outline
// =============================================================================

/// Markdown produced for one extraction, with its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownExport {
    /// Heading lines joined with `\n`, without a trailing newline.
    pub markdown: String,
    pub stats: ExportStats,
}

/// Heading lines under construction.
struct Outline<'a> {
    extraction: &'a Extraction,
    max_level: usize,
    lines: Vec<String>,
    /// Level at which each reached node was first emitted, unclamped.
    visited: IndexMap<NodeName, usize>,
    headings: IndexSet<String>,
}

impl<'a> Outline<'a> {
    fn new(extraction: &'a Extraction, max_level: usize) -> Self {
        Self {
            extraction,
            max_level: max_level.clamp(1, MAX_HEADING_LEVEL),
            lines: Vec::new(),
            visited: IndexMap::new(),
            headings: IndexSet::new(),
        }
    }

    fn heading(&self, level: usize, name: NodeName) -> String {
        let level = level.clamp(1, self.max_level);
        format!("{} {}", "#".repeat(level), self.extraction.name(name))
    }

    fn push(&mut self, heading: String) {
        self.headings.insert(heading.clone());
        self.lines.push(heading);
    }

    /// Walks `tree` depth first from `start`, emitting unvisited nodes.
    fn walk(&mut self, tree: &Tree, start: NodeName, level: usize) {
        let mut stack = vec![(start, level)];

        while let Some((name, level)) = stack.pop() {
            if self.visited.contains_key(&name) {
                continue;
            }
            self.visited.insert(name, level);

            let heading = self.heading(level, name);
            self.push(heading);

            stack.extend(
                tree.children(name)
                    .iter()
                    .rev()
                    .map(|child| (*child, level + 1)),
            );
        }
    }

    /// Smallest first-visit level per colour key among reached nodes.
    fn color_levels(&self, colors: &dyn ColorLookup) -> IndexMap<String, usize> {
        let mut levels: IndexMap<String, usize> = IndexMap::new();

        for (name, level) in &self.visited {
            let Some(color) = colors.color(self.extraction.name(*name)) else {
                continue;
            };
            levels
                .entry(color.to_string())
                .and_modify(|min| *min = (*min).min(*level))
                .or_insert(*level);
        }

        levels
    }

    /// Appends headings for `missing`, skipping headings already present.
    fn recover(&mut self, missing: &[NodeName], colors: Option<&dyn ColorLookup>) {
        let levels = colors
            .map(|colors| self.color_levels(colors))
            .unwrap_or_default();

        let extraction = self.extraction;
        for name in missing {
            let label = extraction.name(*name);
            let level = colors
                .and_then(|colors| colors.color(label))
                .and_then(|color| levels.get(color).copied())
                .unwrap_or(1);

            let heading = self.heading(level, *name);
            if self.headings.contains(&heading) {
                trace!(label = label; "Skipping recovered node already in the outline");
                continue;
            }
            trace!(label = label, level; "Recovered node");
            self.push(heading);
        }
    }

    fn into_markdown(self) -> String {
        self.lines.join("\n")
    }
}

/// Renders the outline for `extraction`.
///
/// Walks `tree` from `root` at level 1, then appends every extracted node
/// the walk did not reach. If the walk produced nothing, every node is used
/// as a starting point in turn instead. Heading levels are clamped to
/// `1..=max_level` (itself clamped to `1..=6`). When `colors` is given, a
/// recovered node takes the smallest level among reached nodes with the same
/// colour key; otherwise it becomes a level-1 heading.
pub fn render_outline(
    extraction: &Extraction,
    tree: &Tree,
    root: Option<NodeName>,
    max_level: usize,
    colors: Option<&dyn ColorLookup>,
) -> MarkdownExport {
    let mut outline = Outline::new(extraction, max_level);

    if let Some(root) = root {
        outline.walk(tree, root, 1);
    }

    if outline.lines.is_empty() {
        debug!("Outline empty after root walk, walking from every node");
        for node in extraction.nodes() {
            outline.walk(tree, node.name(), 1);
        }
    }

    let normal = outline.visited.len();
    let missing: Vec<NodeName> = extraction
        .nodes()
        .iter()
        .map(|node| node.name())
        .filter(|name| !outline.visited.contains_key(name))
        .collect();
    let missing_names: Vec<String> = missing
        .iter()
        .map(|name| extraction.name(*name).to_string())
        .collect();

    outline.recover(&missing, colors);

    let stats = ExportStats::new(extraction.nodes().len(), normal, missing_names);
    debug!(
        total = stats.total,
        normal = stats.normal,
        missing = stats.missing;
        "Outline rendered"
    );

    MarkdownExport {
        markdown: outline.into_markdown(),
        stats,
    }
}
