//! Integration tests for the MindmapExporter API
//!
//! These tests drive the public API over small synthetic captures and the
//! captured pages under `fixtures/`.

use std::{fs, path::PathBuf};

use indexmap::IndexMap;

use mapscribe::{
    MapscribeError, MindmapExporter,
    config::{AnnotateConfig, AppConfig, ExportConfig, ExtractConfig, OrphanLeveling, OutlineConfig},
    host::{ExportKind, HostResponse},
    stats::ExportStats,
};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("{}: {err}", path.display()))
}

/// A node box of 100x40 at (x, y).
fn node(label: &str, x: i32, y: i32) -> String {
    format!(
        r#"<g class="node" transform="translate({x},{y})"><rect width="100" height="40"/><text class="node-name">{label}</text></g>"#
    )
}

/// A link from the right edge of the box at (x1, y1) to the left edge of the
/// box at (x2, y2), shifted by `jitter` pixels at both ends.
fn link(from: (i32, i32), to: (i32, i32), jitter: i32) -> String {
    let (sx, sy) = (from.0 + 100 + jitter, from.1 + 20 - jitter);
    let (ex, ey) = (to.0 - jitter, to.1 + 20 + jitter);
    format!(r#"<path class="link" d="M{sx},{sy} C{sx},{sy} {ex},{ey} {ex},{ey}"/>"#)
}

fn capture(parts: &[String]) -> String {
    format!(
        r#"<html><body><div class="mindmap"><svg>{}</svg></div></body></html>"#,
        parts.concat()
    )
}

fn export(page: &str) -> Result<mapscribe::outline::MarkdownExport, MapscribeError> {
    let exporter = MindmapExporter::default();
    let document = exporter.snapshot(page);
    exporter.export_markdown(&document)
}

const A: (i32, i32) = (0, 0);
const B: (i32, i32) = (200, -60);
const C: (i32, i32) = (200, 60);
const D: (i32, i32) = (400, 300);

#[test]
fn test_builder_api_exists() {
    let _exporter = MindmapExporter::default();
    let _configured = MindmapExporter::new(AppConfig::default());
}

#[test]
fn test_root_with_two_children() {
    let page = capture(&[
        node("A", A.0, A.1),
        node("B", B.0, B.1),
        node("C", C.0, C.1),
        link(A, B, 0),
        link(A, C, 0),
    ]);

    let export = export(&page).expect("Failed to export");
    assert_eq!(export.markdown, "# A\n## B\n## C");
    assert_eq!(export.stats, ExportStats::new(3, 3, vec![]));
}

#[test]
fn test_isolated_node_is_recovered() {
    let page = capture(&[
        node("A", A.0, A.1),
        node("B", B.0, B.1),
        node("C", C.0, C.1),
        node("D", D.0, D.1),
        link(A, B, 0),
        link(A, C, 0),
    ]);

    let export = export(&page).expect("Failed to export");
    assert_eq!(export.markdown, "# A\n## B\n## C\n# D");
    assert_eq!(export.stats.missing, 1);
    assert_eq!(export.stats.missing_names, ["D"]);
}

#[test]
fn test_jittered_endpoints_resolve() {
    let page = capture(&[
        node("A", A.0, A.1),
        node("B", B.0, B.1),
        node("C", C.0, C.1),
        link(A, B, 3),
        link(A, C, -3),
    ]);

    let export = export(&page).expect("Failed to export");
    assert_eq!(export.markdown, "# A\n## B\n## C");
}

#[test]
fn test_duplicate_links_produce_one_child() {
    let page = capture(&[
        node("A", A.0, A.1),
        node("B", B.0, B.1),
        link(A, B, 0),
        link(A, B, 1),
        link(A, B, 0),
    ]);

    let export = export(&page).expect("Failed to export");
    assert_eq!(export.markdown, "# A\n## B");
}

#[test]
fn test_child_listed_before_root() {
    let page = capture(&[
        node("B", B.0, B.1),
        node("A", A.0, A.1),
        link(A, B, 0),
    ]);

    let export = export(&page).expect("Failed to export");
    assert_eq!(export.markdown, "# A\n## B");
}

#[test]
fn test_deep_chain_levels_stay_in_range() {
    let mut parts = Vec::new();
    let positions: Vec<(i32, i32)> = (0..9).map(|i| (i * 200, 0)).collect();
    for (i, position) in positions.iter().enumerate() {
        parts.push(node(&format!("N{i}"), position.0, position.1));
    }
    for pair in positions.windows(2) {
        parts.push(link(pair[0], pair[1], 0));
    }

    let export = export(&capture(&parts)).expect("Failed to export");
    for line in export.markdown.lines() {
        let level = line.chars().take_while(|c| *c == '#').count();
        assert!((1..=6).contains(&level), "bad heading {line:?}");
    }
    assert!(export.markdown.ends_with("###### N8"));
}

#[test]
fn test_export_is_idempotent() {
    let page = fixture("notebook_capture.html");
    let exporter = MindmapExporter::default();
    let document = exporter.snapshot(&page);

    let first = exporter.export_markdown(&document).expect("Failed to export");
    let second = exporter.export_markdown(&document).expect("Failed to export");
    assert_eq!(first, second);
    assert_eq!(
        exporter.export_svg(&document).ok(),
        exporter.export_svg(&document).ok()
    );
}

#[test]
fn test_notebook_capture_markdown() {
    let page = fixture("notebook_capture.html");
    let export = export(&page).expect("Failed to export");

    assert_eq!(
        export.markdown,
        "# Rust Ownership\n\
         ## Borrowing & Aliasing\n\
         ### Shared references\n\
         ### Mutable references\n\
         ## Lifetimes\n\
         # Orphan Topic"
    );
    assert_eq!(
        export.stats,
        ExportStats::new(6, 5, vec!["Orphan Topic".to_string()])
    );
}

#[test]
fn test_notebook_capture_fill_leveling() {
    let outline = OutlineConfig::new(6, OrphanLeveling::Fill, IndexMap::new());
    let config = AppConfig::new(
        ExtractConfig::default(),
        outline,
        AnnotateConfig::default(),
        ExportConfig::default(),
    );
    let exporter = MindmapExporter::new(config);
    let document = exporter.snapshot(&fixture("notebook_capture.html"));

    let export = exporter.export_markdown(&document).expect("Failed to export");
    assert!(export.markdown.ends_with("\n### Orphan Topic"));
    assert_eq!(export.stats.missing, 1);
}

#[test]
fn test_notebook_capture_svg() {
    let exporter = MindmapExporter::default();
    let document = exporter.snapshot(&fixture("notebook_capture.html"));

    let svg = exporter.export_svg(&document).expect("Failed to export");
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert_eq!(svg.matches(r#"class="toggle-btn""#).count(), 2);
    assert_eq!(svg.matches("<script").count(), 1);
}

#[test]
fn test_notebook_capture_root_label() {
    let exporter = MindmapExporter::default();
    let document = exporter.snapshot(&fixture("notebook_capture.html"));
    assert_eq!(
        exporter.root_label(&document).as_deref(),
        Some("Rust Ownership")
    );
}

#[test]
fn test_host_responses() {
    let exporter = MindmapExporter::default();

    let document = exporter.snapshot(&fixture("notebook_capture.html"));
    assert!(matches!(
        exporter.respond(&document, ExportKind::Markdown),
        HostResponse::Markdown { .. }
    ));
    assert!(matches!(
        exporter.respond(&document, ExportKind::Svg),
        HostResponse::Svg { .. }
    ));

    let no_svg = exporter.snapshot(&fixture("no_svg.html"));
    assert_eq!(
        exporter.respond(&no_svg, ExportKind::Svg).error(),
        Some("no SVG element found")
    );
    assert_eq!(
        exporter.respond(&no_svg, ExportKind::Markdown).error(),
        Some("failed to generate output")
    );

    let no_container = exporter.snapshot(&fixture("no_container.html"));
    assert_eq!(
        exporter.respond(&no_container, ExportKind::Svg).error(),
        Some("no container element found")
    );
    assert_eq!(exporter.root_label(&no_container), None);
}

#[test]
fn test_export_returns_typed_errors() {
    let exporter = MindmapExporter::default();

    let document = exporter.snapshot(&fixture("notebook_capture.html"));
    let response = exporter.export(&document, ExportKind::Markdown).unwrap();
    assert_eq!(response, exporter.respond(&document, ExportKind::Markdown));

    let no_svg = exporter.snapshot(&fixture("no_svg.html"));
    assert!(matches!(
        exporter.export(&no_svg, ExportKind::Svg),
        Err(MapscribeError::NoSvg)
    ));
}

#[test]
fn test_notebook_svg_export_is_well_formed_xml() {
    let exporter = MindmapExporter::default();
    let document = exporter.snapshot(&fixture("notebook_capture.html"));
    let svg = exporter.export_svg(&document).unwrap();

    let xml = roxmltree::Document::parse(&svg).unwrap_or_else(|err| panic!("{err}\n{svg}"));
    assert!(xml.root_element().has_tag_name(("http://www.w3.org/2000/svg", "svg")));

    let labels: Vec<&str> = xml
        .descendants()
        .filter(|node| node.attribute("class") == Some("node-name"))
        .filter_map(|node| node.text())
        .collect();
    assert!(labels.contains(&"Borrowing & Aliasing"));
}
