//! Host-facing result handoff.
//!
//! A host runs one export against a captured page and receives exactly one
//! [`HostResponse`]: the Markdown with its statistics, the SVG content, or an
//! error message.

use std::fmt;

use serde::{Deserialize, Serialize};

use mapscribe_core::stats::ExportStats;

use crate::{error::MapscribeError, outline::MarkdownExport};

/// Which artifact an export produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    Markdown,
    Svg,
}

impl ExportKind {
    /// File extension of the artifact, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::Markdown => "md",
            ExportKind::Svg => "svg",
        }
    }

    /// MIME type of the artifact.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportKind::Markdown => "text/markdown",
            ExportKind::Svg => "image/svg+xml",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportKind::Markdown => write!(f, "markdown"),
            ExportKind::Svg => write!(f, "svg"),
        }
    }
}

/// Result of one export, serialized as `{markdown, stats}`, `{svgContent}`
/// or `{error}`.
///
/// # Examples
///
/// ```
/// # use mapscribe::host::HostResponse;
/// let response = HostResponse::Error {
///     error: "no SVG element found".to_string(),
/// };
/// assert_eq!(
///     serde_json::to_string(&response).unwrap(),
///     r#"{"error":"no SVG element found"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostResponse {
    Markdown {
        markdown: String,
        stats: ExportStats,
    },
    Svg {
        #[serde(rename = "svgContent")]
        svg_content: String,
    },
    Error {
        error: String,
    },
}

impl HostResponse {
    /// The error message, if this response reports a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            HostResponse::Error { error } => Some(error),
            _ => None,
        }
    }

    /// The artifact content, if the export succeeded.
    pub fn content(&self) -> Option<&str> {
        match self {
            HostResponse::Markdown { markdown, .. } => Some(markdown),
            HostResponse::Svg { svg_content } => Some(svg_content),
            HostResponse::Error { .. } => None,
        }
    }
}

impl From<MarkdownExport> for HostResponse {
    fn from(export: MarkdownExport) -> Self {
        HostResponse::Markdown {
            markdown: export.markdown,
            stats: export.stats,
        }
    }
}

impl From<MapscribeError> for HostResponse {
    fn from(error: MapscribeError) -> Self {
        HostResponse::Error {
            error: error.to_string(),
        }
    }
}
