//! Persisting exported artifacts.
//!
//! A [`DownloadSink`] receives finished artifacts as `(content, filename,
//! mime type)`. The CLI ships a [`DirectorySink`] that writes them into a
//! directory; [`export_filename`] builds the conventional file name.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use log::info;

use mapscribe::{MapscribeError, host::ExportKind};

/// Used when the diagram's root label cannot be determined.
const UNKNOWN_LABEL: &str = "unknown";

/// Destination for exported artifacts.
pub trait DownloadSink {
    /// Persists `content` under `filename` and returns where it was stored.
    fn save(
        &self,
        content: &[u8],
        filename: &str,
        mime_type: &str,
    ) -> Result<PathBuf, MapscribeError>;
}

/// Writes artifacts into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn save(
        &self,
        content: &[u8],
        filename: &str,
        mime_type: &str,
    ) -> Result<PathBuf, MapscribeError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(filename);
        fs::write(&path, content)?;

        info!(
            path = path.display().to_string(),
            mime_type,
            bytes = content.len();
            "Artifact saved"
        );
        Ok(path)
    }
}

/// Makes a root label safe to embed in a file name.
///
/// Colons become ` -` and path separators become `-`.
///
/// # Examples
///
/// ```
/// # use mapscribe_cli::sink::sanitize_label;
/// assert_eq!(sanitize_label("Rust: Ownership"), "Rust - Ownership");
/// assert_eq!(sanitize_label("I/O and C\\C++"), "I-O and C-C++");
/// ```
pub fn sanitize_label(label: &str) -> String {
    label.replace(':', " -").replace(['/', '\\'], "-")
}

/// Builds `<prefix>-<rootLabel>-<YYYYMMDD>_<HHMMSS>.<ext>`.
///
/// A missing or blank root label is written as `unknown`.
pub fn export_filename(
    prefix: &str,
    root_label: Option<&str>,
    kind: ExportKind,
    timestamp: NaiveDateTime,
) -> String {
    let label = root_label
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(sanitize_label)
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

    format!(
        "{prefix}-{label}-{}.{}",
        timestamp.format("%Y%m%d_%H%M%S"),
        kind.extension()
    )
}
