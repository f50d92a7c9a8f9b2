//! CLI logic for the Mapscribe export tool.
//!
//! This module contains the core CLI logic: reading a captured page, running
//! the requested exports and handing the artifacts to a download sink or
//! printing host responses as JSON.

pub mod error_adapter;
pub mod sink;

mod args;
mod config;

pub use args::{Args, Format};

use std::{
    fs,
    io::{self, Write},
};

use chrono::Local;
use log::{info, warn};

use mapscribe::{MapscribeError, MindmapExporter, host::HostResponse};

use sink::{DirectorySink, DownloadSink, export_filename};

/// Run the Mapscribe CLI application
///
/// This function reads the captured page, runs each requested export and
/// either saves the artifacts into the output directory or, with `--json`,
/// prints one host response per export to stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MapscribeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - The first export that fails
pub fn run(args: &Args) -> Result<(), MapscribeError> {
    info!(
        input_path = args.input,
        output_dir = args.output_dir;
        "Processing captured page"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input)?;

    let exporter = MindmapExporter::new(app_config);
    let document = exporter.snapshot(&source);
    let root_label = exporter.root_label(&document);
    info!(root_label:? = root_label; "Root label resolved");

    let sink = DirectorySink::new(&args.output_dir);
    let timestamp = Local::now().naive_local();

    for kind in args.format.kinds() {
        let result = exporter.export(&document, *kind);

        if args.json {
            let response = match &result {
                Ok(response) => response.clone(),
                Err(err) => HostResponse::Error {
                    error: err.to_string(),
                },
            };
            print_response(&response)?;
        }

        let response = result?;
        if let HostResponse::Markdown { stats, .. } = &response {
            if !stats.is_complete() {
                warn!(
                    missing = stats.missing,
                    missing_names:? = stats.missing_names;
                    "Some nodes were not reached from the root"
                );
            }
        }

        if args.json {
            continue;
        }

        let content = response.content().unwrap_or_default();
        let filename = export_filename(
            exporter.config().export().filename_prefix(),
            root_label.as_deref(),
            *kind,
            timestamp,
        );
        let path = sink.save(content.as_bytes(), &filename, kind.mime_type())?;
        info!(kind:% = kind, output_file = path.display().to_string(); "Export written");
    }

    Ok(())
}

fn print_response(response: &HostResponse) -> Result<(), MapscribeError> {
    let line = serde_json::to_string(response).map_err(io::Error::from)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    Ok(())
}
