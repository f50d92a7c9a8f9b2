//! Error adapter for converting MapscribeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Mapscribe errors
//! carry no source spans, so the adapter contributes a stable code and a hint.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use mapscribe::MapscribeError;

/// Adapter rendering a [`MapscribeError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a MapscribeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            MapscribeError::Io(_) => "mapscribe::io",
            MapscribeError::NoContainer | MapscribeError::NoSvg => "mapscribe::structure",
            MapscribeError::GenerateFailed => "mapscribe::generate",
            MapscribeError::Config(_) => "mapscribe::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            MapscribeError::Io(_) => {
                "check that the input file is readable and the output directory is writable"
            }
            MapscribeError::NoContainer => {
                "capture the page after the mind map is shown, or set [extract] container_class"
            }
            MapscribeError::NoSvg => "the mind map container has not rendered its diagram yet",
            MapscribeError::GenerateFailed => {
                "no labeled node was found; check the [extract] class names"
            }
            MapscribeError::Config(_) => "fix the configuration file or pass a different --config",
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`MapscribeError`] for rendering with miette.
pub fn to_reportable(err: &MapscribeError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn code(err: &MapscribeError) -> String {
        to_reportable(err)
            .code()
            .map(|code| code.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            code(&MapscribeError::Io(io::Error::other("disk full"))),
            "mapscribe::io"
        );
        assert_eq!(code(&MapscribeError::NoContainer), "mapscribe::structure");
        assert_eq!(code(&MapscribeError::NoSvg), "mapscribe::structure");
        assert_eq!(code(&MapscribeError::GenerateFailed), "mapscribe::generate");
        assert_eq!(
            code(&MapscribeError::Config("bad".to_string())),
            "mapscribe::config"
        );
    }

    #[test]
    fn test_display_and_help() {
        let err = MapscribeError::NoSvg;
        let reportable = to_reportable(&err);

        assert_eq!(reportable.to_string(), "no SVG element found");
        assert!(reportable.help().is_some());
        assert!(reportable.labels().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = MapscribeError::GenerateFailed;
        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &to_reportable(&err))
            .expect("Writing to String buffer is infallible");

        assert!(out.contains("failed to generate output"));
        assert!(out.contains("mapscribe::generate"));
    }
}
