//! Error types for Mapscribe operations.
//!
//! This module provides the main error type [`MapscribeError`]. The display
//! strings of the structural and generation variants are the messages a host
//! reports back in its `{error}` response.

use std::io;

use thiserror::Error;

/// The main error type for Mapscribe operations.
#[derive(Debug, Error)]
pub enum MapscribeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The captured page has no diagram container.
    #[error("no container element found")]
    NoContainer,

    /// The diagram container holds no SVG element.
    #[error("no SVG element found")]
    NoSvg,

    /// The outline came out empty.
    #[error("failed to generate output")]
    GenerateFailed,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MapscribeError {
    /// Create a new `Config` error from any displayable cause.
    pub fn new_config_error(cause: impl std::fmt::Display) -> Self {
        Self::Config(cause.to_string())
    }
}
