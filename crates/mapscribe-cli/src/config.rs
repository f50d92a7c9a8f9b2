//! Configuration file loading for the CLI
//!
//! Finds the TOML configuration, parses it into an [`AppConfig`] and checks
//! the settings that parse fine but cannot work on a capture. Empty or
//! multi-token class names are rejected, since a class selector built from
//! them matches nothing useful. Values the exporter corrects on its own,
//! such as an out-of-range heading level, only produce a warning.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info, warn};
use thiserror::Error;

use mapscribe::{
    MapscribeError,
    config::{AppConfig, MAX_HEADING_LEVEL, OrphanLeveling},
};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for MapscribeError {
    fn from(err: ConfigError) -> Self {
        MapscribeError::new_config_error(err)
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (mapscribe/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - A class name in `[extract]` is empty or contains whitespace
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, MapscribeError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("mapscribe/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "mapscribe", "mapscribe") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
/// - The parsed settings fail validation
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, MapscribeError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    for (setting, class) in config.extract().class_names() {
        if class.is_empty() || class.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "extract.{setting} must be a single class name, got {class:?}"
            )));
        }
    }

    let outline = config.outline();
    let requested = outline.requested_heading_level();
    if requested != outline.max_heading_level() {
        warn!(
            requested,
            used = outline.max_heading_level(),
            max = MAX_HEADING_LEVEL;
            "outline.max_heading_level is out of range, clamping"
        );
    }
    if outline.orphan_leveling() == OrphanLeveling::Table && outline.colors().is_empty() {
        warn!("outline.orphan_leveling is \"table\" but [outline.colors] is empty");
    }

    if config.annotate().font_size() == 0 {
        warn!("annotate.font_size is 0, toggles will be invisible");
    }

    Ok(())
}
