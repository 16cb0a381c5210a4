//! Configuration loading from files and strings.

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use foil_stage::load_config;
///
/// let config = load_config("stage.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(e.to_string())))?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(e.message().to_string())))?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}
