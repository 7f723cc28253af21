//! Provisioning configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::config::{ConfigFormat, parse_config_content};
use crate::domain::{AppError, ProvisionConfig};

/// Looked up in the working directory when `--config` is omitted.
pub const DEFAULT_CONFIG_FILE: &str = "wfseed.toml";

/// Load and validate the configuration at `path`. The format follows the
/// file extension.
pub fn load_config(path: &Path) -> Result<ProvisionConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    parse_config_content(&content, ConfigFormat::from_path(path))
}
