// Configuration loading and parsing (dashboard.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::metrics::WobaWeights;

/// Config file name, under `config/` (live) and `defaults/` (shipped).
pub const CONFIG_FILE: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// dashboard.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub display: DisplayConfig,
    /// Optional; the standard wOBA scale when omitted.
    #[serde(default)]
    pub weights: WobaWeights,
}

/// Where the fetch job writes event files and how they are named.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub dir: String,
    pub file_prefix: String,
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Initial minimum plate appearances for the table filter.
    pub default_min_pa: u32,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Parse and validate `config/dashboard.toml` under `base_dir`. Does not
/// create the file; see [`load_config`].
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Copy `defaults/dashboard.toml` to `config/dashboard.toml` if the latter is
/// missing. Returns the created path, or `None` when a config already exists.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.is_file() {
        return Ok(None);
    }

    let default = base_dir.join("defaults").join(CONFIG_FILE);
    if !default.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "no config/{CONFIG_FILE} or defaults/{CONFIG_FILE} in {}",
                base_dir.display()
            ),
        });
    }

    let copy_error = |e: std::io::Error| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {} to {}: {e}", default.display(), target.display()),
    };
    if let Some(config_dir) = target.parent() {
        std::fs::create_dir_all(config_dir).map_err(copy_error)?;
    }
    std::fs::copy(&default, &target).map_err(copy_error)?;

    Ok(Some(target))
}

/// Load config relative to `base_dir`, creating it from defaults on first run.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_file(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let data_fields: &[(&str, &str)] = &[
        ("data.dir", config.data.dir.as_str()),
        ("data.extension", config.data.extension.as_str()),
    ];
    for (name, val) in data_fields {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    if config.display.default_min_pa == 0 {
        return Err(ConfigError::ValidationError {
            field: "display.default_min_pa".into(),
            message: "must be at least 1".into(),
        });
    }

    for (label, weight) in config.weights.entries() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::ValidationError {
                field: format!("weights.{label}"),
                message: format!("must be a finite number >= 0, got {weight}"),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
