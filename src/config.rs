//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-field-mapper.toml` in current directory
//! 4. `~/.config/sql-field-mapper/config.toml`
//! 5. Default values
//!
//! The loaded value is immutable and injected into components at
//! construction; nothing reads configuration through global state.
//!
//! There is intentionally no default fuzzy similarity threshold. The value
//! must come from a flag or a config file, and the `fuzzy` command fails
//! without one.
//!
//! # Configuration File Format
//!
//! ```toml
//! [processing]
//! fuzzy_similarity_threshold = 0.8
//! verbose_output = true
//!
//! [paths]
//! mapping_file = "field_mapping.json"
//! sql_input = "converted.sql"
//! sql_output = "converted_processed.sql"
//! notebook_output = "converted_notebook.py"
//! fuzzy_output = "fuzzy_mapping.json"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `FIELD_MAPPER_THRESHOLD` | Fuzzy similarity threshold |
//! | `FIELD_MAPPER_VERBOSE` | Enable verbose reporting (`1`/`true`) |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub processing: ProcessingConfig,
    #[serde(default)]
    pub paths:      PathsConfig
}

/// Core processing parameters
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProcessingConfig {
    /// Fuzzy similarity threshold; no default, must be supplied explicitly
    #[serde(default)]
    pub fuzzy_similarity_threshold: Option<f64>,
    /// Verbose console reporting; never affects core semantics
    #[serde(default)]
    pub verbose_output:             bool
}

/// Default collaborator file paths
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PathsConfig {
    #[serde(default)]
    pub mapping_file:    Option<PathBuf>,
    #[serde(default)]
    pub sql_input:       Option<PathBuf>,
    #[serde(default)]
    pub sql_output:      Option<PathBuf>,
    #[serde(default)]
    pub notebook_output: Option<PathBuf>,
    #[serde(default)]
    pub fuzzy_output:    Option<PathBuf>
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-field-mapper.toml)
    /// 3. Config file in home directory (~/.config/sql-field-mapper/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        // Try to load from home directory config
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-field-mapper")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Try to load from current directory config (overrides home config)
        let local_config = PathBuf::from(".sql-field-mapper.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        // Override with environment variables
        if let Ok(threshold) = env::var("FIELD_MAPPER_THRESHOLD") {
            let parsed = threshold.parse::<f64>().map_err(|_| {
                config_error(format!(
                    "Invalid FIELD_MAPPER_THRESHOLD '{}': expected a number",
                    threshold
                ))
            })?;
            config.processing.fuzzy_similarity_threshold = Some(parsed);
        }

        if let Ok(verbose) = env::var("FIELD_MAPPER_VERBOSE") {
            config.processing.verbose_output =
                matches!(verbose.as_str(), "1" | "true" | "TRUE" | "yes");
        }

        Ok(config)
    }

    /// Parse a configuration file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}
