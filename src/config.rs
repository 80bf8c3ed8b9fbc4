//! Grid configuration persistence
//!
//! Stores grid defaults in `~/.config/dyngrid/config.yaml`

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::DEFAULT_PRECISION;

/// Input type of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Decimal,
    Date,
    Select,
}

/// Per-column options, keyed by 1-based column number in [`GridConfig::columns`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOptions {
    #[serde(default)]
    pub input: InputKind,

    /// Fraction digits of a decimal column
    #[serde(default = "default_precision")]
    pub precision: u32,

    #[serde(default)]
    pub readonly: bool,

    /// Options of a select column
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            input: InputKind::Text,
            precision: default_precision(),
            readonly: false,
            values: Vec::new(),
            header_name: None,
        }
    }
}

impl ColumnOptions {
    pub fn of_kind(input: InputKind) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }
}

/// Grid configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,

    #[serde(default = "default_cols")]
    pub cols: usize,

    /// Prefix of the external cell identifiers (`{prefix}_r1c1`)
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Input type of columns without their own options
    #[serde(default)]
    pub input_type: InputKind,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub columns: BTreeMap<usize, ColumnOptions>,
}

fn default_rows() -> usize {
    3
}

fn default_cols() -> usize {
    3
}

fn default_prefix() -> String {
    "dynamicTable".to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            prefix: default_prefix(),
            input_type: InputKind::Text,
            columns: BTreeMap::new(),
        }
    }
}

/// Errors that can occur when loading a grid configuration
#[derive(Debug, Clone)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    InvalidColumn { column: usize, reason: String },
    InvalidGrid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidColumn { column, reason } => {
                write!(f, "Invalid options for column {}: {}", column, reason)
            }
            ConfigError::InvalidGrid(e) => write!(f, "Invalid grid: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GridConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Parse and validate config YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: GridConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::InvalidGrid("prefix must not be empty".into()));
        }
        if matches!(self.input_type, InputKind::Date | InputKind::Select) {
            return Err(ConfigError::InvalidGrid(
                "input_type must be text or decimal".into(),
            ));
        }
        for (&column, options) in &self.columns {
            if column == 0 {
                return Err(ConfigError::InvalidColumn {
                    column,
                    reason: "column numbers start at 1".into(),
                });
            }
            if options.input == InputKind::Select && options.values.is_empty() {
                return Err(ConfigError::InvalidColumn {
                    column,
                    reason: "select columns need at least one value".into(),
                });
            }
        }
        Ok(())
    }

    /// Options for a 0-based column, falling back to the grid-wide input type
    pub fn column_options(&self, col: usize) -> ColumnOptions {
        self.columns
            .get(&(col + 1))
            .cloned()
            .unwrap_or_else(|| ColumnOptions::of_kind(self.input_type))
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = self.to_yaml()?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }
}
