//! Command-line argument parsing for the headless grid
//!
//! Supports:
//! - Replaying an event script against a grid and printing the result
//! - Printing the effective configuration

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::clipboard;
use crate::config::{ConfigError, GridConfig};
use crate::model::{CellAddress, CellRange, GridModel};

/// A spreadsheet-style grid input, driven headlessly
#[derive(Parser, Debug)]
#[command(name = "dyngrid", version, about = "A spreadsheet-style grid input")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/dyngrid/config.yaml
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Replay an event script and print the grid
    Run {
        /// YAML list of events
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,

        /// Use the system clipboard instead of an in-memory one
        #[arg(long)]
        system_clipboard: bool,

        /// Override the configured row count
        #[arg(long, value_name = "N")]
        rows: Option<usize>,

        /// Override the configured column count
        #[arg(long, value_name = "N")]
        cols: Option<usize>,
    },
    /// Print the effective configuration as YAML
    Config,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated rows, the clipboard format
    Tsv,
    /// Values keyed by row number and header name
    Json,
}

impl CliArgs {
    /// The config named by `--config`, or the user's config with defaults
    pub fn load_config(&self) -> Result<GridConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GridConfig::load_from(path)?,
            None => GridConfig::load(),
        };
        if let CliCommand::Run { rows, cols, .. } = &self.command {
            if let Some(rows) = rows {
                config.rows = *rows;
            }
            if let Some(cols) = cols {
                config.cols = *cols;
            }
        }
        Ok(config)
    }
}

/// Render the whole grid in `format`
pub fn render(model: &GridModel, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Tsv => {
            let all = CellRange::anchored(CellAddress::new(0, 0), model.rows(), model.cols());
            Ok(all
                .map(|range| clipboard::serialize(&model.grid, range))
                .unwrap_or_default())
        }
        OutputFormat::Json => model.grid.values_json(),
    }
}
