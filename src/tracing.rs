//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! selection and clipboard state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug,message=debug` - scoped filtering
//! - `RUST_LOG=dyngrid::clipboard=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dyngrid/logs/dyngrid.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{CellAddress, CellRange, GridModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with grid output on
/// stdout, and respects RUST_LOG (default `warn`).
///
/// File logging writes to `~/.config/dyngrid/logs/dyngrid.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dyngrid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of selection/focus state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub rectangle: Option<CellRange>,
    pub pivot: Option<CellAddress>,
    pub dragging: bool,
    pub focused: Option<CellAddress>,
    pub extent: (usize, usize),
}

impl SelectionSnapshot {
    pub fn from_model(model: &GridModel) -> Self {
        Self {
            rectangle: model.selection.current_rectangle(),
            pivot: model.selection.pivot(),
            dragging: model.selection.is_dragging(),
            focused: model.focused,
            extent: (model.rows(), model.cols()),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.extent != other.extent {
            changes.push(format!(
                "grid: {}x{} → {}x{}",
                self.extent.0, self.extent.1, other.extent.0, other.extent.1
            ));
        }
        if self.rectangle != other.rectangle {
            changes.push(format!(
                "rectangle: {} → {}",
                describe(self.rectangle),
                describe(other.rectangle)
            ));
        }
        if self.pivot != other.pivot {
            changes.push(format!(
                "pivot: {} → {}",
                describe(self.pivot),
                describe(other.pivot)
            ));
        }
        if self.dragging != other.dragging {
            let status = if other.dragging { "started" } else { "ended" };
            changes.push(format!("drag {}", status));
        }
        if self.focused != other.focused {
            changes.push(format!(
                "focus: {} → {}",
                describe(self.focused),
                describe(other.focused)
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}
