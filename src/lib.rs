//! Dynamic grid - Elm-style spreadsheet input widget core
//!
//! This crate provides the selection engine, clipboard transfer, and
//! constrained decimal input of a grid input widget, implementing the Elm
//! Architecture pattern. A shell (graphical or headless) feeds events in as
//! messages and performs the commands that come back.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::GridModel;
pub use runtime::GridRuntime;
