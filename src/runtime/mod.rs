//! Runtime module - drives a grid model against a shell
//!
//! - `app` - message dispatch and command execution
//! - `shell` - the display callbacks and a headless implementation

pub mod app;
pub mod shell;

pub use app::GridRuntime;
pub use shell::{GridShell, HeadlessShell};
