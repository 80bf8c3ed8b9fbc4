use anyhow::{Context, Result};
use clap::Parser;

use dyngrid::cli::{self, CliArgs, CliCommand};
use dyngrid::clipboard::{ClipboardBackend, MemoryClipboard, SystemClipboard};
use dyngrid::model::GridModel;
use dyngrid::runtime::{GridRuntime, HeadlessShell};
use dyngrid::script;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    dyngrid::tracing::init();

    let config = args.load_config().context("Failed to load configuration")?;

    match &args.command {
        CliCommand::Config => {
            let yaml = config.to_yaml().map_err(anyhow::Error::msg)?;
            print!("{}", yaml);
        }
        CliCommand::Run {
            script: script_path,
            format,
            system_clipboard,
            ..
        } => {
            let steps = script::load_script(script_path)
                .with_context(|| format!("Failed to load script {}", script_path.display()))?;

            let backend = clipboard_backend(*system_clipboard);
            let mut runtime =
                GridRuntime::new(GridModel::from_config(&config), HeadlessShell::new())
                    .with_clipboard(backend);

            script::run_script(&mut runtime, &steps).context("Script failed")?;

            let output = cli::render(runtime.model(), *format).context("Failed to render grid")?;
            println!("{}", output);
        }
    }

    Ok(())
}

fn clipboard_backend(system: bool) -> Box<dyn ClipboardBackend> {
    if system {
        match SystemClipboard::new() {
            Ok(clipboard) => return Box::new(clipboard),
            Err(e) => tracing::warn!("{}, using an in-memory clipboard", e),
        }
    }
    Box::new(MemoryClipboard::new())
}
