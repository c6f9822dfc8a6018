//! harview - A terminal dashboard for HTTP Archive (HAR) recordings
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use harview_app::config::{load_settings, ControllerMode};
use harview_core::logging;
use tracing::info;

/// harview - Browse a HAR capture in the terminal
#[derive(Parser, Debug)]
#[command(name = "harview", version)]
#[command(about = "A terminal dashboard for HTTP Archive (HAR) recordings", long_about = None)]
struct Args {
    /// Path to the HAR file
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Table behavior: "detail" (master/detail panes) or "checklist" (multi-select)
    #[arg(long, value_name = "MODE")]
    mode: Option<ControllerMode>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging failure is non-fatal
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let mut settings = load_settings();
    if let Some(mode) = args.mode {
        info!("Controller mode overridden on command line: {mode}");
        settings.ui.mode = mode;
    }

    let document = match harview_core::load(&args.path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = harview_tui::run(document, settings) {
        eprintln!("Log file: {}", logging::get_current_log_file().display());
        return Err(e.into());
    }
    Ok(())
}
