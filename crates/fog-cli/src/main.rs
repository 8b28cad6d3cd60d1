//! FOG desktop replay CLI - applies a script of window intents headlessly.
//!
//! Usage:
//!   fog-replay session.json
//!   fog-replay session.json --layout layout.json --format json

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use fog_core::config::{DesktopLayout, load_layout};
use fog_core::intent::load_script;
use fog_core::report::{OutputFormat, print_state};
use fog_core::window::WindowManager;

#[derive(Parser)]
#[command(name = "fog-replay")]
#[command(about = "Replay desktop shell intents and print the resulting window state")]
struct Cli {
    /// JSON array of intents to apply in order
    script: PathBuf,

    /// Desktop layout JSON (defaults to the stock four-window desktop)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
        .init();

    let cli = Cli::parse();

    let layout = match &cli.layout {
        Some(path) => {
            eprintln!("[*] Loading layout from {}...", path.display());
            load_layout(path)?
        }
        None => DesktopLayout::default(),
    };
    let mut wm = WindowManager::from_layout(&layout)?;

    eprintln!("[*] Loading script from {}...", cli.script.display());
    let intents = load_script(&cli.script)?;

    for intent in &intents {
        log::debug!("apply {intent:?}");
        wm.apply(intent);
    }
    eprintln!("[*] Applied {} intents", intents.len());

    print_state(&wm, cli.format);

    Ok(())
}
