//! FOG Security Suite desktop — eframe/egui shell application.

mod app;
mod ui;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use app::FogApp;
use fog_core::config::{DesktopLayout, load_layout};
use fog_core::window::WindowManager;

#[derive(Parser)]
#[command(name = "fog-desktop")]
#[command(about = "FOG Security Suite desktop shell")]
struct Cli {
    /// Desktop layout JSON (defaults to the stock four-window desktop)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Start on the dashboard instead of the loading splash
    #[arg(long)]
    skip_splash: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
        .init();

    let cli = Cli::parse();

    let layout = match &cli.layout {
        Some(path) => load_layout(path)?,
        None => DesktopLayout::default(),
    };
    let windows = WindowManager::from_layout(&layout)?;

    log::info!(
        "Starting FOG desktop v{} with {} windows",
        env!("CARGO_PKG_VERSION"),
        windows.windows().len()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("FOG Security Suite")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FOG Security Suite",
        options,
        Box::new(move |cc| {
            ui::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(FogApp::new(windows, cli.skip_splash)))
        }),
    )
    .map_err(|e| anyhow!("desktop shell exited with an error: {e}"))
}
