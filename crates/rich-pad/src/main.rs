#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// A toolbar-driven rich text editor built with Rust and egui.
#[derive(Parser, Debug)]
#[command(name = "rich-pad", version, about)]
struct Cli {
    /// File to open on startup.
    file: Option<PathBuf>,

    /// Start with an empty document instead of restoring saved content.
    #[arg(long)]
    fresh: bool,

    /// Override the document store location.
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting rich-pad");

    let startup_args = rich_pad_ui::StartupArgs {
        file: cli.file.map(|path| {
            if path.is_absolute() {
                path
            } else {
                std::env::current_dir().unwrap_or_default().join(path)
            }
        }),
        fresh: cli.fresh,
        data_dir: cli.data_dir,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "rich-pad",
        native_options,
        Box::new(move |cc| Ok(Box::new(rich_pad_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
