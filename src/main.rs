#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod theme;

use anyhow::Context;
use clap::Parser;
use deconstructed_core::{validate_registry, CONCEPTS};
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// System Design Deconstructed - interactive system design walkthrough
#[derive(Parser, Debug)]
#[command(name = "deconstructed-desktop")]
#[command(about = "System Design Deconstructed - concept cards and a counter demo")]
struct Args {
    /// Initial window width in logical pixels (below 1024 starts compact)
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title
    #[arg(short, long, default_value = "System Design Deconstructed")]
    title: String,

    /// Print the concept registry as JSON and exit
    #[arg(long)]
    print_registry: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    validate_registry(&CONCEPTS).context("built-in concept registry is invalid")?;

    if args.print_registry {
        println!("{}", serde_json::to_string_pretty(&CONCEPTS[..])?);
        return Ok(());
    }

    tracing::info!(
        "Starting '{}' at {}x{} with {} concepts",
        args.title,
        args.width,
        args.height,
        CONCEPTS.len()
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);

    Ok(())
}
