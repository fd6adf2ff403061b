#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global content file path, set from command line
static CONTENT_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Get the site content path (if one was supplied)
pub fn get_content_path() -> Option<PathBuf> {
    CONTENT_PATH.get().cloned()
}

/// Showreel - personal video portfolio
#[derive(Parser, Debug)]
#[command(name = "showreel-desktop")]
#[command(about = "Showreel - personal video portfolio")]
struct Args {
    /// Site content JSON (falls back to the built-in sample gallery)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window title override
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(path) = args.content {
        tracing::info!("Using site content from {:?}", path);
        let _ = CONTENT_PATH.set(path);
    }

    let title = args.title.unwrap_or_else(|| "Showreel".to_string());

    let window_width = 1100.0;
    let window_height = 820.0;

    tracing::info!("Starting '{}'", title);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
