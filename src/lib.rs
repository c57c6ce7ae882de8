#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod bridge;
pub mod config;
pub mod data;
pub mod models;
pub mod session;
pub mod stores;
pub mod ui;
pub mod utils;
pub mod visuals;

pub use app::App;
pub use config::PERSISTENCE;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Daemon host to connect to (default 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Daemon WebSocket port (default 9925)
    #[arg(long)]
    pub port: Option<u16>,

    /// Ignore any persisted UI state and start clean
    #[arg(long, default_value_t = false)]
    pub fresh: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
