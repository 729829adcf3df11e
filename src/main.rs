//! roadmap-rs - Frontend Development Roadmap viewer
//!
//! Run without arguments to launch the TUI, or use subcommands to print
//! the roadmap as text or JSON.
//!
//! Available as the `roadmap` command.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roadmap_rs::cli::commands::{Cli, Commands};
use roadmap_rs::cli::{config, show};
use roadmap_rs::core::Config;
use roadmap_rs::error::Result;
use roadmap_rs::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        // No subcommand - launch TUI mode
        None => run_tui(Config::load(config_path)?).await,
        Some(Commands::List { json }) => show::handle_list(json),
        Some(Commands::Show { key, json }) => show::handle_show(&key, json, config_path),
        Some(Commands::Tree) => show::handle_tree(config_path),
        Some(Commands::Config(args)) => config::handle_config(args.command, config_path),
    }
}

/// Run the TUI application
async fn run_tui(config: Config) -> Result<()> {
    let mut app = App::new().with_config(config);
    app.run().await
}
