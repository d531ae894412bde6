//! Comanda CLI entry point.
//!
//! Binary name: `comanda`
//!
//! Parses CLI arguments, initializes the database and services, then
//! dispatches to the appropriate command handler. The default experience
//! is `comanda chat`: an interactive ordering conversation with the
//! restaurant assistant.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, OrdersCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,comanda=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "comanda", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (DB, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Chat { menu, model } => {
            cli::chat::loop_runner::run_chat(&state, menu.as_deref(), model.as_deref()).await?;
        }

        Commands::Orders { command } => match command {
            OrdersCommand::List { limit } => {
                cli::orders::list_orders(&state, limit, cli.json).await?;
            }
            OrdersCommand::Show { id } => {
                cli::orders::show_order(&state, id, cli.json).await?;
            }
        },

        Commands::Menu { menu } => {
            cli::menu::show_menu(&state, menu.as_deref(), cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
