//! CLI command definitions for the `comanda` binary.
//!
//! Uses clap derive macros for argument parsing. The surface is small:
//! an interactive `chat` session, read-only `orders` inspection, a
//! `menu` preview, and shell completions.

pub mod chat;
pub mod menu;
pub mod orders;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Take restaurant orders over a chat conversation.
#[derive(Parser)]
#[command(name = "comanda", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive ordering conversation.
    Chat {
        /// Menu file to use for this session (overrides config).
        #[arg(long)]
        menu: Option<String>,

        /// Remote model identifier (overrides config).
        #[arg(long)]
        model: Option<String>,
    },

    /// Inspect recorded orders.
    Orders {
        #[command(subcommand)]
        command: OrdersCommand,
    },

    /// Preview the parsed menu.
    Menu {
        /// Menu file to parse (overrides config).
        #[arg(long)]
        menu: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List recorded orders, most recent first.
    #[command(alias = "ls")]
    List {
        /// Maximum number of orders to show.
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Show one order's full transcript.
    Show {
        /// Order id.
        id: i64,
    },
}
