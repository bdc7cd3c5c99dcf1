//! CLI command definitions using clap

use clap::{Parser, Subcommand};

/// Catnip CLI - Fetch and stream cat facts
#[derive(Parser)]
#[command(name = "catnip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a single fact and print the outcome
    Fact,

    /// Stream facts continuously, falling back to local facts on failure
    Stream {
        /// Stop after this many facts (default: run until ctrl-c)
        #[arg(short, long)]
        count: Option<usize>,

        /// Delay between fetches in milliseconds
        #[arg(long, default_value_t = 2000)]
        period_ms: u64,
    },
}
