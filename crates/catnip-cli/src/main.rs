//! Catnip CLI - Command-line tool for fetching and streaming cat facts

mod cli;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;

use catnip_foundation::{CatFactApi, LocalFactGenerator, MessageCatalog};
use catnip_kernel::{FactGenerator, FactOutcome, FactSource};
use catnip_runtime::{FactLoader, FactStreamer, StreamOptions, TaskGroup};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    } else {
        tracing_subscriber::fmt().with_env_filter("info").init();
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_command_async(cli))
}

async fn run_command_async(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Fact => run_fact().await,
        Commands::Stream { count, period_ms } => run_stream(count, period_ms).await,
    }
}

async fn run_fact() -> anyhow::Result<()> {
    let source: Arc<dyn FactSource> = Arc::new(CatFactApi::from_env());
    let catalog = MessageCatalog::default();
    let group = TaskGroup::new();

    let loader = FactLoader::spawn(source, catalog.default_error_text(), &group);
    let mut observer = loader.subscribe();

    match observer.next().await {
        Some(FactOutcome::Success(fact)) => println!("{}", fact.text.green()),
        Some(FactOutcome::Error(message)) => eprintln!("{}", message.red()),
        Some(FactOutcome::ServerError) => eprintln!("{}", "Server error".red()),
        None => {}
    }

    group.cancel();
    Ok(())
}

async fn run_stream(count: Option<usize>, period_ms: u64) -> anyhow::Result<()> {
    let source: Arc<dyn FactSource> = Arc::new(CatFactApi::from_env());
    let generator: Arc<dyn FactGenerator> = Arc::new(LocalFactGenerator::new());
    let group = TaskGroup::new();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let streamer = FactStreamer::with_options(
        source,
        generator,
        StreamOptions {
            period: Duration::from_millis(period_ms),
        },
    );
    streamer.start(&group, move |fact| {
        let _ = tx.send(fact);
    });

    let mut delivered = 0usize;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            fact = rx.recv() => match fact {
                Some(fact) => {
                    println!("{}", fact.text.cyan());
                    delivered += 1;
                    if count.is_some_and(|limit| delivered >= limit) {
                        break;
                    }
                }
                None => break,
            }
        }
    }

    group.cancel();
    Ok(())
}
