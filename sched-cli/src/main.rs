use crate::logger::StdoutLogger;
use crate::scheduler::Scheduler;
use anyhow::anyhow;
use clap::Parser;
use log::debug;
use sched_lib::config::{Config, DEFAULT_CONFIG_NAME};
use std::io;

mod commands;
mod logger;
mod repl;
mod scheduler;

#[derive(Parser, Debug)]
#[command(name = "sched", about = "Track assignment due dates per course", version)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Configuration file to load (defaults to `sched.*` in the working directory)
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    if args.debug {
        log_builder.filter_level(log::LevelFilter::Debug);
    }
    log_builder.init();

    debug!(
        "loading configuration from '{}'",
        args.config.as_deref().unwrap_or(DEFAULT_CONFIG_NAME)
    );
    let config = match args.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| anyhow!("could not load configuration: {}", e))?;
    logger::set_color(config.cli.color && !args.no_color);

    let mut scheduler = Scheduler::new();
    let stdin = io::stdin();
    repl::run(
        &mut scheduler,
        &config.cli,
        stdin.lock(),
        io::stdout(),
        &StdoutLogger,
    )
}
