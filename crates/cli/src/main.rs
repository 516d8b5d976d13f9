mod logging;
mod prompt;
mod session;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use clipsorter_core::DiscoveryOptions;
use prompt::Prompter;
use session::run_session;
use std::env;
use std::io;

/// Every rename setting is asked interactively; there are no other options.
#[derive(Debug, Parser)]
#[command(name = "clipsorter", version)]
#[command(
    about = "Renames the files in the current directory by modification time, with an optional date grouping"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let dir = env::current_dir().context("could not determine the current directory")?;
    let mut options = DiscoveryOptions::default();
    if let Ok(exe) = env::current_exe() {
        options.excluded_paths.push(exe);
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run_session(&mut prompter, &dir, &options, Local::now)?;
    Ok(())
}
