//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use fba_core::config::Config;
use std::path::PathBuf;

pub mod analyze;
pub mod serve;
pub mod teams;

/// Football Betting Agent - Match Analysis & Betting Recommendations
#[derive(Parser)]
#[command(name = "fba")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file (defaults to ./fba.toml when present)
    #[arg(short, long, global = true, env = "FBA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Analyze a single fixture in the terminal
    Analyze(analyze::AnalyzeArgs),

    /// Show the reference team tiers in effect
    Teams,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(self.config.as_deref(), &cwd)?;

        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Analyze(args) => analyze::execute(args, &config),
            Commands::Teams => teams::execute(&config),
        }
    }
}
