//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fba_core::config::Config;
use fba_web::state::AppState;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on [default: 3000]
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Pause before answering each analysis, in milliseconds (0 disables)
    #[arg(long)]
    pub think_delay_ms: Option<u64>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to .fba/serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config: Config) -> Result<()> {
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let think_delay =
        Duration::from_millis(args.think_delay_ms.unwrap_or(config.server.think_delay_ms));

    let state = AppState::new(config.team_tiers(), think_delay);

    println!();
    println!(
        "  {} {}",
        "FBA".green().bold(),
        "Web Server".bold()
    );
    println!();
    println!("  {}  http://{}:{}", "Dashboard".green(), host, port);
    println!("  {}        http://{}:{}/api/analyze", "API".green(), host, port);
    println!(
        "  {}      {} ms",
        "Delay".green(),
        think_delay.as_millis()
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    fba_web::run_server(state, &host, port).await?;

    Ok(())
}
