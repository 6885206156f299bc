//! One-off analysis command.

use anyhow::Result;
use chrono::Local;
use clap::Args;
use fba_core::analysis::{analyze_match, model::DEFAULT_LEAGUE};
use fba_core::config::Config;
use fba_core::strength::RandomSampler;
use fba_core::MatchRequest;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Home team name
    pub home: String,

    /// Away team name
    pub away: String,

    /// League or competition
    #[arg(short, long, default_value = DEFAULT_LEAGUE)]
    pub league: String,

    /// Seed the strength draw for a reproducible result
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the raw JSON result
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let fixture = MatchRequest::new(&args.home, &args.away, &args.league).validate()?;

    let mut sampler = match args.seed {
        Some(seed) => RandomSampler::seeded(seed),
        None => RandomSampler::from_entropy(),
    };

    let result = analyze_match(
        &fixture,
        &config.team_tiers(),
        &mut sampler,
        Local::now().date_naive(),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_analysis(&result);
    }

    Ok(())
}
