//! Reference team table command.

use anyhow::Result;
use fba_core::config::Config;

use crate::output;

pub fn execute(config: &Config) -> Result<()> {
    output::print_team_tiers(&config.team_tiers());
    Ok(())
}
