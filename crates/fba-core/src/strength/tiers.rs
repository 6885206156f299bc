//! Reference team table used for strength classification.

use serde::{Deserialize, Serialize};

/// Built-in top tier reference names.
pub const DEFAULT_TOP_TEAMS: &[&str] = &[
    "manchester city",
    "liverpool",
    "arsenal",
    "chelsea",
    "manchester united",
    "tottenham",
];

/// Built-in good tier reference names.
pub const DEFAULT_GOOD_TEAMS: &[&str] = &[
    "newcastle",
    "brighton",
    "aston villa",
    "west ham",
    "real madrid",
    "barcelona",
    "bayern",
    "psg",
];

/// Quality tier a team name falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Top,
    Good,
    Default,
}

impl Tier {
    /// Half-open strength range `[low, high)` for this tier.
    pub fn band(self) -> StrengthBand {
        match self {
            Tier::Top => StrengthBand::new(0.70, 0.15),
            Tier::Good => StrengthBand::new(0.55, 0.15),
            Tier::Default => StrengthBand::new(0.40, 0.2),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Top => "top",
            Tier::Good => "good",
            Tier::Default => "default",
        }
    }
}

/// A strength range expressed as a floor plus a width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthBand {
    pub low: f64,
    pub width: f64,
}

impl StrengthBand {
    pub const fn new(low: f64, width: f64) -> Self {
        Self { low, width }
    }

    pub fn high(&self) -> f64 {
        self.low + self.width
    }

    pub fn midpoint(&self) -> f64 {
        self.low + self.width * 0.5
    }

    /// Map a unit value in `[0, 1)` onto the band.
    pub fn at(&self, unit: f64) -> f64 {
        self.low + unit * self.width
    }
}

/// Reference names as they appear in the `[teams]` config section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamTierNames {
    #[serde(default = "default_top")]
    pub top: Vec<String>,
    #[serde(default = "default_good")]
    pub good: Vec<String>,
}

impl Default for TeamTierNames {
    fn default() -> Self {
        Self {
            top: default_top(),
            good: default_good(),
        }
    }
}

fn default_top() -> Vec<String> {
    DEFAULT_TOP_TEAMS.iter().map(|s| s.to_string()).collect()
}

fn default_good() -> Vec<String> {
    DEFAULT_GOOD_TEAMS.iter().map(|s| s.to_string()).collect()
}

/// Immutable lookup table of reference tokens, one ordered list per tier.
///
/// Only the first whitespace-delimited word of each reference name is kept,
/// so `"manchester united"` matches any input containing `"manchester"`.
#[derive(Debug, Clone)]
pub struct TeamTiers {
    names: TeamTierNames,
    top_tokens: Vec<String>,
    good_tokens: Vec<String>,
}

impl TeamTiers {
    pub fn new(names: TeamTierNames) -> Self {
        let top_tokens = first_tokens(&names.top);
        let good_tokens = first_tokens(&names.good);
        Self {
            names,
            top_tokens,
            good_tokens,
        }
    }

    /// Classify a free-text team name. Comparison is case-insensitive.
    pub fn classify(&self, team_name: &str) -> Tier {
        let name = team_name.to_lowercase();

        if self.top_tokens.iter().any(|t| name.contains(t.as_str())) {
            Tier::Top
        } else if self.good_tokens.iter().any(|t| name.contains(t.as_str())) {
            Tier::Good
        } else {
            Tier::Default
        }
    }

    /// Reference names this table was built from.
    pub fn names(&self) -> &TeamTierNames {
        &self.names
    }

    pub fn top_tokens(&self) -> &[String] {
        &self.top_tokens
    }

    pub fn good_tokens(&self) -> &[String] {
        &self.good_tokens
    }
}

impl Default for TeamTiers {
    fn default() -> Self {
        Self::new(TeamTierNames::default())
    }
}

/// First word of each name, lower-cased. Blank names contribute nothing.
fn first_tokens(names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter_map(|n| n.split_whitespace().next())
        .map(|t| t.to_lowercase())
        .collect()
}
