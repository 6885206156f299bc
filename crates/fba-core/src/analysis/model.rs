//! Analysis domain models.

use serde::{Deserialize, Serialize};

use crate::error::{FbaError, FbaResult};

/// League used when the request omits one.
pub const DEFAULT_LEAGUE: &str = "Premier League";

/// Competitions offered by the analysis form.
pub const LEAGUES: &[&str] = &[
    "Premier League",
    "La Liga",
    "Serie A",
    "Bundesliga",
    "Ligue 1",
    "Champions League",
    "Europa League",
];

/// Raw analysis request as submitted by a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
}

impl MatchRequest {
    pub fn new(home_team: &str, away_team: &str, league: &str) -> Self {
        Self {
            home_team: Some(home_team.to_string()),
            away_team: Some(away_team.to_string()),
            league: Some(league.to_string()),
        }
    }

    /// Check that both team names are present and build a [`Fixture`].
    ///
    /// Names are passed through as sent; only an absent or empty name is
    /// rejected.
    pub fn validate(self) -> FbaResult<Fixture> {
        let home_team = non_empty(self.home_team);
        let away_team = non_empty(self.away_team);

        let (Some(home_team), Some(away_team)) = (home_team, away_team) else {
            return Err(FbaError::validation("Missing required fields"));
        };

        let league = self.league.unwrap_or_else(|| DEFAULT_LEAGUE.to_string());

        Ok(Fixture {
            home_team,
            away_team,
            league,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A validated fixture ready for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
    pub league: String,
}

/// Which result a prediction backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

/// Normalized win/draw/loss probabilities from the home side's view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeProbabilities {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl OutcomeProbabilities {
    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }

    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }
}

/// Decimal odds including the bookmaker margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsQuote {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl OddsQuote {
    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }
}

/// Echo of the analysed fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub date: String,
}

/// Complete analysis returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(rename = "match")]
    pub match_info: MatchInfo,
    pub prediction: String,
    pub confidence: u8,
    pub recommended_bet: String,
    pub odds: OddsQuote,
    pub analysis: String,
    pub key_factors: Vec<String>,
}
