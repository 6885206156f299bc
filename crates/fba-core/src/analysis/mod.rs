//! Match analysis: strengths to probabilities, odds, prediction and text.

pub mod model;
pub mod narrative;

use chrono::NaiveDate;
use tracing::debug;

use crate::strength::{estimate_strength, StrengthSampler, TeamTiers};
use model::{AnalysisResult, Fixture, MatchInfo, OddsQuote, Outcome, OutcomeProbabilities};
use narrative::StrengthGap;

/// Strength bonus granted to the home side.
pub const HOME_ADVANTAGE: f64 = 0.15;

/// Flat bias added to the raw draw estimate before normalization.
pub const DRAW_BIAS: f64 = 0.1;

/// Multiplicative bookmaker overround applied to fair odds.
pub const BOOKMAKER_MARGIN: f64 = 1.08;

/// Upper bound on the reported confidence percentage.
pub const CONFIDENCE_CAP: u8 = 85;

/// Analyse a fixture, drawing both strengths from `sampler`.
///
/// The home side is sampled before the away side, so a seeded sampler gives
/// the same result for the same fixture.
pub fn analyze_match(
    fixture: &Fixture,
    tiers: &TeamTiers,
    sampler: &mut dyn StrengthSampler,
    date: NaiveDate,
) -> AnalysisResult {
    let home_strength = estimate_strength(tiers, &fixture.home_team, sampler);
    let away_strength = estimate_strength(tiers, &fixture.away_team, sampler);
    analyze_with_strengths(fixture, home_strength, away_strength, date)
}

/// Deterministic part of the analysis once both strengths are known.
pub fn analyze_with_strengths(
    fixture: &Fixture,
    home_strength: f64,
    away_strength: f64,
    date: NaiveDate,
) -> AnalysisResult {
    let probabilities = outcome_probabilities(home_strength, away_strength);
    let odds = price(&probabilities);
    let outcome = select_outcome(&probabilities);
    let confidence = confidence(probabilities.get(outcome));

    let prediction = match outcome {
        Outcome::Home => format!("{} to win", fixture.home_team),
        Outcome::Away => format!("{} to win", fixture.away_team),
        Outcome::Draw => "Draw".to_string(),
    };
    let backed = match outcome {
        Outcome::Home => fixture.home_team.as_str(),
        Outcome::Away => fixture.away_team.as_str(),
        Outcome::Draw => "Draw",
    };
    let recommended_bet = format!("Back {} at {:.2}", backed, odds.get(outcome));

    debug!(
        home = %fixture.home_team,
        away = %fixture.away_team,
        home_strength,
        away_strength,
        ?outcome,
        confidence,
        "Match analysed"
    );

    let gap = StrengthGap::classify(home_strength, away_strength);

    AnalysisResult {
        match_info: MatchInfo {
            home_team: fixture.home_team.clone(),
            away_team: fixture.away_team.clone(),
            league: fixture.league.clone(),
            date: format_match_date(date),
        },
        prediction,
        confidence,
        recommended_bet,
        odds,
        analysis: narrative::analysis_paragraph(
            gap,
            &fixture.home_team,
            &fixture.away_team,
            &fixture.league,
        ),
        key_factors: narrative::key_factors(
            &fixture.home_team,
            &fixture.away_team,
            home_strength,
            away_strength,
        ),
    }
}

/// Normalized outcome probabilities for a pair of strengths.
///
/// The raw draw estimate is `1 - home - away + DRAW_BIAS`, which sits outside
/// `[0, 1]` before normalization. Normalization brings the three back to a
/// sum of one.
pub fn outcome_probabilities(home_strength: f64, away_strength: f64) -> OutcomeProbabilities {
    let total_strength = home_strength + HOME_ADVANTAGE + away_strength;

    let home = (home_strength + HOME_ADVANTAGE) / total_strength;
    let away = away_strength / total_strength;
    let draw = 1.0 - home - away + DRAW_BIAS;

    let total = home + draw + away;
    OutcomeProbabilities {
        home: home / total,
        draw: draw / total,
        away: away / total,
    }
}

/// Decimal odds with the bookmaker margin applied.
pub fn price(probabilities: &OutcomeProbabilities) -> OddsQuote {
    OddsQuote {
        home: (1.0 / probabilities.home) * BOOKMAKER_MARGIN,
        draw: (1.0 / probabilities.draw) * BOOKMAKER_MARGIN,
        away: (1.0 / probabilities.away) * BOOKMAKER_MARGIN,
    }
}

/// Outcome with the strictly greatest probability.
///
/// Home is checked first, then away. Anything else, including a tie at the
/// top between home and away, falls back to a draw.
pub fn select_outcome(probabilities: &OutcomeProbabilities) -> Outcome {
    let OutcomeProbabilities { home, draw, away } = *probabilities;

    if home > away && home > draw {
        Outcome::Home
    } else if away > home && away > draw {
        Outcome::Away
    } else {
        Outcome::Draw
    }
}

/// Rounded percentage, capped at [`CONFIDENCE_CAP`].
pub fn confidence(probability: f64) -> u8 {
    let percent = (probability * 100.0).round().clamp(0.0, 100.0) as u8;
    percent.min(CONFIDENCE_CAP)
}

/// Short `M/D/YYYY` date shown with the fixture.
pub fn format_match_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::{MidpointSampler, RandomSampler};

    fn fixture(home: &str, away: &str) -> Fixture {
        Fixture {
            home_team: home.to_string(),
            away_team: away.to_string(),
            league: "Premier League".to_string(),
        }
    }

    fn match_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_probabilities_normalized() {
        for (h, a) in [(0.4, 0.4), (0.84, 0.41), (0.41, 0.84), (0.6, 0.55), (0.0, 0.0)] {
            let p = outcome_probabilities(h, a);
            assert!((p.sum() - 1.0).abs() < 1e-9, "sum {} for {h}/{a}", p.sum());
            assert!(p.home >= 0.0 && p.draw >= 0.0 && p.away >= 0.0);
        }
    }

    #[test]
    fn test_draw_keeps_flat_bias() {
        // home + away is one before the bias, so the raw draw is the bias itself
        // and normalizes to 0.1 / 1.1.
        let p = outcome_probabilities(0.7, 0.5);
        assert!((p.draw - DRAW_BIAS / (1.0 + DRAW_BIAS)).abs() < 1e-9);
    }

    #[test]
    fn test_odds_above_one() {
        let tiers = TeamTiers::default();
        let mut sampler = RandomSampler::seeded(2024);
        let teams = ["Manchester City", "Brighton", "Random FC", "", "Real Madrid", "Luton"];

        for home in teams {
            for away in teams {
                let result = analyze_match(&fixture(home, away), &tiers, &mut sampler, match_day());
                assert!(result.odds.home > 1.0);
                assert!(result.odds.draw > 1.0);
                assert!(result.odds.away > 1.0);
                assert!(result.confidence <= CONFIDENCE_CAP);
                assert!(result.key_factors.len() >= 4);
            }
        }
    }

    #[test]
    fn test_price_applies_margin() {
        let odds = price(&OutcomeProbabilities { home: 0.5, draw: 0.25, away: 0.25 });
        assert!((odds.home - 2.16).abs() < 1e-12);
        assert!((odds.draw - 4.32).abs() < 1e-12);
        assert!((odds.away - 4.32).abs() < 1e-12);
    }

    #[test]
    fn test_outcome_precedence() {
        let p = |home, draw, away| OutcomeProbabilities { home, draw, away };
        assert_eq!(select_outcome(&p(0.5, 0.1, 0.4)), Outcome::Home);
        assert_eq!(select_outcome(&p(0.4, 0.1, 0.5)), Outcome::Away);
        assert_eq!(select_outcome(&p(0.2, 0.5, 0.3)), Outcome::Draw);
        // Ties at the top never pick a side.
        assert_eq!(select_outcome(&p(0.45, 0.1, 0.45)), Outcome::Draw);
        assert_eq!(select_outcome(&p(0.4, 0.4, 0.2)), Outcome::Draw);
        assert_eq!(select_outcome(&p(0.2, 0.4, 0.4)), Outcome::Draw);
    }

    #[test]
    fn test_confidence_cap() {
        assert_eq!(confidence(0.594), 59);
        assert_eq!(confidence(0.596), 60);
        assert_eq!(confidence(0.85), 85);
        assert_eq!(confidence(0.97), 85);
        assert_eq!(confidence(0.0), 0);
    }

    #[test]
    fn test_midpoint_manchester_city_vs_random() {
        let tiers = TeamTiers::default();
        let home_strength = estimate_strength(&tiers, "Manchester City", &mut MidpointSampler);
        let away_strength = estimate_strength(&tiers, "Random FC", &mut MidpointSampler);
        assert!(home_strength > away_strength);

        let result = analyze_match(
            &fixture("Manchester City", "Random FC"),
            &tiers,
            &mut MidpointSampler,
            match_day(),
        );

        assert_eq!(result.prediction, "Manchester City to win");
        assert_eq!(result.recommended_bet, "Back Manchester City at 1.83");
        assert!(result.recommended_bet.contains("Manchester City"));
        assert_eq!(result.confidence, 59);
        assert!((result.odds.draw - 11.88).abs() < 1e-9);
        assert!((result.odds.away - 3.3858).abs() < 1e-4);
        assert!(result.key_factors.len() >= 5);
        assert_eq!(
            result.key_factors[3],
            "Manchester City's attacking prowess has been exceptional in recent matches"
        );
        assert!(result.analysis.contains("a favorable opportunity for Manchester City"));
        assert_eq!(result.match_info.date, "10/19/2026");
    }

    #[test]
    fn test_midpoint_away_favored() {
        let result = analyze_match(
            &fixture("Random FC", "Manchester City"),
            &TeamTiers::default(),
            &mut MidpointSampler,
            match_day(),
        );
        assert_eq!(result.prediction, "Manchester City to win");
        assert_eq!(result.recommended_bet, "Back Manchester City at 2.18");
        assert_eq!(result.confidence, 49);
        assert!(result.analysis.contains("a challenging fixture for the home side"));
    }

    #[test]
    fn test_level_sides_back_the_draw() {
        let home_strength = 0.5;
        let away_strength = home_strength + HOME_ADVANTAGE;
        let result = analyze_with_strengths(
            &fixture("Leeds", "Burnley"),
            home_strength,
            away_strength,
            match_day(),
        );
        assert_eq!(result.prediction, "Draw");
        assert_eq!(result.recommended_bet, format!("Back Draw at {:.2}", result.odds.draw));
        assert_eq!(result.recommended_bet, "Back Draw at 11.88");
    }

    #[test]
    fn test_padded_names_are_echoed() {
        let result = analyze_match(
            &fixture(" Arsenal ", "Chelsea"),
            &TeamTiers::default(),
            &mut MidpointSampler,
            match_day(),
        );
        assert_eq!(result.match_info.home_team, " Arsenal ");
        assert!(result.key_factors[0].starts_with("Home advantage for  Arsenal  - "));
    }

    #[test]
    fn test_top_home_side_always_predicted() {
        let tiers = TeamTiers::default();
        let mut sampler = RandomSampler::seeded(99);
        let wins = (0..1000)
            .map(|_| analyze_match(&fixture("Manchester City", "Random FC"), &tiers, &mut sampler, match_day()))
            .filter(|r| r.prediction == "Manchester City to win")
            .count();
        assert!(wins > 500, "home predicted {wins} times out of 1000");
    }

    #[test]
    fn test_fixed_source_is_byte_identical() {
        let tiers = TeamTiers::default();
        let f = fixture("Chelsea", "Aston Villa");

        let a = analyze_match(&f, &tiers, &mut RandomSampler::seeded(5), match_day());
        let b = analyze_match(&f, &tiers, &mut RandomSampler::seeded(5), match_day());

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_factor_prefix_is_fixed() {
        let tiers = TeamTiers::default();
        let mut sampler = RandomSampler::seeded(11);
        for (home, away) in [("Leeds", "Arsenal"), ("Arsenal", "Leeds"), ("PSG", "Bayern")] {
            let result = analyze_match(&fixture(home, away), &tiers, &mut sampler, match_day());
            assert_eq!(
                result.key_factors[0],
                format!("Home advantage for {home} - statistically worth 0.3-0.5 goals")
            );
            assert!(result.key_factors[1].starts_with("Recent form indicators suggest "));
            assert_eq!(
                result.key_factors[2],
                "Head-to-head history shows competitive fixtures between these teams"
            );
        }
    }

    #[test]
    fn test_result_wire_format() {
        let result = analyze_match(
            &fixture("Arsenal", "Chelsea"),
            &TeamTiers::default(),
            &mut MidpointSampler,
            match_day(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["match"]["homeTeam"], "Arsenal");
        assert_eq!(json["match"]["awayTeam"], "Chelsea");
        assert!(json["recommendedBet"].is_string());
        assert!(json["keyFactors"].is_array());
        assert!(json["odds"]["draw"].is_number());
    }
}
