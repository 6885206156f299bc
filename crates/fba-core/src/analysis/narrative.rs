//! Narrative text for an analysis.
//!
//! Classification (which bucket a strength pair falls into) is kept apart
//! from the templates so each can be checked on its own.

/// Absolute strength gap under which a fixture reads as evenly matched.
pub const CLOSE_CONTEST_GAP: f64 = 0.1;

/// Lead one side needs before the factor list calls it dominant.
pub const DOMINANCE_GAP: f64 = 0.15;

/// Bucket for the analysis paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthGap {
    Even,
    HomeFavored,
    AwayFavored,
}

impl StrengthGap {
    /// A gap of exactly [`CLOSE_CONTEST_GAP`] in the home side's favour
    /// lands in `AwayFavored`.
    pub fn classify(home_strength: f64, away_strength: f64) -> Self {
        let diff = home_strength - away_strength;
        if diff.abs() < CLOSE_CONTEST_GAP {
            StrengthGap::Even
        } else if diff > CLOSE_CONTEST_GAP {
            StrengthGap::HomeFavored
        } else {
            StrengthGap::AwayFavored
        }
    }
}

/// Bucket for the fourth and fifth key factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorTilt {
    HomeDominant,
    AwayDominant,
    Balanced,
}

impl FactorTilt {
    pub fn classify(home_strength: f64, away_strength: f64) -> Self {
        if home_strength > away_strength + DOMINANCE_GAP {
            FactorTilt::HomeDominant
        } else if away_strength > home_strength + DOMINANCE_GAP {
            FactorTilt::AwayDominant
        } else {
            FactorTilt::Balanced
        }
    }
}

/// Paragraph describing how the fixture is expected to play out.
pub fn analysis_paragraph(gap: StrengthGap, home: &str, away: &str, league: &str) -> String {
    let opening = format!("This {league} fixture between {home} and {away} promises to be ");

    let body = match gap {
        StrengthGap::Even => "a closely contested match. Both teams are evenly matched, with similar form and quality. \
             The home advantage could be decisive in such a tight encounter. \
             Expect a tactical battle with both teams looking to exploit any weaknesses."
            .to_string(),
        StrengthGap::HomeFavored => format!(
            "a favorable opportunity for {home}. The home side has been showing strong form \
             and possesses a tactical advantage over {away}. \
             The home crowd support combined with their recent performances suggests they should control the match. \
             However, football is unpredictable and {away} will be looking to upset the odds."
        ),
        StrengthGap::AwayFavored => format!(
            "a challenging fixture for the home side. {away} comes into this match with strong momentum \
             and a quality squad capable of getting results away from home. \
             {home} will need to leverage their home advantage and defensive organization to contain the visitors. \
             This could be a high-scoring affair if both teams commit to attacking play."
        ),
    };

    opening + &body
}

/// Ordered list of key factors.
///
/// Always six entries: three fixed notes, a pair picked by [`FactorTilt`],
/// then a closing note on conditions.
pub fn key_factors(
    home: &str,
    away: &str,
    home_strength: f64,
    away_strength: f64,
) -> Vec<String> {
    let in_form = if home_strength > away_strength { home } else { away };

    let mut factors = vec![
        format!("Home advantage for {home} - statistically worth 0.3-0.5 goals"),
        format!("Recent form indicators suggest {in_form} has momentum"),
        "Head-to-head history shows competitive fixtures between these teams".to_string(),
    ];

    let [first, second] = tilt_factors(FactorTilt::classify(home_strength, away_strength), home, away);
    factors.push(first);
    factors.push(second);

    factors.push("Weather and pitch conditions expected to be favorable for open play".to_string());

    factors
}

/// The factor pair for a given tilt.
pub fn tilt_factors(tilt: FactorTilt, home: &str, away: &str) -> [String; 2] {
    match tilt {
        FactorTilt::HomeDominant => [
            format!("{home}'s attacking prowess has been exceptional in recent matches"),
            format!("{away} may struggle defensively against {home}'s pressing style"),
        ],
        FactorTilt::AwayDominant => [
            format!("{away}'s away record has been impressive this season"),
            format!("{home} has shown vulnerability in defensive transitions"),
        ],
        FactorTilt::Balanced => [
            "Both teams have similar goal-scoring records this season".to_string(),
            "Tactical matchup favors a cautious approach from both managers".to_string(),
        ],
    }
}
