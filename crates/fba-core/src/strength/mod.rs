//! Team strength estimation.
//!
//! A team's strength is drawn from the band of the tier its name falls into.
//! Where inside the band it lands is decided by a [`StrengthSampler`], which
//! is random in production and fixed in tests.

pub mod tiers;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

pub use tiers::{StrengthBand, TeamTierNames, TeamTiers, Tier};

/// Picks a strength inside a band.
pub trait StrengthSampler {
    fn sample(&mut self, band: StrengthBand) -> f64;
}

/// Uniform draw over the band from any `rand` generator.
pub struct RandomSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<StdRng> {
    /// Non-deterministic sampler for live traffic.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sampler: same seed, same sequence of strengths.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StrengthSampler for RandomSampler<R> {
    fn sample(&mut self, band: StrengthBand) -> f64 {
        band.at(self.rng.gen::<f64>())
    }
}

/// Always returns the middle of the band.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointSampler;

impl StrengthSampler for MidpointSampler {
    fn sample(&mut self, band: StrengthBand) -> f64 {
        band.midpoint()
    }
}

/// Estimate the strength of a team from its name.
///
/// Never fails: names that match no reference token (including the empty
/// string) fall into [`Tier::Default`].
pub fn estimate_strength(
    tiers: &TeamTiers,
    team_name: &str,
    sampler: &mut dyn StrengthSampler,
) -> f64 {
    let tier = tiers.classify(team_name);
    let strength = sampler.sample(tier.band());
    trace!(team = %team_name, tier = tier.as_str(), strength, "Estimated team strength");
    strength
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_strength_stays_in_band() {
        let tiers = TeamTiers::default();
        let mut sampler = RandomSampler::seeded(7);

        for _ in 0..500 {
            let top = estimate_strength(&tiers, "Arsenal", &mut sampler);
            assert!((0.70..0.85).contains(&top), "top strength {top}");

            let good = estimate_strength(&tiers, "Bayern Munich", &mut sampler);
            assert!((0.55..0.70).contains(&good), "good strength {good}");

            let other = estimate_strength(&tiers, "Random FC", &mut sampler);
            assert!((0.40..0.60).contains(&other), "default strength {other}");
        }
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let tiers = TeamTiers::default();
        let mut a = RandomSampler::seeded(42);
        let mut b = RandomSampler::seeded(42);

        for name in ["Chelsea", "Brighton", "Leeds", ""] {
            assert_eq!(
                estimate_strength(&tiers, name, &mut a),
                estimate_strength(&tiers, name, &mut b)
            );
        }
    }

    #[test]
    fn test_entropy_sampler_varies() {
        let tiers = TeamTiers::default();
        let mut sampler = RandomSampler::from_entropy();
        let draws: Vec<f64> = (0..20)
            .map(|_| estimate_strength(&tiers, "Random FC", &mut sampler))
            .collect();
        assert!(draws.iter().any(|d| *d != draws[0]));
    }

    #[test]
    fn test_midpoint_sampler() {
        let tiers = TeamTiers::default();
        let mut sampler = MidpointSampler;
        assert!((estimate_strength(&tiers, "Manchester City", &mut sampler) - 0.775).abs() < 1e-12);
        assert!((estimate_strength(&tiers, "Newcastle", &mut sampler) - 0.625).abs() < 1e-12);
        assert!((estimate_strength(&tiers, "", &mut sampler) - 0.5).abs() < 1e-12);
    }
}
