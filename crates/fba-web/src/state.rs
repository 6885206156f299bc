//! Application state.

use std::sync::Arc;
use std::time::Duration;

use fba_core::strength::{RandomSampler, StrengthSampler, TeamTiers};

/// Builds a fresh sampler for each analysis request.
pub type SamplerFactory = Arc<dyn Fn() -> Box<dyn StrengthSampler + Send> + Send + Sync>;

/// Application state shared across handlers. Read-only once built.
#[derive(Clone)]
pub struct AppState {
    pub tiers: Arc<TeamTiers>,
    pub think_delay: Duration,
    samplers: SamplerFactory,
}

impl AppState {
    /// State backed by an entropy-seeded sampler per request.
    pub fn new(tiers: TeamTiers, think_delay: Duration) -> Self {
        Self {
            tiers: Arc::new(tiers),
            think_delay,
            samplers: Arc::new(|| -> Box<dyn StrengthSampler + Send> {
                Box::new(RandomSampler::from_entropy())
            }),
        }
    }

    /// Replace the per-request sampler source.
    pub fn with_samplers<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn StrengthSampler + Send> + Send + Sync + 'static,
    {
        self.samplers = Arc::new(factory);
        self
    }

    pub fn sampler(&self) -> Box<dyn StrengthSampler + Send> {
        (self.samplers)()
    }
}
