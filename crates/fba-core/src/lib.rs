//! FBA Core Library
//!
//! Strength estimation, match analysis and configuration for the Football
//! Betting Agent.

pub mod analysis;
pub mod config;
pub mod error;
pub mod strength;

pub use analysis::model::{AnalysisResult, Fixture, MatchRequest};
pub use error::{FbaError, FbaResult};
