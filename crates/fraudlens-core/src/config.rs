//! Dashboard configuration.

use crate::error::{FraudlensError, Result};
use crate::types::{RISK_SCORE_MAX, RISK_SCORE_MIN};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tuning parameters for a dashboard instance.
///
/// Defaults mirror the production dashboard: a 1200-row synthetic
/// sample refreshed every 30 seconds, a risk threshold of 800 with at
/// most 60 transactions feeding the relationship graph, and a seeded
/// spring layout with `k = 0.8`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of transactions per generated sample batch.
    pub sample_size: usize,
    /// Time-to-live of a sample batch before wholesale regeneration.
    pub cache_ttl: Duration,
    /// Minimum risk score for a transaction to enter the graph.
    pub risk_threshold: u32,
    /// Upper bound on transactions feeding graph construction.
    pub graph_sample_bound: usize,
    /// Seed for layout initialization and subset sampling.
    pub layout_seed: u64,
    /// Spring constant (ideal edge length scale) for the layout.
    pub spring_k: f64,
    /// Iteration budget for the force simulation.
    pub layout_iterations: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sample_size: 1200,
            cache_ttl: Duration::from_secs(30),
            risk_threshold: 800,
            graph_sample_bound: 60,
            layout_seed: 42,
            spring_k: 0.8,
            layout_iterations: 50,
        }
    }
}

impl DashboardConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sample batch size.
    #[must_use]
    pub fn with_sample_size(mut self, n: usize) -> Self {
        self.sample_size = n;
        self
    }

    /// Set the cache time-to-live.
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the graph risk threshold.
    #[must_use]
    pub fn with_risk_threshold(mut self, threshold: u32) -> Self {
        self.risk_threshold = threshold;
        self
    }

    /// Set the graph sample bound.
    #[must_use]
    pub fn with_graph_sample_bound(mut self, bound: usize) -> Self {
        self.graph_sample_bound = bound;
        self
    }

    /// Set the layout seed.
    #[must_use]
    pub fn with_layout_seed(mut self, seed: u64) -> Self {
        self.layout_seed = seed;
        self
    }

    /// Set the spring constant.
    #[must_use]
    pub fn with_spring_k(mut self, k: f64) -> Self {
        self.spring_k = k;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `FraudlensError::ConfigError` when a parameter is out of
    /// its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(FraudlensError::config("sample_size must be non-zero"));
        }
        if self.risk_threshold < RISK_SCORE_MIN || self.risk_threshold > RISK_SCORE_MAX {
            return Err(FraudlensError::config(format!(
                "risk_threshold {} outside [{RISK_SCORE_MIN}, {RISK_SCORE_MAX}]",
                self.risk_threshold
            )));
        }
        if !self.spring_k.is_finite() || self.spring_k <= 0.0 {
            return Err(FraudlensError::config("spring_k must be positive"));
        }
        if self.layout_iterations == 0 {
            return Err(FraudlensError::config("layout_iterations must be non-zero"));
        }
        Ok(())
    }
}
