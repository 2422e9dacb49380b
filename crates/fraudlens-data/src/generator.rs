//! Synthetic transaction sample generation.
//!
//! Produces randomized payment transactions with the same value pools
//! and weightings as the production feed simulator: 10 Egyptian
//! governorates, 10 merchants, risk scores in [500, 1000], and
//! weighted fraud-type/status draws. A batch is deterministic for a
//! given seed.

use fraudlens_core::types::{FraudType, Transaction, TxStatus, RISK_SCORE_MAX, RISK_SCORE_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Cities (governorates) appearing in generated samples.
pub const CITIES: &[&str] = &[
    "Cairo", "Giza", "Alexandria", "Dakahlia", "Sharqia", "Qalyubia", "Beheira", "Monufia",
    "Asyut", "Sohag",
];

/// Merchants appearing in generated samples.
pub const MERCHANTS: &[&str] = &[
    "Amazon",
    "Noon",
    "Talabat",
    "Uber",
    "Careem",
    "Vodafone Cash",
    "Fawry",
    "InstaPay",
    "Booking",
    "Mobilis",
];

/// Draw weights per fraud type, aligned with `FraudType::ALL`.
const FRAUD_TYPE_WEIGHTS: &[f64] = &[0.25, 0.15, 0.20, 0.25, 0.15];

/// Draw weights per status, aligned with `TxStatus::ALL`.
const STATUS_WEIGHTS: &[f64] = &[0.18, 0.22, 0.60];

/// Seeded generator of synthetic transaction batches.
#[derive(Debug, Clone, Default)]
pub struct SampleGenerator;

impl SampleGenerator {
    /// Create a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate a batch of `n` transactions timestamped within the
    /// trailing 24 hours before the current wall clock.
    #[must_use]
    pub fn generate(&self, n: usize, seed: u64) -> Vec<Transaction> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.generate_at(n, seed, now)
    }

    /// Generate a batch of `n` transactions timestamped within the 24
    /// hours before `now` (epoch seconds). Deterministic per seed.
    #[must_use]
    pub fn generate_at(&self, n: usize, seed: u64, now: u64) -> Vec<Transaction> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut batch = Vec::with_capacity(n);

        for _ in 0..n {
            let minutes_ago: u64 = rng.random_range(0..=1440);
            batch.push(Transaction {
                id: format!("TX{}", rng.random_range(1_000_000..=9_999_999u32)),
                account_id: format!("AC{}", rng.random_range(20_000..=99_999u32)),
                merchant: MERCHANTS[rng.random_range(0..MERCHANTS.len())].to_string(),
                city: CITIES[rng.random_range(0..CITIES.len())].to_string(),
                amount: f64::from(rng.random_range(50..=15_000u32)),
                risk_score: rng.random_range(RISK_SCORE_MIN..=RISK_SCORE_MAX),
                fraud_type: weighted_fraud_type(&mut rng),
                status: weighted_status(&mut rng),
                timestamp: now.saturating_sub(minutes_ago * 60),
            });
        }

        tracing::debug!(count = batch.len(), seed, "generated sample batch");
        batch
    }
}

/// Draw a fraud type with the configured category weights.
fn weighted_fraud_type(rng: &mut StdRng) -> FraudType {
    let idx = weighted_index(rng, FRAUD_TYPE_WEIGHTS);
    FraudType::ALL[idx]
}

/// Draw a status with the configured category weights.
fn weighted_status(rng: &mut StdRng) -> TxStatus {
    let idx = weighted_index(rng, STATUS_WEIGHTS);
    TxStatus::ALL[idx]
}

/// Sample an index from a cumulative weight table.
fn weighted_index(rng: &mut StdRng, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    let mut u: f64 = rng.random::<f64>() * total;
    for (i, w) in weights.iter().enumerate() {
        if u < *w {
            return i;
        }
        u -= w;
    }
    weights.len() - 1
}
