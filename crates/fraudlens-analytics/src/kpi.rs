//! Top-level dashboard KPIs.

use fraudlens_core::types::{Transaction, TxStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Aggregate counters shown in the dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiBlock {
    /// Total transactions in the batch.
    pub total: usize,
    /// Transactions with status BLOCKED.
    pub blocked: usize,
    /// Sum of blocked transaction amounts (losses averted).
    pub loss_saved: f64,
    /// Blocked share of the batch, percent rounded to 2 decimals.
    pub detection_rate: f64,
    /// Simulated model precision, percent in [88, 98].
    pub precision: f64,
    /// Simulated false-positive rate, percent in [0.2, 1.2].
    pub false_positive_rate: f64,
}

impl KpiBlock {
    /// Compute KPIs over a batch.
    ///
    /// Precision and false-positive rate have no backing model in this
    /// system; they are drawn from a seeded rng so a snapshot stays
    /// reproducible.
    #[must_use]
    pub fn compute(transactions: &[Transaction], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let total = transactions.len();
        let blocked_txs: Vec<&Transaction> = transactions
            .iter()
            .filter(|tx| tx.status == TxStatus::Blocked)
            .collect();
        let blocked = blocked_txs.len();
        let loss_saved = blocked_txs.iter().map(|tx| tx.amount).sum();
        let detection_rate = if total == 0 {
            0.0
        } else {
            round2(blocked as f64 / total as f64 * 100.0)
        };

        Self {
            total,
            blocked,
            loss_saved,
            detection_rate,
            precision: round2(rng.random_range(88.0..98.0)),
            false_positive_rate: round2(rng.random_range(0.2..1.2)),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
