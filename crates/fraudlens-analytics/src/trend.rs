//! Hourly trend and risk-score distribution.

use fraudlens_core::types::{Transaction, RISK_SCORE_MAX, RISK_SCORE_MIN};
use serde::{Deserialize, Serialize};

/// Number of bins in the risk-score histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// Fraud attempts observed in one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Transaction count in that hour.
    pub count: usize,
}

/// One bucket of the risk-score histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBucket {
    /// Inclusive lower bound of the bucket.
    pub lower: u32,
    /// Exclusive upper bound (inclusive for the last bucket).
    pub upper: u32,
    /// Transactions falling in the bucket.
    pub count: usize,
}

/// Transaction counts per hour of day, all 24 hours present.
#[must_use]
pub fn hourly_trend(transactions: &[Transaction]) -> Vec<HourlyPoint> {
    let mut counts = [0usize; 24];
    for tx in transactions {
        counts[tx.hour_of_day() as usize] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(hour, &count)| HourlyPoint {
            hour: hour as u8,
            count,
        })
        .collect()
}

/// Fixed-width risk-score histogram over [500, 1000].
#[must_use]
pub fn risk_histogram(transactions: &[Transaction]) -> Vec<RiskBucket> {
    let span = RISK_SCORE_MAX - RISK_SCORE_MIN;
    let width = span / HISTOGRAM_BINS as u32;
    let mut buckets: Vec<RiskBucket> = (0..HISTOGRAM_BINS)
        .map(|i| RiskBucket {
            lower: RISK_SCORE_MIN + i as u32 * width,
            upper: RISK_SCORE_MIN + (i as u32 + 1) * width,
            count: 0,
        })
        .collect();

    for tx in transactions {
        let clamped = tx.risk_score.clamp(RISK_SCORE_MIN, RISK_SCORE_MAX);
        let idx = (((clamped - RISK_SCORE_MIN) / width) as usize).min(HISTOGRAM_BINS - 1);
        buckets[idx].count += 1;
    }
    buckets
}
