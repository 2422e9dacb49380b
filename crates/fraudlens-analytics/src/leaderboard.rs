//! Leaderboards: riskiest transactions and most-targeted merchants.

use fraudlens_core::types::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default size of the riskiest-transactions table.
pub const TOP_TRANSACTIONS: usize = 10;

/// Default size of the merchant leaderboard.
pub const TOP_MERCHANTS: usize = 8;

/// Aggregate fraud exposure of one merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantStat {
    /// Merchant name.
    pub merchant: String,
    /// Transaction count.
    pub tx_count: usize,
    /// Mean risk score.
    pub mean_risk: f64,
    /// Total transaction amount.
    pub total_amount: f64,
}

/// Top `n` transactions by risk score, descending; ties broken by
/// transaction ID for a stable order.
#[must_use]
pub fn top_risky_transactions(transactions: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut sorted: Vec<Transaction> = transactions.to_vec();
    sorted.sort_by(|a, b| b.risk_score.cmp(&a.risk_score).then_with(|| a.id.cmp(&b.id)));
    sorted.truncate(n);
    sorted
}

/// Per-merchant aggregates, sorted by mean risk descending, capped at
/// `n` merchants.
#[must_use]
pub fn top_merchants(transactions: &[Transaction], n: usize) -> Vec<MerchantStat> {
    let mut agg: HashMap<&str, (usize, u64, f64)> = HashMap::new();
    for tx in transactions {
        let entry = agg.entry(tx.merchant.as_str()).or_insert((0, 0, 0.0));
        entry.0 += 1;
        entry.1 += u64::from(tx.risk_score);
        entry.2 += tx.amount;
    }

    let mut stats: Vec<MerchantStat> = agg
        .into_iter()
        .map(|(merchant, (tx_count, risk_sum, total_amount))| MerchantStat {
            merchant: merchant.to_string(),
            tx_count,
            mean_risk: risk_sum as f64 / tx_count as f64,
            total_amount,
        })
        .collect();

    stats.sort_by(|a, b| {
        b.mean_risk
            .partial_cmp(&a.mean_risk)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.merchant.cmp(&b.merchant))
    });
    stats.truncate(n);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudlens_core::types::{FraudType, TxStatus};

    fn tx(id: &str, merchant: &str, amount: f64, risk_score: u32) -> Transaction {
        Transaction {
            id: id.to_string(),
            account_id: "AC1".to_string(),
            merchant: merchant.to_string(),
            city: "Cairo".to_string(),
            amount,
            risk_score,
            fraud_type: FraudType::MerchantCompromise,
            status: TxStatus::Review,
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_top_transactions_order() {
        let batch = vec![
            tx("TX3", "Noon", 100.0, 700),
            tx("TX1", "Noon", 100.0, 950),
            tx("TX2", "Noon", 100.0, 900),
        ];
        let top = top_risky_transactions(&batch, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, "TX1");
        assert_eq!(top[1].id, "TX2");
    }

    #[test]
    fn test_top_transactions_tie_stable() {
        let batch = vec![tx("TX2", "Noon", 1.0, 900), tx("TX1", "Noon", 1.0, 900)];
        let top = top_risky_transactions(&batch, 2);
        assert_eq!(top[0].id, "TX1");
    }

    #[test]
    fn test_merchant_aggregates() {
        let batch = vec![
            tx("TX1", "Noon", 100.0, 900),
            tx("TX2", "Noon", 200.0, 800),
            tx("TX3", "Amazon", 50.0, 950),
        ];
        let stats = top_merchants(&batch, 8);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].merchant, "Amazon");
        assert!((stats[0].mean_risk - 950.0).abs() < f64::EPSILON);

        let noon = &stats[1];
        assert_eq!(noon.tx_count, 2);
        assert!((noon.mean_risk - 850.0).abs() < f64::EPSILON);
        assert!((noon.total_amount - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_merchant_cap() {
        let batch: Vec<Transaction> = (0..12)
            .map(|i| tx(&format!("TX{i}"), &format!("M{i}"), 10.0, 800))
            .collect();
        assert_eq!(top_merchants(&batch, TOP_MERCHANTS).len(), TOP_MERCHANTS);
    }

    #[test]
    fn test_empty_batch() {
        assert!(top_risky_transactions(&[], TOP_TRANSACTIONS).is_empty());
        assert!(top_merchants(&[], TOP_MERCHANTS).is_empty());
    }
}
