//! Geographic distribution of fraud activity.

use fraudlens_core::types::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Map coordinates (latitude, longitude) per known governorate.
pub const CITY_COORDS: &[(&str, f64, f64)] = &[
    ("Cairo", 30.0444, 31.2357),
    ("Giza", 30.0131, 31.2089),
    ("Alexandria", 31.2001, 29.9187),
    ("Dakahlia", 31.0467, 31.3785),
    ("Sharqia", 30.5972, 31.5021),
    ("Qalyubia", 30.3292, 31.2089),
    ("Beheira", 31.0333, 30.4667),
    ("Monufia", 30.5972, 30.9876),
    ("Asyut", 27.1810, 31.1837),
    ("Sohag", 26.5591, 31.6957),
];

/// Fraud activity observed in one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityStat {
    /// City name.
    pub city: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// Transaction count.
    pub count: usize,
}

/// Per-city transaction counts joined with map coordinates.
///
/// Cities without a coordinate entry are skipped. Output is sorted by
/// count descending, then city name for a stable order.
#[must_use]
pub fn city_distribution(transactions: &[Transaction]) -> Vec<CityStat> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tx in transactions {
        *counts.entry(tx.city.as_str()).or_insert(0) += 1;
    }

    let mut stats: Vec<CityStat> = CITY_COORDS
        .iter()
        .filter_map(|&(city, lat, lon)| {
            counts.get(city).map(|&count| CityStat {
                city: city.to_string(),
                lat,
                lon,
                count,
            })
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.city.cmp(&b.city)));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudlens_core::types::{FraudType, TxStatus};

    fn tx(city: &str) -> Transaction {
        Transaction {
            id: "TX1".to_string(),
            account_id: "AC1".to_string(),
            merchant: "Noon".to_string(),
            city: city.to_string(),
            amount: 100.0,
            risk_score: 800,
            fraud_type: FraudType::BotAttack,
            status: TxStatus::Review,
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_counts_and_order() {
        let batch = vec![tx("Cairo"), tx("Giza"), tx("Cairo"), tx("Cairo"), tx("Giza")];
        let stats = city_distribution(&batch);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].city, "Cairo");
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[1].count, 2);
    }

    #[test]
    fn test_unknown_city_skipped() {
        let batch = vec![tx("Atlantis"), tx("Cairo")];
        let stats = city_distribution(&batch);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].city, "Cairo");
    }

    #[test]
    fn test_coordinates_joined() {
        let stats = city_distribution(&[tx("Alexandria")]);
        assert!((stats[0].lat - 31.2001).abs() < 1e-9);
        assert!((stats[0].lon - 29.9187).abs() < 1e-9);
    }

    #[test]
    fn test_empty_batch() {
        assert!(city_distribution(&[]).is_empty());
    }
}
