//! Risk filtering and graph construction.
//!
//! The builder selects the high-risk transaction subset feeding the
//! relationship view and turns it into a `RelationGraph`. Both steps
//! are pure functions of their inputs; the subsample is seeded so a
//! render cycle is reproducible.

use crate::types::RelationGraph;
use fraudlens_core::types::Transaction;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Select transactions with `risk_score >= threshold`, capped at
/// `bound` items for visualization tractability.
///
/// When more than `bound` transactions qualify, a uniform random
/// subset of exactly `bound` is drawn without replacement, preserving
/// the input order of the survivors. Fewer qualifiers are returned in
/// full; zero qualifiers yield an empty vector.
#[must_use]
pub fn filter_high_risk(
    transactions: &[Transaction],
    threshold: u32,
    bound: usize,
    seed: u64,
) -> Vec<Transaction> {
    let qualifying: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.risk_score >= threshold)
        .collect();

    if qualifying.len() <= bound {
        return qualifying.into_iter().cloned().collect();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked: Vec<usize> = rand::seq::index::sample(&mut rng, qualifying.len(), bound).into_vec();
    picked.sort_unstable();

    picked.into_iter().map(|i| qualifying[i].clone()).collect()
}

impl RelationGraph {
    /// Build the bipartite account↔merchant graph from a transaction
    /// subset.
    ///
    /// Every transaction contributes an account node, a merchant node,
    /// and an edge weighted `risk_score / 1000`; duplicates collapse
    /// per `RelationGraph::add_relation`. An empty subset produces an
    /// empty graph.
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut graph = RelationGraph::empty();
        for tx in transactions {
            graph.add_relation(&tx.account_id, &tx.merchant, tx.risk_weight());
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "relationship graph built"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeRole;
    use fraudlens_core::types::{FraudType, TxStatus};

    fn tx(id: &str, account: &str, merchant: &str, risk_score: u32) -> Transaction {
        Transaction {
            id: id.to_string(),
            account_id: account.to_string(),
            merchant: merchant.to_string(),
            city: "Cairo".to_string(),
            amount: 100.0,
            risk_score,
            fraud_type: FraudType::CardTesting,
            status: TxStatus::Review,
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_filter_threshold() {
        let txs = vec![
            tx("TX1", "AC1", "Noon", 799),
            tx("TX2", "AC2", "Amazon", 800),
            tx("TX3", "AC3", "Uber", 950),
        ];
        let filtered = filter_high_risk(&txs, 800, 60, 42);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|t| t.risk_score >= 800));
    }

    #[test]
    fn test_filter_empty_result() {
        let txs = vec![tx("TX1", "AC1", "Noon", 600)];
        let filtered = filter_high_risk(&txs, 800, 60, 42);
        assert!(filtered.is_empty());

        let graph = RelationGraph::from_transactions(&filtered);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_sampling_bound_without_replacement() {
        let txs: Vec<Transaction> = (0..1000)
            .map(|i| tx(&format!("TX{i}"), &format!("AC{i}"), "Noon", 900))
            .collect();

        let filtered = filter_high_risk(&txs, 800, 60, 42);
        assert_eq!(filtered.len(), 60);

        let mut ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 60, "subset drawn with replacement");
    }

    #[test]
    fn test_sampling_deterministic_per_seed() {
        let txs: Vec<Transaction> = (0..200)
            .map(|i| tx(&format!("TX{i}"), &format!("AC{i}"), "Noon", 900))
            .collect();

        let a = filter_high_risk(&txs, 800, 60, 42);
        let b = filter_high_risk(&txs, 800, 60, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_transaction_graph() {
        let txs = vec![tx("TX1", "AC1", "Noon", 900)];
        let graph = RelationGraph::from_transactions(&txs);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let ac1 = graph.node_index("AC1").unwrap();
        let noon = graph.node_index("Noon").unwrap();
        assert_eq!(graph.nodes()[ac1].role, NodeRole::Account);
        assert_eq!(graph.nodes()[noon].role, NodeRole::Merchant);
        assert!((graph.edges()[0].weight - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bipartite_invariant() {
        let txs: Vec<Transaction> = (0..100)
            .map(|i| {
                tx(
                    &format!("TX{i}"),
                    &format!("AC{}", i % 17),
                    ["Noon", "Amazon", "Uber", "Fawry"][i % 4],
                    850,
                )
            })
            .collect();

        let graph = RelationGraph::from_transactions(&txs);
        for edge in graph.edges() {
            assert_eq!(graph.nodes()[edge.account].role, NodeRole::Account);
            assert_eq!(graph.nodes()[edge.merchant].role, NodeRole::Merchant);
        }
    }

    #[test]
    fn test_duplicate_pair_collapses_last_write_wins() {
        let txs = vec![tx("TX1", "AC1", "Noon", 850), tx("TX2", "AC1", "Noon", 900)];
        let graph = RelationGraph::from_transactions(&txs);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!((graph.edges()[0].weight - 0.9).abs() < f64::EPSILON);
    }
}
