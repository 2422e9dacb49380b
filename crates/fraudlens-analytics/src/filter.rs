//! Interactive filter panel.

use fraudlens_core::types::{Transaction, TxStatus};
use serde::{Deserialize, Serialize};

/// Maximum rows returned by a filter query.
pub const FILTER_ROW_CAP: usize = 200;

/// Conjunctive filter criteria; `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Restrict to one city.
    pub city: Option<String>,
    /// Restrict to one merchant.
    pub merchant: Option<String>,
    /// Restrict to one status.
    pub status: Option<TxStatus>,
    /// Minimum risk score (inclusive).
    pub min_risk: Option<u32>,
}

impl FilterCriteria {
    /// A criteria set matching every transaction.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict to a city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Restrict to a merchant.
    #[must_use]
    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = Some(merchant.into());
        self
    }

    /// Restrict to a status.
    #[must_use]
    pub fn with_status(mut self, status: TxStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Require a minimum risk score.
    #[must_use]
    pub fn with_min_risk(mut self, min_risk: u32) -> Self {
        self.min_risk = Some(min_risk);
        self
    }

    /// True when the transaction satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.city.as_ref().is_none_or(|c| &tx.city == c)
            && self.merchant.as_ref().is_none_or(|m| &tx.merchant == m)
            && self.status.is_none_or(|s| tx.status == s)
            && self.min_risk.is_none_or(|r| tx.risk_score >= r)
    }

    /// Apply the filter, newest first, capped at `FILTER_ROW_CAP`
    /// rows.
    #[must_use]
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut rows: Vec<Transaction> = transactions
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
        rows.truncate(FILTER_ROW_CAP);
        rows
    }
}
