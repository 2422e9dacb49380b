//! Transaction types and data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest synthetic risk score produced by the sample generator.
pub const RISK_SCORE_MIN: u32 = 500;

/// Highest synthetic risk score produced by the sample generator.
pub const RISK_SCORE_MAX: u32 = 1000;

// ============================================================================
// Transaction Types
// ============================================================================

/// A payment transaction under fraud monitoring.
///
/// Immutable once generated; a batch is replaced wholesale when the
/// sample cache expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID (e.g., "TX1234567").
    pub id: String,
    /// Account ID (e.g., "AC20001").
    pub account_id: String,
    /// Merchant name.
    pub merchant: String,
    /// City where the transaction originated.
    pub city: String,
    /// Transaction amount.
    pub amount: f64,
    /// Synthetic risk score in `[RISK_SCORE_MIN, RISK_SCORE_MAX]`.
    pub risk_score: u32,
    /// Suspected fraud category.
    pub fraud_type: FraudType,
    /// Processing decision.
    pub status: TxStatus,
    /// Timestamp (Unix epoch seconds).
    pub timestamp: u64,
}

impl Transaction {
    /// Edge weight contributed by this transaction in the relationship
    /// graph: `risk_score / 1000`, in `(0, 1]` for generated scores.
    #[must_use]
    pub fn risk_weight(&self) -> f64 {
        f64::from(self.risk_score) / 1000.0
    }

    /// Hour of day (0-23) extracted from the timestamp, UTC.
    #[must_use]
    pub fn hour_of_day(&self) -> u8 {
        ((self.timestamp % 86_400) / 3_600) as u8
    }
}

/// Processing decision for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxStatus {
    /// Transaction was blocked.
    Blocked,
    /// Transaction was flagged for manual review.
    Review,
    /// Transaction was approved.
    Approved,
}

impl TxStatus {
    /// All statuses.
    pub const ALL: &'static [TxStatus] = &[TxStatus::Blocked, TxStatus::Review, TxStatus::Approved];

    /// Returns the status name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Blocked => "BLOCKED",
            TxStatus::Review => "REVIEW",
            TxStatus::Approved => "APPROVED",
        }
    }

    /// Parse a status from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "BLOCKED" => Some(TxStatus::Blocked),
            "REVIEW" => Some(TxStatus::Review),
            "APPROVED" => Some(TxStatus::Approved),
            _ => None,
        }
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Suspected fraud category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FraudType {
    /// Small probing charges to validate stolen cards.
    CardTesting,
    /// Account takeover indicators.
    AccountTakeover,
    /// Legitimate customer disputing a valid charge.
    FriendlyFraud,
    /// Automated attack traffic.
    BotAttack,
    /// Compromised merchant infrastructure.
    MerchantCompromise,
}

impl FraudType {
    /// All fraud types.
    pub const ALL: &'static [FraudType] = &[
        FraudType::CardTesting,
        FraudType::AccountTakeover,
        FraudType::FriendlyFraud,
        FraudType::BotAttack,
        FraudType::MerchantCompromise,
    ];

    /// Returns the fraud type name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FraudType::CardTesting => "Card Testing",
            FraudType::AccountTakeover => "Account Takeover",
            FraudType::FriendlyFraud => "Friendly Fraud",
            FraudType::BotAttack => "Bot Attack",
            FraudType::MerchantCompromise => "Merchant Compromise",
        }
    }
}

impl fmt::Display for FraudType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
