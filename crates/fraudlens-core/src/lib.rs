//! # Fraudlens Core
//!
//! Shared types for the fraudlens payment-fraud monitoring core:
//! - `Transaction` and its status/type enums
//! - `DashboardConfig` tuning parameters
//! - `FraudlensError` and the crate-wide `Result` alias

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::types::*;
}

// Re-export key types
pub use config::DashboardConfig;
pub use error::{FraudlensError, Result};
pub use types::{FraudType, Transaction, TxStatus};
