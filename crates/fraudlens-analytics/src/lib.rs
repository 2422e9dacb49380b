//! # Fraudlens Analytics
//!
//! Panel aggregations over a transaction batch:
//! - `kpi` - top-level dashboard counters
//! - `trend` - hourly attempt counts and risk-score histogram
//! - `geo` - per-city distribution with map coordinates
//! - `leaderboard` - riskiest transactions and most-targeted merchants
//! - `filter` - interactive conjunctive filtering
//!
//! Everything here is simple aggregation over an immutable slice; all
//! functions are pure and total.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod geo;
pub mod kpi;
pub mod leaderboard;
pub mod trend;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::filter::*;
    pub use crate::geo::*;
    pub use crate::kpi::*;
    pub use crate::leaderboard::*;
    pub use crate::trend::*;
}

pub use filter::FilterCriteria;
pub use geo::CityStat;
pub use kpi::KpiBlock;
pub use leaderboard::MerchantStat;
pub use trend::{HourlyPoint, RiskBucket};
