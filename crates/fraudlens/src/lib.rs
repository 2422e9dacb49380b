//! # Fraudlens
//!
//! A live-refreshing payment-fraud monitoring core. Synthesizes a
//! random transaction sample on a TTL'd cache and computes, per render
//! cycle: header KPIs, geographic distribution, hourly trend,
//! leaderboards, a filtered table, and an account↔merchant
//! relationship graph with a deterministic force-directed layout.
//!
//! There is no detection logic and no I/O surface: the output of a
//! cycle is a [`DashboardSnapshot`] of plain data structures handed to
//! an external rendering layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use fraudlens::{Dashboard, DashboardConfig};
//!
//! let mut dashboard = Dashboard::new(DashboardConfig::default()).unwrap();
//! let snapshot = dashboard.render_cycle().unwrap();
//! assert_eq!(snapshot.kpis.total, 1200);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dashboard;

// Re-export member crates
pub use fraudlens_analytics as analytics;
pub use fraudlens_core as core;
pub use fraudlens_data as data;
pub use fraudlens_graph as graph;

// Re-export the main entry points
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use fraudlens_core::{DashboardConfig, FraudlensError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::dashboard::*;
    pub use fraudlens_analytics::prelude::*;
    pub use fraudlens_core::prelude::*;
    pub use fraudlens_data::prelude::*;
    pub use fraudlens_graph::prelude::*;
}
