//! # Fraudlens Data
//!
//! Synthetic transaction data for the monitoring core:
//! - `SampleGenerator` - seeded random transaction batches
//! - `SampleCache` - TTL'd batch holder, regenerated wholesale on read
//!   after expiry

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod generator;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cache::*;
    pub use crate::generator::*;
}

pub use cache::SampleCache;
pub use generator::SampleGenerator;
