//! # Fraudlens Graph
//!
//! The algorithmic core of the dashboard: turns a high-risk
//! transaction subset into an account↔merchant bipartite graph and
//! computes a deterministic 2-D force-directed layout for rendering.
//!
//! Pipeline: `filter_high_risk` → `RelationGraph::from_transactions` →
//! `spring_layout` → `extract`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod extract;
pub mod layout;
pub mod types;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::builder::*;
    pub use crate::extract::*;
    pub use crate::layout::*;
    pub use crate::types::*;
}

pub use builder::filter_high_risk;
pub use extract::{extract, EdgeSegment, NetworkView, NodePoint};
pub use layout::{spring_layout, spring_layout_with_budget, Point};
pub use types::{GraphEdge, GraphNode, NodeRole, RelationGraph};
