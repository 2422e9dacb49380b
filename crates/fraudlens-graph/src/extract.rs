//! Coordinate and style extraction for the renderer.
//!
//! Flattens a laid-out relationship graph into the two lists the
//! plotting surface consumes: edge line segments and colored, labeled
//! node points.

use crate::layout::Point;
use crate::types::{NodeRole, RelationGraph};
use fraudlens_core::error::{FraudlensError, Result};
use serde::{Deserialize, Serialize};

/// Marker color for account nodes.
pub const ACCOUNT_COLOR: &str = "#34d399";

/// Marker color for merchant nodes.
pub const MERCHANT_COLOR: &str = "#fb7185";

/// A line segment between two node coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegment {
    /// Start x.
    pub x0: f64,
    /// Start y.
    pub y0: f64,
    /// End x.
    pub x1: f64,
    /// End y.
    pub y1: f64,
}

/// A styled, labeled node point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePoint {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Node label (account ID or merchant name).
    pub label: String,
    /// Role-based marker color.
    pub color: String,
}

/// Render-ready view of a laid-out relationship graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkView {
    /// One segment per edge.
    pub segments: Vec<EdgeSegment>,
    /// One point per node.
    pub points: Vec<NodePoint>,
}

/// Role-based marker color.
#[must_use]
pub const fn role_color(role: NodeRole) -> &'static str {
    match role {
        NodeRole::Account => ACCOUNT_COLOR,
        NodeRole::Merchant => MERCHANT_COLOR,
    }
}

/// Flatten a graph and its layout into a `NetworkView`.
///
/// An empty graph yields empty lists.
///
/// # Errors
///
/// Returns a validation error when `positions` was not produced for
/// this graph (length mismatch).
pub fn extract(graph: &RelationGraph, positions: &[Point]) -> Result<NetworkView> {
    if positions.len() != graph.node_count() {
        return Err(FraudlensError::validation(format!(
            "layout has {} positions for {} nodes",
            positions.len(),
            graph.node_count()
        )));
    }

    let segments = graph
        .edges()
        .iter()
        .map(|edge| EdgeSegment {
            x0: positions[edge.account].x,
            y0: positions[edge.account].y,
            x1: positions[edge.merchant].x,
            y1: positions[edge.merchant].y,
        })
        .collect();

    let points = graph
        .nodes()
        .iter()
        .zip(positions)
        .map(|(node, p)| NodePoint {
            x: p.x,
            y: p.y,
            label: node.label.clone(),
            color: role_color(node.role).to_string(),
        })
        .collect();

    Ok(NetworkView { segments, points })
}
