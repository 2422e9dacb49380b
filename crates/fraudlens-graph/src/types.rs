//! Relationship graph types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Role of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// Customer account.
    Account,
    /// Merchant.
    Merchant,
}

impl NodeRole {
    /// Returns the role name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeRole::Account => "account",
            NodeRole::Merchant => "merchant",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node in the relationship graph, identified by its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Account ID or merchant name.
    pub label: String,
    /// Node role.
    pub role: NodeRole,
}

/// An undirected weighted edge between an account and a merchant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Index of the account endpoint in the node list.
    pub account: usize,
    /// Index of the merchant endpoint in the node list.
    pub merchant: usize,
    /// Edge weight, `risk_score / 1000` of the last contributing
    /// transaction.
    pub weight: f64,
}

/// Undirected weighted bipartite graph of accounts and merchants.
///
/// Nodes keep insertion order; edges are deduplicated per
/// account–merchant pair with last-write-wins weight. Strict
/// bipartiteness holds by construction: every edge is typed with one
/// account index and one merchant index.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelationGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    #[serde(skip)]
    node_index: HashMap<String, usize>,
    #[serde(skip)]
    edge_index: HashMap<(usize, usize), usize>,
}

impl RelationGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Look up a node index by label.
    #[must_use]
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.node_index.get(label).copied()
    }

    /// Ensure a node with the given label and role exists, returning
    /// its index. Re-inserting an existing label is a no-op.
    pub fn intern_node(&mut self, label: &str, role: NodeRole) -> usize {
        if let Some(&idx) = self.node_index.get(label) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(GraphNode {
            label: label.to_string(),
            role,
        });
        self.node_index.insert(label.to_string(), idx);
        idx
    }

    /// Ensure an account node, a merchant node, and the edge between
    /// them exist. A repeated account–merchant pair overwrites the
    /// stored weight (last-write-wins) rather than accumulating a
    /// parallel edge: the visualization cares about relationship
    /// existence, not per-transaction multiplicity.
    pub fn add_relation(&mut self, account_id: &str, merchant: &str, weight: f64) {
        let account = self.intern_node(account_id, NodeRole::Account);
        let merchant = self.intern_node(merchant, NodeRole::Merchant);

        match self.edge_index.get(&(account, merchant)) {
            Some(&idx) => self.edges[idx].weight = weight,
            None => {
                self.edge_index.insert((account, merchant), self.edges.len());
                self.edges.push(GraphEdge {
                    account,
                    merchant,
                    weight,
                });
            }
        }
    }

    /// Degree of a node (number of incident edges).
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.edges
            .iter()
            .filter(|e| e.account == node || e.merchant == node)
            .count()
    }
}
