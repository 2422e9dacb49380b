//! Force-directed layout engine.
//!
//! A Fruchterman–Reingold spring embedder: every node pair repels with
//! `k^2 / d`, every edge attracts with `d^2 / k` scaled by its weight,
//! and per-iteration displacement is capped by a linearly decaying
//! temperature. Positions are seeded, so identical (graph, seed, k)
//! inputs produce identical layouts.

use crate::types::RelationGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Default iteration budget for the simulation.
pub const DEFAULT_ITERATIONS: u32 = 50;

/// Initial temperature as a fraction of the unit placement square.
const INITIAL_TEMPERATURE: f64 = 0.1;

/// Distances below this are treated as a degenerate overlap.
const MIN_DISTANCE: f64 = 1e-9;

/// A 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// Compute node coordinates with the default iteration budget.
///
/// Returns one point per node, in node-index order. Zero nodes yield
/// an empty vector; a single node is pinned to the origin without
/// running the simulation.
#[must_use]
pub fn spring_layout(graph: &RelationGraph, seed: u64, k: f64) -> Vec<Point> {
    spring_layout_with_budget(graph, seed, k, DEFAULT_ITERATIONS)
}

/// Compute node coordinates with an explicit iteration budget.
#[must_use]
pub fn spring_layout_with_budget(
    graph: &RelationGraph,
    seed: u64,
    k: f64,
    iterations: u32,
) -> Vec<Point> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![Point::ORIGIN];
    }

    let mut rng = StdRng::seed_from_u64(seed);

    // Seeded initial placement in the unit square.
    let mut pos: Vec<Point> = (0..n)
        .map(|_| Point {
            x: rng.random(),
            y: rng.random(),
        })
        .collect();

    let mut temperature = INITIAL_TEMPERATURE;
    let cooling = temperature / f64::from(iterations + 1);

    for _ in 0..iterations {
        let mut disp = vec![Point::ORIGIN; n];

        // Repulsion between every node pair.
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy, d) = separation(pos[i], pos[j], &mut rng);
                let force = k * k / d;
                let (ux, uy) = (dx / d, dy / d);
                disp[i].x += ux * force;
                disp[i].y += uy * force;
                disp[j].x -= ux * force;
                disp[j].y -= uy * force;
            }
        }

        // Attraction along edges, scaled by edge weight.
        for edge in graph.edges() {
            let (a, m) = (edge.account, edge.merchant);
            let (dx, dy, d) = separation(pos[a], pos[m], &mut rng);
            let force = d * d / k * edge.weight;
            let (ux, uy) = (dx / d, dy / d);
            disp[a].x -= ux * force;
            disp[a].y -= uy * force;
            disp[m].x += ux * force;
            disp[m].y += uy * force;
        }

        // Apply displacements, capped by the current temperature.
        for i in 0..n {
            let len = (disp[i].x * disp[i].x + disp[i].y * disp[i].y).sqrt();
            if len > MIN_DISTANCE {
                let scale = temperature.min(len) / len;
                pos[i].x += disp[i].x * scale;
                pos[i].y += disp[i].y * scale;
            }
        }

        temperature -= cooling;
    }

    rescale(&mut pos);
    separate_coincident(&mut pos);

    tracing::debug!(nodes = n, edges = graph.edge_count(), seed, k, "layout computed");
    pos
}

/// Displacement vector and distance between two positions.
///
/// Exactly coincident positions are separated by a small seeded jitter
/// so force directions stay defined.
fn separation(a: Point, b: Point, rng: &mut StdRng) -> (f64, f64, f64) {
    let mut dx = a.x - b.x;
    let mut dy = a.y - b.y;
    let mut d = (dx * dx + dy * dy).sqrt();
    if d < MIN_DISTANCE {
        dx = rng.random::<f64>() * 1e-3 + MIN_DISTANCE;
        dy = rng.random::<f64>() * 1e-3 + MIN_DISTANCE;
        d = (dx * dx + dy * dy).sqrt();
    }
    (dx, dy, d)
}

/// Center positions on the origin and normalize the maximum extent
/// to 1.
fn rescale(pos: &mut [Point]) {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p.y).sum::<f64>() / n;
    let mut max_extent: f64 = 0.0;
    for p in pos.iter_mut() {
        p.x -= cx;
        p.y -= cy;
        max_extent = max_extent.max(p.x.abs()).max(p.y.abs());
    }
    if max_extent > MIN_DISTANCE {
        for p in pos.iter_mut() {
            p.x /= max_extent;
            p.y /= max_extent;
        }
    }
}

/// Guarantee no two nodes share exact coordinates.
fn separate_coincident(pos: &mut [Point]) {
    for i in 0..pos.len() {
        for j in (i + 1)..pos.len() {
            if pos[i].x == pos[j].x && pos[i].y == pos[j].y {
                let nudge = 1e-6 * (j as f64 + 1.0);
                pos[j].x += nudge;
                pos[j].y -= nudge;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RelationGraph;

    fn sample_graph() -> RelationGraph {
        let mut graph = RelationGraph::empty();
        graph.add_relation("AC1", "Noon", 0.9);
        graph.add_relation("AC1", "Amazon", 0.85);
        graph.add_relation("AC2", "Noon", 0.95);
        graph.add_relation("AC3", "Uber", 0.82);
        graph
    }

    #[test]
    fn test_empty_graph_layout() {
        let layout = spring_layout(&RelationGraph::empty(), 42, 0.8);
        assert!(layout.is_empty());
    }

    #[test]
    fn test_single_node_layout() {
        let mut graph = RelationGraph::empty();
        graph.intern_node("AC1", crate::types::NodeRole::Account);
        let layout = spring_layout(&graph, 42, 0.8);
        assert_eq!(layout, vec![Point::ORIGIN]);
    }

    #[test]
    fn test_layout_covers_every_node() {
        let graph = sample_graph();
        let layout = spring_layout(&graph, 42, 0.8);
        assert_eq!(layout.len(), graph.node_count());
        assert!(layout.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_layout_deterministic() {
        let graph = sample_graph();
        let a = spring_layout(&graph, 42, 0.8);
        let b = spring_layout(&graph, 42, 0.8);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_layout() {
        let graph = sample_graph();
        let a = spring_layout(&graph, 42, 0.8);
        let b = spring_layout(&graph, 7, 0.8);
        assert_ne!(a, b);
    }

    #[test]
    fn test_no_two_nodes_coincide() {
        let graph = sample_graph();
        let layout = spring_layout(&graph, 42, 0.8);
        for i in 0..layout.len() {
            for j in (i + 1)..layout.len() {
                assert!(
                    layout[i] != layout[j],
                    "nodes {i} and {j} share coordinates"
                );
            }
        }
    }

    #[test]
    fn test_two_unconnected_nodes_repel() {
        let mut graph = RelationGraph::empty();
        graph.intern_node("AC1", crate::types::NodeRole::Account);
        graph.intern_node("Noon", crate::types::NodeRole::Merchant);

        let layout = spring_layout(&graph, 42, 0.8);
        let dx = layout[0].x - layout[1].x;
        let dy = layout[0].y - layout[1].y;
        let d = (dx * dx + dy * dy).sqrt();
        assert!(d > 0.5, "unconnected nodes too close: {d}");
    }

    #[test]
    fn test_connected_nodes_closer_than_unconnected() {
        // AC1-Noon connected; AC2 floats free of both.
        let mut graph = RelationGraph::empty();
        graph.add_relation("AC1", "Noon", 0.9);
        graph.intern_node("AC2", crate::types::NodeRole::Account);

        let layout = spring_layout(&graph, 42, 0.8);
        let dist = |a: Point, b: Point| {
            let (dx, dy) = (a.x - b.x, a.y - b.y);
            (dx * dx + dy * dy).sqrt()
        };
        let connected = dist(layout[0], layout[1]);
        let unconnected = dist(layout[0], layout[2]).min(dist(layout[1], layout[2]));
        assert!(
            connected < unconnected,
            "connected pair ({connected}) not closer than unconnected ({unconnected})"
        );
    }

    #[test]
    fn test_layout_respects_iteration_budget() {
        let graph = sample_graph();
        // Zero iterations still yields a valid, seeded placement.
        let layout = spring_layout_with_budget(&graph, 42, 0.8, 0);
        assert_eq!(layout.len(), graph.node_count());
    }

    #[test]
    fn test_layout_within_unit_extent() {
        let graph = sample_graph();
        let layout = spring_layout(&graph, 42, 0.8);
        for p in &layout {
            assert!(p.x.abs() <= 1.0 + 1e-5);
            assert!(p.y.abs() <= 1.0 + 1e-5);
        }
    }
}
