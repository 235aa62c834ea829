//! Random node placement and edge construction.

use rand::Rng;
use tracing::debug;

use crate::params::Connectivity;
use crate::{Edge, Node, Position};

/// Sampling interval for one coordinate of a node with the given radius.
///
/// The radius is clamped into `[0, 1]` (NaN counts as 0) so the interval
/// `[-1 + r, 1 - r]` is never inverted. A radius of 1 or more collapses
/// it to the origin.
pub fn sampling_bounds(radius: f32) -> (f32, f32) {
    let r = if radius.is_nan() {
        0.0
    } else {
        radius.clamp(0.0, 1.0)
    };
    (-1.0 + r, 1.0 - r)
}

/// Place `count` isolated nodes uniformly inside the sampling interval.
pub fn generate_nodes<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<Node> {
    let (lo, hi) = sampling_bounds(radius);
    (0..count)
        .map(|_| {
            let x = rng.random_range(lo..=hi);
            let y = rng.random_range(lo..=hi);
            Node::at(Position::new(x, y))
        })
        .collect()
}

/// Build the edge list for `node_count` nodes.
///
/// Random edges are sampled once each; self-loops and pairs already present
/// are dropped rather than redrawn, so the number of extra edges is an upper
/// bound.
pub fn generate_edges<R: Rng + ?Sized>(
    node_count: usize,
    connectivity: Connectivity,
    rng: &mut R,
) -> Vec<Edge> {
    let mut edges = Vec::new();

    match connectivity {
        Connectivity::Connected => {
            edges.extend((1..node_count).map(|i| Edge::new(i - 1, i)));
            add_random_edges(&mut edges, 0, node_count, node_count, rng);
        }
        Connectivity::Disconnected => {
            let split = node_count / 2;
            if split > 0 {
                add_random_edges(&mut edges, 0, split, split, rng);
                add_random_edges(&mut edges, split, node_count, node_count - split, rng);
            }
        }
    }

    debug!(
        node_count,
        connectivity = %connectivity,
        edges = edges.len(),
        "generated edges"
    );
    edges
}

/// Make `attempts` draws of endpoints in `start..end` and keep the new ones.
fn add_random_edges<R: Rng + ?Sized>(
    edges: &mut Vec<Edge>,
    start: usize,
    end: usize,
    attempts: usize,
    rng: &mut R,
) {
    if start >= end {
        return;
    }
    for _ in 0..attempts {
        let candidate = Edge::new(rng.random_range(start..end), rng.random_range(start..end));
        if candidate.is_self_loop() {
            continue;
        }
        if edges.iter().any(|e| e.same_pair(&candidate)) {
            continue;
        }
        edges.push(candidate);
    }
}
