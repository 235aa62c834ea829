//! Core graph model for the randgraph demos.
//!
//! Nodes live in normalized device space (`[-1, 1]` on both axes) and are
//! addressed by their index. Edges are unordered index pairs without
//! self-loops or duplicates. Everything that draws or prints a graph goes
//! through [`GraphModel`].

mod analysis;
mod error;
mod generate;
mod model;
mod params;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use analysis::{adjacency, compute_degrees, is_connected};
pub use error::{GraphError, GraphResult};
pub use generate::{generate_edges, generate_nodes, sampling_bounds};
pub use model::{GraphFile, GraphModel, GraphStats};
pub use params::{Connectivity, GenerationParams, NODE_COUNT_RANGE, NODE_RADIUS_RANGE};

// =============================================================================
// Graph Primitives
// =============================================================================

/// A point in normalized device space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Position {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [f32; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

/// A graph vertex: where it sits and how many edges touch it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Location in normalized device space.
    pub position: Position,
    /// Number of incident edges. Derived, see [`compute_degrees`].
    pub degree: usize,
}

impl Node {
    /// Create an isolated node at `position`.
    pub fn at(position: Position) -> Self {
        Self {
            position,
            degree: 0,
        }
    }
}

/// Unordered pair of node indices.
///
/// `Edge::new(1, 2)` and `Edge::new(2, 1)` describe the same connection; use
/// [`Edge::same_pair`] rather than `==` when checking for duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Whether `node` is one of the endpoints.
    pub fn touches(&self, node: usize) -> bool {
        self.a == node || self.b == node
    }

    /// The endpoint opposite `node`, or `None` if the edge does not touch it.
    pub fn other(&self, node: usize) -> Option<usize> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }

    /// Whether both edges join the same two nodes, in either order.
    pub fn same_pair(&self, other: &Edge) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self { a, b }
    }
}

impl From<Edge> for (usize, usize) {
    fn from(e: Edge) -> Self {
        (e.a, e.b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}
