//! Structural queries over an edge list.

use crate::Edge;

/// Degree of every node, counted from scratch.
///
/// Edges with an endpoint outside `0..node_count` are skipped.
pub fn compute_degrees(node_count: usize, edges: &[Edge]) -> Vec<usize> {
    let mut degrees = vec![0; node_count];
    for edge in edges {
        if let Some(d) = degrees.get_mut(edge.a) {
            *d += 1;
        }
        if let Some(d) = degrees.get_mut(edge.b) {
            *d += 1;
        }
    }
    degrees
}

/// Whether every node can be reached from node 0.
///
/// Iterative depth-first search with an explicit stack. An empty graph is
/// connected.
pub fn is_connected(node_count: usize, edges: &[Edge]) -> bool {
    if node_count == 0 {
        return true;
    }

    let mut visited = vec![false; node_count];
    let mut stack = vec![0];
    visited[0] = true;

    while let Some(current) = stack.pop() {
        for neighbor in edges.iter().filter_map(|e| e.other(current)) {
            if let Some(seen) = visited.get_mut(neighbor) {
                if !*seen {
                    *seen = true;
                    stack.push(neighbor);
                }
            }
        }
    }

    visited.into_iter().all(|v| v)
}

/// Neighbours of `node` in edge storage order.
pub fn adjacency(edges: &[Edge], node: usize) -> Vec<usize> {
    edges.iter().filter_map(|e| e.other(node)).collect()
}
