//! The graph owned by a demo session.

use std::collections::HashSet;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::{adjacency, compute_degrees, is_connected};
use crate::error::{GraphError, GraphResult};
use crate::generate::{generate_edges, generate_nodes};
use crate::params::GenerationParams;
use crate::{Edge, Node, Position};

/// Nodes, edges and the parameters that produced them.
///
/// Degrees are derived: every constructor recomputes them from the edge
/// list, so they always equal the number of incident edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<GenerationParams>,
}

/// Summary figures shown in the info panel and CLI report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_degree: usize,
    pub average_degree: f32,
    pub min_degree: usize,
    pub max_degree: usize,
    pub isolated_nodes: usize,
    pub connected: bool,
    pub components: usize,
}

/// On-disk form of a graph: positions plus index pairs.
///
/// ```json
/// { "positions": [[0.1, 0.2], [-0.5, 0.4]], "edges": [[0, 1]] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub positions: Vec<Position>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphFile {
    pub fn from_json(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl GraphModel {
    /// A graph with no nodes. Connected by vacuous truth.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Generate a fresh random graph: nodes, then edges, then degrees.
    pub fn generate<R: Rng + ?Sized>(params: GenerationParams, rng: &mut R) -> GraphResult<Self> {
        params.validate()?;

        let mut nodes = generate_nodes(params.node_count, params.node_radius, rng);
        let edges = generate_edges(params.node_count, params.connectivity, rng);
        apply_degrees(&mut nodes, &edges);

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            connectivity = %params.connectivity,
            "generated graph"
        );

        Ok(Self {
            nodes,
            edges,
            params: Some(params),
        })
    }

    /// Replace this graph with a newly generated one.
    ///
    /// The new graph is built in full before the swap; on error the current
    /// graph is left untouched.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        params: GenerationParams,
        rng: &mut R,
    ) -> GraphResult<()> {
        let next = Self::generate(params, rng)?;
        info!(
            nodes = next.node_count(),
            edges = next.edge_count(),
            connected = next.is_connected(),
            "graph regenerated"
        );
        *self = next;
        Ok(())
    }

    /// Build a graph from explicit positions and edges.
    ///
    /// Rejects endpoints outside the node range, self-loops and repeated
    /// unordered pairs.
    pub fn from_parts(positions: Vec<Position>, edges: Vec<Edge>) -> GraphResult<Self> {
        let node_count = positions.len();
        let mut seen = HashSet::with_capacity(edges.len());

        for edge in &edges {
            if edge.a >= node_count || edge.b >= node_count {
                return Err(GraphError::NodeOutOfRange {
                    edge: *edge,
                    node_count,
                });
            }
            if edge.is_self_loop() {
                return Err(GraphError::SelfLoop { node: edge.a });
            }
            let key = (edge.a.min(edge.b), edge.a.max(edge.b));
            if !seen.insert(key) {
                return Err(GraphError::DuplicateEdge { a: key.0, b: key.1 });
            }
        }

        let mut nodes: Vec<Node> = positions.into_iter().map(Node::at).collect();
        apply_degrees(&mut nodes, &edges);

        Ok(Self {
            nodes,
            edges,
            params: None,
        })
    }

    pub fn from_file(file: GraphFile) -> GraphResult<Self> {
        Self::from_parts(file.positions, file.edges)
    }

    pub fn to_file(&self) -> GraphFile {
        GraphFile {
            positions: self.positions().collect(),
            edges: self.edges.clone(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Parameters of the last generation, if this graph was generated.
    pub fn params(&self) -> Option<&GenerationParams> {
        self.params.as_ref()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.nodes.iter().map(|n| n.position)
    }

    pub fn degrees(&self) -> Vec<usize> {
        self.nodes.iter().map(|n| n.degree).collect()
    }

    pub fn degree(&self, node: usize) -> Option<usize> {
        self.nodes.get(node).map(|n| n.degree)
    }

    pub fn adjacency(&self, node: usize) -> Vec<usize> {
        adjacency(&self.edges, node)
    }

    /// Neighbour list for every node, indexed like [`GraphModel::nodes`].
    pub fn adjacency_list(&self) -> Vec<Vec<usize>> {
        (0..self.nodes.len()).map(|i| self.adjacency(i)).collect()
    }

    pub fn is_connected(&self) -> bool {
        is_connected(self.nodes.len(), &self.edges)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn total_degree(&self) -> usize {
        self.nodes.iter().map(|n| n.degree).sum()
    }

    /// Mean degree; `0.0` for a graph without nodes.
    pub fn average_degree(&self) -> f32 {
        if self.nodes.is_empty() {
            0.0
        } else {
            self.total_degree() as f32 / self.nodes.len() as f32
        }
    }

    /// Convert to a petgraph undirected graph with positions as node weights.
    pub fn to_petgraph(&self) -> UnGraph<Position, ()> {
        let mut graph = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        for node in &self.nodes {
            graph.add_node(node.position);
        }
        for edge in &self.edges {
            graph.add_edge(NodeIndex::new(edge.a), NodeIndex::new(edge.b), ());
        }
        graph
    }

    /// Number of connected components. Zero for an empty graph.
    pub fn component_count(&self) -> usize {
        connected_components(&self.to_petgraph())
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            total_degree: self.total_degree(),
            average_degree: self.average_degree(),
            min_degree: self.nodes.iter().map(|n| n.degree).min().unwrap_or(0),
            max_degree: self.nodes.iter().map(|n| n.degree).max().unwrap_or(0),
            isolated_nodes: self.nodes.iter().filter(|n| n.degree == 0).count(),
            connected: self.is_connected(),
            components: self.component_count(),
        }
    }
}

fn apply_degrees(nodes: &mut [Node], edges: &[Edge]) {
    let degrees = compute_degrees(nodes.len(), edges);
    for (node, degree) in nodes.iter_mut().zip(degrees) {
        node.degree = degree;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Connectivity;
    use rand::{rngs::StdRng, SeedableRng};

    fn positions(n: usize) -> Vec<Position> {
        (0..n).map(|i| Position::new(i as f32 * 0.1, 0.0)).collect()
    }

    #[test]
    fn empty_graph_queries() {
        let g = GraphModel::empty();
        assert!(g.is_empty());
        assert!(g.is_connected());
        assert_eq!(g.average_degree(), 0.0);
        assert_eq!(g.component_count(), 0);
        assert!(g.params().is_none());
        let s = g.stats();
        assert_eq!(s.min_degree, 0);
        assert_eq!(s.max_degree, 0);
    }

    #[test]
    fn generate_rejects_zero_nodes() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = GraphModel::generate(
            GenerationParams::new(0, 0.05, Connectivity::Connected),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::InvalidArgument { .. }));
    }

    #[test]
    fn failed_regenerate_keeps_previous_graph() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut g = GraphModel::generate(GenerationParams::default(), &mut rng).unwrap();
        let before = g.clone();
        let bad = GenerationParams::new(0, 0.05, Connectivity::Connected);
        assert!(g.regenerate(bad, &mut rng).is_err());
        assert_eq!(g, before);
    }

    #[test]
    fn regenerate_replaces_graph() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut g = GraphModel::generate(GenerationParams::default(), &mut rng).unwrap();
        g.regenerate(
            GenerationParams::new(9, 0.1, Connectivity::Disconnected),
            &mut rng,
        )
        .unwrap();
        assert_eq!(g.node_count(), 9);
        assert_eq!(g.params().map(|p| p.connectivity), Some(Connectivity::Disconnected));
        assert!(!g.is_connected());
    }

    #[test]
    fn from_parts_computes_degrees() {
        let g = GraphModel::from_parts(positions(4), vec![Edge::new(0, 1), Edge::new(1, 2)])
            .unwrap();
        assert_eq!(g.degrees(), vec![1, 2, 1, 0]);
        assert_eq!(g.degree(3), Some(0));
        assert_eq!(g.degree(4), None);
        assert_eq!(g.total_degree(), 2 * g.edge_count());
        assert!((g.average_degree() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn from_parts_rejects_out_of_range() {
        let err = GraphModel::from_parts(positions(2), vec![Edge::new(0, 2)]).unwrap_err();
        assert!(matches!(err, GraphError::NodeOutOfRange { node_count: 2, .. }));
    }

    #[test]
    fn from_parts_rejects_self_loop() {
        let err = GraphModel::from_parts(positions(2), vec![Edge::new(1, 1)]).unwrap_err();
        assert!(matches!(err, GraphError::SelfLoop { node: 1 }));
    }

    #[test]
    fn from_parts_rejects_reversed_duplicate() {
        let err = GraphModel::from_parts(positions(3), vec![Edge::new(0, 2), Edge::new(2, 0)])
            .unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge { a: 0, b: 2 }));
    }

    #[test]
    fn adjacency_list_per_node() {
        let g = GraphModel::from_parts(
            positions(4),
            vec![Edge::new(0, 1), Edge::new(2, 0), Edge::new(1, 2)],
        )
        .unwrap();
        assert_eq!(g.adjacency_list(), vec![vec![1, 2], vec![0, 2], vec![0, 1], vec![]]);
    }

    #[test]
    fn stats_summarize_graph() {
        let g = GraphModel::from_parts(positions(5), vec![Edge::new(0, 1), Edge::new(2, 3)])
            .unwrap();
        let s = g.stats();
        assert_eq!(s.node_count, 5);
        assert_eq!(s.edge_count, 2);
        assert_eq!(s.total_degree, 4);
        assert_eq!(s.min_degree, 0);
        assert_eq!(s.max_degree, 1);
        assert_eq!(s.isolated_nodes, 1);
        assert!(!s.connected);
        assert_eq!(s.components, 3);
    }

    #[test]
    fn file_roundtrip_preserves_structure() {
        let json = r#"{ "positions": [[0.0, 0.5], [0.25, -0.5], [0.9, 0.9]], "edges": [[0, 1]] }"#;
        let g = GraphModel::from_file(GraphFile::from_json(json).unwrap()).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edges(), &[Edge::new(0, 1)]);
        assert_eq!(g.to_file().positions[1], Position::new(0.25, -0.5));
    }

    #[test]
    fn file_without_edges_defaults_to_none() {
        let file = GraphFile::from_json(r#"{ "positions": [[0.0, 0.0]] }"#).unwrap();
        assert!(file.edges.is_empty());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let err = GraphFile::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GraphError::Parse(_)));
    }
}
