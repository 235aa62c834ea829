//! Text and JSON reports for a graph.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use randgraph_core::{Edge, GenerationParams, GraphModel, GraphStats, Position};
use randgraph_viz::{connectivity_label, format_adjacency};
use serde::Serialize;

/// Output format for graph reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything a report shows, in serializable form.
#[derive(Debug, Serialize)]
pub struct GraphReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<&'a GenerationParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub stats: GraphStats,
    pub positions: Vec<Position>,
    pub degrees: Vec<usize>,
    pub adjacency: Vec<Vec<usize>>,
    pub edges: &'a [Edge],
}

impl<'a> GraphReport<'a> {
    pub fn new(model: &'a GraphModel, seed: Option<u64>) -> Self {
        Self {
            params: model.params(),
            seed,
            stats: model.stats(),
            positions: model.positions().collect(),
            degrees: model.degrees(),
            adjacency: model.adjacency_list(),
            edges: model.edges(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn to_text(&self) -> String {
        let s = &self.stats;
        let mut out = String::new();

        let _ = writeln!(out, "Graph Information");
        let _ = writeln!(out, "{:─<40}", "");
        if let Some(params) = self.params {
            let _ = writeln!(out, "Mode:            {}", params.connectivity);
            let _ = writeln!(out, "Node radius:     {:.3}", params.node_radius);
        }
        if let Some(seed) = self.seed {
            let _ = writeln!(out, "Seed:            {seed}");
        }
        let _ = writeln!(out, "Type:            Undirected");
        let _ = writeln!(out, "Connectivity:    {}", connectivity_label(s.connected));
        let _ = writeln!(out, "Components:      {}", s.components);
        let _ = writeln!(out, "Total nodes:     {}", s.node_count);
        let _ = writeln!(out, "Total edges:     {}", s.edge_count);
        let _ = writeln!(out, "Average degree:  {:.2}", s.average_degree);
        let _ = writeln!(out, "Degree range:    {}..={}", s.min_degree, s.max_degree);
        let _ = writeln!(out, "Isolated nodes:  {}", s.isolated_nodes);

        let _ = writeln!(out);
        let _ = writeln!(out, "Node degrees:");
        for (i, degree) in self.degrees.iter().enumerate() {
            let _ = writeln!(out, "  Node {i}: {degree}");
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Adjacency list:");
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            let _ = writeln!(out, "  Node {i}: {}", format_adjacency(neighbors));
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Edges:");
        if self.edges.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for edge in self.edges {
            let _ = writeln!(out, "  {edge}");
        }

        out
    }
}
