//! Check command implementation.
//!
//! Loads a graph file, validates it, and prints its report.

use std::path::Path;

use anyhow::{Context, Result};
use randgraph_core::{GraphFile, GraphModel};
use tracing::info;

use super::report::{GraphReport, OutputFormat};

pub fn execute(path: &Path, format: OutputFormat) -> Result<()> {
    let model = load(path)?;
    info!(
        path = %path.display(),
        nodes = model.node_count(),
        edges = model.edge_count(),
        "graph file is valid"
    );
    println!("{}", GraphReport::new(&model, None).render(format)?);
    Ok(())
}

pub fn load(path: &Path) -> Result<GraphModel> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph from {}", path.display()))?;
    let file = GraphFile::from_json(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    GraphModel::from_file(file).with_context(|| format!("Invalid graph in {}", path.display()))
}
