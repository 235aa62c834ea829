//! Generate command implementation.
//!
//! Builds one random graph and prints its report.

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use randgraph_core::{GenerationParams, GraphModel};
use tracing::debug;

use super::report::{GraphReport, OutputFormat};

/// Generate a graph, print the report, and optionally save the graph file.
///
/// Without a seed one is drawn at random and included in the report so the
/// graph can be reproduced.
pub fn execute(
    params: GenerationParams,
    seed: Option<u64>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    debug!(seed, ?params, "generating graph");

    let model = build(params, seed)?;

    if let Some(path) = output {
        let json = model.to_file().to_json_pretty()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write graph to {}", path.display()))?;
        eprintln!("💾 Saved graph to {}", path.display());
    }

    println!("{}", GraphReport::new(&model, Some(seed)).render(format)?);
    Ok(())
}

/// Reproducible generation from an explicit seed.
pub fn build(params: GenerationParams, seed: u64) -> Result<GraphModel> {
    let mut rng = StdRng::seed_from_u64(seed);
    GraphModel::generate(params, &mut rng).context("Failed to generate graph")
}
