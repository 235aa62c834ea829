//! View command implementation: opens the desktop demo.

use anyhow::Result;
use randgraph_viz::{GraphSettings, Variant, ViewerOptions};

use crate::config::Config;

pub fn execute(config: &Config, variant: Variant, seed: Option<u64>) -> Result<()> {
    let options = ViewerOptions {
        settings: GraphSettings::from_params(config.params()),
        seed: seed.or(config.seed),
        width: config.window_width,
        height: config.window_height,
    };

    randgraph_viz::run_native(variant, options)
        .map_err(|e| anyhow::anyhow!("Viewer exited with an error: {e}"))
}
