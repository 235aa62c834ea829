//! Config command implementation.
//!
//! Manages CLI configuration.

use anyhow::{Context, Result};
use randgraph_core::Connectivity;
use randgraph_viz::Variant;

use crate::config::Config;

const VALID_KEYS: &str = "node-count, node-radius, connectivity, seed, variant, window-width, window-height";

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("randgraph Configuration");
    println!("{:-<40}", "");

    println!("Node Count:     {}", config.node_count);
    println!("Node Radius:    {}", config.node_radius);
    println!("Connectivity:   {}", config.connectivity);
    println!(
        "Seed:           {}",
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(random)".to_string())
    );
    println!("Variant:        {}", config.variant);
    println!(
        "Window Size:    {}x{}",
        config.window_width, config.window_height
    );

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "node-count" | "nodes" => {
            let count: usize = value.parse().context("node-count must be an integer")?;
            if count == 0 {
                anyhow::bail!("node-count must be at least 1");
            }
            config.node_count = count;
        }
        "node-radius" | "radius" => {
            let radius: f32 = value.parse().context("node-radius must be a number")?;
            if !radius.is_finite() || radius <= 0.0 {
                anyhow::bail!("node-radius must be a positive number");
            }
            config.node_radius = radius;
        }
        "connectivity" | "connected" => {
            config.connectivity = value.parse::<Connectivity>()?;
        }
        "seed" => {
            config.seed = match value {
                "none" | "random" => None,
                v => Some(v.parse().context("seed must be an unsigned integer")?),
            };
        }
        "variant" => {
            config.variant = value.parse::<Variant>().map_err(anyhow::Error::msg)?;
        }
        "window-width" => {
            config.window_width = parse_window_size(key, value)?;
        }
        "window-height" => {
            config.window_height = parse_window_size(key, value)?;
        }
        _ => {
            anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, VALID_KEYS);
        }
    }

    config.save()?;
    println!("Set {} to: {}", key, value);
    Ok(())
}

fn parse_window_size(key: &str, value: &str) -> Result<f32> {
    let size: f32 = value
        .parse()
        .with_context(|| format!("{key} must be a number"))?;
    if !size.is_finite() || size <= 0.0 {
        anyhow::bail!("{key} must be a positive number");
    }
    Ok(size)
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let value = match key {
        "node-count" | "nodes" => config.node_count.to_string(),
        "node-radius" | "radius" => config.node_radius.to_string(),
        "connectivity" | "connected" => config.connectivity.to_string(),
        "seed" => config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(random)".to_string()),
        "variant" => config.variant.to_string(),
        "window-width" => config.window_width.to_string(),
        "window-height" => config.window_height.to_string(),
        _ => {
            anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, VALID_KEYS);
        }
    };

    println!("{}", value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}

/// Print the config file location.
pub fn path() {
    match Config::config_file_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("(no config file path available)"),
    }
}
