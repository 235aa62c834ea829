//! CLI configuration management.
//!
//! Precedence, lowest first: built-in defaults, the JSON config file,
//! environment variables (including a `.env` file), command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use randgraph_core::{Connectivity, GenerationParams};
use randgraph_viz::Variant;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "RANDGRAPH_CONFIG";

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default number of nodes per graph.
    pub node_count: usize,

    /// Default node radius in normalized units.
    pub node_radius: f32,

    /// Default edge layout mode.
    pub connectivity: Connectivity,

    /// Fixed seed for reproducible graphs.
    pub seed: Option<u64>,

    /// Presenter used by `randgraph view`.
    pub variant: Variant,

    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            node_count: params.node_count,
            node_radius: params.node_radius,
            connectivity: params.connectivity,
            seed: None,
            variant: Variant::Explorer,
            window_width: 800.0,
            window_height: 600.0,
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    ///
    /// A `.env` file must already have been applied by the caller.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            _ => Self::default(),
        };

        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Some(count) = env_parsed("RANDGRAPH_NODES") {
            self.node_count = count;
        }
        if let Some(radius) = env_parsed("RANDGRAPH_RADIUS") {
            self.node_radius = radius;
        }
        if let Some(connectivity) = env_parsed("RANDGRAPH_CONNECTED") {
            self.connectivity = connectivity;
        }
        if let Some(seed) = env_parsed("RANDGRAPH_SEED") {
            self.seed = Some(seed);
        }
        if let Some(variant) = env_parsed("RANDGRAPH_VARIANT") {
            self.variant = variant;
        }
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let Some(config_path) = Self::config_file_path() else {
            anyhow::bail!("No config directory available on this platform");
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("dev", "randgraph", "randgraph")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    pub fn params(&self) -> GenerationParams {
        GenerationParams::new(self.node_count, self.node_radius, self.connectivity)
    }
}

fn env_parsed<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, value = %raw, error = %err, "ignoring invalid environment value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_generation_defaults() {
        let config = Config::default();
        assert_eq!(config.params(), GenerationParams::default());
        assert_eq!(config.variant, Variant::Explorer);
        assert!(config.seed.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "node_count": 9, "seed": 4 }"#).unwrap();
        assert_eq!(config.node_count, 9);
        assert_eq!(config.seed, Some(4));
        assert_eq!(config.connectivity, Connectivity::Connected);
        assert_eq!(config.window_width, 800.0);
    }
}
