//! Generation parameters and their accepted ranges.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Node counts offered by the interactive demos.
pub const NODE_COUNT_RANGE: RangeInclusive<usize> = 1..=10;

/// Node radii offered by the interactive demos, in normalized units.
pub const NODE_RADIUS_RANGE: RangeInclusive<f32> = 0.01..=0.2;

/// How edges are laid out between the generated nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// A path through every node plus random extra edges.
    #[default]
    Connected,
    /// Random edges confined to two disjoint halves of the node list.
    Disconnected,
}

impl Connectivity {
    pub fn label(self) -> &'static str {
        match self {
            Connectivity::Connected => "connected",
            Connectivity::Disconnected => "disconnected",
        }
    }

    pub fn as_bool(self) -> bool {
        matches!(self, Connectivity::Connected)
    }
}

impl From<bool> for Connectivity {
    fn from(connected: bool) -> Self {
        if connected {
            Connectivity::Connected
        } else {
            Connectivity::Disconnected
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Connectivity {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "connected" | "true" | "yes" | "1" => Ok(Connectivity::Connected),
            "disconnected" | "false" | "no" | "0" => Ok(Connectivity::Disconnected),
            other => Err(GraphError::invalid_argument(format!(
                "unknown connectivity '{other}' (expected connected or disconnected)"
            ))),
        }
    }
}

/// Inputs for one graph generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Number of nodes to place. Must be positive.
    pub node_count: usize,
    /// Node radius; keeps sampled positions away from the border.
    pub node_radius: f32,
    /// Edge layout mode.
    pub connectivity: Connectivity,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            node_count: 5,
            node_radius: 0.05,
            connectivity: Connectivity::Connected,
        }
    }
}

impl GenerationParams {
    pub fn new(node_count: usize, node_radius: f32, connectivity: Connectivity) -> Self {
        Self {
            node_count,
            node_radius,
            connectivity,
        }
    }

    /// Reject inputs that have no meaningful graph.
    ///
    /// Radii outside `(0, 1)` are accepted here and clamped at sampling time.
    pub fn validate(&self) -> GraphResult<()> {
        if self.node_count == 0 {
            return Err(GraphError::invalid_argument("node count must be at least 1"));
        }
        if !self.node_radius.is_finite() {
            return Err(GraphError::invalid_argument(format!(
                "node radius must be finite, got {}",
                self.node_radius
            )));
        }
        Ok(())
    }

    /// Pull the count and radius into the ranges the demos expose.
    pub fn clamped_to_ui(self) -> Self {
        let radius = if self.node_radius.is_nan() {
            *NODE_RADIUS_RANGE.start()
        } else {
            self.node_radius
                .clamp(*NODE_RADIUS_RANGE.start(), *NODE_RADIUS_RANGE.end())
        };
        Self {
            node_count: self
                .node_count
                .clamp(*NODE_COUNT_RANGE.start(), *NODE_COUNT_RANGE.end()),
            node_radius: radius,
            connectivity: self.connectivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_window() {
        let p = GenerationParams::default();
        assert_eq!(p.node_count, 5);
        assert!((p.node_radius - 0.05).abs() < f32::EPSILON);
        assert_eq!(p.connectivity, Connectivity::Connected);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn zero_nodes_rejected() {
        let p = GenerationParams::new(0, 0.05, Connectivity::Connected);
        assert!(matches!(
            p.validate(),
            Err(GraphError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn nan_radius_rejected() {
        let p = GenerationParams::new(3, f32::NAN, Connectivity::Connected);
        assert!(p.validate().is_err());
    }

    #[test]
    fn large_radius_is_not_an_error() {
        let p = GenerationParams::new(3, 1.5, Connectivity::Disconnected);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn clamp_to_ui_ranges() {
        let p = GenerationParams::new(50, 0.9, Connectivity::Connected).clamped_to_ui();
        assert_eq!(p.node_count, 10);
        assert!((p.node_radius - 0.2).abs() < f32::EPSILON);

        let p = GenerationParams::new(0, 0.0, Connectivity::Connected).clamped_to_ui();
        assert_eq!(p.node_count, 1);
        assert!((p.node_radius - 0.01).abs() < f32::EPSILON);
    }

    #[test]
    fn connectivity_parsing() {
        assert_eq!("connected".parse::<Connectivity>().unwrap(), Connectivity::Connected);
        assert_eq!("False".parse::<Connectivity>().unwrap(), Connectivity::Disconnected);
        assert!("sometimes".parse::<Connectivity>().is_err());
        assert_eq!(Connectivity::from(false), Connectivity::Disconnected);
    }

    #[test]
    fn params_deserialize_with_missing_fields() {
        let p: GenerationParams = serde_json::from_str(r#"{"node_count": 8}"#).unwrap();
        assert_eq!(p.node_count, 8);
        assert_eq!(p.connectivity, Connectivity::Connected);
    }
}
