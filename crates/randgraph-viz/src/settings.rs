//! Settings structures for the demo UI.

use std::fmt;
use std::str::FromStr;

use egui::Color32;
use randgraph_core::{Connectivity, GenerationParams, NODE_COUNT_RANGE, NODE_RADIUS_RANGE};
use serde::{Deserialize, Serialize};

/// Which presenter a window runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Full generator with a connectivity toggle.
    #[default]
    Explorer,
    /// Connected graphs only.
    Connected,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::Explorer => "explorer",
            Variant::Connected => "connected",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explorer" => Ok(Variant::Explorer),
            "connected" => Ok(Variant::Connected),
            other => Err(format!(
                "unknown variant '{other}' (expected explorer or connected)"
            )),
        }
    }
}

/// Values bound to the settings panel widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSettings {
    pub node_count: usize,
    pub node_radius: f32,
    pub node_color: Color32,
    pub connected: bool,
    /// Draw the node index next to each node.
    pub show_labels: bool,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self::from_params(GenerationParams::default())
    }
}

impl GraphSettings {
    /// Settings seeded from generation parameters, clamped to slider ranges.
    pub fn from_params(params: GenerationParams) -> Self {
        let params = params.clamped_to_ui();
        Self {
            node_count: params.node_count,
            node_radius: params.node_radius,
            node_color: Color32::from_rgb(255, 0, 0),
            connected: params.connectivity.as_bool(),
            show_labels: true,
        }
    }

    pub fn params(&self) -> GenerationParams {
        GenerationParams::new(
            self.node_count,
            self.node_radius,
            Connectivity::from(self.connected),
        )
    }

    /// Pull widget values back into their slider ranges.
    pub fn clamp(&mut self) {
        self.node_count = self
            .node_count
            .clamp(*NODE_COUNT_RANGE.start(), *NODE_COUNT_RANGE.end());
        self.node_radius = self
            .node_radius
            .clamp(*NODE_RADIUS_RANGE.start(), *NODE_RADIUS_RANGE.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_generation_defaults() {
        let s = GraphSettings::default();
        assert_eq!(s.node_count, 5);
        assert!(s.connected);
        assert_eq!(s.node_color, Color32::from_rgb(255, 0, 0));
        assert_eq!(s.params(), GenerationParams::default());
    }

    #[test]
    fn from_params_clamps_out_of_range() {
        let s = GraphSettings::from_params(GenerationParams::new(
            40,
            0.5,
            Connectivity::Disconnected,
        ));
        assert_eq!(s.node_count, 10);
        assert!((s.node_radius - 0.2).abs() < f32::EPSILON);
        assert!(!s.connected);
    }

    #[test]
    fn variant_parsing() {
        assert_eq!("Explorer".parse::<Variant>(), Ok(Variant::Explorer));
        assert_eq!("connected".parse::<Variant>(), Ok(Variant::Connected));
        assert!("other".parse::<Variant>().is_err());
    }

    #[test]
    fn variant_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Variant::Connected).unwrap(),
            "\"connected\""
        );
    }
}
