//! Presenters: thin, swappable front ends over a [`GraphSession`].
//!
//! [`GraphSession`]: crate::GraphSession

use egui::{Align2, Vec2};
use randgraph_core::GraphModel;

use crate::settings::GraphSettings;
use crate::ui::{draw_info_panel, draw_node_controls};

/// What a window needs to know to show a graph session.
pub trait GraphPresenter {
    /// Window and panel title.
    fn title(&self) -> &'static str;

    /// Whether the settings panel opens collapsed.
    fn starts_collapsed(&self) -> bool {
        false
    }

    /// Adjust settings before a graph is generated from them.
    fn constrain(&self, _settings: &mut GraphSettings) {}

    /// Draw the controls. Returns `true` when a new graph was requested.
    fn settings_panel(&mut self, ui: &mut egui::Ui, settings: &mut GraphSettings) -> bool;

    /// Where a node's index label goes, relative to its centre in pixels.
    fn label_placement(&self, node_radius_px: f32) -> (Vec2, Align2);

    fn info_panel(&self, ui: &mut egui::Ui, model: &GraphModel) {
        draw_info_panel(ui, model);
    }
}

/// Random graph generator with a connected/disconnected toggle.
#[derive(Debug, Default, Clone)]
pub struct Explorer;

impl GraphPresenter for Explorer {
    fn title(&self) -> &'static str {
        "Random 2D Graph Generator"
    }

    fn starts_collapsed(&self) -> bool {
        true
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui, settings: &mut GraphSettings) -> bool {
        draw_node_controls(ui, settings);
        ui.checkbox(&mut settings.connected, "Connected graph");
        ui.button("New graph").clicked()
    }

    fn label_placement(&self, _node_radius_px: f32) -> (Vec2, Align2) {
        (Vec2::ZERO, Align2::CENTER_CENTER)
    }
}

/// Generator that only ever produces connected graphs.
#[derive(Debug, Default, Clone)]
pub struct ConnectedDemo;

impl GraphPresenter for ConnectedDemo {
    fn title(&self) -> &'static str {
        "Connected Graph Generator"
    }

    fn constrain(&self, settings: &mut GraphSettings) {
        settings.connected = true;
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui, settings: &mut GraphSettings) -> bool {
        draw_node_controls(ui, settings);
        ui.button("New graph").clicked()
    }

    fn label_placement(&self, node_radius_px: f32) -> (Vec2, Align2) {
        (
            Vec2::new(node_radius_px * 0.5 + 2.0, -(node_radius_px + 4.0)),
            Align2::LEFT_BOTTOM,
        )
    }
}
