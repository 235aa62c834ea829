//! Panel widgets: node controls, graph information, adjacency listing.

use egui::{Color32, ScrollArea, Slider};
use randgraph_core::{GraphModel, NODE_COUNT_RANGE, NODE_RADIUS_RANGE};

use crate::settings::GraphSettings;

/// Sliders and colour picker shared by every presenter.
pub fn draw_node_controls(ui: &mut egui::Ui, settings: &mut GraphSettings) {
    ui.add(Slider::new(&mut settings.node_count, NODE_COUNT_RANGE).text("Number of nodes"));
    ui.add(Slider::new(&mut settings.node_radius, NODE_RADIUS_RANGE).text("Node radius"));
    ui.horizontal(|ui| {
        ui.color_edit_button_srgba(&mut settings.node_color);
        ui.label("Node color");
    });
    ui.checkbox(&mut settings.show_labels, "Show labels");
}

pub fn draw_error(ui: &mut egui::Ui, message: &str) {
    let color = if ui.visuals().dark_mode {
        Color32::from_rgb(255, 100, 100)
    } else {
        Color32::from_rgb(200, 50, 50)
    };
    ui.colored_label(color, message);
}

pub fn connectivity_label(connected: bool) -> &'static str {
    if connected {
        "Connected"
    } else {
        "Disconnected"
    }
}

/// Neighbour list as shown in the panel: `"None"` or `"1, 4, 2"`.
pub fn format_adjacency(neighbors: &[usize]) -> String {
    if neighbors.is_empty() {
        return "None".to_string();
    }
    neighbors
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Graph information, degrees and adjacency list.
pub fn draw_info_panel(ui: &mut egui::Ui, model: &GraphModel) {
    ui.strong("Graph information");
    ui.label("Graph type: Undirected");
    ui.label(format!(
        "Graph connectivity: {}",
        connectivity_label(model.is_connected())
    ));
    ui.label(format!("Total nodes: {}", model.node_count()));
    ui.label(format!("Total edges: {}", model.edge_count()));
    ui.label(format!("Average degree: {:.2}", model.average_degree()));

    ui.separator();

    ScrollArea::vertical()
        .max_height(320.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.strong("Node degrees:");
            for (i, node) in model.nodes().iter().enumerate() {
                ui.label(format!("Node {i}: {}", node.degree));
            }

            ui.separator();

            ui.strong("Adjacency list:");
            for (i, neighbors) in model.adjacency_list().iter().enumerate() {
                ui.label(format!("Node {i}: {}", format_adjacency(neighbors)));
            }
        });
}
