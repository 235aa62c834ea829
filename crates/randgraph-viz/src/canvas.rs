//! Painting nodes, edges and labels onto the central panel.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};
use randgraph_core::{GraphModel, Position};

/// Maps normalized graph coordinates onto a screen rectangle.
///
/// The shorter side of the rectangle spans `[-1, 1]`; the longer side is
/// extended so circles stay round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: Pos2,
    pixels_per_unit: f32,
}

impl Projection {
    pub fn new(rect: Rect) -> Self {
        Self {
            center: rect.center(),
            pixels_per_unit: 0.5 * rect.width().min(rect.height()).max(0.0),
        }
    }

    pub fn to_screen(&self, p: Position) -> Pos2 {
        Pos2::new(
            self.center.x + p.x * self.pixels_per_unit,
            self.center.y - p.y * self.pixels_per_unit,
        )
    }

    /// Length in pixels of `units` normalized units.
    pub fn scale(&self, units: f32) -> f32 {
        units * self.pixels_per_unit
    }
}

/// Colours and sizes for one paint pass.
#[derive(Debug, Clone, Copy)]
pub struct CanvasStyle {
    pub node_radius: f32,
    pub node_color: Color32,
    pub edge_stroke: Stroke,
    pub label_color: Color32,
    pub show_labels: bool,
    /// Label position relative to the node centre, in pixels.
    pub label_offset: Vec2,
    pub label_align: Align2,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            node_radius: 0.05,
            node_color: Color32::from_rgb(255, 0, 0),
            edge_stroke: Stroke::new(1.5, Color32::BLACK),
            label_color: Color32::BLACK,
            show_labels: true,
            label_offset: Vec2::ZERO,
            label_align: Align2::CENTER_CENTER,
        }
    }
}

/// Draw the whole graph: edges first so nodes sit on top of them.
pub fn paint_graph(painter: &Painter, projection: &Projection, model: &GraphModel, style: &CanvasStyle) {
    let nodes = model.nodes();

    for edge in model.edges() {
        if let (Some(a), Some(b)) = (nodes.get(edge.a), nodes.get(edge.b)) {
            painter.line_segment(
                [
                    projection.to_screen(a.position),
                    projection.to_screen(b.position),
                ],
                style.edge_stroke,
            );
        }
    }

    let radius = projection.scale(style.node_radius).max(1.0);
    let font = FontId::proportional((radius * 0.9).clamp(10.0, 20.0));

    for (i, node) in nodes.iter().enumerate() {
        let center = projection.to_screen(node.position);
        painter.circle_filled(center, radius, style.node_color);

        if style.show_labels {
            painter.text(
                center + style.label_offset,
                style.label_align,
                i.to_string(),
                font.clone(),
                style.label_color,
            );
        }
    }
}
