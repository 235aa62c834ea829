//! UI components for the settings and info panels.
//!
//! Presenters compose these; none of them own graph state.

mod panels;

pub use panels::{
    connectivity_label, draw_error, draw_info_panel, draw_node_controls, format_adjacency,
};
