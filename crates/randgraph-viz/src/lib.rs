//! egui desktop demos for randomly generated graphs.
//!
//! Two presenters share one [`GraphSession`]:
//! - [`Explorer`] generates connected or disconnected graphs on demand
//! - [`ConnectedDemo`] only generates connected graphs

mod app;
mod canvas;
mod presenter;
mod session;
mod settings;
mod ui;

pub use app::GraphApp;
pub use canvas::{paint_graph, CanvasStyle, Projection};
pub use presenter::{ConnectedDemo, Explorer, GraphPresenter};
pub use session::GraphSession;
pub use settings::{GraphSettings, Variant};
pub use ui::{connectivity_label, format_adjacency};

use eframe::NativeOptions;

/// Window configuration for [`run_native`].
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    pub settings: GraphSettings,
    pub seed: Option<u64>,
    pub width: f32,
    pub height: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            settings: GraphSettings::default(),
            seed: None,
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Open a native window running the chosen presenter. Blocks until closed.
pub fn run_native(variant: Variant, options: ViewerOptions) -> eframe::Result<()> {
    let title = match variant {
        Variant::Explorer => Explorer.title(),
        Variant::Connected => ConnectedDemo.title(),
    };

    let native = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([options.width, options.height])
            .with_title(title),
        ..Default::default()
    };

    tracing::info!(%variant, seed = ?options.seed, "starting viewer");

    eframe::run_native(
        title,
        native,
        Box::new(move |cc| {
            let app: Box<dyn eframe::App> = match variant {
                Variant::Explorer => Box::new(GraphApp::new(
                    cc,
                    Explorer,
                    options.settings,
                    options.seed,
                )),
                Variant::Connected => Box::new(GraphApp::new(
                    cc,
                    ConnectedDemo,
                    options.settings,
                    options.seed,
                )),
            };
            Ok(app)
        }),
    )
}
