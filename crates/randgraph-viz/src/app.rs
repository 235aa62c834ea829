//! Main application state and frame loop.

use eframe::{App, CreationContext};
use egui::{Color32, Context, Sense};

use crate::canvas::{paint_graph, CanvasStyle, Projection};
use crate::presenter::GraphPresenter;
use crate::session::GraphSession;
use crate::settings::GraphSettings;
use crate::ui::draw_error;

/// A window showing one graph session through one presenter.
pub struct GraphApp<P: GraphPresenter> {
    session: GraphSession,
    presenter: P,
}

impl<P: GraphPresenter> GraphApp<P> {
    /// Create the app inside an eframe window.
    pub fn new(cc: &CreationContext<'_>, presenter: P, settings: GraphSettings, seed: Option<u64>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_presenter(presenter, settings, seed)
    }

    /// Create the app without a window, e.g. for headless frames in tests.
    pub fn with_presenter(presenter: P, mut settings: GraphSettings, seed: Option<u64>) -> Self {
        presenter.constrain(&mut settings);
        Self {
            session: GraphSession::new(settings, seed),
            presenter,
        }
    }

    pub fn session(&self) -> &GraphSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GraphSession {
        &mut self.session
    }

    /// Regenerate through the presenter's constraints.
    pub fn regenerate(&mut self) -> bool {
        self.presenter.constrain(self.session.settings_mut());
        self.session.regenerate()
    }

    /// Lay out and paint one frame.
    pub fn show(&mut self, ctx: &Context) {
        let mut requested = false;
        {
            let Self { session, presenter } = self;

            egui::Window::new(presenter.title())
                .default_open(!presenter.starts_collapsed())
                .resizable(false)
                .show(ctx, |ui| {
                    requested = presenter.settings_panel(ui, session.settings_mut());
                    if let Some(err) = session.last_error() {
                        draw_error(ui, err);
                    }
                    ui.separator();
                    presenter.info_panel(ui, session.model());
                });
        }

        if requested {
            self.regenerate();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                let projection = Projection::new(response.rect);
                let settings = self.session.settings();
                let (label_offset, label_align) = self
                    .presenter
                    .label_placement(projection.scale(settings.node_radius));

                let style = CanvasStyle {
                    node_radius: settings.node_radius,
                    node_color: settings.node_color,
                    show_labels: settings.show_labels,
                    label_offset,
                    label_align,
                    ..CanvasStyle::default()
                };
                paint_graph(&painter, &projection, self.session.model(), &style);
            });
    }
}

impl<P: GraphPresenter> App for GraphApp<P> {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
