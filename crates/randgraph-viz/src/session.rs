//! Graph state shared by every presenter.

use rand::rngs::StdRng;
use rand::SeedableRng;
use randgraph_core::GraphModel;
use tracing::{info, warn};

use crate::settings::GraphSettings;

/// The model a window displays, plus the widget values and random source
/// used to regenerate it.
#[derive(Debug)]
pub struct GraphSession {
    model: GraphModel,
    settings: GraphSettings,
    rng: StdRng,
    last_error: Option<String>,
    generation: u64,
}

impl GraphSession {
    /// Create a session and generate its first graph.
    ///
    /// With a seed the sequence of graphs is reproducible; without one the
    /// generator is seeded from the OS.
    pub fn new(settings: GraphSettings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut session = Self {
            model: GraphModel::empty(),
            settings,
            rng,
            last_error: None,
            generation: 0,
        };
        session.regenerate();
        session
    }

    /// Replace the graph using the current settings.
    ///
    /// Returns `false` and keeps the previous graph if the settings are
    /// rejected.
    pub fn regenerate(&mut self) -> bool {
        self.settings.clamp();
        let params = self.settings.params();
        match self.model.regenerate(params, &mut self.rng) {
            Ok(()) => {
                self.generation += 1;
                self.last_error = None;
                info!(
                    generation = self.generation,
                    nodes = params.node_count,
                    connectivity = %params.connectivity,
                    "new graph"
                );
                true
            }
            Err(err) => {
                warn!(error = %err, "graph generation rejected");
                self.last_error = Some(err.to_string());
                false
            }
        }
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn settings(&self) -> &GraphSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut GraphSettings {
        &mut self.settings
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of successful generations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
