use crate::{config::Config, validator::GraphValidator};

/// Read-only state built once at startup and cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub validator: GraphValidator,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            validator: GraphValidator::new(),
            config,
        }
    }
}
