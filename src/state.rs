//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::status::HealthStore;

/// Shared application state, cloneable across handlers.
///
/// The `HealthStore` here is the single health status for the whole process;
/// monitors and the shutdown handler update it through clones of this handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub health: HealthStore,
}

impl AppState {
    /// Creates a new application state starting in the UP state.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            health: HealthStore::new(),
        }
    }
}
