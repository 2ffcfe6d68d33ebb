//! Manual status toggle, useful for exercising orchestrator behaviour.

use axum::extract::State;
use tracing::instrument;

use crate::config::TOGGLE_DOWN_REASON;
use crate::state::AppState;

/// Flips UP to DOWN (with a fixed reason) and DOWN to UP.
#[instrument(name = "toggle::toggle", skip(state))]
pub async fn toggle(State(state): State<AppState>) -> &'static str {
    if state.health.status().is_up() {
        state.health.set_unhealthy(TOGGLE_DOWN_REASON);
        "Health status set to DOWN with reason"
    } else {
        state.health.set_healthy();
        "Health status set to UP"
    }
}
