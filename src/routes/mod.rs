//! HTTP routes for the demo server.
//!
//! Health endpoints are mounted with `Cache-Control: no-store` so pollers
//! always see the live status. Request tracing is enabled via middleware that
//! attaches a request ID to each incoming request; the health handlers echo
//! that ID back in `X-Request-ID`.

pub mod toggle;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::handler::HealthHandler;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with the health routes and request ID middleware.
pub fn create_router(state: AppState) -> Router {
    let health = &state.config.health;

    let mut health_routes = Router::new()
        .route(
            &health.path,
            get(HealthHandler::new(
                state.health.clone(),
                health.handler_options(),
            )),
        )
        .route(&health.json_path, get(HealthHandler::json(state.health.clone())));

    if let Some(toggle_path) = &health.toggle_path {
        health_routes = health_routes.route(toggle_path, get(toggle::toggle));
    }

    health_routes
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ))
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
