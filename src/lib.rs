//! Healthline - process health status over HTTP
//!
//! A shared [`HealthStore`] holds the process's UP/DOWN status and an optional
//! reason. [`HealthHandler`] renders it as plain text or JSON with `200` or
//! `503`, and mounts directly on an axum router. Health *checks* are left to
//! the application: monitors call [`HealthStore::set_unhealthy`] and
//! [`HealthStore::set_healthy`] on a clone of the store.
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use healthline::{HandlerOptions, HealthHandler, HealthStore};
//!
//! let store = HealthStore::new();
//! let app: Router = Router::new()
//!     .route("/health", get(HealthHandler::new(store.clone(), HandlerOptions::default())))
//!     .route("/health/json", get(HealthHandler::json(store.clone())));
//!
//! store.set_unhealthy("Database connection failed");
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod sink;
pub mod state;
pub mod status;

pub use error::TransportError;
pub use handler::HealthHandler;
pub use middleware::RequestId;
pub use render::{HandlerOptions, HealthReport, RenderedResponse};
pub use status::{HealthState, HealthStatus, HealthStore};
