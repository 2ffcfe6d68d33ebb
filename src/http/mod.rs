//! HTTP server lifecycle.
//!
//! Binds the router on the configured address and handles SIGTERM/SIGINT by
//! reporting DOWN first, then draining connections.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
