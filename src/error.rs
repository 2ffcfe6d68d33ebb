use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::io;

/// Failure while writing a health response into a [`ResponseSink`](crate::sink::ResponseSink).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Response already committed")]
    AlreadyCommitted,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl IntoResponse for TransportError {
    fn into_response(self) -> Response {
        tracing::error!("Transport error: {:?}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
