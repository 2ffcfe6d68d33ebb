//! Rendering a health snapshot into a response.
//!
//! This module is independent of any HTTP framework: it turns a
//! [`HealthState`] into a status code, a content type, and a body.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::status::{HealthState, HealthStatus};

/// Handler configuration, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Render JSON instead of plain text.
    pub use_json: bool,
}

impl HandlerOptions {
    pub fn json() -> Self {
        Self { use_json: true }
    }

    pub fn plain_text() -> Self {
        Self { use_json: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Json,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text/plain; charset=utf-8",
            ContentType::Json => "application/json",
        }
    }
}

/// JSON body. `reason` is omitted when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

impl From<&HealthState> for HealthReport {
    fn from(state: &HealthState) -> Self {
        Self {
            status: state.status,
            reason: state.reason.clone(),
        }
    }
}

/// Immutable response computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    pub status_code: StatusCode,
    pub content_type: ContentType,
    pub body: Vec<u8>,
}

/// Maps health to the HTTP status a load balancer expects.
pub fn status_code(status: HealthStatus) -> StatusCode {
    match status {
        HealthStatus::Up => StatusCode::OK,
        HealthStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Plain-text body: `STATUS` or `STATUS: reason`.
pub fn text_body(state: &HealthState) -> String {
    if state.reason.is_empty() {
        state.status.as_str().to_string()
    } else {
        format!("{}: {}", state.status, state.reason)
    }
}

/// Renders `state` in the format selected by `options`.
///
/// A JSON serialization failure is logged and produces an empty body; the
/// status code is still derived from the snapshot.
pub fn render(state: &HealthState, options: HandlerOptions) -> RenderedResponse {
    let status_code = status_code(state.status);

    if options.use_json {
        let body = serde_json::to_vec(&HealthReport::from(state)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize health report");
            Vec::new()
        });
        RenderedResponse {
            status_code,
            content_type: ContentType::Json,
            body,
        }
    } else {
        RenderedResponse {
            status_code,
            content_type: ContentType::Text,
            body: text_body(state).into_bytes(),
        }
    }
}
