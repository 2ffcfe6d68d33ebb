//! HTTP handler serving the current health status.
//!
//! `HealthHandler` can be mounted directly on an axum router
//! (`get(HealthHandler::new(store, options))`) or driven through
//! [`HealthHandler::serve`] with any [`ResponseSink`].

use std::future::{ready, Ready};

use axum::{extract::Request, handler::Handler, response::IntoResponse, response::Response};
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};

use crate::error::TransportError;
use crate::middleware::X_REQUEST_ID;
use crate::render::{render, HandlerOptions, RenderedResponse};
use crate::sink::{BufferedResponse, RequestContext, ResponseSink};
use crate::status::HealthStore;

/// Read-only view of a [`HealthStore`] rendered as an HTTP response.
#[derive(Debug, Clone)]
pub struct HealthHandler {
    store: HealthStore,
    options: HandlerOptions,
}

impl HealthHandler {
    pub fn new(store: HealthStore, options: HandlerOptions) -> Self {
        Self { store, options }
    }

    /// A handler that always renders JSON.
    pub fn json(store: HealthStore) -> Self {
        Self::new(store, HandlerOptions::json())
    }

    pub fn options(&self) -> HandlerOptions {
        self.options
    }

    /// Renders the current state from a single snapshot.
    pub fn render(&self) -> RenderedResponse {
        render(&self.store.snapshot(), self.options)
    }

    /// Writes the current health into `sink`, echoing the request id from
    /// `ctx` as `X-Request-ID` when one is present.
    pub fn serve<S>(&self, ctx: RequestContext<'_>, sink: &mut S) -> Result<(), TransportError>
    where
        S: ResponseSink + ?Sized,
    {
        let rendered = self.render();

        sink.set_header(
            CONTENT_TYPE,
            HeaderValue::from_static(rendered.content_type.as_str()),
        );

        if let Some(id) = ctx.request_id() {
            match HeaderValue::from_str(id) {
                Ok(value) => sink.set_header(HeaderName::from_static(X_REQUEST_ID), value),
                Err(_) => tracing::debug!(request_id = %id, "Request id not a valid header value"),
            }
        }

        sink.write_head(rendered.status_code)?;
        sink.write_body(rendered.body)
    }

    fn respond(&self, ctx: RequestContext<'_>) -> Response {
        let mut sink = BufferedResponse::new();
        match self.serve(ctx, &mut sink) {
            Ok(()) => sink.into_response(),
            Err(e) => e.into_response(),
        }
    }
}

impl<S> Handler<(), S> for HealthHandler
where
    S: Send + Sync + 'static,
{
    type Future = Ready<Response>;

    fn call(self, req: Request, _state: S) -> Self::Future {
        ready(self.respond(RequestContext::new(req.extensions())))
    }
}
