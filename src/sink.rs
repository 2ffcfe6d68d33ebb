//! Framework-agnostic response sink and request context.
//!
//! [`HealthHandler::serve`](crate::handler::HealthHandler::serve) writes into
//! any [`ResponseSink`], so the rendering core never depends on a particular
//! server's response type. [`BufferedResponse`] is the in-memory sink used to
//! build an axum [`Response`].

use axum::{body::Body, response::Response};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

use crate::error::TransportError;
use crate::middleware::RequestId;

/// Destination for a single HTTP response.
///
/// Headers must be set before `write_head`; the head must be written before
/// the body. Each of `write_head` and `write_body` may be called once.
pub trait ResponseSink {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    fn write_head(&mut self, status: StatusCode) -> Result<(), TransportError>;

    fn write_body(&mut self, body: Vec<u8>) -> Result<(), TransportError>;
}

/// Request-scoped values available to a handler.
///
/// Backed by the request's extensions; values of any other type are invisible.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    extensions: Option<&'a http::Extensions>,
}

impl<'a> RequestContext<'a> {
    pub fn new(extensions: &'a http::Extensions) -> Self {
        Self {
            extensions: Some(extensions),
        }
    }

    /// A context that carries nothing.
    pub fn empty() -> Self {
        Self { extensions: None }
    }

    /// The correlation id, if one was attached and is non-empty.
    pub fn request_id(&self) -> Option<&'a str> {
        self.extensions?
            .get::<RequestId>()
            .map(|id| id.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// In-memory sink that becomes an axum [`Response`].
#[derive(Debug, Default)]
pub struct BufferedResponse {
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: Option<Vec<u8>>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body.unwrap_or_default()));
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

impl ResponseSink for BufferedResponse {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn write_head(&mut self, status: StatusCode) -> Result<(), TransportError> {
        if self.status.is_some() || self.body.is_some() {
            return Err(TransportError::AlreadyCommitted);
        }
        self.status = Some(status);
        Ok(())
    }

    fn write_body(&mut self, body: Vec<u8>) -> Result<(), TransportError> {
        if self.body.is_some() {
            return Err(TransportError::AlreadyCommitted);
        }
        self.body = Some(body);
        Ok(())
    }
}
