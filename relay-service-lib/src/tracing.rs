use std::time::Duration;

use axum::{extract::Request, response::Response};
use tracing::{Level, Span};
use uuid::Uuid;

/// Open a span per request, tagged with a fresh request id for correlation
pub fn make_span_with_request_id(request: &Request) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        Level::INFO,
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

pub fn on_request(_request: &Request, _span: &Span) {
    tracing::event!(Level::INFO, "Started processing request");
}

pub fn on_response(response: &Response, latency: Duration, _span: &Span) {
    tracing::event!(
        Level::INFO,
        status = %response.status(),
        latency = ?latency,
        "Finished processing request"
    );
}
