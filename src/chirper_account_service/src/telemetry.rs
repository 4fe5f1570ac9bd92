//! Tracing setup and per-request span plumbing for the HTTP layer.

use axum::body::Body;
use axum::extract::Request;
use axum::response::Response;
use color_eyre::eyre::Result;
use tracing::{Span, field};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Install the global subscriber: env-filtered compact fmt output plus
/// span-trace capture for error reports.
pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

/// One span per request, tagged with a fresh request id so log lines
/// from concurrent requests can be told apart.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        tracing::Level::INFO,
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        status_code = field::Empty,
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(tracing::Level::INFO, "started processing request");
}

pub fn on_response(response: &Response, latency: std::time::Duration, span: &Span) {
    span.record("status_code", field::display(response.status()));
    tracing::event!(
        tracing::Level::INFO,
        latency = ?latency,
        "finished processing request"
    );
}
