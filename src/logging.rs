//! Tracing setup and the per-request span.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{debug, field, info_span, Instrument};
use tracing_subscriber::{fmt, fmt::format::FmtSpan, EnvFilter};

const DEFAULT_FILTER: &str = "header_echo=info";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Spans are reported when they close, so every request produces one line
/// carrying its method, path, status and timing.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .compact()
        .init();
}

pub async fn request_span_middleware(request: Request, next: Next) -> Response {
    let span = info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        status = field::Empty,
    );

    async move {
        let started_at = Instant::now();
        let response = next.run(request).await;

        tracing::Span::current().record("status", response.status().as_u16());
        debug!(elapsed_us = started_at.elapsed().as_micros() as u64, "response ready");

        response
    }
    .instrument(span)
    .await
}
