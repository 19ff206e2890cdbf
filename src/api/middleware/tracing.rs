//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// One `INFO` span per request carrying method, URI and version. The response
/// line reports status and latency in milliseconds; 5xx responses are
/// additionally logged at `WARN`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/search?q=dune version=HTTP/1.1}: finished processing request latency=812 ms status=200
/// WARN request{method=GET uri=/details?url=... version=HTTP/1.1}: response failed classification=Status code: 500 latency=30002 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
