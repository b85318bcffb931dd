//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing layer that opens an `INFO` span per request and logs the
/// response status with millisecond latency.
///
/// Page loads fan out into many upstream requests on a cold cache, so the latency
/// reported here covers the whole resolution of the page.
///
/// ```text
/// INFO request{method=GET uri=/api/characters?page=2 version=HTTP/1.1}: finished processing request latency=840 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
