use axum::{body::Body, extract::Request};
use http::header::{HeaderName, FORWARDED};
use prmeta_core::{X_FORWARDED_HOST, X_FORWARDED_PROTO};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::{Level, Span};

pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request<Body>) -> Span,
    DefaultOnRequest,
    DefaultOnResponse,
>;

pub fn trace_layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(request_span as fn(&Request<Body>) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

// Forwarding headers decide the published resource, so they go on the span.
fn request_span(request: &Request<Body>) -> Span {
    let header = |name: &HeaderName| {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    };
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        x_forwarded_host = header(&X_FORWARDED_HOST),
        x_forwarded_proto = header(&X_FORWARDED_PROTO),
        forwarded = header(&FORWARDED),
    )
}
