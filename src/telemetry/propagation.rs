//! W3C trace-context extraction from inbound requests

use axum::http::HeaderMap;
use opentelemetry::{Context, global};
use opentelemetry_http::HeaderExtractor;

/// Returns the remote trace context carried by the request headers
///
/// Yields an empty context when no `traceparent` header is present, so spans
/// created under it start a new trace.
pub fn parent_context(headers: &HeaderMap) -> Context {
    global::get_text_map_propagator(|propagator| propagator.extract(&HeaderExtractor(headers)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use opentelemetry::trace::TraceContextExt;
    use opentelemetry_sdk::propagation::TraceContextPropagator;

    #[test]
    fn test_extracts_traceparent() {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let mut headers = HeaderMap::new();
        headers.insert(
            "traceparent",
            HeaderValue::from_static("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"),
        );

        let cx = parent_context(&headers);
        let span = cx.span();
        let span_context = span.span_context();
        assert!(span_context.is_remote());
        assert_eq!(
            span_context.trace_id().to_string(),
            "4bf92f3577b34da6a3ce929d0e0e4736"
        );
        assert_eq!(span_context.span_id().to_string(), "00f067aa0ba902b7");
    }

    #[test]
    fn test_missing_header_yields_invalid_span_context() {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let cx = parent_context(&HeaderMap::new());
        assert!(!cx.span().span_context().is_valid());
    }
}
