// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Span structure produced for each request, recorded through an in-memory exporter

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::{InMemorySpanExporter, SdkTracerProvider, SpanData};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt;
use user_service::{AppState, Result, User, UserStore, create_router};

const TRACE_ID: &str = "4bf92f3577b34da6a3ce929d0e0e4736";
const PARENT_SPAN_ID: &str = "00f067aa0ba902b7";

#[derive(Default)]
struct MemoryStore {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, name: &str) -> Result<User> {
        let mut rows = self.rows.lock().unwrap();
        let user = User {
            id: rows.len() as u64 + 1,
            name: name.to_string(),
        };
        rows.push(user.clone());
        Ok(user)
    }
}

/// Keeps the thread-local subscriber installed for the lifetime of a test
struct SpanRecorder {
    exporter: InMemorySpanExporter,
    _provider: SdkTracerProvider,
    _guard: DefaultGuard,
}

impl SpanRecorder {
    fn install() -> Self {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let exporter = InMemorySpanExporter::default();
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(exporter.clone())
            .build();
        let subscriber = tracing_subscriber::registry()
            .with(tracing_opentelemetry::layer().with_tracer(provider.tracer("user-service-test")));
        let guard = tracing::subscriber::set_default(subscriber);

        Self {
            exporter,
            _provider: provider,
            _guard: guard,
        }
    }

    fn span(&self, name: &str) -> SpanData {
        let spans = self.exporter.get_finished_spans().unwrap();
        spans
            .into_iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("no finished span named '{name}'"))
    }
}

/// Sends the request and drains the body so the request span is closed
async fn send(request: Request<Body>) -> StatusCode {
    let app = create_router(Arc::new(AppState::new(Arc::new(MemoryStore::default()))));
    let resp = app.oneshot(request).await.unwrap();
    let status = resp.status();
    resp.into_body().collect().await.unwrap();
    status
}

#[tokio::test]
async fn get_users_span_is_parented_to_inbound_traceparent() {
    let recorder = SpanRecorder::install();

    let status = send(
        Request::get("/users")
            .header(
                "traceparent",
                format!("00-{TRACE_ID}-{PARENT_SPAN_ID}-01"),
            )
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let request = recorder.span("GET /users");
    assert_eq!(request.span_context.trace_id().to_string(), TRACE_ID);
    assert_eq!(request.parent_span_id.to_string(), PARENT_SPAN_ID);

    let fetch = recorder.span("Fetch Users");
    assert_eq!(fetch.span_context.trace_id(), request.span_context.trace_id());
    assert_eq!(fetch.parent_span_id, request.span_context.span_id());
}

#[tokio::test]
async fn post_users_opens_create_user_span_under_request() {
    let recorder = SpanRecorder::install();

    let status = send(Request::post("/users").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);

    let request = recorder.span("POST /users");
    let create = recorder.span("Create User");
    assert_eq!(create.span_context.trace_id(), request.span_context.trace_id());
    assert_eq!(create.parent_span_id, request.span_context.span_id());
}
