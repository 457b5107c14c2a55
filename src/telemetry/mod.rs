// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Logging and distributed tracing setup
//!
//! Installs one `tracing` subscriber that both prints events and forwards spans
//! to an OTLP collector through the OpenTelemetry SDK.

mod propagation;

use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::{AppError, Result};

pub use propagation::parent_context;

/// Filter used when `RUST_LOG` is not set; exporter transport crates are kept quiet
/// so their own spans are not fed back into the exporter.
const DEFAULT_FILTER: &str = "info,h2=off,hyper=off,tonic=off,tower=off";

/// Handle to the installed tracer provider
///
/// Owned by the entry point; dropping it without [`Telemetry::shutdown`] may lose
/// spans still queued in the batch processor.
pub struct Telemetry {
    provider: SdkTracerProvider,
}

impl Telemetry {
    /// Flushes pending spans and stops the exporter
    pub fn shutdown(self) {
        if let Err(e) = self.provider.shutdown() {
            tracing::warn!("Error shutting down tracer provider: {}", e);
        }
    }
}

/// Builds the OTLP exporter and installs the global tracer provider and subscriber
///
/// # Errors
///
/// Returns an error if the exporter cannot be built or a global subscriber is
/// already installed.
pub fn init(config: &Config) -> Result<Telemetry> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Plain http:// endpoint means no TLS on the gRPC channel
    let exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otlp_endpoint.clone())
        .build()?;

    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .build();

    let provider = SdkTracerProvider::builder()
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build();
    global::set_tracer_provider(provider.clone());

    let tracer = provider.tracer(config.service_name.clone());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init()?;

    tracing::info!(
        "Exporting traces for '{}' to {}",
        config.service_name,
        config.otlp_endpoint
    );

    Ok(Telemetry { provider })
}

/// Logs a startup error raised before [`init`] installed the global subscriber
pub fn report_early_error(error: &AppError) {
    report_early_error_to(error, std::io::stderr);
}

fn report_early_error_to<W>(error: &AppError, make_writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        tracing::error!("Startup failed: {}", error);
    });
}
