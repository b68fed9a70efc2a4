//! Observability setup for PopChoice: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
