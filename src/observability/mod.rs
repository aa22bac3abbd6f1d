//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider
//!                → FileSpanExporter → rotating JSON lines file
//! ```
//!
//! Each finished span is exported immediately as one OTLP JSON document per
//! line. The file rotates at 10MB and keeps three numbered backups. The plugin
//! and its worker each install their own subscriber; worker spans join the
//! plugin's trace through the [`TraceContext`](crate::worker::TraceContext)
//! carried on every message.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup and level resolution
//! - [`exporter`]: Span exporter and OTLP JSON formatting
//! - [`file_writer`]: Size-rotated line writer

mod exporter;
mod file_writer;
mod init;

pub use init::{init_tracing, TRACE_FILE};
