//! File-backed OpenTelemetry span exporter.
//!
//! Each exported batch becomes one OTLP JSON document written as a single
//! line through the rotating [`FileWriter`].

use super::file_writer::FileWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope recorded on every exported batch.
pub const SCOPE_NAME: &str = "gamedex";

struct FileSpanExporter {
    writer: FileWriter,
    resource: Resource,
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = format_batch(&self.resource, &batch).to_string();
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, res: &Resource) {
        self.resource = res.clone();
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Builds a tracer provider that exports every finished span to `file_path`
/// as soon as it closes.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        writer: FileWriter::new(file_path),
        resource: resource.clone(),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn format_batch(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attrs: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| json!({ "key": key.to_string(), "value": format_value(value) }))
        .collect();
    let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attrs },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME },
                "spans": spans
            }]
        }]
    })
}

fn format_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = format_status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": format_attributes(&span.attributes),
        "events": span.events.iter().map(format_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(format_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn format_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": format_attributes(&event.attributes),
    })
}

fn format_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": format_attributes(&link.attributes),
    })
}

fn format_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": format_value(&kv.value) }))
        .collect()
}

/// OTLP encodes 64-bit integers as strings. Arrays fall back to their debug
/// rendering.
fn format_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn format_status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn integers_are_encoded_as_strings() {
        assert_eq!(
            format_value(&Value::I64(42)),
            json!({ "intValue": "42" })
        );
        assert_eq!(
            format_value(&Value::from("zelda")),
            json!({ "stringValue": "zelda" })
        );
        assert_eq!(format_value(&Value::Bool(true)), json!({ "boolValue": true }));
    }

    #[test]
    fn error_status_keeps_its_description() {
        assert_eq!(format_status(&Status::Unset), (0, String::new()));
        assert_eq!(
            format_status(&Status::error("HTTP 429")),
            (2, "HTTP 429".to_string())
        );
    }

    #[test]
    fn empty_batch_still_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "gamedex")]);
        let doc = format_batch(&resource, &[]);

        let group = &doc["resourceSpans"][0];
        assert_eq!(group["scopeSpans"][0]["scope"]["name"], SCOPE_NAME);
        assert!(group["scopeSpans"][0]["spans"].as_array().is_some_and(Vec::is_empty));
        let attrs = group["resource"]["attributes"].as_array().cloned().unwrap_or_default();
        assert!(attrs.contains(&json!({
            "key": "service.name",
            "value": { "stringValue": "gamedex" }
        })));
    }

    #[test]
    fn timestamps_before_the_epoch_clamp_to_zero() {
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_nanos(1_500)), "1500");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }
}
