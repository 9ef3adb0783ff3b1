//! Device data batch ingestion handler.
//!
//! Accepts POSTed binary batch payloads, decodes them, and emits one line
//! per device identifier plus one per measurement through the configured
//! sink. A malformed payload fails its own request and nothing else.

use axum::{
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use siphon_core::{decode_batch, DeviceRecord, TelemetrySink};
use tracing::{info, instrument, warn};

use crate::server::AppState;

/// Fixed acknowledgement body returned for every processed request.
const ACK_BODY: &str = "Hello, world!";

/// Handles every routed request.
///
/// Non-POST requests are rejected with 405 before the body is touched.
/// POST requests on any path are decoded and emitted, then acknowledged.
///
/// # Errors
///
/// Returns appropriate HTTP status codes:
/// - 405: method other than POST
/// - 400: unreadable or over-limit body, or malformed batch payload
#[instrument(
    name = "ingest_batch",
    skip(state, body),
    fields(method = %method, path = %uri.path())
)]
pub async fn ingest_batch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method != Method::POST {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let body = match body {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "failed to read request body");
            return (StatusCode::BAD_REQUEST, "can't read body").into_response();
        },
    };

    info!("{} {}", method, uri.path());

    let records = match decode_batch(&body) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, payload_size = body.len(), "rejecting malformed batch");
            return (StatusCode::BAD_REQUEST, "malformed device data batch").into_response();
        },
    };

    emit_records(state.sink.as_ref(), &records);

    (StatusCode::OK, ACK_BODY).into_response()
}

/// Emits one identifier line per record, then one line per measurement,
/// preserving wire order.
fn emit_records(sink: &dyn TelemetrySink, records: &[DeviceRecord]) {
    for record in records {
        sink.write_line(&record.guid.to_string());
        for measurement in &record.measurements {
            sink.write_line(&measurement.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use siphon_core::{DeviceGuid, Measurement, ObisCode};

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl TelemetrySink for RecordingSink {
        fn write_line(&self, line: &str) {
            self.lines.lock().expect("sink lock").push(line.to_string());
        }
    }

    #[test]
    fn emission_interleaves_identifiers_and_measurements() {
        let sink = RecordingSink::default();
        let records = vec![
            DeviceRecord {
                guid: DeviceGuid::new(1, 2),
                measurements: vec![
                    Measurement { obis: ObisCode(0x0100), value: 1.5 },
                    Measurement { obis: ObisCode(0x0200), value: -3.25 },
                ],
            },
            DeviceRecord { guid: DeviceGuid::new(3, 4), measurements: Vec::new() },
        ];

        emit_records(&sink, &records);

        let lines = sink.lines.lock().expect("sink lock").clone();
        assert_eq!(
            lines,
            vec![
                DeviceGuid::new(1, 2).to_string(),
                "100 - 1.500000".to_string(),
                "200 - -3.250000".to_string(),
                DeviceGuid::new(3, 4).to_string(),
            ]
        );
    }

    #[test]
    fn emission_of_no_records_writes_nothing() {
        let sink = RecordingSink::default();
        emit_records(&sink, &[]);
        assert!(sink.lines.lock().expect("sink lock").is_empty());
    }
}
