//! Wire schema for the device data batch payload.
//!
//! The batch is a protobuf message: an outer wrapper holding zero or more
//! device readings, each carrying the identifier halves and a sequence of
//! (code, value) pairs. Field tags are part of the wire contract shared
//! with producers and must not change.

use prost::Message;
use tracing::warn;

use crate::{
    error::Result,
    guid::DeviceGuid,
    models::{DeviceRecord, Measurement, ObisCode},
};

/// Identifier halves as they appear on the wire.
#[derive(Clone, PartialEq, Message)]
pub struct DeviceId {
    /// High half of the 128-bit identifier.
    #[prost(uint64, tag = "1")]
    pub hi: u64,
    /// Low half of the 128-bit identifier.
    #[prost(uint64, tag = "2")]
    pub lo: u64,
}

/// A single (code, value) pair on the wire.
#[derive(Clone, PartialEq, Message)]
pub struct MeasurementEntry {
    /// OBIS object code.
    #[prost(uint64, tag = "1")]
    pub obis: u64,
    /// Observed value.
    #[prost(double, tag = "2")]
    pub value: f64,
}

/// One device's entry in the batch.
#[derive(Clone, PartialEq, Message)]
pub struct DeviceReading {
    /// Identifier halves; a reading without them cannot be attributed.
    #[prost(message, optional, tag = "1")]
    pub id: Option<DeviceId>,
    /// Observations in producer order.
    #[prost(message, repeated, tag = "2")]
    pub measurements: Vec<MeasurementEntry>,
}

/// Outer batch wrapper.
#[derive(Clone, PartialEq, Message)]
pub struct ReadingBatch {
    /// Zero or more device readings.
    #[prost(message, repeated, tag = "1")]
    pub readings: Vec<DeviceReading>,
}

/// Decodes a batch payload into attributable device records.
///
/// Readings that carry no identifier are skipped with a warning so the
/// rest of the batch still gets emitted. Record order and per-record
/// measurement order are preserved.
///
/// # Errors
///
/// Returns [`crate::CoreError::Decode`] when the payload is not a valid
/// batch encoding (truncated, malformed framing, wrong wire types). The
/// error is scoped to this payload only.
pub fn decode_batch(bytes: &[u8]) -> Result<Vec<DeviceRecord>> {
    let batch = ReadingBatch::decode(bytes)?;

    let mut records = Vec::with_capacity(batch.readings.len());
    for (index, reading) in batch.readings.into_iter().enumerate() {
        let Some(id) = reading.id else {
            warn!(index, "skipping reading without device identifier");
            continue;
        };

        let measurements = reading
            .measurements
            .iter()
            .map(|entry| Measurement { obis: ObisCode(entry.obis), value: entry.value })
            .collect();

        records.push(DeviceRecord { guid: DeviceGuid::new(id.hi, id.lo), measurements });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn empty_payload_is_an_empty_batch() {
        // Zero bytes is the valid encoding of a batch with no readings.
        let records = decode_batch(&[]).expect("empty payload decodes");
        assert!(records.is_empty());
    }

    #[test]
    fn truncated_payload_is_rejected() {
        // Field 1, length-delimited, declared length 5, only 2 bytes present.
        let err = decode_batch(&[0x0a, 0x05, 0x01, 0x02]).expect_err("truncated payload");
        assert!(matches!(err, CoreError::Decode(_)));
    }
}
