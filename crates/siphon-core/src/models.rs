//! Domain models for decoded telemetry.
//!
//! Records are created by the wire decoder, emitted through the sink, and
//! discarded; nothing here is persisted or mutated after construction.

use std::fmt;

use crate::guid::DeviceGuid;

/// OBIS object code identifying what a measurement observes.
///
/// Rendered in unpadded lowercase hexadecimal wherever it is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObisCode(pub u64);

impl fmt::Display for ObisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl fmt::LowerHex for ObisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// One (code, value) observation attached to a device record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// What was measured.
    pub obis: ObisCode,
    /// Observed value.
    pub value: f64,
}

impl fmt::Display for Measurement {
    /// Emission line format: hex code, ` - `, six-decimal value.
    ///
    /// Downstream log consumers parse this shape; both halves of it are
    /// part of the emitted contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x} - {:.6}", self.obis, self.value)
    }
}

/// One decoded telemetry batch entry.
///
/// Immutable after decoding; measurement order is the wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRecord {
    /// Canonical identifier of the reporting device.
    pub guid: DeviceGuid,
    /// Observations in producer order.
    pub measurements: Vec<Measurement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obis_code_renders_as_unpadded_hex() {
        assert_eq!(ObisCode(0x0100).to_string(), "100");
        assert_eq!(ObisCode(0).to_string(), "0");
    }

    #[test]
    fn measurement_line_has_code_separator_and_six_decimals() {
        let line = Measurement { obis: ObisCode(0x0100), value: 1.5 }.to_string();
        assert_eq!(line, "100 - 1.500000");

        let negative = Measurement { obis: ObisCode(0xFF), value: -3.25 }.to_string();
        assert_eq!(negative, "ff - -3.250000");
    }
}
