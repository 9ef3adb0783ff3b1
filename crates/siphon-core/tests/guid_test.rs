//! Fixed-vector tests for canonical identifier rendering.
//!
//! Vectors are hand-traced from the byte-selection rule rather than
//! compared against a general-purpose UUID library: the grouping is a
//! fixed scheme no standard layout reproduces, and the strings below are
//! what existing log consumers correlate on.

use siphon_core::DeviceGuid;

#[test]
fn nil_identifier() {
    assert_eq!(DeviceGuid::new(0, 0).to_string(), "00000000-0000-0000-0000-000000000000");
}

#[test]
fn mixed_halves_vector() {
    // G = LE(hi) ++ LE(lo):
    //   hi = 0xD851FDEA5EF81F87 -> G[0..8]  = 87 1f f8 5e ea fd 51 d8
    //   lo = 0x9888374004EF22A5 -> G[8..16] = a5 22 ef 04 40 37 88 98
    // Selection 11,10,9,8 | 13,12 | 15,14 | 0,1 | 2..=7 gives the string.
    let guid = DeviceGuid::new(0xD851_FDEA_5EF8_1F87, 0x9888_3740_04EF_22A5);
    assert_eq!(guid.to_string(), "04ef22a5-3740-9888-871f-f85eeafd51d8");
}

#[test]
fn ascending_byte_vector() {
    // hi LE bytes: ef cd ab 89 67 45 23 01; lo LE bytes: 10 32 54 76 98 ba dc fe.
    let guid = DeviceGuid::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);
    assert_eq!(guid.to_string(), "76543210-ba98-fedc-efcd-ab8967452301");
}

#[test]
fn low_half_fills_the_first_three_groups() {
    let guid = DeviceGuid::new(0, 0x1122_3344_5566_7788);
    assert_eq!(guid.to_string(), "55667788-3344-1122-0000-000000000000");
}

#[test]
fn high_half_fills_the_last_two_groups() {
    let guid = DeviceGuid::new(0x1122_3344_5566_7788, 0);
    assert_eq!(guid.to_string(), "00000000-0000-0000-8877-665544332211");
}

#[test]
fn small_values_are_zero_padded() {
    // Every byte renders as exactly two hex digits; output is always 36
    // characters even when most bytes are zero.
    let rendered = DeviceGuid::new(1, 2).to_string();
    assert_eq!(rendered, "00000002-0000-0000-0100-000000000000");
    assert_eq!(rendered.len(), 36);
}
