//! Tests for export encoding and parser round trips

use crate::app::models::Triple;
use crate::app::services::coordinate_parser::parse;
use crate::app::services::export_encoder::{encode, write_export};

#[test]
fn test_encode_empty_sequence() {
    assert_eq!(encode(&[]), "");
}

#[test]
fn test_encode_single_reading() {
    let text = encode(&[Triple::new(10.5, 45.0, 3.2)]);
    assert_eq!(text, "10.5000;45.0000;3.2000\n");
}

#[test]
fn test_encode_multiple_readings_in_order() {
    let triples = vec![Triple::new(10.5, 45.0, 3.2), Triple::new(20.1, 50.0, 4.0)];
    assert_eq!(encode(&triples), "10.5000;45.0000;3.2000\n20.1000;50.0000;4.0000\n");
}

#[test]
fn test_encode_rounds_to_four_digits() {
    let text = encode(&[Triple::new(1.00006, -2.123456, 0.1)]);
    assert_eq!(text, "1.0001;-2.1235;0.1000\n");
}

#[test]
fn test_encode_negative_and_zero_values() {
    let text = encode(&[Triple::new(-0.5, 0.0, -180.0)]);
    assert_eq!(text, "-0.5000;0.0000;-180.0000\n");
}

#[test]
fn test_write_export_matches_encode() {
    let triples = vec![Triple::new(10.5, 45.0, 3.2), Triple::new(20.1, 50.0, 4.0)];
    let mut sink: Vec<u8> = Vec::new();
    write_export(&mut sink, &triples).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), encode(&triples));
}

#[test]
fn test_round_trip_identity() {
    // parse(encode(T)) == T for values exactly representable at 4 digits
    let triples = vec![
        Triple::new(10.5, 45.0, 3.2),
        Triple::new(-20.25, 0.0001, 100.0),
        Triple::new(0.0, -90.125, 7.4),
    ];
    let reparsed = parse(&encode(&triples)).unwrap();
    assert_eq!(reparsed, triples);
}
