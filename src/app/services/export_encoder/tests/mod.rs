//! Tests for the export encoder

mod encoder_tests;
