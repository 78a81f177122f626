//! Tests for the session coordinator
