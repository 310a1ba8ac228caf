//! Tests for the alert gateway
