//! Tests for the inbound SMS service

#[cfg(test)]
mod service_tests;
