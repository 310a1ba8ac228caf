//! Tests for SMS providers

#[cfg(test)]
mod create_service_tests;
#[cfg(test)]
mod fast2sms_tests;
