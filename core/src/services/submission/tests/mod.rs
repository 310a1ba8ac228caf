//! Tests for the report submission flow
