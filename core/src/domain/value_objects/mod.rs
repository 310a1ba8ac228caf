//! Value objects representing immutable domain concepts.

pub mod alert_outcome;

// Re-export commonly used types
pub use alert_outcome::{AlertBatch, AlertOutcome};
