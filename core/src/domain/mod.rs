//! Domain layer containing business entities, value objects and lookup data.

pub mod catalog;
pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use catalog::ReportCatalog;
pub use entities::*;
pub use value_objects::*;
