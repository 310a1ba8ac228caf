//! HTTP surface of the disaster response server
//!
//! Exposed as a library so integration tests can mount the same routes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod twiml;

pub use app::{configure, json_config};
pub use state::AppState;
