//! Image verification implementations

pub mod ai_vision;

pub use ai_vision::AiVisionVerifier;
