//! Image verification seam used by report submission

mod traits;
mod types;

pub use traits::ImageVerifier;
pub use types::{Confidence, VerificationResult};
