//! Cross-cutting error types for EduBot.
//!
//! Transport and authentication errors live in their own crates; this module
//! only covers what any crate can hit when reading wire data or form input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Form input failed a presence or format check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A payload did not have the shape its endpoint promises.
    #[error("Unexpected {what} payload: {reason}")]
    Decode { what: String, reason: String },
}
