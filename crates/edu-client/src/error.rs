//! Client construction errors.
//!
//! Requests themselves never fail with these; see [`crate::ApiOutcome`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying `reqwest::Client` could not be built.
    #[error("HTTP client error: {0}")]
    Build(#[from] reqwest::Error),

    /// The API configuration is unusable.
    #[error(transparent)]
    Config(#[from] edu_config::ConfigError),
}
