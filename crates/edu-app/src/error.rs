use edu_auth::AuthError;
use edu_client::Failure;
use edu_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("not authenticated; run `edubot auth login`")]
    NotAuthenticated,

    /// Form input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The backend failed and the fallback policy kept the failure.
    #[error(transparent)]
    Backend(#[from] Failure),

    /// The backend answered, but the answer declines the action.
    #[error("{0}")]
    Declined(String),

    #[error("no pending action to confirm")]
    NoPendingAction,

    #[error(transparent)]
    Decode(#[from] CoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl FeatureError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn declined(message: impl Into<String>) -> Self {
        Self::Declined(message.into())
    }
}
