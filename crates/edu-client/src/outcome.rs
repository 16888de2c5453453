use serde_json::Value;

/// Normalized result of one backend call.
///
/// `Rejected` and `Unavailable` are both the "no result" sentinel: the user
/// has already been notified and [`ApiOutcome::payload`] is `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// 2xx status. Empty bodies are `Null`, non-JSON bodies `{"raw": text}`.
    Success(Value),
    /// The backend answered with an error status.
    Rejected { status: u16, message: String },
    /// The request never produced a readable response.
    Unavailable { reason: String },
}

impl ApiOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Rejected { .. } | Self::Unavailable { .. } => None,
        }
    }

    #[must_use]
    pub fn into_payload(self) -> Option<Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Rejected { .. } | Self::Unavailable { .. } => None,
        }
    }
}
