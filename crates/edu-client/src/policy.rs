//! When a failed call may be answered with demo data.

use edu_config::FallbackConfig;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::endpoint::Endpoint;
use crate::fixtures;
use crate::outcome::ApiOutcome;

/// Where a shown result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Live,
    Demo,
}

impl Source {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Demo => "demo",
        }
    }

    #[must_use]
    pub const fn is_demo(self) -> bool {
        matches!(self, Self::Demo)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payload to interpret, tagged with its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub source: Source,
    pub payload: Value,
}

impl Resolved {
    #[must_use]
    pub const fn live(payload: Value) -> Self {
        Self {
            source: Source::Live,
            payload,
        }
    }

    #[must_use]
    pub const fn demo(payload: Value) -> Self {
        Self {
            source: Source::Demo,
            payload,
        }
    }
}

/// A call that produced no usable payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("backend unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Per-call fallback rules.
///
/// | outcome       | `allow_demo_fallback` | `treat_server_error_as_unavailable` | result     |
/// |---------------|-----------------------|--------------------------------------|------------|
/// | `Success`     | any                   | any                                  | live       |
/// | `Unavailable` | true                  | any                                  | fixture    |
/// | `Rejected`    | true                  | true                                 | fixture    |
/// | otherwise     |                       |                                      | `Failure`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPolicy {
    pub allow_demo_fallback: bool,
    pub treat_server_error_as_unavailable: bool,
}

impl FallbackPolicy {
    /// Never substitute demo data.
    pub const LIVE_ONLY: Self = Self {
        allow_demo_fallback: false,
        treat_server_error_as_unavailable: false,
    };

    /// Substitute demo data only when the backend is unreachable.
    pub const OFFLINE_DEMO: Self = Self {
        allow_demo_fallback: true,
        treat_server_error_as_unavailable: false,
    };

    /// Substitute demo data for any failure, including server rejections.
    pub const LEGACY: Self = Self {
        allow_demo_fallback: true,
        treat_server_error_as_unavailable: true,
    };

    /// Whether a failure of this kind may be replaced by a fixture.
    #[must_use]
    pub const fn permits_fallback(&self, outcome: &ApiOutcome) -> bool {
        match outcome {
            ApiOutcome::Success(_) => false,
            ApiOutcome::Unavailable { .. } => self.allow_demo_fallback,
            ApiOutcome::Rejected { .. } => {
                self.allow_demo_fallback && self.treat_server_error_as_unavailable
            }
        }
    }

    /// Resolve a call outcome into a payload or a terminal failure.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] when the outcome is not a success and either
    /// the policy forbids fallback or the endpoint has no fixture.
    pub fn resolve(&self, endpoint: &Endpoint, outcome: ApiOutcome) -> Result<Resolved, Failure> {
        if self.permits_fallback(&outcome) {
            if let Some(fixture) = fixtures::lookup(endpoint) {
                tracing::info!(endpoint = endpoint.key(), "serving demo data");
                return Ok(Resolved::demo(fixture));
            }
        }
        match outcome {
            ApiOutcome::Success(payload) => Ok(Resolved::live(payload)),
            ApiOutcome::Rejected { status, message } => Err(Failure::Rejected { status, message }),
            ApiOutcome::Unavailable { reason } => Err(Failure::Unavailable { reason }),
        }
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::OFFLINE_DEMO
    }
}

impl From<&FallbackConfig> for FallbackPolicy {
    fn from(config: &FallbackConfig) -> Self {
        Self {
            allow_demo_fallback: config.allow_demo_fallback,
            treat_server_error_as_unavailable: config.treat_server_error_as_unavailable,
        }
    }
}
