//! Demo-data fallback policy settings.

use serde::{Deserialize, Serialize};

const fn default_allow_demo_fallback() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FallbackConfig {
    /// Substitute fixture data when the backend cannot be reached.
    #[serde(default = "default_allow_demo_fallback")]
    pub allow_demo_fallback: bool,

    /// Also substitute fixture data when the backend answers with an HTTP
    /// error status. This masks real rejections and is off by default.
    #[serde(default)]
    pub treat_server_error_as_unavailable: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            allow_demo_fallback: default_allow_demo_fallback(),
            treat_server_error_as_unavailable: false,
        }
    }
}
