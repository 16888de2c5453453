use std::sync::Arc;
use std::time::Duration;

use edu_config::ApiConfig;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::http::read_outcome;
use crate::notify::{Notice, Notifier};
use crate::outcome::ApiOutcome;
use crate::policy::{Failure, FallbackPolicy, Resolved};

/// Shown when a request never reached the backend.
const CONNECTION_NOTICE: &str = "Error de conexión con el servidor.";

/// HTTP client for the EduBot backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the configuration fails
    /// validation and [`ClientError::Build`] when `reqwest` cannot build its
    /// client.
    pub fn new(config: &ApiConfig, notifier: Arc<dyn Notifier>) -> Result<Self, ClientError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            token: None,
            notifier,
        })
    }

    /// Bearer token sent with every following request. `None` stops sending it.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn notify(&self, notice: Notice) {
        self.notifier.notify(notice);
    }

    /// Send one request and normalize whatever comes back.
    ///
    /// Failures are reported to the notifier and returned as
    /// [`ApiOutcome::Rejected`] or [`ApiOutcome::Unavailable`]; this never
    /// errors.
    pub async fn call(&self, endpoint: &Endpoint, body: Option<&Value>) -> ApiOutcome {
        let method = endpoint.method();
        let url = format!("{}{}", self.base_url, endpoint.path());

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let outcome = match request.send().await {
            Ok(resp) => {
                tracing::debug!(
                    endpoint = endpoint.key(),
                    %method,
                    status = resp.status().as_u16(),
                    "backend responded"
                );
                read_outcome(resp).await
            }
            Err(error) => ApiOutcome::Unavailable {
                reason: error.to_string(),
            },
        };

        match &outcome {
            ApiOutcome::Success(_) => {}
            ApiOutcome::Rejected { status, message } => {
                tracing::warn!(endpoint = endpoint.key(), status, %message, "request rejected");
                self.notify(Notice::error(message.clone()));
            }
            ApiOutcome::Unavailable { reason } => {
                tracing::warn!(endpoint = endpoint.key(), %reason, "backend unavailable");
                self.notify(Notice::error(CONNECTION_NOTICE));
            }
        }
        outcome
    }

    /// [`call`](Self::call), then let `policy` decide whether a failure is
    /// answered with the endpoint's fixture.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] the policy keeps.
    pub async fn call_with_fallback(
        &self,
        endpoint: &Endpoint,
        body: Option<&Value>,
        policy: FallbackPolicy,
    ) -> Result<Resolved, Failure> {
        let outcome = self.call(endpoint, body).await;
        policy.resolve(endpoint, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::TracingNotifier;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client =
            ApiClient::new(&config("http://localhost:8000/"), Arc::new(TracingNotifier)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiClient::new(&config("localhost:8000"), Arc::new(TracingNotifier)).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn token_can_be_set_and_cleared() {
        let mut client =
            ApiClient::new(&config("http://localhost:8000"), Arc::new(TracingNotifier)).unwrap();
        client.set_token(Some("jwt".into()));
        assert_eq!(client.token(), Some("jwt"));
        client.set_token(None);
        assert!(client.token().is_none());
    }
}
