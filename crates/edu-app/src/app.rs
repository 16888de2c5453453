//! The controller host.

use std::sync::Arc;

use edu_auth::{LoginOutcome, SessionStore};
use edu_client::{ApiClient, Endpoint, FallbackPolicy, Notice, Resolved, fixtures};
use edu_core::entities::Session;
use edu_core::enums::Role;
use edu_core::envelope::Envelope;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FeatureError;
use crate::state::AppState;

/// Owns the API client, the fallback policy, the session store, and the
/// state of the current login.
///
/// Feature operations live in [`crate::features`], one `impl App` block per
/// area.
pub struct App {
    client: ApiClient,
    policy: FallbackPolicy,
    store: Arc<dyn SessionStore>,
    state: Option<AppState>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("client", &self.client)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl App {
    #[must_use]
    pub fn new(client: ApiClient, policy: FallbackPolicy, store: Arc<dyn SessionStore>) -> Self {
        Self {
            client,
            policy,
            store,
            state: None,
        }
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub const fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    pub const fn set_policy(&mut self, policy: FallbackPolicy) {
        self.policy = policy;
    }

    #[must_use]
    pub const fn state(&self) -> Option<&AppState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.state.as_ref().map(|state| &state.session)
    }

    // ── Session lifecycle ──────────────────────────────────────────

    /// Log in and start a fresh application state.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::Auth`] when authentication fails.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<LoginOutcome, FeatureError> {
        let outcome = edu_auth::login(
            &self.client,
            self.policy,
            self.store.as_ref(),
            username,
            password,
            role,
        )
        .await?;
        self.begin(outcome.session.clone());
        Ok(outcome)
    }

    /// Pick up the stored session, if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::Auth`] when the session store cannot be read.
    pub fn resume(&mut self) -> Result<Option<&Session>, FeatureError> {
        if let Some(session) = edu_auth::resume(self.store.as_ref())? {
            self.begin(session);
        }
        Ok(self.session())
    }

    /// Clear the stored session and the application state.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::Auth`] when the session store cannot be cleared.
    pub fn logout(&mut self) -> Result<(), FeatureError> {
        edu_auth::logout(self.store.as_ref())?;
        self.client.set_token(None);
        self.state = None;
        Ok(())
    }

    fn begin(&mut self, session: Session) {
        self.client.set_token(session.auth_token.clone());
        self.state = Some(AppState::new(session));
    }

    // ── Helpers shared by the feature modules ──────────────────────

    pub(crate) fn require_state(&self) -> Result<&AppState, FeatureError> {
        self.state.as_ref().ok_or(FeatureError::NotAuthenticated)
    }

    pub(crate) fn require_state_mut(&mut self) -> Result<&mut AppState, FeatureError> {
        self.state.as_mut().ok_or(FeatureError::NotAuthenticated)
    }

    pub(crate) fn notify(&self, notice: Notice) {
        self.client.notify(notice);
    }

    /// Call `endpoint` and resolve failures through the fallback policy.
    pub(crate) async fn fetch(
        &self,
        endpoint: &Endpoint,
        body: Option<&Value>,
    ) -> Result<Resolved, FeatureError> {
        Ok(self
            .client
            .call_with_fallback(endpoint, body, self.policy)
            .await?)
    }

    /// Like [`Self::fetch`], but a failure the policy would answer with demo
    /// data first retries through `retry`. A successful retry is live; a
    /// failed one resolves the original failure as usual.
    pub(crate) async fn fetch_or_retry(
        &self,
        endpoint: &Endpoint,
        body: &Value,
        retry: (&Endpoint, &Value),
    ) -> Result<Resolved, FeatureError> {
        let outcome = self.client.call(endpoint, Some(body)).await;
        if self.policy.permits_fallback(&outcome) {
            let (retry_endpoint, retry_body) = retry;
            tracing::info!(
                endpoint = endpoint.key(),
                retry = retry_endpoint.key(),
                "no usable answer; retrying"
            );
            if let Some(payload) = self
                .client
                .call(retry_endpoint, Some(retry_body))
                .await
                .into_payload()
            {
                return Ok(Resolved::live(payload));
            }
        }
        Ok(self.policy.resolve(endpoint, outcome)?)
    }

    /// Like [`Self::fetch`], but a live payload without `data` is also
    /// replaced by the fixture when demo data is allowed.
    pub(crate) async fn fetch_data(&self, endpoint: &Endpoint) -> Result<Resolved, FeatureError> {
        let resolved = self.fetch(endpoint, None).await?;
        if Envelope::from_value(&resolved.payload).data.is_some()
            || !self.policy.allow_demo_fallback
        {
            return Ok(resolved);
        }
        Ok(fixtures::lookup(endpoint).map_or(resolved, |fixture| {
            tracing::info!(endpoint = endpoint.key(), "payload has no data; serving demo data");
            Resolved::demo(fixture)
        }))
    }
}

/// Decode `data` of a resolved payload; absent `data` decodes as `T::default()`.
pub(crate) fn decode_data<T: DeserializeOwned + Default>(
    resolved: &Resolved,
    what: &str,
) -> Result<T, FeatureError> {
    Ok(Envelope::from_value(&resolved.payload)
        .decode_data(what)?
        .unwrap_or_default())
}
