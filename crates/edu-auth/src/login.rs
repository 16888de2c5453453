//! Login, resume, and logout.
//!
//! A live `/login` answer `{access_token, user}` wins. When the backend is
//! unreachable (and the policy allows demo data), or when it answers without
//! a token or user, the credentials are checked against the role's demo
//! account instead.

use edu_client::fixtures::demo_account;
use edu_client::{ApiClient, ApiOutcome, Endpoint, FallbackPolicy, Notice, Source};
use edu_core::entities::{Session, UserProfile};
use edu_core::enums::Role;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AuthError;
use crate::session_store::SessionStore;

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session: Session,
    /// Page the role lands on.
    pub dashboard: &'static str,
    pub source: Source,
}

impl LoginOutcome {
    fn new(session: Session, source: Source) -> Self {
        Self {
            dashboard: session.role().dashboard(),
            session,
            source,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LiveLogin {
    access_token: String,
    user: UserProfile,
}

/// `Some` only for a payload carrying both a token and a decodable user.
fn read_live_login(payload: &Value) -> Option<LiveLogin> {
    let login: LiveLogin = serde_json::from_value(payload.clone()).ok()?;
    (!login.access_token.is_empty()).then_some(login)
}

fn authenticate_demo(username: &str, password: &str, role: Role) -> Result<Session, AuthError> {
    let account = demo_account(role);
    if account.accepts(username, password) {
        Ok(Session::new(account.profile(), None))
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Log in as `role` and persist the session in `store`.
///
/// Leading and trailing whitespace is trimmed from both fields.
///
/// # Errors
///
/// - [`AuthError::MissingField`] for an empty username or password
/// - [`AuthError::Rejected`] / [`AuthError::Unavailable`] when the backend
///   fails and the policy keeps the failure
/// - [`AuthError::InvalidCredentials`] when demo authentication fails
/// - [`AuthError::SessionStore`] when the session cannot be saved
pub async fn login(
    client: &ApiClient,
    policy: FallbackPolicy,
    store: &dyn SessionStore,
    username: &str,
    password: &str,
    role: Role,
) -> Result<LoginOutcome, AuthError> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() {
        return Err(AuthError::MissingField("username"));
    }
    if password.is_empty() {
        return Err(AuthError::MissingField("password"));
    }

    client.notify(Notice::info("Verificando credenciales..."));
    let body = json!({ "username": username, "password": password, "role": role });
    let outcome = client.call(&Endpoint::Login, Some(&body)).await;

    let use_demo = policy.permits_fallback(&outcome);
    let result = match outcome {
        ApiOutcome::Success(payload) => match read_live_login(&payload) {
            Some(live) => Ok(LoginOutcome::new(
                Session::new(live.user, Some(live.access_token)),
                Source::Live,
            )),
            None => {
                tracing::warn!("login response lacks access_token or user; trying demo account");
                authenticate_demo(username, password, role)
                    .map(|session| LoginOutcome::new(session, Source::Demo))
            }
        },
        _ if use_demo => authenticate_demo(username, password, role)
            .map(|session| LoginOutcome::new(session, Source::Demo)),
        ApiOutcome::Rejected { message, .. } => Err(AuthError::Rejected(message)),
        ApiOutcome::Unavailable { reason } => Err(AuthError::Unavailable(reason)),
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(error) => {
            if matches!(error, AuthError::InvalidCredentials) {
                client.notify(Notice::error(error.to_string()));
            }
            return Err(error);
        }
    };

    store.save(&outcome.session)?;
    tracing::info!(
        user = outcome.session.user_id(),
        role = %outcome.session.role(),
        source = %outcome.source,
        "logged in"
    );
    client.notify(Notice::success("¡Inicio de sesión exitoso! Redirigiendo..."));
    Ok(outcome)
}

/// Session left by an earlier login, if any.
///
/// # Errors
///
/// Returns [`AuthError::SessionStore`] when the store cannot be read.
pub fn resume(store: &dyn SessionStore) -> Result<Option<Session>, AuthError> {
    let session = store.load()?;
    if let Some(session) = &session {
        tracing::debug!(user = session.user_id(), "resumed stored session");
    }
    Ok(session)
}

/// Forget the stored session.
///
/// # Errors
///
/// Returns [`AuthError::SessionStore`] when the store cannot be cleared.
pub fn logout(store: &dyn SessionStore) -> Result<(), AuthError> {
    store.clear()?;
    tracing::info!("logged out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_login_requires_token_and_user() {
        let full = json!({
            "access_token": "jwt",
            "user": {"id": 9, "nombre": "Pedro Ruiz", "rol": "estudiante"}
        });
        assert!(read_live_login(&full).is_some());
        assert!(read_live_login(&json!({"access_token": "jwt"})).is_none());
        assert!(read_live_login(&json!({"user": full["user"]})).is_none());
        assert!(
            read_live_login(&json!({"access_token": "", "user": full["user"]})).is_none()
        );
        assert!(read_live_login(&json!({"raw": "ok"})).is_none());
    }

    #[test]
    fn demo_authentication_per_role() {
        let session = authenticate_demo("DOC001", "docente123", Role::Teacher).unwrap();
        assert_eq!(session.display_name(), "Dra. María González");
        assert!(session.auth_token.is_none());

        let err = authenticate_demo("DOC001", "docente123", Role::Student).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
