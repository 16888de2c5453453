//! Where the logged-in session lives between commands.
//!
//! The file store keeps the `{token, currentUser}` JSON shape in
//! `~/.edubot/session.json` (overridable through `[session] path`).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use edu_config::SessionConfig;
use edu_core::entities::Session;

use crate::error::AuthError;

pub trait SessionStore: Send + Sync {
    /// Stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when the backing storage fails.
    fn load(&self) -> Result<Option<Session>, AuthError>;

    /// Replace the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when the session cannot be written.
    fn save(&self, session: &Session) -> Result<(), AuthError>;

    /// Forget the stored session. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when the session cannot be removed.
    fn clear(&self) -> Result<(), AuthError>;
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Session held for the lifetime of the process (`shell`, tests).
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        Ok(self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File
// ---------------------------------------------------------------------------

/// Session persisted as JSON, readable only by the owner on Unix.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the configured path.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when no path is configured and no
    /// home directory exists.
    pub fn from_config(config: &SessionConfig) -> Result<Self, AuthError> {
        config.resolved_path().map(Self::new).ok_or_else(|| {
            AuthError::SessionStore("home directory not found; set session.path".into())
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(AuthError::SessionStore(format!(
                    "read {}: {error}",
                    self.path.display()
                )));
            }
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "ignoring unreadable session file");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStore(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::SessionStore(format!("chmod {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(AuthError::SessionStore(format!(
                "delete {}: {error}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use edu_core::entities::UserProfile;
    use edu_core::enums::Role;

    use super::*;

    fn session() -> Session {
        let user = UserProfile {
            user_id: 2,
            display_name: "Dr. Carlos Ramírez".into(),
            email: None,
            role: Role::Coordinator,
            code: Some("COORD001".into()),
            program: Some("Coordinación Académica".into()),
            department: None,
        };
        Session::new(user, Some("jwt-xyz".into()))
    }

    #[test]
    fn memory_store_cycle() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(session()));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_save_load_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path().join("nested").join("session.json"));

        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(session()));

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["token"], "jwt-xyz");
        assert_eq!(raw["currentUser"]["nombre"], "Dr. Carlos Ramírez");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }

    #[test]
    fn file_store_missing_or_blank_file_is_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path().join("session.json"));
        assert!(store.load().unwrap().is_none());

        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_ignores_corrupt_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path().join("session.json"));
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn from_config_uses_explicit_path() {
        let config = SessionConfig {
            path: "/tmp/edubot-test/session.json".into(),
        };
        let store = FileSessionStore::from_config(&config).unwrap();
        assert_eq!(store.path(), Path::new("/tmp/edubot-test/session.json"));
    }
}
