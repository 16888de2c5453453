//! Session file location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Explicit session file path. Empty means `~/.edubot/session.json`.
    #[serde(default)]
    pub path: String,
}

impl SessionConfig {
    /// Resolve the session file path, `None` when no home directory exists.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if !self.path.is_empty() {
            return Some(PathBuf::from(&self.path));
        }
        dirs::home_dir().map(|home| home.join(".edubot").join(SESSION_FILE_NAME))
    }
}
