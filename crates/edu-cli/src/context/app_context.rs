use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use edu_app::App;
use edu_auth::FileSessionStore;
use edu_client::ApiClient;
use edu_config::EduConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::ui::StderrNotifier;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub app: App,
    pub config: EduConfig,
    pub session_path: PathBuf,
}

impl AppContext {
    /// Build the client and controller host, then pick up a stored session.
    pub fn init(config: EduConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let notifier = Arc::new(StderrNotifier::new(flags.quiet));
        let client =
            ApiClient::new(&config.api, notifier).context("failed to build the API client")?;

        let store = FileSessionStore::from_config(&config.session)
            .context("failed to locate the session file")?;
        let session_path = store.path().to_path_buf();

        let policy = bootstrap::fallback_policy(&config, flags);
        tracing::debug!(
            base_url = client.base_url(),
            ?policy,
            session = %session_path.display(),
            "application context ready"
        );

        let mut app = App::new(client, policy, Arc::new(store));
        if let Some(session) = app.resume().context("failed to read the stored session")? {
            tracing::debug!(user = session.display_name(), role = %session.role(), "session resumed");
        }

        Ok(Self {
            app,
            config,
            session_path,
        })
    }
}
