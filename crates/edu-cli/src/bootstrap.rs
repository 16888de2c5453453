use std::path::Path;

use anyhow::Context;
use edu_client::FallbackPolicy;
use edu_config::EduConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, the layered config, and the command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<EduConfig> {
    load_dotenv()?;

    let mut config = EduConfig::load().context("failed to load edubot configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

/// Fallback policy for this run. `--no-demo` and `--legacy-fallback` beat the
/// `[fallback]` config section.
#[must_use]
pub fn fallback_policy(config: &EduConfig, flags: &GlobalFlags) -> FallbackPolicy {
    if flags.no_demo {
        FallbackPolicy::LIVE_ONLY
    } else if flags.legacy_fallback {
        FallbackPolicy::LEGACY
    } else {
        FallbackPolicy::from(&config.fallback)
    }
}

fn apply_overrides(config: &mut EduConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
        config
            .api
            .validate()
            .with_context(|| format!("invalid --base-url '{base_url}'"))?;
    }
    Ok(())
}

fn load_dotenv() -> anyhow::Result<()> {
    let project_env = Path::new(".edubot").join(".env");
    if project_env.exists() {
        dotenvy::from_path(&project_env).with_context(|| {
            format!("failed to load dotenv file at {}", project_env.display())
        })?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
