use edu_config::{ENV_PREFIX, EduConfig};

/// Sections the config knows, as env key prefixes after `EDUBOT_`.
const SECTIONS: [&str; 3] = ["API", "FALLBACK", "SESSION"];

/// Env keys read outside the config.
const STANDALONE_KEYS: [&str; 1] = ["EDUBOT_LOG"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &EduConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &EduConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(ENV_PREFIX))
        .collect::<Vec<_>>();

    let defaults = EduConfig::default();
    let mut warnings = Vec::new();

    let api_default = config.api.base_url == defaults.api.base_url
        && config.api.timeout_secs == defaults.api.timeout_secs
        && config.api.user_agent == defaults.api.user_agent;
    if api_default && has_env_prefix(&env_keys, "EDUBOT_API") {
        warnings.push(
            "API config appears default while EDUBOT_API* env vars exist. Use double underscores (example: EDUBOT_API__BASE_URL)."
                .to_string(),
        );
    }

    let fallback_default = config.fallback.allow_demo_fallback
        == defaults.fallback.allow_demo_fallback
        && config.fallback.treat_server_error_as_unavailable
            == defaults.fallback.treat_server_error_as_unavailable;
    if fallback_default && has_env_prefix(&env_keys, "EDUBOT_FALLBACK") {
        warnings.push(
            "Fallback config appears default while EDUBOT_FALLBACK* env vars exist. Use double underscores (example: EDUBOT_FALLBACK__ALLOW_DEMO_FALLBACK)."
                .to_string(),
        );
    }

    if config.session.path.is_empty() && has_env_prefix(&env_keys, "EDUBOT_SESSION") {
        warnings.push(
            "Session config appears default while EDUBOT_SESSION* env vars exist. Use double underscores (example: EDUBOT_SESSION__PATH)."
                .to_string(),
        );
    }

    for key in &env_keys {
        if !is_known_key(key) {
            warnings.push(format!(
                "{key} does not match any config section ({}); it is ignored.",
                SECTIONS.join(", ")
            ));
        }
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

fn is_known_key(key: &str) -> bool {
    if STANDALONE_KEYS.contains(&key) {
        return true;
    }
    key.strip_prefix(ENV_PREFIX)
        .is_some_and(|rest| SECTIONS.iter().any(|section| rest.starts_with(section)))
}
