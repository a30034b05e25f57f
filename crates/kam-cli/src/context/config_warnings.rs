use kam_config::KamConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &KamConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &KamConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.sources.is_configured() && has_misspelled_prefix(&env_keys, "KAM_SOURCES") {
        warnings.push(
            "Source paths appear default while KAM_SOURCES* env vars exist. Use double underscores (example: KAM_SOURCES__ATM_PATH)."
                .to_string(),
        );
    }

    if has_misspelled_prefix(&env_keys, "KAM_GENERAL") {
        warnings.push(
            "KAM_GENERAL* env vars must use double underscores (example: KAM_GENERAL__ACTOR)."
                .to_string(),
        );
    }

    warnings
}

/// Keys starting with `prefix` that are not followed by the `__` separator.
fn has_misspelled_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with("__"))
    })
}
