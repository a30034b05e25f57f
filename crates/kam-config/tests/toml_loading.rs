//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use kam_config::KamConfig;

#[test]
fn loads_sources_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[sources]
atm_path = "data/atm.json"
ca_path = "data/ca.json"
karyawan_path = "data/karyawan.json"
"#,
        )?;

        let config: KamConfig = Figment::from(Serialized::defaults(KamConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.sources.atm_path, "data/atm.json");
        assert_eq!(config.sources.ca_path, "data/ca.json");
        assert_eq!(config.sources.karyawan_path, "data/karyawan.json");
        assert!(config.sources.is_configured());
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[sources]
atm_path = "atm.json"

[audit]
enabled = false
log_file = "trail.jsonl"

[general]
actor = "ops-lead"
default_limit = 50
state_dir = "state"
"#,
        )?;

        let config: KamConfig = Figment::from(Serialized::defaults(KamConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.sources.atm_is_file_backed());
        assert!(!config.sources.ca_is_file_backed());
        assert!(!config.audit.enabled);
        assert_eq!(config.audit.log_file, "trail.jsonl");
        assert_eq!(config.general.actor, "ops-lead");
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.state_dir, "state");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
actor = "admin"
"#,
        )?;

        let config: KamConfig = Figment::from(Serialized::defaults(KamConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.actor, "admin");
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.general.state_dir, ".kam");
        assert!(config.audit.enabled);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("KAM_SOURCES__ATM_PATH", "from-env.json");

        jail.create_file(
            "config.toml",
            r#"
[sources]
atm_path = "from-toml.json"
ca_path = "ca.json"
"#,
        )?;

        let config: KamConfig = Figment::from(Serialized::defaults(KamConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("KAM_").split("__"))
            .extract()?;

        assert_eq!(config.sources.atm_path, "from-env.json");
        assert_eq!(config.sources.ca_path, "ca.json");
        Ok(())
    });
}

#[test]
fn project_config_is_discovered_under_project_root() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".kam")).expect("create .kam");
        jail.create_file(
            ".kam/config.toml",
            r#"
[general]
actor = "regional-admin"
"#,
        )?;

        let config = KamConfig::load_for(jail.directory()).expect("config loads");
        assert_eq!(config.general.actor, "regional-admin");
        Ok(())
    });
}

#[test]
fn env_beats_project_config() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".kam")).expect("create .kam");
        jail.create_file(
            ".kam/config.toml",
            r#"
[general]
actor = "from-toml"
"#,
        )?;
        jail.set_env("KAM_GENERAL__ACTOR", "from-env");

        let config = KamConfig::load_for(jail.directory()).expect("config loads");
        assert_eq!(config.general.actor, "from-env");
        Ok(())
    });
}

#[test]
fn invalid_value_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("KAM_GENERAL__DEFAULT_LIMIT", "0");

        let err = KamConfig::load_for(jail.directory()).expect_err("zero limit rejected");
        assert!(err.to_string().contains("general.default_limit"));
        Ok(())
    });
}
