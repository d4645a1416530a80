use ferrous_nscheck_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(
        config.resolver.upstream_servers,
        vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
    );
    assert_eq!(config.resolver.query_timeout_ms, 5000);
    assert_eq!(config.query.nameserver_port, 53);
    assert_eq!(config.query.timeout_ms, 5000);
    assert!(config.query.tcp_fallback);
    assert!(config.query.deadline().is_none());
    assert_eq!(config.logging.level, "warn");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [query]
        timeout_ms = 1500
        deadline_ms = 20000
    "#,
    )
    .unwrap();

    assert_eq!(config.query.timeout_ms, 1500);
    assert_eq!(config.query.deadline().unwrap().as_secs(), 20);
    assert_eq!(config.query.nameserver_port, 53);
    assert_eq!(config.resolver.upstream_servers.len(), 2);
}

#[test]
fn test_config_invalid_toml() {
    let result = Config::from_toml("[query\ntimeout_ms = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_load_from_file_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [resolver]
        upstream_servers = ["9.9.9.9"]

        [logging]
        level = "info"
    "#
    )
    .unwrap();

    let overrides = CliOverrides {
        timeout_ms: Some(750),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.resolver.upstream_servers, vec!["9.9.9.9".to_string()]);
    assert_eq!(config.resolver.query_timeout_ms, 750);
    assert_eq!(config.query.timeout_ms, 750);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load(Some("/nonexistent/ferrous-nscheck.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_config_validation_rejects_bad_upstream() {
    let mut config = Config::default();
    config.resolver.upstream_servers = vec!["not-an-address".to_string()];

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("not-an-address"));
}

#[test]
fn test_config_validation_rejects_empty_upstreams_and_zero_timeout() {
    let mut config = Config::default();
    config.resolver.upstream_servers.clear();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.query.timeout_ms = 0;
    assert!(config.validate().is_err());
}
