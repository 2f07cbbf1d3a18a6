#[cfg(test)]
mod tests {
    use super::super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.upload.max_bytes, 1024 * 1024);
        assert_eq!(config.logging.filter, "info");
        assert!(config.server.server_id.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 9100
            server_id = "node-a"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.resolved_server_id(), "node-a");
        assert_eq!(config.database.url, "sqlite://molbank.db?mode=rwc");
    }

    #[test]
    fn test_generated_server_id_is_uuid() {
        let id = ServerConfig::default().resolved_server_id();
        assert!(uuid::Uuid::parse_str(&id).is_ok(), "not a uuid: {}", id);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("DATABASE_URL", "sqlite::memory:"),
            ("SERVER_ID", "replica-2"),
            ("MOLBANK_PORT", "8080"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.server.server_id.as_deref(), Some("replica-2"));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_env(|key| (key == "MOLBANK_PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "MOLBANK_PORT", .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nmax_connections = 2\n\n[logging]\nfilter = \"debug\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path().display().to_string()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
