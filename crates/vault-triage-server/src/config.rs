use std::path::Path;

use vault_triage_core::TriageConfig;

/// Path of an optional YAML config file
pub const CONFIG_PATH_VAR: &str = "VAULT_TRIAGE_CONFIG";
pub const HOST_VAR: &str = "VAULT_TRIAGE_HOST";
pub const PORT_VAR: &str = "VAULT_TRIAGE_PORT";

/// Build the server configuration from the process environment.
pub fn load_from_env() -> vault_triage_core::Result<TriageConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Same as [`load_from_env`] with an injectable variable lookup.
pub fn load_with<F>(lookup: F) -> vault_triage_core::Result<TriageConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(CONFIG_PATH_VAR) {
        Some(path) => TriageConfig::load(Path::new(&path))?,
        None => TriageConfig::default(),
    };

    if let Some(host) = lookup(HOST_VAR) {
        config.server.host = host;
    }

    if let Some(port) = lookup(PORT_VAR) {
        match port.parse() {
            Ok(port) => config.server.port = port,
            Err(_) => log::warn!("Ignoring invalid {}={:?}", PORT_VAR, port),
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = load_with(lookup_from(&[])).unwrap();
        assert_eq!(config, TriageConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("triage.yaml");
        std::fs::write(&path, "server:\n  host: 0.0.0.0\n  port: 9000\nlogging:\n  level: debug\n").unwrap();

        let config = load_with(lookup_from(&[
            (CONFIG_PATH_VAR, path.to_str().unwrap()),
            (PORT_VAR, "9100"),
        ]))
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let config = load_with(lookup_from(&[(PORT_VAR, "not-a-port")])).unwrap();
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_missing_config_file_fails() {
        assert!(load_with(lookup_from(&[(CONFIG_PATH_VAR, "/no/such/triage.yaml")])).is_err());
    }
}
