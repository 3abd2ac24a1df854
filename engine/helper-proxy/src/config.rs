//! Proxy configuration

use anyhow::{Context, Result};
use sleeper_provider::HelperConfig;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8787;

/// Catalog cache file used by the proxy unless `PLAYERS_CACHE_PATH` is set
pub const DEFAULT_PLAYERS_CACHE_FILE: &str = "players_cache.json";

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub port: u16,
    /// Upstream, catalog cache and trending defaults
    pub helper: HelperConfig,
    pub log_level: String,
    /// "json", "pretty" or "compact"
    pub log_format: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        let mut helper = HelperConfig::default();
        helper.cache.players_path = Some(PathBuf::from(DEFAULT_PLAYERS_CACHE_FILE));

        Self {
            port: DEFAULT_PORT,
            helper,
            log_level: "info".to_string(),
            log_format: "compact".to_string(),
        }
    }
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        let helper = HelperConfig::from_env().context("Failed to load provider configuration")?;
        // Keep the proxy's own cache file unless one was given explicitly
        let players_path = if std::env::var_os("PLAYERS_CACHE_PATH").is_some() {
            helper.cache.players_path.clone()
        } else {
            config.helper.cache.players_path.clone()
        };
        config.helper = helper;
        config.helper.cache.players_path = players_path;

        if let Ok(port) = std::env::var("PORT") {
            config.port = port.trim().parse().with_context(|| format!("Invalid PORT: {port}"))?;
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.log_level = level;
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            config.log_format = format;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-wide; tests that touch them hold this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: [&str; 9] = [
        "PORT",
        "LOG_LEVEL",
        "LOG_FORMAT",
        "SLEEPER_API_BASE_URL",
        "HTTP_TIMEOUT_SECS",
        "PLAYERS_CACHE_PATH",
        "PLAYERS_CACHE_MAX_AGE_HOURS",
        "TRENDING_LIMIT",
        "TRENDING_LOOKBACK_HOURS",
    ];

    /// Load the config with exactly `vars` set among the keys it reads
    fn from_env_with(vars: &[(&str, &str)]) -> Result<ProxyConfig> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        let config = ProxyConfig::from_env();
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
        config
    }

    #[test]
    fn test_default_proxy_config() {
        let config = ProxyConfig::default();
        assert_eq!(config.port, 8787);
        assert_eq!(config.helper.cache.players_path, Some(PathBuf::from("players_cache.json")));
        assert_eq!(config.helper.cache.max_age_hours, 20);
        assert_eq!(config.helper.trending.limit, 50);
        assert_eq!(config.helper.trending.lookback_hours, 168);
    }

    #[test]
    fn test_proxy_keeps_its_cache_file_unless_set() {
        let config = from_env_with(&[("TRENDING_LIMIT", "10")]).unwrap();
        let default_path = PathBuf::from(DEFAULT_PLAYERS_CACHE_FILE);
        assert_eq!(config.helper.cache.players_path, Some(default_path));
        assert_eq!(config.helper.trending.limit, 10);

        let config = from_env_with(&[("PLAYERS_CACHE_PATH", "/var/cache/players.json")]).unwrap();
        let explicit_path = PathBuf::from("/var/cache/players.json");
        assert_eq!(config.helper.cache.players_path, Some(explicit_path));

        let config = from_env_with(&[("PLAYERS_CACHE_PATH", "off")]).unwrap();
        assert_eq!(config.helper.cache.players_path, None);
    }

    #[test]
    fn test_proxy_env_overrides() {
        let config = from_env_with(&[
            ("PORT", "9000"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "json"),
            ("SLEEPER_API_BASE_URL", "https://api.sleeper.app/v1/"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.helper.sleeper.api_base_url, "https://api.sleeper.app/v1");
    }

    #[test]
    fn test_malformed_values_are_errors() {
        let err = from_env_with(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));

        assert!(from_env_with(&[("PORT", "70000")]).is_err());
        assert!(from_env_with(&[("TRENDING_LIMIT", "lots")]).is_err());
    }
}
