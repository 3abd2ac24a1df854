//! Configuration for the data provider

use crate::ProviderError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_SLEEPER_API_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Sleeper API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleeperConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
}

/// Player catalog file cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache file; `None` always fetches the catalog upstream
    pub players_path: Option<PathBuf>,
    pub max_age_hours: u64,
}

/// Trending list request parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingConfig {
    pub limit: u32,
    pub lookback_hours: u32,
}

/// Data provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperConfig {
    pub sleeper: SleeperConfig,
    pub cache: CacheConfig,
    pub trending: TrendingConfig,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            sleeper: SleeperConfig {
                api_base_url: DEFAULT_SLEEPER_API_BASE_URL.to_string(),
                timeout_secs: 30,
            },
            cache: CacheConfig {
                players_path: Some(PathBuf::from("data/players_nfl.json")),
                max_age_hours: 20, // catalog is ~5MB, refresh at most daily
            },
            trending: TrendingConfig { limit: 50, lookback_hours: 168 },
        }
    }
}

impl HelperConfig {
    /// Create config from environment variables, defaulting anything unset
    pub fn from_env() -> Result<Self, ProviderError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("SLEEPER_API_BASE_URL") {
            config.sleeper.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = parse_env::<u64>("HTTP_TIMEOUT_SECS")? {
            config.sleeper.timeout_secs = timeout;
        }

        match std::env::var("PLAYERS_CACHE_PATH") {
            Ok(path) if path.is_empty() || path == "off" => config.cache.players_path = None,
            Ok(path) => config.cache.players_path = Some(PathBuf::from(path)),
            Err(_) => {}
        }
        if let Some(hours) = parse_env::<u64>("PLAYERS_CACHE_MAX_AGE_HOURS")? {
            config.cache.max_age_hours = hours;
        }

        if let Some(limit) = parse_env::<u32>("TRENDING_LIMIT")? {
            config.trending.limit = limit;
        }
        if let Some(hours) = parse_env::<u32>("TRENDING_LOOKBACK_HOURS")? {
            config.trending.lookback_hours = hours;
        }

        Ok(config)
    }
}

fn parse_env<T: FromStr>(key: &str) -> Result<Option<T>, ProviderError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ProviderError::invalid_config(format!("Invalid {key}: {raw}"))),
        Err(_) => Ok(None),
    }
}

/// Who and what the user is looking at
///
/// Passed explicitly to every load so nothing depends on ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub username: String,
    /// Four-digit season, e.g. "2025"
    pub season: String,
    pub league_id: Option<String>,
}

impl SessionSettings {
    pub fn new(
        username: impl Into<String>,
        season: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let season = season.into();
        if season.len() != 4 || !season.chars().all(|c| c.is_ascii_digit()) {
            let message = format!("Season must be four digits, got {season:?}");
            return Err(ProviderError::invalid_config(message));
        }
        Ok(Self { username: username.into(), season, league_id: None })
    }

    pub fn with_league(mut self, league_id: impl Into<String>) -> Self {
        self.league_id = Some(league_id.into());
        self
    }

    /// Current calendar year as a season string
    pub fn current_season() -> String {
        chrono::Utc::now().year().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-wide; tests that touch them hold this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: [&str; 6] = [
        "SLEEPER_API_BASE_URL",
        "HTTP_TIMEOUT_SECS",
        "PLAYERS_CACHE_PATH",
        "PLAYERS_CACHE_MAX_AGE_HOURS",
        "TRENDING_LIMIT",
        "TRENDING_LOOKBACK_HOURS",
    ];

    /// Load the config with exactly `vars` set among the keys it reads
    fn from_env_with(vars: &[(&str, &str)]) -> Result<HelperConfig, ProviderError> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        let config = HelperConfig::from_env();
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
        config
    }

    #[test]
    fn test_default_config() {
        let config = HelperConfig::default();
        assert_eq!(config.sleeper.api_base_url, DEFAULT_SLEEPER_API_BASE_URL);
        assert_eq!(config.cache.max_age_hours, 20);
        assert_eq!(config.trending.limit, 50);
        assert_eq!(config.trending.lookback_hours, 168);
    }

    #[test]
    fn test_session_settings_validates_season() {
        let settings = SessionSettings::new("matt", "2025").unwrap().with_league("1227");
        assert_eq!(settings.league_id.as_deref(), Some("1227"));

        assert!(SessionSettings::new("matt", "25").is_err());
        assert!(SessionSettings::new("matt", "20x5").is_err());
        assert_eq!(SessionSettings::current_season().len(), 4);
    }

    #[test]
    fn test_from_env_without_overrides_matches_default() {
        let config = from_env_with(&[]).unwrap();
        assert_eq!(config.sleeper.api_base_url, DEFAULT_SLEEPER_API_BASE_URL);
        assert_eq!(config.cache.players_path, Some(PathBuf::from("data/players_nfl.json")));
        assert_eq!(config.trending.limit, 50);
    }

    #[test]
    fn test_from_env_overrides() {
        let config = from_env_with(&[
            ("SLEEPER_API_BASE_URL", "http://localhost:8787/api/"),
            ("HTTP_TIMEOUT_SECS", "5"),
            ("PLAYERS_CACHE_PATH", "/tmp/players.json"),
            ("PLAYERS_CACHE_MAX_AGE_HOURS", "6"),
            ("TRENDING_LIMIT", " 25 "),
            ("TRENDING_LOOKBACK_HOURS", "24"),
        ])
        .unwrap();

        assert_eq!(config.sleeper.api_base_url, "http://localhost:8787/api");
        assert_eq!(config.sleeper.timeout_secs, 5);
        assert_eq!(config.cache.players_path, Some(PathBuf::from("/tmp/players.json")));
        assert_eq!(config.cache.max_age_hours, 6);
        assert_eq!(config.trending.limit, 25);
        assert_eq!(config.trending.lookback_hours, 24);
    }

    #[test]
    fn test_players_cache_can_be_disabled() {
        let off = from_env_with(&[("PLAYERS_CACHE_PATH", "off")]).unwrap();
        assert_eq!(off.cache.players_path, None);

        let empty = from_env_with(&[("PLAYERS_CACHE_PATH", "")]).unwrap();
        assert_eq!(empty.cache.players_path, None);
    }

    #[test]
    fn test_malformed_numbers_are_invalid_config() {
        let err = from_env_with(&[("TRENDING_LIMIT", "fifty")]).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidConfig { .. }));
        assert!(err.to_string().contains("TRENDING_LIMIT"));

        let err = from_env_with(&[("HTTP_TIMEOUT_SECS", "-1")]).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidConfig { .. }));
    }
}
