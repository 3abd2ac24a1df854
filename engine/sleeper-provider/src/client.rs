//! Sleeper API client

use crate::cache::PlayerCatalogCache;
use crate::config::{HelperConfig, SleeperConfig};
use crate::provider::DataProvider;
use crate::{ProviderError, Result};
use async_trait::async_trait;
use league_analytics::{
    League, PlayerCatalog, Roster, TradedPick, TrendingEntry, TrendingKind, User,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Upstream paths, relative to the API base URL
pub mod paths {
    use league_analytics::TrendingKind;

    pub const PLAYERS: &str = "/players/nfl";
    pub const NFL_STATE: &str = "/state/nfl";

    pub fn user(username_or_id: &str) -> String {
        format!("/user/{}", urlencoding::encode(username_or_id))
    }

    pub fn user_leagues(user_id: &str, season: &str) -> String {
        format!(
            "/user/{}/leagues/nfl/{}",
            urlencoding::encode(user_id),
            urlencoding::encode(season)
        )
    }

    pub fn league_users(league_id: &str) -> String {
        format!("/league/{}/users", urlencoding::encode(league_id))
    }

    pub fn league_rosters(league_id: &str) -> String {
        format!("/league/{}/rosters", urlencoding::encode(league_id))
    }

    pub fn league_traded_picks(league_id: &str) -> String {
        format!("/league/{}/traded_picks", urlencoding::encode(league_id))
    }

    pub fn trending(kind: TrendingKind, limit: u32, lookback_hours: u32) -> String {
        format!("/players/nfl/trending/{kind}?limit={limit}&lookback_hours={lookback_hours}")
    }
}

/// Live Sleeper API client
#[derive(Debug)]
pub struct SleeperClient {
    config: SleeperConfig,
    client: reqwest::Client,
    players_cache: Option<PlayerCatalogCache>,
}

impl SleeperClient {
    /// Create a client without a player catalog cache
    pub fn new(config: SleeperConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client, players_cache: None })
    }

    /// Create a client with the cache settings from `config`
    pub fn from_config(config: &HelperConfig) -> Result<Self> {
        let client = Self::new(config.sleeper.clone())?;
        Ok(match &config.cache.players_path {
            Some(path) => {
                client.with_players_cache(PlayerCatalogCache::new(path, config.cache.max_age_hours))
            }
            None => client,
        })
    }

    pub fn with_players_cache(mut self, cache: PlayerCatalogCache) -> Self {
        self.players_cache = Some(cache);
        self
    }

    pub fn players_cache(&self) -> Option<&PlayerCatalogCache> {
        self.players_cache.as_ref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    /// GET a path and return the body, failing on non-success status
    pub async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Sleeper API error: {} returned {}", path, status);
            return Err(ProviderError::Status { endpoint: path.to_string(), status });
        }

        Ok(response.text().await?)
    }

    /// GET a path as untyped JSON
    pub async fn get_value(&self, path: &str) -> Result<serde_json::Value> {
        let body = self.get_text(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_text(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Look up a user by username or user ID
    pub async fn user(&self, username_or_id: &str) -> Result<User> {
        // Sleeper answers 200 with `null` for unknown users
        self.get_json::<Option<User>>(&paths::user(username_or_id))
            .await?
            .ok_or_else(|| ProviderError::NotFound { what: format!("user {username_or_id}") })
    }

    /// Raw catalog JSON, through the file cache when one is configured
    pub async fn players_raw(&self) -> Result<String> {
        match &self.players_cache {
            Some(cache) => cache.load_or_fetch(|| self.get_text(paths::PLAYERS)).await,
            None => self.get_text(paths::PLAYERS).await,
        }
    }
}

#[async_trait]
impl DataProvider for SleeperClient {
    fn name(&self) -> &'static str {
        "sleeper"
    }

    async fn user_id(&self, username: &str) -> Result<String> {
        let user = self.user(username).await?;
        info!("Resolved Sleeper user {} -> {}", username, user.user_id);
        Ok(user.user_id)
    }

    async fn leagues(&self, user_id: &str, season: &str) -> Result<Vec<League>> {
        // `null` when the user has no leagues that season
        let leagues: Option<Vec<League>> =
            self.get_json(&paths::user_leagues(user_id, season)).await?;
        let leagues = leagues.unwrap_or_default();
        info!("Found {} leagues for user {} in season {}", leagues.len(), user_id, season);
        Ok(leagues)
    }

    async fn league_users(&self, league_id: &str) -> Result<Vec<User>> {
        let users: Option<Vec<User>> = self.get_json(&paths::league_users(league_id)).await?;
        Ok(users.unwrap_or_default())
    }

    async fn league_rosters(&self, league_id: &str) -> Result<Vec<Roster>> {
        let rosters: Option<Vec<Roster>> = self.get_json(&paths::league_rosters(league_id)).await?;
        Ok(rosters.unwrap_or_default())
    }

    async fn traded_picks(&self, league_id: &str) -> Result<Vec<TradedPick>> {
        let picks: Option<Vec<TradedPick>> =
            self.get_json(&paths::league_traded_picks(league_id)).await?;
        Ok(picks.unwrap_or_default())
    }

    async fn players(&self) -> Result<PlayerCatalog> {
        let body = self.players_raw().await?;
        let mut catalog: PlayerCatalog = serde_json::from_str(&body)?;
        // The map key is authoritative for the ID
        for (id, player) in catalog.iter_mut() {
            if player.player_id.is_empty() {
                player.player_id = id.clone();
            }
        }
        info!("Loaded player catalog with {} players", catalog.len());
        Ok(catalog)
    }

    async fn trending(
        &self,
        kind: TrendingKind,
        limit: u32,
        lookback_hours: u32,
    ) -> Result<Vec<TrendingEntry>> {
        let entries: Option<Vec<TrendingEntry>> =
            self.get_json(&paths::trending(kind, limit, lookback_hours)).await?;
        Ok(entries.unwrap_or_default())
    }

    async fn health(&self) -> bool {
        match self.get_text(paths::NFL_STATE).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Sleeper health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> SleeperClient {
        let config = SleeperConfig { api_base_url: base.to_string(), timeout_secs: 2 };
        SleeperClient::new(config).unwrap()
    }

    #[test]
    fn test_paths() {
        assert_eq!(paths::user("matt b"), "/user/matt%20b");
        assert_eq!(
            paths::user_leagues("909884759852089344", "2025"),
            "/user/909884759852089344/leagues/nfl/2025"
        );
        assert_eq!(paths::league_users("1227"), "/league/1227/users");
        assert_eq!(paths::league_rosters("1227"), "/league/1227/rosters");
        assert_eq!(paths::league_traded_picks("1227"), "/league/1227/traded_picks");
        assert_eq!(
            paths::trending(TrendingKind::Add, 50, 168),
            "/players/nfl/trending/add?limit=50&lookback_hours=168"
        );
    }

    #[test]
    fn test_url_joins_base_without_double_slash() {
        assert_eq!(
            client("https://api.sleeper.app/v1/").url(paths::PLAYERS),
            "https://api.sleeper.app/v1/players/nfl"
        );
    }

    #[test]
    fn test_from_config_respects_cache_setting() {
        let mut config = HelperConfig::default();
        assert!(SleeperClient::from_config(&config).unwrap().players_cache().is_some());

        config.cache.players_path = None;
        assert!(SleeperClient::from_config(&config).unwrap().players_cache().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_transport_error() {
        // Port 9 (discard) is closed on loopback
        let client = client("http://127.0.0.1:9");
        assert!(!client.health().await);

        let err = client.league_rosters("1227").await.unwrap_err();
        assert!(err.is_transport());
    }
}
