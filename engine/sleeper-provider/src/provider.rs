//! Data provider abstraction and snapshot loading

use crate::client::SleeperClient;
use crate::config::{HelperConfig, SessionSettings, TrendingConfig};
use crate::mock::MockProvider;
use crate::Result;
use async_trait::async_trait;
use league_analytics::{
    League, LeagueSnapshot, PlayerCatalog, Roster, TradedPick, TrendingEntry, TrendingKind, User,
};
use tracing::{info, warn};

/// Source of league data
///
/// Implemented by the live Sleeper client and by the offline demonstration
/// dataset; callers never need to know which one they hold.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Resolve a username to a user ID
    async fn user_id(&self, username: &str) -> Result<String>;

    /// Leagues a user plays in for a season
    async fn leagues(&self, user_id: &str, season: &str) -> Result<Vec<League>>;

    async fn league_users(&self, league_id: &str) -> Result<Vec<User>>;

    async fn league_rosters(&self, league_id: &str) -> Result<Vec<Roster>>;

    /// Draft picks that have changed hands in a league
    async fn traded_picks(&self, league_id: &str) -> Result<Vec<TradedPick>>;

    /// Full player catalog keyed by player ID
    async fn players(&self) -> Result<PlayerCatalog>;

    /// Trending players, most active first
    async fn trending(
        &self,
        kind: TrendingKind,
        limit: u32,
        lookback_hours: u32,
    ) -> Result<Vec<TrendingEntry>>;

    /// Liveness check
    async fn health(&self) -> bool;
}

/// Resolve the session's username and list their leagues for the season
pub async fn load_user_leagues(
    provider: &dyn DataProvider,
    settings: &SessionSettings,
) -> Result<Vec<League>> {
    let user_id = provider.user_id(&settings.username).await?;
    provider.leagues(&user_id, &settings.season).await
}

/// Fetch users, rosters, traded picks, catalog and trending adds concurrently.
///
/// Either every collection loads and a complete snapshot is returned, or the
/// first failure is returned and nothing is kept.
pub async fn load_league_snapshot(
    provider: &dyn DataProvider,
    league_id: &str,
    trending_config: &TrendingConfig,
) -> Result<LeagueSnapshot> {
    info!("Loading league {} from {}", league_id, provider.name());

    let (users, rosters, traded_picks, players, trending) = tokio::try_join!(
        provider.league_users(league_id),
        provider.league_rosters(league_id),
        provider.traded_picks(league_id),
        provider.players(),
        provider.trending(TrendingKind::Add, trending_config.limit, trending_config.lookback_hours),
    )?;

    info!(
        "Loaded league {}: {} users, {} rosters, {} traded picks, {} players, {} trending",
        league_id,
        users.len(),
        rosters.len(),
        traded_picks.len(),
        players.len(),
        trending.len()
    );

    Ok(LeagueSnapshot {
        league_id: league_id.to_string(),
        users,
        rosters,
        players,
        trending,
        traded_picks,
    })
}

/// The provider chosen for a session
pub struct SelectedProvider {
    provider: Box<dyn DataProvider>,
    mock_mode: bool,
}

impl SelectedProvider {
    pub fn live(client: SleeperClient) -> Self {
        Self { provider: Box::new(client), mock_mode: false }
    }

    pub fn mock() -> Self {
        Self { provider: Box::new(MockProvider::new()), mock_mode: true }
    }

    pub fn provider(&self) -> &dyn DataProvider {
        self.provider.as_ref()
    }

    /// True when live data was unavailable and the demo dataset is in use
    pub fn is_mock(&self) -> bool {
        self.mock_mode
    }
}

/// Use live Sleeper data when reachable, otherwise the demonstration dataset
pub async fn select_provider(config: &HelperConfig, force_mock: bool) -> Result<SelectedProvider> {
    if force_mock {
        info!("Mock mode requested");
        return Ok(SelectedProvider::mock());
    }

    let client = SleeperClient::from_config(config)?;
    if client.health().await {
        info!("Sleeper API reachable at {}", config.sleeper.api_base_url);
        Ok(SelectedProvider::live(client))
    } else {
        warn!("Sleeper API unavailable, falling back to mock data");
        Ok(SelectedProvider::mock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MOCK_LEAGUE_ID;
    use crate::ProviderError;

    /// Mock data, except rosters always fail
    struct BrokenRosters(MockProvider);

    #[async_trait]
    impl DataProvider for BrokenRosters {
        fn name(&self) -> &'static str {
            "broken"
        }
        async fn user_id(&self, username: &str) -> Result<String> {
            self.0.user_id(username).await
        }
        async fn leagues(&self, user_id: &str, season: &str) -> Result<Vec<League>> {
            self.0.leagues(user_id, season).await
        }
        async fn league_users(&self, league_id: &str) -> Result<Vec<User>> {
            self.0.league_users(league_id).await
        }
        async fn league_rosters(&self, _league_id: &str) -> Result<Vec<Roster>> {
            Err(ProviderError::NotFound { what: "rosters".to_string() })
        }
        async fn traded_picks(&self, league_id: &str) -> Result<Vec<TradedPick>> {
            self.0.traded_picks(league_id).await
        }
        async fn players(&self) -> Result<PlayerCatalog> {
            self.0.players().await
        }
        async fn trending(
            &self,
            kind: TrendingKind,
            limit: u32,
            lookback_hours: u32,
        ) -> Result<Vec<TrendingEntry>> {
            self.0.trending(kind, limit, lookback_hours).await
        }
        async fn health(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_snapshot_from_mock() {
        let provider = MockProvider::new();
        let config = HelperConfig::default();
        let snapshot =
            load_league_snapshot(&provider, MOCK_LEAGUE_ID, &config.trending).await.unwrap();

        assert_eq!(snapshot.rosters.len(), 2);
        assert_eq!(snapshot.users.len(), 2);
        assert_eq!(snapshot.players.len(), 15);
        assert_eq!(snapshot.trending.len(), 5);
        assert_eq!(snapshot.traded_picks.len(), 3);
    }

    #[tokio::test]
    async fn test_snapshot_is_all_or_nothing() {
        let provider = BrokenRosters(MockProvider::new());
        let trending = TrendingConfig { limit: 50, lookback_hours: 168 };
        let result = load_league_snapshot(&provider, MOCK_LEAGUE_ID, &trending).await;
        assert!(matches!(result, Err(ProviderError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_user_leagues_chain() {
        let settings = SessionSettings::new("matt", "2025").unwrap();
        let leagues = load_user_leagues(&MockProvider::new(), &settings).await.unwrap();
        assert_eq!(leagues.len(), 1);
        assert_eq!(leagues[0].display_name(), "Dynasty Sharks");
    }

    #[tokio::test]
    async fn test_forced_mock_selection() {
        let selected = select_provider(&HelperConfig::default(), true).await.unwrap();
        assert!(selected.is_mock());
        assert_eq!(selected.provider().name(), "mock");
    }

    #[tokio::test]
    async fn test_unreachable_live_falls_back_to_mock() {
        let mut config = HelperConfig::default();
        config.sleeper.api_base_url = "http://127.0.0.1:9".to_string();
        config.sleeper.timeout_secs = 2;
        config.cache.players_path = None;

        let selected = select_provider(&config, false).await.unwrap();
        assert!(selected.is_mock());
    }
}
