//! Offline demonstration dataset
//!
//! Used when the Sleeper API is unreachable so the dashboard can still be
//! explored. One league, two managers, fifteen players, a short trending
//! list and a few traded picks.

use crate::provider::DataProvider;
use crate::Result;
use async_trait::async_trait;
use league_analytics::{
    League, Player, PlayerCatalog, Roster, TradedPick, TrendingEntry, TrendingKind, User,
};

pub const MOCK_USER_ID: &str = "909884759852089344";
pub const MOCK_LEAGUE_ID: &str = "1227422684355244032";

// (id, name, position, team, age, bye week)
const MOCK_PLAYERS: [(&str, &str, &str, &str, u32, u32); 15] = [
    ("4984", "Patrick Mahomes", "QB", "KC", 29, 10),
    ("9221", "Justin Jefferson", "WR", "MIN", 26, 13),
    ("8151", "Amon-Ra St. Brown", "WR", "DET", 25, 5),
    ("6786", "Bijan Robinson", "RB", "ATL", 23, 12),
    ("7090", "Breece Hall", "RB", "NYJ", 24, 7),
    ("12514", "Sam LaPorta", "TE", "DET", 24, 5),
    ("7553", "De'Von Achane", "RB", "MIA", 23, 6),
    ("5967", "Mike Evans", "WR", "TB", 31, 11),
    ("8210", "Rashee Rice", "WR", "KC", 24, 10),
    ("4234", "Josh Allen", "QB", "BUF", 29, 12),
    ("5854", "Saquon Barkley", "RB", "PHI", 28, 5),
    ("7021", "CeeDee Lamb", "WR", "DAL", 26, 7),
    ("7587", "Jaylen Waddle", "WR", "MIA", 26, 6),
    ("7670", "Tee Higgins", "WR", "CIN", 26, 12),
    ("11565", "Dalton Kincaid", "TE", "BUF", 25, 12),
];

const MOCK_TRENDING_ADDS: [(&str, u64); 5] =
    [("7670", 10_234), ("5854", 8_123), ("8210", 7_777), ("7553", 6_888), ("11565", 5_120)];

// (season, round, original roster, current owner)
const MOCK_TRADED_PICKS: [(&str, u32, u32, u32); 3] =
    [("2026", 1, 2, 1), ("2026", 3, 1, 2), ("2027", 2, 2, 1)];

/// Static demonstration data behind the [`DataProvider`] interface
#[derive(Debug, Clone)]
pub struct MockProvider {
    leagues: Vec<League>,
    users: Vec<User>,
    rosters: Vec<Roster>,
    players: PlayerCatalog,
    trending_adds: Vec<TrendingEntry>,
    traded_picks: Vec<TradedPick>,
}

impl MockProvider {
    pub fn new() -> Self {
        let ids = |list: &[&str]| list.iter().map(|id| id.to_string()).collect::<Vec<_>>();

        let players = MOCK_PLAYERS
            .iter()
            .map(|&(id, name, position, team, age, bye)| {
                let player = Player {
                    player_id: id.to_string(),
                    full_name: Some(name.to_string()),
                    position: Some(position.to_string()),
                    team: Some(team.to_string()),
                    age: Some(age),
                    bye_week: Some(bye),
                    ..Default::default()
                };
                (id.to_string(), player)
            })
            .collect();

        Self {
            leagues: vec![League {
                league_id: MOCK_LEAGUE_ID.to_string(),
                name: Some("Dynasty Sharks".to_string()),
                season: Some("2025".to_string()),
                total_rosters: Some(10),
            }],
            users: vec![
                User {
                    user_id: MOCK_USER_ID.to_string(),
                    username: Some("matt".to_string()),
                    display_name: Some("Matt".to_string()),
                },
                User {
                    user_id: "974706796101152768".to_string(),
                    username: Some("chris".to_string()),
                    display_name: Some("Chris".to_string()),
                },
            ],
            rosters: vec![
                Roster {
                    roster_id: 1,
                    owner_id: Some(MOCK_USER_ID.to_string()),
                    players: ids(&[
                        "4984", "9221", "8151", "6786", "7090", "12514", "7553", "5967", "8210",
                    ]),
                    starters: ids(&["4984", "9221", "8151", "6786", "7090", "12514"]),
                },
                Roster {
                    roster_id: 2,
                    owner_id: Some("974706796101152768".to_string()),
                    players: ids(&["4234", "5854", "7021", "7587", "7670", "11565"]),
                    starters: ids(&["4234", "5854", "7021", "7587"]),
                },
            ],
            players,
            trending_adds: MOCK_TRENDING_ADDS
                .iter()
                .map(|&(id, count)| TrendingEntry { player_id: id.to_string(), count })
                .collect(),
            traded_picks: MOCK_TRADED_PICKS
                .iter()
                .map(|&(season, round, original, owner)| TradedPick {
                    season: season.to_string(),
                    round,
                    roster_id: original,
                    previous_owner_id: Some(original),
                    owner_id: owner,
                })
                .collect(),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn user_id(&self, _username: &str) -> Result<String> {
        Ok(MOCK_USER_ID.to_string())
    }

    async fn leagues(&self, _user_id: &str, _season: &str) -> Result<Vec<League>> {
        Ok(self.leagues.clone())
    }

    async fn league_users(&self, _league_id: &str) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn league_rosters(&self, _league_id: &str) -> Result<Vec<Roster>> {
        Ok(self.rosters.clone())
    }

    async fn traded_picks(&self, _league_id: &str) -> Result<Vec<TradedPick>> {
        Ok(self.traded_picks.clone())
    }

    async fn players(&self) -> Result<PlayerCatalog> {
        Ok(self.players.clone())
    }

    async fn trending(
        &self,
        kind: TrendingKind,
        limit: u32,
        _lookback_hours: u32,
    ) -> Result<Vec<TrendingEntry>> {
        // Only adds are part of the demo data
        let entries = match kind {
            TrendingKind::Add => self.trending_adds.iter().take(limit as usize).cloned().collect(),
            TrendingKind::Drop => Vec::new(),
        };
        Ok(entries)
    }

    async fn health(&self) -> bool {
        true
    }
}
