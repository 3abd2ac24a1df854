use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Player catalog keyed by Sleeper player ID
pub type PlayerCatalog = HashMap<String, Player>;

/// A player record from the Sleeper catalog (`/players/nfl`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Sleeper player ID
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Position (QB, RB, WR, TE, K, DEF, ...)
    #[serde(default)]
    pub position: Option<String>,
    /// Team abbreviation (e.g., "KC")
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub bye_week: Option<u32>,
}

impl Player {
    /// Full name, else "first last" trimmed, else empty
    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().filter(|n| !n.is_empty()) {
            return full.to_string();
        }
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    pub fn position_code(&self) -> &str {
        self.position.as_deref().unwrap_or_default()
    }

    pub fn team_code(&self) -> &str {
        self.team.as_deref().unwrap_or_default()
    }
}

/// A team's roster within a league (`/league/{id}/rosters`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Every player on the roster; Sleeper sends `null` for empty rosters
    #[serde(default, deserialize_with = "null_as_empty")]
    pub players: Vec<String>,
    /// Active lineup, expected to be a subset of `players`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub starters: Vec<String>,
}

impl Roster {
    pub fn contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p == player_id)
    }

    pub fn is_starter(&self, player_id: &str) -> bool {
        self.starters.iter().any(|p| p == player_id)
    }
}

/// League summary (`/user/{id}/leagues/nfl/{season}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub league_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
}

impl League {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.league_id)
    }
}

/// League member (`/league/{id}/users`, `/user/{name}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Recent add (or drop) activity for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingEntry {
    pub player_id: String,
    pub count: u64,
}

/// A draft pick that changed hands (`/league/{id}/traded_picks`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradedPick {
    /// Draft season, e.g. "2026"
    pub season: String,
    pub round: u32,
    /// Roster the pick originally belonged to
    pub roster_id: u32,
    #[serde(default)]
    pub previous_owner_id: Option<u32>,
    /// Roster currently holding the pick
    pub owner_id: u32,
}

/// Which trending list to request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingKind {
    #[default]
    Add,
    Drop,
}

impl TrendingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingKind::Add => "add",
            TrendingKind::Drop => "drop",
        }
    }

    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "add" => Some(TrendingKind::Add),
            "drop" => Some(TrendingKind::Drop),
            _ => None,
        }
    }
}

impl fmt::Display for TrendingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
