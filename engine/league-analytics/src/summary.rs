//! Roster selection and summary figures for the dashboard cards

use crate::types::{PlayerCatalog, Roster, User};
use serde::{Deserialize, Serialize};

/// Number of rostered players at one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCount {
    pub position: String,
    pub count: usize,
}

/// Name and age of a resolvable rostered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAge {
    pub name: String,
    pub age: u32,
}

/// Starters vs. total roster size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StarterSummary {
    pub starters: usize,
    pub players: usize,
}

impl StarterSummary {
    pub fn of(roster: &Roster) -> Self {
        Self { starters: roster.starters.len(), players: roster.players.len() }
    }
}

/// Pick the roster belonging to `username`.
///
/// Matches the first league member whose display name contains the username
/// (case-insensitive) and returns their roster; falls back to the first
/// roster when nobody matches or the member has no roster.
pub fn select_roster<'a>(
    rosters: &'a [Roster],
    users: &[User],
    username: &str,
) -> Option<&'a Roster> {
    let needle = username.to_lowercase();
    let owner = users.iter().find(|user| {
        user.display_name.as_deref().unwrap_or_default().to_lowercase().contains(&needle)
    });

    owner
        .and_then(|user| {
            rosters.iter().find(|r| r.owner_id.as_deref() == Some(user.user_id.as_str()))
        })
        .or_else(|| rosters.first())
}

/// Count roster entries per position, in first-seen order.
///
/// IDs missing from the catalog are counted under the empty position.
pub fn position_counts(roster: &Roster, catalog: &PlayerCatalog) -> Vec<PositionCount> {
    let mut counts: Vec<PositionCount> = Vec::new();
    for id in &roster.players {
        let position = catalog.get(id).map(|p| p.position_code()).unwrap_or_default();
        match counts.iter_mut().find(|c| c.position == position) {
            Some(entry) => entry.count += 1,
            None => counts.push(PositionCount { position: position.to_string(), count: 1 }),
        }
    }
    counts
}

/// Names and ages of rostered players found in the catalog
pub fn age_profile(roster: &Roster, catalog: &PlayerCatalog) -> Vec<PlayerAge> {
    roster
        .players
        .iter()
        .filter_map(|id| catalog.get(id))
        .map(|player| PlayerAge { name: player.display_name(), age: player.age.unwrap_or(0) })
        .collect()
}
