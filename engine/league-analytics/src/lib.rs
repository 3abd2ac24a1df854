//! League Analytics - derived statistics for a Sleeper league snapshot
//!
//! This crate turns raw league data (rosters, player catalog, trending adds)
//! into the tables a league manager looks at: per-player tiers, a sorted
//! roster view, positional needs, ranked waiver/trade targets and a
//! cross-team rating. Every stage is a synchronous function over borrowed,
//! immutable data; nothing here performs I/O.

pub mod dashboard;
pub mod needs;
pub mod picks;
pub mod rating;
pub mod roster;
pub mod snapshot;
pub mod summary;
pub mod targets;
pub mod tier;
pub mod types;

pub use dashboard::{league_ratings, Dashboard};
pub use needs::{analyze_needs, fills_need, NeedPosition};
pub use picks::{pick_ledger, PickLedger};
pub use rating::{rate_league, rate_teams, PositionRating, TeamRating};
pub use roster::{project_roster, RosterRow};
pub use snapshot::LeagueSnapshot;
pub use summary::{
    age_profile, position_counts, select_roster, PlayerAge, PositionCount, StarterSummary,
};
pub use targets::{rank_targets, TargetRow};
pub use tier::{tier, TierScorer};
pub use types::{
    League, Player, PlayerCatalog, Roster, TradedPick, TrendingEntry, TrendingKind, User,
};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn player(id: &str, name: &str, position: &str, team: &str) -> Player {
        Player {
            player_id: id.to_string(),
            full_name: Some(name.to_string()),
            position: Some(position.to_string()),
            team: Some(team.to_string()),
            age: Some(25),
            bye_week: Some(7),
            ..Default::default()
        }
    }

    pub fn roster(
        roster_id: u32,
        owner: Option<&str>,
        players: &[&str],
        starters: &[&str],
    ) -> Roster {
        Roster {
            roster_id,
            owner_id: owner.map(str::to_string),
            players: players.iter().map(|p| p.to_string()).collect(),
            starters: starters.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn trending(player_id: &str, count: u64) -> TrendingEntry {
        TrendingEntry { player_id: player_id.to_string(), count }
    }

    pub fn catalog(players: Vec<Player>) -> PlayerCatalog {
        players.into_iter().map(|p| (p.player_id.clone(), p)).collect()
    }
}
