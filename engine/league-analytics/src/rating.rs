//! Cross-team league rating

use crate::tier::TierScorer;
use crate::types::{PlayerCatalog, Roster, TrendingEntry, User};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Strength/weakness label for a roster with no rated players
pub const NO_POSITION: &str = "none";

/// Average tier of one position group on a roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRating {
    pub position: String,
    pub average_tier: f64,
    pub players: usize,
}

/// Aggregate strength of one roster (lower rating is better)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRating {
    pub roster_id: u32,
    pub owner_name: String,
    /// Mean tier over all rated players, 0.0 when `rated_players == 0`
    pub rating: f64,
    pub rated_players: usize,
    /// Position groups in the order first seen on the roster
    pub positions: Vec<PositionRating>,
    pub top_strength: String,
    pub top_weakness: String,
}

impl TeamRating {
    /// False for the 0.0 "no resolvable players" rating
    pub fn has_data(&self) -> bool {
        self.rated_players > 0
    }
}

/// Rate every roster in the league, best (lowest) rating first
pub fn rate_league(
    rosters: &[Roster],
    catalog: &PlayerCatalog,
    trending: &[TrendingEntry],
    users: &[User],
) -> Vec<TeamRating> {
    let scorer = TierScorer::new(rosters, trending);
    rate_teams(rosters, catalog, users, &scorer)
}

/// Rate every roster against an existing tier context
pub fn rate_teams(
    rosters: &[Roster],
    catalog: &PlayerCatalog,
    users: &[User],
    scorer: &TierScorer,
) -> Vec<TeamRating> {
    let mut ratings: Vec<TeamRating> =
        rosters.iter().map(|roster| rate_roster(roster, catalog, users, scorer)).collect();
    ratings.sort_by(|a, b| a.rating.total_cmp(&b.rating));

    debug!("Rated {} rosters", ratings.len());
    ratings
}

fn rate_roster(
    roster: &Roster,
    catalog: &PlayerCatalog,
    users: &[User],
    scorer: &TierScorer,
) -> TeamRating {
    // (position, tier sum, count) in first-seen order
    let mut buckets: Vec<(String, u32, usize)> = Vec::new();
    let mut total: u32 = 0;
    let mut rated = 0usize;

    for id in &roster.players {
        let Some(player) = catalog.get(id) else {
            continue;
        };
        let tier = u32::from(scorer.tier(id));
        total += tier;
        rated += 1;

        let position = player.position_code();
        match buckets.iter_mut().find(|(pos, _, _)| pos == position) {
            Some(bucket) => {
                bucket.1 += tier;
                bucket.2 += 1;
            }
            None => buckets.push((position.to_string(), tier, 1)),
        }
    }

    let positions: Vec<PositionRating> = buckets
        .into_iter()
        .map(|(position, sum, count)| PositionRating {
            position,
            average_tier: f64::from(sum) / count as f64,
            players: count,
        })
        .collect();

    let rating = if rated == 0 { 0.0 } else { f64::from(total) / rated as f64 };

    TeamRating {
        roster_id: roster.roster_id,
        owner_name: owner_name(roster, users),
        rating,
        rated_players: rated,
        top_strength: pick_position(&positions, |candidate, best| candidate < best),
        top_weakness: pick_position(&positions, |candidate, best| candidate > best),
        positions,
    }
}

/// First position whose average beats every earlier one under `better`
fn pick_position(positions: &[PositionRating], better: impl Fn(f64, f64) -> bool) -> String {
    let mut chosen: Option<&PositionRating> = None;
    for position in positions {
        if chosen.map_or(true, |best| better(position.average_tier, best.average_tier)) {
            chosen = Some(position);
        }
    }
    chosen.map(|p| p.position.clone()).unwrap_or_else(|| NO_POSITION.to_string())
}

fn owner_name(roster: &Roster, users: &[User]) -> String {
    roster
        .owner_id
        .as_deref()
        .and_then(|owner| users.iter().find(|user| user.user_id == owner))
        .and_then(|user| user.display_name.clone())
        .unwrap_or_else(|| format!("Roster {}", roster.roster_id))
}
