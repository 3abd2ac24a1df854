//! Player tier scoring
//!
//! A tier is an ordinal 1-5 rating (1 = best) derived from how widely a
//! player is rostered and started across the league, plus how much add
//! activity they are seeing platform-wide.

use crate::types::{Roster, TrendingEntry};
use std::collections::{HashMap, HashSet};

pub const STARTING_WEIGHT: f64 = 0.6;
pub const ROSTERED_WEIGHT: f64 = 0.3;
pub const TREND_WEIGHT: f64 = 0.1;

pub const BEST_TIER: u8 = 1;
pub const WORST_TIER: u8 = 5;

/// Minimum composite score for each tier, best first
const TIER_THRESHOLDS: [(f64, u8); 4] = [(0.8, 1), (0.6, 2), (0.4, 3), (0.2, 4)];

/// Saturating log normalization of an add count into 0..=1
pub fn trend_score(count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    ((1.0 + count as f64).log10() / 5.0).min(1.0)
}

/// Map a composite score onto the 1-5 tier scale
pub fn tier_for_score(score: f64) -> u8 {
    TIER_THRESHOLDS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(WORST_TIER)
}

/// Tier for a single player against a league snapshot
pub fn tier(player_id: &str, rosters: &[Roster], trending: &[TrendingEntry]) -> u8 {
    TierScorer::new(rosters, trending).tier(player_id)
}

/// Tier scoring context for one league snapshot
///
/// Rostered/starting counts and trending counts are indexed once so that
/// every stage of the pipeline can score many players against the same
/// population. A roster that lists a player twice still counts once.
#[derive(Debug, Clone, Default)]
pub struct TierScorer {
    roster_count: usize,
    rostered: HashMap<String, usize>,
    starting: HashMap<String, usize>,
    trend_counts: HashMap<String, u64>,
}

impl TierScorer {
    pub fn new(rosters: &[Roster], trending: &[TrendingEntry]) -> Self {
        let mut rostered: HashMap<String, usize> = HashMap::new();
        let mut starting: HashMap<String, usize> = HashMap::new();

        for roster in rosters {
            let owned: HashSet<&str> = roster.players.iter().map(String::as_str).collect();
            for id in owned {
                *rostered.entry(id.to_string()).or_insert(0) += 1;
            }
            let started: HashSet<&str> = roster.starters.iter().map(String::as_str).collect();
            for id in started {
                *starting.entry(id.to_string()).or_insert(0) += 1;
            }
        }

        // First entry wins when the list repeats a player
        let mut trend_counts = HashMap::new();
        for entry in trending {
            trend_counts.entry(entry.player_id.clone()).or_insert(entry.count);
        }

        Self { roster_count: rosters.len(), rostered, starting, trend_counts }
    }

    pub fn rostered_pct(&self, player_id: &str) -> f64 {
        self.share(self.rostered.get(player_id).copied().unwrap_or(0))
    }

    pub fn starting_pct(&self, player_id: &str) -> f64 {
        self.share(self.starting.get(player_id).copied().unwrap_or(0))
    }

    pub fn trend_score(&self, player_id: &str) -> f64 {
        trend_score(self.trend_counts.get(player_id).copied().unwrap_or(0))
    }

    /// Continuous score before bucketing
    pub fn composite(&self, player_id: &str) -> f64 {
        STARTING_WEIGHT * self.starting_pct(player_id)
            + ROSTERED_WEIGHT * self.rostered_pct(player_id)
            + TREND_WEIGHT * self.trend_score(player_id)
    }

    pub fn tier(&self, player_id: &str) -> u8 {
        tier_for_score(self.composite(player_id))
    }

    fn share(&self, count: usize) -> f64 {
        if self.roster_count == 0 {
            0.0
        } else {
            count as f64 / self.roster_count as f64
        }
    }
}
