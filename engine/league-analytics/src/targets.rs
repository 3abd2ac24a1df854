//! Trade / waiver target ranking

use crate::needs::{fills_need, NeedPosition};
use crate::tier::{TierScorer, WORST_TIER};
use crate::types::{PlayerCatalog, TrendingEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of ranked targets returned
pub const MAX_TARGETS: usize = 25;

/// Score bonus for a candidate at a needed position
pub const FIT_BONUS: f64 = 0.3;

/// A ranked acquisition candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRow {
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub tier: u8,
    pub fit: bool,
    /// Higher is better: inverted tier plus the fit bonus
    pub score: f64,
}

/// Composite target score for a tier and need fit
pub fn target_score(tier: u8, fit: bool) -> f64 {
    let fit = if fit { 1.0 } else { 0.0 };
    f64::from(WORST_TIER - tier.min(WORST_TIER)) + FIT_BONUS * fit
}

/// Rank trending players not already owned against the roster's needs.
///
/// Candidates are taken from `trending` in order, skipping IDs missing from
/// the catalog or present in `owned`. The result is sorted by descending
/// score with trending order breaking ties, and capped at [`MAX_TARGETS`].
///
/// `owned` holds the IDs behind the projected roster rows, so it is empty
/// exactly when the roster projects to no rows. An empty catalog, trending
/// list or roster yields no targets.
pub fn rank_targets(
    catalog: &PlayerCatalog,
    trending: &[TrendingEntry],
    owned: &HashSet<&str>,
    scorer: &TierScorer,
    needs: &[NeedPosition],
) -> Vec<TargetRow> {
    if catalog.is_empty() || trending.is_empty() || owned.is_empty() {
        return Vec::new();
    }

    let mut targets: Vec<TargetRow> = trending
        .iter()
        .filter(|entry| !owned.contains(entry.player_id.as_str()))
        .filter_map(|entry| catalog.get(&entry.player_id).map(|player| (entry, player)))
        .map(|(entry, player)| {
            let tier = scorer.tier(&entry.player_id);
            let fit = fills_need(needs, player.position_code());
            TargetRow {
                id: entry.player_id.clone(),
                name: player.display_name(),
                position: player.position_code().to_string(),
                team: player.team_code().to_string(),
                tier,
                fit,
                score: target_score(tier, fit),
            }
        })
        .collect();

    targets.sort_by(|a, b| b.score.total_cmp(&a.score));
    targets.truncate(MAX_TARGETS);
    targets
}
