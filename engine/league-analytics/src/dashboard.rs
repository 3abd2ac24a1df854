//! Full per-roster view: the roster table, needs, targets and summary cards

use crate::needs::{analyze_needs, NeedPosition};
use crate::picks::{pick_ledger, PickLedger};
use crate::rating::{rate_teams, TeamRating};
use crate::roster::{project_roster, RosterRow};
use crate::snapshot::LeagueSnapshot;
use crate::summary::{
    age_profile, position_counts, select_roster, PlayerAge, PositionCount, StarterSummary,
};
use crate::targets::{rank_targets, TargetRow};
use crate::tier::TierScorer;
use crate::types::Roster;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub roster_id: u32,
    pub starters: StarterSummary,
    pub position_mix: Vec<PositionCount>,
    pub ages: Vec<PlayerAge>,
    pub rows: Vec<RosterRow>,
    pub needs: Vec<NeedPosition>,
    pub targets: Vec<TargetRow>,
    pub picks: PickLedger,
}

impl Dashboard {
    /// Derive every view for `roster` from one snapshot
    pub fn build(snapshot: &LeagueSnapshot, roster: &Roster) -> Self {
        let scorer = snapshot.scorer();
        Self::build_with(snapshot, roster, &scorer)
    }

    /// As [`Dashboard::build`], reusing an existing tier context
    pub fn build_with(snapshot: &LeagueSnapshot, roster: &Roster, scorer: &TierScorer) -> Self {
        let rows = project_roster(roster, &snapshot.players, scorer);
        let needs = analyze_needs(&rows);
        let owned: HashSet<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        let targets = rank_targets(&snapshot.players, &snapshot.trending, &owned, scorer, &needs);

        debug!(
            "Built dashboard for roster {}: {} rows, {} needs, {} targets",
            roster.roster_id,
            rows.len(),
            needs.len(),
            targets.len()
        );

        Self {
            roster_id: roster.roster_id,
            starters: StarterSummary::of(roster),
            position_mix: position_counts(roster, &snapshot.players),
            ages: age_profile(roster, &snapshot.players),
            rows,
            needs,
            targets,
            picks: pick_ledger(&snapshot.traded_picks, roster.roster_id),
        }
    }

    /// Dashboard for the roster owned by `username`, if the league has rosters
    pub fn for_user(snapshot: &LeagueSnapshot, username: &str) -> Option<Self> {
        let roster = select_roster(&snapshot.rosters, &snapshot.users, username)?;
        Some(Self::build(snapshot, roster))
    }

    pub fn is_balanced(&self) -> bool {
        self.needs.is_empty()
    }
}

/// League-wide ratings for a snapshot
pub fn league_ratings(snapshot: &LeagueSnapshot) -> Vec<TeamRating> {
    rate_teams(&snapshot.rosters, &snapshot.players, &snapshot.users, &snapshot.scorer())
}
