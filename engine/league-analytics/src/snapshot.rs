use crate::tier::TierScorer;
use crate::types::{PlayerCatalog, Roster, TradedPick, TrendingEntry, User};
use serde::{Deserialize, Serialize};

/// Everything the pipeline reads for one league, loaded together.
///
/// A snapshot is never mutated once built; a refresh replaces it wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub league_id: String,
    pub users: Vec<User>,
    pub rosters: Vec<Roster>,
    pub players: PlayerCatalog,
    pub trending: Vec<TrendingEntry>,
    #[serde(default)]
    pub traded_picks: Vec<TradedPick>,
}

impl LeagueSnapshot {
    /// Tier context over this snapshot's rosters and trending list
    pub fn scorer(&self) -> TierScorer {
        TierScorer::new(&self.rosters, &self.trending)
    }

    pub fn roster(&self, roster_id: u32) -> Option<&Roster> {
        self.rosters.iter().find(|r| r.roster_id == roster_id)
    }
}
