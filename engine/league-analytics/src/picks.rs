//! Traded draft pick ledger for one roster

use crate::types::TradedPick;
use serde::{Deserialize, Serialize};

/// Picks a roster has gained from, or given to, other rosters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PickLedger {
    /// Other rosters' picks now held by this roster
    pub acquired: Vec<TradedPick>,
    /// This roster's own picks now held elsewhere
    pub traded_away: Vec<TradedPick>,
}

impl PickLedger {
    pub fn is_empty(&self) -> bool {
        self.acquired.is_empty() && self.traded_away.is_empty()
    }

    /// Acquired minus traded away
    pub fn net(&self) -> i64 {
        self.acquired.len() as i64 - self.traded_away.len() as i64
    }
}

/// Split a league's traded picks into what `roster_id` holds and has given up.
///
/// A pick that has gone back to its original roster appears in neither list.
/// Both lists are ordered by season, then round.
pub fn pick_ledger(picks: &[TradedPick], roster_id: u32) -> PickLedger {
    let mut ledger = PickLedger::default();
    for pick in picks {
        if pick.owner_id == pick.roster_id {
            continue;
        }
        if pick.owner_id == roster_id {
            ledger.acquired.push(pick.clone());
        } else if pick.roster_id == roster_id {
            ledger.traded_away.push(pick.clone());
        }
    }

    let order =
        |a: &TradedPick, b: &TradedPick| a.season.cmp(&b.season).then(a.round.cmp(&b.round));
    ledger.acquired.sort_by(order);
    ledger.traded_away.sort_by(order);
    ledger
}
