//! Positional depth needs

use crate::roster::RosterRow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A tracked position that can be flagged as a roster need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NeedPosition {
    Rb,
    Wr,
    Qb,
    Te,
}

impl NeedPosition {
    /// Evaluation (and output) order
    pub const ALL: [NeedPosition; 4] =
        [NeedPosition::Rb, NeedPosition::Wr, NeedPosition::Qb, NeedPosition::Te];

    pub fn as_str(&self) -> &'static str {
        match self {
            NeedPosition::Rb => "RB",
            NeedPosition::Wr => "WR",
            NeedPosition::Qb => "QB",
            NeedPosition::Te => "TE",
        }
    }

    /// Depth below which the position is a need
    pub fn min_depth(&self) -> usize {
        match self {
            NeedPosition::Rb | NeedPosition::Wr => 4,
            NeedPosition::Qb | NeedPosition::Te => 2,
        }
    }

    pub fn matches(&self, position: &str) -> bool {
        self.as_str() == position
    }
}

impl fmt::Display for NeedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flag tracked positions whose depth on the projected roster is too thin.
///
/// Rows with an empty or untracked position are counted in their own bucket
/// and never produce a need.
pub fn analyze_needs(rows: &[RosterRow]) -> Vec<NeedPosition> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        *counts.entry(row.position.as_str()).or_insert(0) += 1;
    }

    NeedPosition::ALL
        .into_iter()
        .filter(|pos| counts.get(pos.as_str()).copied().unwrap_or(0) < pos.min_depth())
        .collect()
}

/// True when `position` is one of the flagged needs
pub fn fills_need(needs: &[NeedPosition], position: &str) -> bool {
    needs.iter().any(|need| need.matches(position))
}
