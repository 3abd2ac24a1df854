//! Display-ready roster projection

use crate::tier::TierScorer;
use crate::types::{PlayerCatalog, Roster};
use serde::{Deserialize, Serialize};

/// Shown in place of a missing bye week
pub const BYE_SENTINEL: &str = "—";

/// One player on a projected roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    /// 0 when unknown
    pub age: u32,
    pub bye_week: Option<u32>,
    pub injury_status: String,
    pub tier: u8,
    pub starter: bool,
}

impl RosterRow {
    pub fn bye_display(&self) -> String {
        self.bye_week.map(|week| week.to_string()).unwrap_or_else(|| BYE_SENTINEL.to_string())
    }
}

/// Join a roster against the catalog and tier context.
///
/// Produces one row per entry in `roster.players` (duplicates included,
/// unresolved IDs included with empty fields), ordered starters first and
/// then by ascending tier. The sort is stable so ties keep roster order.
pub fn project_roster(
    roster: &Roster,
    catalog: &PlayerCatalog,
    scorer: &TierScorer,
) -> Vec<RosterRow> {
    let mut rows: Vec<RosterRow> = roster
        .players
        .iter()
        .map(|id| {
            let player = catalog.get(id);
            RosterRow {
                id: id.clone(),
                name: player.map(|p| p.display_name()).unwrap_or_default(),
                position: player.map(|p| p.position_code().to_string()).unwrap_or_default(),
                team: player.map(|p| p.team_code().to_string()).unwrap_or_default(),
                age: player.and_then(|p| p.age).unwrap_or(0),
                bye_week: player.and_then(|p| p.bye_week),
                injury_status: player.and_then(|p| p.injury_status.clone()).unwrap_or_default(),
                tier: scorer.tier(id),
                starter: roster.is_starter(id),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.starter.cmp(&a.starter).then(a.tier.cmp(&b.tier)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{catalog, player, roster};

    #[test]
    fn test_two_player_single_roster_league() {
        let mine = roster(1, Some("u1"), &["4984", "9221"], &["4984", "9221"]);
        let players = catalog(vec![
            player("4984", "Patrick Mahomes", "QB", "KC"),
            player("9221", "Justin Jefferson", "WR", "MIN"),
        ]);
        let scorer = TierScorer::new(std::slice::from_ref(&mine), &[]);

        let rows = project_roster(&mine, &players, &scorer);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.tier == 1 && r.starter));
        assert_eq!(rows[0].name, "Patrick Mahomes");
        assert_eq!(rows[1].position, "WR");
    }

    #[test]
    fn test_starters_sort_first_then_tier() {
        let league = vec![
            roster(1, None, &["a", "b", "c", "d"], &["d", "c"]),
            roster(2, None, &["b"], &["b"]),
        ];
        let scorer = TierScorer::new(&league, &[]);
        let rows = project_roster(&league[0], &PlayerCatalog::new(), &scorer);

        let order: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        // c, d are starters with equal tier (input order kept); b outranks a
        assert_eq!(order, vec!["c", "d", "b", "a"]);
        assert!(rows[0].starter && rows[1].starter);
        assert!(!rows[2].starter && !rows[3].starter);
        assert!(rows[2].tier < rows[3].tier);
    }

    #[test]
    fn test_starters_lead_for_any_input_order() {
        let ids = ["a", "b", "c", "d", "e", "f"];
        let others = vec![roster(2, None, &["b", "e"], &["b"]), roster(3, None, &["e"], &[])];

        for shift in 0..ids.len() {
            let mut order = ids.to_vec();
            order.rotate_left(shift);
            for players in [order.clone(), order.iter().rev().copied().collect()] {
                let mut league = vec![roster(1, None, &players, &["f", "b", "d"])];
                league.extend(others.iter().cloned());
                let scorer = TierScorer::new(&league, &[]);
                let rows = project_roster(&league[0], &PlayerCatalog::new(), &scorer);

                assert_eq!(rows.len(), ids.len());
                assert!(rows[..3].iter().all(|r| r.starter), "order {players:?}");
                assert!(rows[3..].iter().all(|r| !r.starter), "order {players:?}");
                assert!(rows[..3].windows(2).all(|w| w[0].tier <= w[1].tier));
                assert!(rows[3..].windows(2).all(|w| w[0].tier <= w[1].tier));
            }
        }
    }

    #[test]
    fn test_duplicates_and_unknown_ids_are_kept() {
        let mine = roster(1, None, &["4984", "4984", "ghost"], &[]);
        let players = catalog(vec![player("4984", "Patrick Mahomes", "QB", "KC")]);
        let scorer = TierScorer::new(std::slice::from_ref(&mine), &[]);

        let rows = project_roster(&mine, &players, &scorer);
        assert_eq!(rows.len(), mine.players.len());

        let ghost = rows.iter().find(|r| r.id == "ghost").unwrap();
        assert_eq!(ghost.name, "");
        assert_eq!(ghost.position, "");
        assert_eq!(ghost.team, "");
        assert_eq!(ghost.age, 0);
        assert_eq!(ghost.bye_display(), BYE_SENTINEL);
        assert_eq!(ghost.injury_status, "");
    }

    #[test]
    fn test_starter_not_in_players_is_flagged_not_added() {
        let mine = roster(1, None, &["9221"], &["9221", "4984"]);
        let scorer = TierScorer::new(std::slice::from_ref(&mine), &[]);
        let rows = project_roster(&mine, &PlayerCatalog::new(), &scorer);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starter);
    }
}
