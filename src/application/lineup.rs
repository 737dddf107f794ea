//! Starting eleven selection over a fixed formation list.

use tracing::debug;

use crate::domain::{Formation, Lineup, Player, Points, Position, Squad};
use crate::error::SelectionError;

/// Picks the formation and starters that maximize the starting score.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineupComposer;

impl LineupComposer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compose the lineup for `squad`.
    ///
    /// Every formation takes the best goalkeeper and the best players at each
    /// outfield position by score, then price, then id. The highest starting
    /// score wins and the earlier formation wins a tie.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NoFeasibleFormation`] if the squad cannot fill
    /// any formation.
    pub fn compose(&self, squad: &Squad, formations: &[Formation]) -> Result<Lineup, SelectionError> {
        let ranked: Vec<(Position, Vec<Player>)> = Position::ALL
            .iter()
            .map(|p| (*p, squad.ranked_at(*p)))
            .collect();

        let mut best: Option<(Formation, Vec<Player>, Points)> = None;
        for formation in formations {
            let Some(starters) = fill(&ranked, *formation) else {
                debug!(%formation, "Squad cannot fill formation");
                continue;
            };
            let total: Points = starters.iter().map(Player::score).sum();
            debug!(%formation, %total, "Evaluated formation");
            if best.as_ref().map_or(true, |(_, _, top)| total > *top) {
                best = Some((*formation, starters, total));
            }
        }

        let (formation, starters, _) = best.ok_or(SelectionError::NoFeasibleFormation)?;
        let bench = squad
            .players()
            .iter()
            .filter(|p| !starters.iter().any(|s| s.id() == p.id()))
            .cloned()
            .collect();

        Ok(Lineup::new(formation, starters, bench))
    }
}

fn fill(ranked: &[(Position, Vec<Player>)], formation: Formation) -> Option<Vec<Player>> {
    let mut starters = Vec::with_capacity(formation.starters() as usize);
    for (position, players) in ranked {
        let slots = formation.slots(*position) as usize;
        if players.len() < slots {
            return None;
        }
        starters.extend(players.iter().take(slots).cloned());
    }
    Some(starters)
}
