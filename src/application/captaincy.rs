//! Captain and vice-captain choice.

use crate::domain::{sort_by_rank, CaptaincyAssignment, Player, Points};

/// Names the two best positive-scoring starters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptaincyAssigner;

impl CaptaincyAssigner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Rank starters with a strictly positive score by score, then price,
    /// then id. The first is captain and the second vice-captain; either is
    /// absent when too few starters qualify.
    #[must_use]
    pub fn assign(&self, starters: &[Player]) -> CaptaincyAssignment {
        let mut eligible: Vec<Player> = starters
            .iter()
            .filter(|p| p.score() > Points::ZERO)
            .cloned()
            .collect();
        sort_by_rank(&mut eligible);

        let mut ranked = eligible.into_iter();
        let captain = ranked.next();
        let vice_captain = ranked.next();
        CaptaincyAssignment::new(captain, vice_captain)
    }
}
