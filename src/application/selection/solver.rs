//! [`BranchAndBoundSolver`]: the [`SquadSolver`] port over an exact search.

use std::time::Instant;

use tracing::{info, warn};

use super::program::SquadProgram;
use super::search::{Outcome, Search};
use crate::domain::{DomainError, Player, Position, Price, Squad, SquadRules};
use crate::error::{Error, Result, SelectionError};
use crate::port::outbound::solver::{SearchLimits, SolutionStatus, SquadSolution, SquadSolver};

/// Tuning for [`BranchAndBoundSolver`].
#[derive(Debug, Clone)]
pub struct BranchAndBoundConfig {
    /// Open subtrees prepared per worker before a parallel run.
    pub frontier_per_worker: usize,
}

impl Default for BranchAndBoundConfig {
    fn default() -> Self {
        Self {
            frontier_per_worker: 4,
        }
    }
}

/// Branch-and-bound squad selector.
#[derive(Debug, Clone, Default)]
pub struct BranchAndBoundSolver {
    config: BranchAndBoundConfig,
}

impl BranchAndBoundSolver {
    #[must_use]
    pub const fn new(config: BranchAndBoundConfig) -> Self {
        Self { config }
    }
}

impl SquadSolver for BranchAndBoundSolver {
    fn name(&self) -> &'static str {
        "branch_and_bound"
    }

    fn solve(
        &self,
        pool: &[Player],
        rules: &SquadRules,
        limits: &SearchLimits,
    ) -> Result<SquadSolution> {
        rules.validate()?;

        let mut pool = pool.to_vec();
        pool.sort_by_key(Player::id);
        if let Some(pair) = pool.windows(2).find(|w| w[0].id() == w[1].id()) {
            return Err(DomainError::DuplicatePlayerId { id: pair[0].id() }.into());
        }

        precheck(&pool, rules)?;

        let program = SquadProgram::build(&pool, rules);
        let workers = limits.workers.max(1);
        let deadline = limits
            .time_budget
            .and_then(|budget| Instant::now().checked_add(budget));

        info!(
            solver = self.name(),
            players = pool.len(),
            teams = program.num_teams(),
            workers,
            budget = %rules.budget,
            "Starting squad search"
        );

        let outcome = Search::new(&pool, rules, &program, deadline)
            .run(workers, workers * self.config.frontier_per_worker)?;
        finish(&pool, outcome, limits)
    }
}

/// Turn a finished or interrupted search into a solution.
///
/// An interrupted search with a squad is `TimeLimited`; without one it is
/// [`Error::SearchTimedOut`].
#[allow(clippy::result_large_err)]
fn finish(pool: &[Player], outcome: Outcome, limits: &SearchLimits) -> Result<SquadSolution> {
    let stats = outcome.stats;

    let Some(best) = outcome.best else {
        if outcome.interrupted {
            let budget_ms = limits
                .time_budget
                .map_or(0, |b| u64::try_from(b.as_millis()).unwrap_or(u64::MAX));
            warn!(budget_ms, "Time budget ran out before any squad was found");
            return Err(Error::SearchTimedOut { budget_ms });
        }
        return Err(SelectionError::NoFeasibleSquad.into());
    };

    let status = if outcome.interrupted {
        SolutionStatus::TimeLimited
    } else {
        SolutionStatus::Optimal
    };
    let squad = Squad::new(best.columns.iter().map(|c| pool[*c].clone()).collect());

    info!(
        status = status.as_str(),
        score = %best.score,
        price = %best.price,
        nodes = stats.nodes_explored,
        pruned = stats.nodes_pruned,
        elapsed_ms = stats.elapsed_ms,
        "Squad search finished"
    );

    Ok(SquadSolution {
        squad,
        status,
        stats,
    })
}

/// Reject pools that cannot meet the rules without searching.
///
/// # Errors
///
/// Returns [`SelectionError::PositionShortfall`] for the first position with
/// too few players, or [`SelectionError::OverBudget`] when even the cheapest
/// quota fill costs more than the budget.
pub fn precheck(pool: &[Player], rules: &SquadRules) -> std::result::Result<(), SelectionError> {
    let mut cheapest = Price::ZERO;
    for position in Position::ALL {
        let required = rules.quota(position);
        let mut prices: Vec<Price> = pool
            .iter()
            .filter(|p| p.position() == position)
            .map(Player::price)
            .collect();
        let available = prices.len() as u32;
        if available < required {
            return Err(SelectionError::PositionShortfall {
                position,
                required,
                available,
            });
        }
        prices.sort_unstable();
        cheapest += prices.iter().take(required as usize).copied().sum::<Price>();
    }

    if cheapest > rules.budget {
        return Err(SelectionError::OverBudget {
            cheapest,
            budget: rules.budget,
        });
    }
    Ok(())
}
