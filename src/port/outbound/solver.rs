//! Solver port for constrained squad selection.
//!
//! Defines the trait a squad search backend implements, the limits a caller
//! may impose on it, and the tagged result it returns.
//!
//! # Overview
//!
//! - [`SquadSolver`]: Core selection interface
//! - [`SearchLimits`]: Time budget and worker count
//! - [`SquadSolution`]: Chosen squad plus [`SolutionStatus`] and [`SearchStats`]

use std::time::Duration;

use serde::Serialize;

use crate::domain::{Player, Squad, SquadRules};
use crate::error::Result;

/// Constrained 0/1 squad selection backend.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`); one solver instance
/// may serve concurrent requests, each over its own pool.
///
/// # Implementation Notes
///
/// - The returned squad must be the optimum under the tie-break ordering
///   (score, then price, then id sequence) whenever the status is
///   [`SolutionStatus::Optimal`]
/// - A squad returned with [`SolutionStatus::TimeLimited`] must still satisfy
///   every hard constraint
pub trait SquadSolver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Select a squad from a validated pool.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SelectionError`] (as `Error::Infeasible`) when no
    /// squad satisfies the rules, or `Error::SearchTimedOut` when the time
    /// budget ran out before any valid squad was found.
    fn solve(
        &self,
        pool: &[Player],
        rules: &SquadRules,
        limits: &SearchLimits,
    ) -> Result<SquadSolution>;
}

/// Caller-imposed limits on a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop and return the best squad so far after this long.
    pub time_budget: Option<Duration>,
    /// Number of worker threads exploring disjoint subtrees.
    pub workers: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            time_budget: None,
            workers: 1,
        }
    }
}

impl SearchLimits {
    /// Limits with a fixed worker count and no time budget.
    #[must_use]
    pub fn with_workers(workers: usize) -> Self {
        Self {
            time_budget: None,
            workers: workers.max(1),
        }
    }

    /// Limits with a time budget on top of the current ones.
    #[must_use]
    pub const fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

/// Termination status of a squad search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    /// The search tree was exhausted; the squad is certified optimal.
    Optimal,

    /// The time budget ran out; the squad is the best found so far and may
    /// not be optimal.
    TimeLimited,
}

impl SolutionStatus {
    /// Stable label used in logs and command output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::TimeLimited => "time_limited",
        }
    }
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes whose relaxation was evaluated.
    pub nodes_explored: u64,
    /// Nodes discarded by bound or infeasibility.
    pub nodes_pruned: u64,
    /// Times the shared best squad was replaced.
    pub incumbent_updates: u64,
    /// Wall-clock time spent searching, in milliseconds.
    pub elapsed_ms: u64,
}

/// Result of a squad search.
#[derive(Debug, Clone)]
pub struct SquadSolution {
    /// The selected squad.
    pub squad: Squad,

    /// Whether the squad is certified optimal.
    pub status: SolutionStatus,

    /// Search counters.
    pub stats: SearchStats,
}

impl SquadSolution {
    /// Return `true` if the search proved optimality.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}
