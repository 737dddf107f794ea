//! Solver configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::port::outbound::solver::SearchLimits;

/// The `[solver]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Stop the search after this many milliseconds. `0` means no limit.
    pub time_budget_ms: u64,

    /// Search worker threads. `0` means one per available CPU.
    pub workers: usize,
}

impl SolverConfig {
    /// Worker count with the CPU default applied.
    #[must_use]
    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.workers
        }
    }

    /// Time budget, if any.
    #[must_use]
    pub const fn time_budget(&self) -> Option<Duration> {
        if self.time_budget_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.time_budget_ms))
        }
    }

    /// Search limits for one request.
    #[must_use]
    pub fn to_limits(&self) -> SearchLimits {
        let limits = SearchLimits::with_workers(self.effective_workers());
        match self.time_budget() {
            Some(budget) => limits.with_time_budget(budget),
            None => limits,
        }
    }
}
