//! Team planning use case.
//!
//! One call takes a raw scored pool and returns the squad, the lineup, the
//! captaincy and the summary totals a presentation layer shows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{CaptaincyAssignment, Lineup, Points, Price, Squad, SquadRules};
use crate::error::Result;
use crate::port::outbound::solver::{SearchLimits, SearchStats, SolutionStatus};
use crate::port::outbound::source::PlayerRecord;

/// Everything produced for one planning request.
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    /// The 15 selected players.
    pub squad: Squad,
    /// Starting eleven, bench and formation.
    pub lineup: Lineup,
    /// Captain and vice-captain.
    pub captaincy: CaptaincyAssignment,
    /// Whether the squad is certified optimal.
    pub status: SolutionStatus,
    /// Search counters.
    pub stats: SearchStats,
    /// Total price of the squad.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_cost: Price,
    /// Starting eleven score with the captain counted twice.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub starting_points: Points,
    /// Summed score of the bench.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub bench_points: Points,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
}

impl TeamReport {
    /// Return `true` if the squad is certified optimal.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Driving port for the full selection pipeline.
pub trait PlanTeam: Send + Sync {
    /// Validate the pool, select a squad, compose a lineup and assign
    /// captaincy.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for a malformed pool, `Error::Infeasible`
    /// when the rules cannot be met, and `Error::SearchTimedOut` when the time
    /// budget expired before any valid squad was found.
    fn plan(
        &self,
        records: Vec<PlayerRecord>,
        rules: &SquadRules,
        limits: &SearchLimits,
    ) -> Result<TeamReport>;
}
