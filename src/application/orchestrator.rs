//! Team planning pipeline.
//!
//! Sequences the catalog, the squad solver, the lineup composer and the
//! captaincy assigner for one request. Nothing is shared between requests.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use super::captaincy::CaptaincyAssigner;
use super::catalog::PlayerCatalog;
use super::lineup::LineupComposer;
use crate::domain::{Points, SquadRules};
use crate::error::Result;
use crate::port::inbound::planner::{PlanTeam, TeamReport};
use crate::port::outbound::solver::{SearchLimits, SquadSolver};
use crate::port::outbound::source::PlayerRecord;

/// Default implementation of [`PlanTeam`].
#[derive(Clone)]
pub struct TeamPlanner {
    solver: Arc<dyn SquadSolver>,
    composer: LineupComposer,
    assigner: CaptaincyAssigner,
    min_score: Option<Points>,
}

impl TeamPlanner {
    #[must_use]
    pub fn new(solver: Arc<dyn SquadSolver>) -> Self {
        Self {
            solver,
            composer: LineupComposer::new(),
            assigner: CaptaincyAssigner::new(),
            min_score: None,
        }
    }

    /// Drop players scoring at or below `threshold` before selection.
    #[must_use]
    pub fn with_min_score(mut self, threshold: Option<Points>) -> Self {
        self.min_score = threshold;
        self
    }

    #[must_use]
    pub fn solver(&self) -> &dyn SquadSolver {
        self.solver.as_ref()
    }
}

impl std::fmt::Debug for TeamPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamPlanner")
            .field("solver", &self.solver.name())
            .field("min_score", &self.min_score)
            .finish_non_exhaustive()
    }
}

impl PlanTeam for TeamPlanner {
    #[instrument(skip_all, fields(records = records.len()))]
    fn plan(
        &self,
        records: Vec<PlayerRecord>,
        rules: &SquadRules,
        limits: &SearchLimits,
    ) -> Result<TeamReport> {
        let mut catalog = PlayerCatalog::from_records(records)?;
        if let Some(threshold) = self.min_score {
            catalog = catalog.with_min_score(threshold);
        }
        info!(players = catalog.len(), "Player pool ready");

        let solution = self.solver.solve(catalog.players(), rules, limits)?;
        let lineup = self.composer.compose(&solution.squad, &rules.formations)?;
        let captaincy = self.assigner.assign(lineup.starters());

        let total_cost = solution.squad.total_price();
        let starting_points = lineup.starting_score() + captaincy.bonus();
        let bench_points = lineup.bench_score();

        info!(
            formation = %lineup.formation(),
            captain = ?captaincy.captain().map(|p| p.id().value()),
            %total_cost,
            %starting_points,
            status = solution.status.as_str(),
            "Team planned"
        );

        Ok(TeamReport {
            squad: solution.squad,
            lineup,
            captaincy,
            status: solution.status,
            stats: solution.stats,
            total_cost,
            starting_points,
            bench_points,
            generated_at: Utc::now(),
        })
    }
}
