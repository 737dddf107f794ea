//! Solver factory.

use std::sync::Arc;

use crate::application::selection::{BranchAndBoundConfig, BranchAndBoundSolver};
use crate::port::outbound::solver::SquadSolver;

/// Build the default squad solver.
pub fn build_squad_solver() -> Arc<dyn SquadSolver> {
    Arc::new(BranchAndBoundSolver::new(BranchAndBoundConfig::default()))
}
