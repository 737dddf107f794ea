//! Exact squad selection.
//!
//! [`BranchAndBoundSolver`] implements the squad solver port with an
//! explicit branch-and-bound over [`SquadProgram`]. Bounds come from a
//! Lagrangian relaxation of the budget row, and every comparison is exact
//! decimal arithmetic, so the chosen squad is the same on every run and for
//! any worker count.

pub mod incumbent;
pub mod program;
pub mod relaxation;
pub mod search;
pub mod solver;

pub use program::SquadProgram;
pub use solver::{precheck, BranchAndBoundConfig, BranchAndBoundSolver};
