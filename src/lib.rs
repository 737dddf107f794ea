//! Squadforge - budget-constrained fantasy squad selection.
//!
//! Picks the 15-player squad with the highest total value score under a
//! budget, fixed position quotas and a per-team cap, then derives the
//! starting eleven, bench and captaincy from it. Selection is an exact
//! branch-and-bound, so the same pool always yields the same squad.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Players, positions, formations, rules and squad values
//! - [`port`] - Traits at the seams: [`port::outbound::solver::SquadSolver`],
//!   [`port::outbound::source::PlayerSource`] and
//!   [`port::inbound::planner::PlanTeam`]
//! - [`application`] - Catalog validation, squad search, lineup and captaincy
//! - [`adapter`] - The CLI and the JSON pool reader
//! - [`infrastructure`] - Configuration loading and component factories
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use squadforge::application::orchestrator::TeamPlanner;
//! use squadforge::application::selection::BranchAndBoundSolver;
//! use squadforge::domain::SquadRules;
//! use squadforge::port::inbound::planner::PlanTeam;
//! use squadforge::port::outbound::solver::SearchLimits;
//! use squadforge::port::outbound::source::PlayerRecord;
//!
//! # fn pool() -> Vec<PlayerRecord> { Vec::new() }
//! let planner = TeamPlanner::new(Arc::new(BranchAndBoundSolver::default()));
//! let report = planner.plan(pool(), &SquadRules::default(), &SearchLimits::default())?;
//! println!("{} for {}", report.lineup.formation(), report.total_cost);
//! # Ok::<(), squadforge::error::Error>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
