//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the selection core and everything around
//! it: where scored players come from, which search backend picks the squad,
//! and how drivers such as the CLI ask for a team.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │   CLI   │            │ Player file │              │  Squad    │
//! │ Adapter │            │   Adapter   │              │  Solver   │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`inbound::planner::PlanTeam`] - Full squad, lineup and captaincy pipeline
//! - [`outbound::source::PlayerSource`] - Scored player pool provider
//! - [`outbound::solver::SquadSolver`] - Constrained squad search backend

pub mod inbound;
pub mod outbound;
