//! Pure domain types: players, squads, lineups and the rules that bind them.
//!
//! Nothing here performs I/O or search. The application layer builds these
//! values; adapters only read them.

pub mod constraint;
pub mod error;
pub mod formation;
pub mod id;
pub mod money;
pub mod player;
pub mod position;
pub mod rules;
pub mod squad;

pub use constraint::{Constraint, ConstraintSense};
pub use error::DomainError;
pub use formation::{Formation, DEFAULT_FORMATIONS};
pub use id::{PlayerId, TeamId};
pub use money::{Points, Price};
pub use player::{rank_order, sort_by_rank, Player};
pub use position::{PerPosition, Position};
pub use rules::SquadRules;
pub use squad::{CaptaincyAssignment, Lineup, Squad};
