//! Application services (use cases).
//!
//! These services hold the selection logic and coordinate it through the
//! ports: validating the pool, solving for the squad, composing the lineup
//! and naming the captain.

pub mod captaincy;
pub mod catalog;
pub mod lineup;
pub mod orchestrator;
pub mod selection;
