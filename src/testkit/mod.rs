//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: Builders for players and raw records.
//! - [`pool`]: Quota-shaped and seeded random pools, plus an in-memory
//!   [`PlayerSource`](crate::port::outbound::source::PlayerSource).

pub mod domain;
pub mod pool;
