//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the collaborators the core depends on: the
//! scoring provider that supplies players and the squad search backend.

pub mod solver;
pub mod source;
