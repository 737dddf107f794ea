//! Outbound adapters (driven side).

pub mod json_source;
