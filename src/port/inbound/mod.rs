//! Inbound (driving) ports consumed by inbound adapters.
//!
//! # Modules
//!
//! - [`planner`]: Team planning use case and its report type

pub mod planner;
