//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components from
//! application configuration.
//!
//! # Submodules
//!
//! - [`planner`] - Team planner construction
//! - [`solver`] - Squad solver construction

pub mod planner;
pub mod solver;
