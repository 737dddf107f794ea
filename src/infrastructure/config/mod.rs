//! Infrastructure configuration modules.

pub mod logging;
pub mod rules;
pub mod settings;
pub mod solver;
