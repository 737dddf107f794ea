//! CLI module graph.

pub mod build;
pub mod check;
pub mod command;
pub mod diagnostic;
pub mod exit;
pub mod output;
pub mod top;
