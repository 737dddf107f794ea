use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::{Position, Price};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// No squad or lineup satisfies the hard constraints.
///
/// Distinct from invalid input: the pool is well formed, it just cannot meet
/// the rules. Callers may relax the rules and try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("not enough {position} players: need {required}, pool has {available}")]
    PositionShortfall {
        position: Position,
        required: u32,
        available: u32,
    },

    #[error("cheapest valid squad costs {cheapest}, budget is {budget}")]
    OverBudget { cheapest: Price, budget: Price },

    #[error("no squad satisfies budget, quotas and team caps")]
    NoFeasibleSquad,

    #[error("squad cannot fill any formation")]
    NoFeasibleFormation,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("infeasible: {0}")]
    Infeasible(#[from] SelectionError),

    #[error("time budget of {budget_ms}ms ran out before any valid squad was found")]
    SearchTimedOut { budget_ms: u64 },

    #[error("failed to start search workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Return `true` for malformed pools rejected before search.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Return `true` when the rules cannot be met by the pool.
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
