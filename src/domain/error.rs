//! Domain validation errors for player input.
//!
//! These errors make up the InvalidInput family: the pool is malformed and
//! is rejected before any search starts. They are never retried.
//!
//! # Examples
//!
//! ```
//! use squadforge::domain::error::DomainError;
//! use squadforge::domain::{Player, PlayerId, Position, TeamId};
//! use rust_decimal_macros::dec;
//!
//! let result = Player::try_new(
//!     PlayerId::new(1),
//!     None,
//!     Position::Forward,
//!     TeamId::from("Spurs"),
//!     dec!(-1.0),
//!     dec!(3.2),
//! );
//!
//! assert!(matches!(result, Err(DomainError::NegativePrice { .. })));
//! ```

use thiserror::Error;

use super::id::PlayerId;

/// Errors that occur when player input violates domain invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Player ids must be unique within a pool.
    #[error("duplicate player id {id}")]
    DuplicatePlayerId {
        /// The repeated identifier.
        id: PlayerId,
    },

    /// Position must be one of GK, DEF, MID, FWD.
    #[error("unknown position '{value}'")]
    UnknownPosition {
        /// The unrecognized position value.
        value: String,
    },

    /// Prices must be zero or greater.
    #[error("player {id} has negative price {price}")]
    NegativePrice {
        /// The offending player.
        id: PlayerId,
        /// The invalid price.
        price: rust_decimal::Decimal,
    },

    /// Prices are quoted in tenths.
    #[error("player {id} price {price} is not a multiple of 0.1")]
    PriceGranularity {
        /// The offending player.
        id: PlayerId,
        /// The invalid price.
        price: rust_decimal::Decimal,
    },

    /// A pool entry could not be decoded into a player record.
    #[error("player record {index} is malformed: {reason}")]
    MalformedRecord {
        /// Zero-based position of the entry in the pool document.
        index: usize,
        /// Decoder message, naming the missing or mistyped field.
        reason: String,
    },

    /// Top-N queries need at least one player per position.
    #[error("top count must be greater than 0")]
    InvalidTopCount,
}
