//! Scored player records and the shared ranking order.

use std::cmp::Ordering;

use serde::Serialize;

use super::error::DomainError;
use super::id::{PlayerId, TeamId};
use super::money::{is_tenth_granular, normalize_score, Points, Price};
use super::position::Position;

/// A validated player from the scored pool.
///
/// Constructed only through [`Player::try_new`], so every instance has a
/// non-negative tenth-granular price and a normalized score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    position: Position,
    team: TeamId,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    price: Price,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    score: Points,
}

impl Player {
    /// Create a validated player.
    ///
    /// `name` is display data only; when absent the player is shown as `#<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativePrice`] or [`DomainError::PriceGranularity`]
    /// when the price is invalid.
    pub fn try_new(
        id: PlayerId,
        name: Option<String>,
        position: Position,
        team: TeamId,
        price: Price,
        score: Points,
    ) -> Result<Self, DomainError> {
        if price < Price::ZERO {
            return Err(DomainError::NegativePrice { id, price });
        }
        if !is_tenth_granular(price) {
            return Err(DomainError::PriceGranularity { id, price });
        }

        Ok(Self {
            id,
            name: name.unwrap_or_else(|| format!("#{id}")),
            position,
            team,
            price: price.normalize(),
            score: normalize_score(score),
        })
    }

    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn team(&self) -> &TeamId {
        &self.team
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub const fn score(&self) -> Points {
        self.score
    }
}

/// Ranking used by the composer, the captaincy assigner and top-N queries:
/// higher score first, then lower price, then lower id.
#[must_use]
pub fn rank_order(a: &Player, b: &Player) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.price.cmp(&b.price))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort players in place by [`rank_order`].
pub fn sort_by_rank(players: &mut [Player]) {
    players.sort_by(rank_order);
}
