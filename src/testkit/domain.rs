//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Player`] and [`PlayerRecord`] so
//! tests focus on assertions rather than construction boilerplate.

use rust_decimal::Decimal;

use crate::domain::{Player, PlayerId, Position, TeamId};
use crate::port::outbound::source::PlayerRecord;

/// Create a validated player with no display name.
///
/// # Panics
///
/// Panics if the price is negative or not a multiple of 0.1.
pub fn player(id: u32, position: Position, team: &str, price: Decimal, score: Decimal) -> Player {
    named(id, &format!("#{id}"), position, team, price, score)
}

/// Create a validated player with a display name.
///
/// # Panics
///
/// Panics if the price is negative or not a multiple of 0.1.
pub fn named(
    id: u32,
    name: &str,
    position: Position,
    team: &str,
    price: Decimal,
    score: Decimal,
) -> Player {
    Player::try_new(
        PlayerId::new(id),
        Some(name.to_string()),
        position,
        TeamId::from(team),
        price,
        score,
    )
    .unwrap_or_else(|e| panic!("invalid test player {id}: {e}"))
}

/// Create a raw record as the scoring provider would deliver it.
pub fn record(id: u32, position: &str, team: &str, price: Decimal, score: Decimal) -> PlayerRecord {
    PlayerRecord {
        id,
        name: None,
        position: position.to_string(),
        team: team.to_string(),
        price,
        score,
    }
}

/// Convert validated players back into raw records.
pub fn records(players: &[Player]) -> Vec<PlayerRecord> {
    players
        .iter()
        .map(|p| PlayerRecord {
            id: p.id().value(),
            name: Some(p.name().to_string()),
            position: p.position().code().to_string(),
            team: p.team().to_string(),
            price: p.price(),
            score: p.score(),
        })
        .collect()
}

/// Sorted raw ids of a player slice.
pub fn ids(players: &[Player]) -> Vec<u32> {
    let mut ids: Vec<u32> = players.iter().map(|p| p.id().value()).collect();
    ids.sort_unstable();
    ids
}
