//! Player catalog: validation and normalization of the scored pool.
//!
//! Raw [`PlayerRecord`]s from the scoring provider become typed
//! [`Player`]s here. Every InvalidInput condition is detected in this module,
//! so the selector only ever sees a well-formed pool.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{
    sort_by_rank, DomainError, Player, PlayerId, Points, Position, TeamId,
};
use crate::port::outbound::source::PlayerRecord;

/// A validated pool of players with unique ids, held in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct PlayerCatalog {
    players: Vec<Player>,
}

impl PlayerCatalog {
    /// Validate raw records from the scoring provider.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] found in input order: an unknown
    /// position, a negative or non-tenth price, or a repeated id.
    pub fn from_records(records: Vec<PlayerRecord>) -> Result<Self, DomainError> {
        let players = records
            .into_iter()
            .map(|record| {
                let position: Position = record.position.parse()?;
                Player::try_new(
                    PlayerId::new(record.id),
                    record.name,
                    position,
                    TeamId::new(record.team),
                    record.price,
                    record.score,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_players(players)
    }

    /// Build a catalog from already-typed players.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicatePlayerId`] if two players share an id.
    pub fn from_players(mut players: Vec<Player>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(player.id()) {
                return Err(DomainError::DuplicatePlayerId { id: player.id() });
            }
        }

        players.sort_by_key(Player::id);
        debug!(players = players.len(), "Player catalog validated");
        Ok(Self { players })
    }

    /// Drop players whose score is at or below `threshold`.
    #[must_use]
    pub fn with_min_score(mut self, threshold: Points) -> Self {
        let before = self.players.len();
        self.players.retain(|p| p.score() > threshold);
        debug!(
            %threshold,
            dropped = before - self.players.len(),
            "Applied minimum score filter"
        );
        self
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Best `n` players per position by score, then price, then id.
    ///
    /// With a `filter`, only that position is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTopCount`] when `n` is zero.
    pub fn top_by_position(
        &self,
        n: usize,
        filter: Option<Position>,
    ) -> Result<Vec<(Position, Vec<Player>)>, DomainError> {
        if n == 0 {
            return Err(DomainError::InvalidTopCount);
        }

        let positions: Vec<Position> = match filter {
            Some(position) => vec![position],
            None => Position::ALL.to_vec(),
        };

        Ok(positions
            .into_iter()
            .map(|position| {
                let mut group: Vec<Player> = self
                    .players
                    .iter()
                    .filter(|p| p.position() == position)
                    .cloned()
                    .collect();
                sort_by_rank(&mut group);
                group.truncate(n);
                (position, group)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn record(id: u32, position: &str, team: &str, price: Decimal, score: Decimal) -> PlayerRecord {
        PlayerRecord {
            id,
            name: None,
            position: position.to_string(),
            team: team.to_string(),
            price,
            score,
        }
    }

    #[test]
    fn validates_and_sorts_by_id() {
        let catalog = PlayerCatalog::from_records(vec![
            record(3, "MID", "A", dec!(5.0), dec!(4)),
            record(1, "gk", "B", dec!(4.0), dec!(2)),
            record(2, "4", "C", dec!(7.5), dec!(5)),
        ])
        .unwrap();

        let ids: Vec<u32> = catalog.players().iter().map(|p| p.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.players()[1].position(), Position::Forward);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = PlayerCatalog::from_records(vec![
            record(7, "MID", "A", dec!(5.0), dec!(4)),
            record(7, "DEF", "B", dec!(4.0), dec!(2)),
        ]);
        assert_eq!(
            result.unwrap_err(),
            DomainError::DuplicatePlayerId {
                id: PlayerId::new(7)
            }
        );
    }

    #[test]
    fn rejects_unknown_position() {
        let result = PlayerCatalog::from_records(vec![record(1, "SW", "A", dec!(5.0), dec!(4))]);
        assert!(matches!(result, Err(DomainError::UnknownPosition { .. })));
    }

    #[test]
    fn rejects_negative_price() {
        let result = PlayerCatalog::from_records(vec![record(1, "FWD", "A", dec!(-5.0), dec!(4))]);
        assert!(matches!(result, Err(DomainError::NegativePrice { .. })));
    }

    #[test]
    fn min_score_filter_drops_non_positive() {
        let catalog = PlayerCatalog::from_records(vec![
            record(1, "MID", "A", dec!(5.0), dec!(0)),
            record(2, "MID", "A", dec!(5.0), dec!(-1.5)),
            record(3, "MID", "A", dec!(5.0), dec!(0.1)),
        ])
        .unwrap()
        .with_min_score(Decimal::ZERO);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.players()[0].id(), PlayerId::new(3));
    }

    #[test]
    fn top_by_position_ranks_and_truncates() {
        let catalog = PlayerCatalog::from_records(vec![
            record(1, "MID", "A", dec!(8.0), dec!(6)),
            record(2, "MID", "B", dec!(6.0), dec!(6)),
            record(3, "MID", "C", dec!(5.0), dec!(3)),
            record(4, "GK", "C", dec!(5.0), dec!(3)),
        ])
        .unwrap();

        let top = catalog.top_by_position(2, Some(Position::Midfielder)).unwrap();
        assert_eq!(top.len(), 1);
        let ids: Vec<u32> = top[0].1.iter().map(|p| p.id().value()).collect();
        assert_eq!(ids, vec![2, 1]);

        let all = catalog.top_by_position(1, None).unwrap();
        assert_eq!(all.len(), 4);
        assert!(all[3].1.is_empty());
    }

    #[test]
    fn top_by_position_rejects_zero() {
        let catalog = PlayerCatalog::default();
        assert_eq!(
            catalog.top_by_position(0, None).unwrap_err(),
            DomainError::InvalidTopCount
        );
    }
}
