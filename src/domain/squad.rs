//! Selected squads, lineups and captaincy.
//!
//! All three are immutable once built. A new request produces new values;
//! nothing here is updated in place.

use serde::Serialize;

use super::formation::Formation;
use super::id::{PlayerId, TeamId};
use super::money::{Points, Price};
use super::player::{rank_order, sort_by_rank, Player};
use super::position::{PerPosition, Position};

/// Sum of player prices.
#[must_use]
pub fn total_price(players: &[Player]) -> Price {
    players.iter().map(Player::price).sum()
}

/// Sum of player scores.
#[must_use]
pub fn total_score(players: &[Player]) -> Points {
    players.iter().map(Player::score).sum()
}

/// Count players at each position.
#[must_use]
pub fn position_counts(players: &[Player]) -> PerPosition<u32> {
    let mut counts = PerPosition::splat(0);
    for player in players {
        *counts.get_mut(player.position()) += 1;
    }
    counts
}

/// Group players by position in canonical order, keeping input order within
/// each group.
#[must_use]
pub fn group_by_position(players: &[Player]) -> Vec<(Position, Vec<&Player>)> {
    Position::ALL
        .iter()
        .map(|position| {
            let group = players
                .iter()
                .filter(|p| p.position() == *position)
                .collect();
            (*position, group)
        })
        .collect()
}

/// A selected squad. Players are held in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Squad {
    players: Vec<Player>,
}

impl Squad {
    /// Wrap selected players, normalizing to id order.
    #[must_use]
    pub fn new(mut players: Vec<Player>) -> Self {
        players.sort_by_key(Player::id);
        Self { players }
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

    /// Player ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(Player::id).collect()
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.binary_search_by_key(&id, Player::id).is_ok()
    }

    #[must_use]
    pub fn total_price(&self) -> Price {
        total_price(&self.players)
    }

    #[must_use]
    pub fn total_score(&self) -> Points {
        total_score(&self.players)
    }

    #[must_use]
    pub fn position_counts(&self) -> PerPosition<u32> {
        position_counts(&self.players)
    }

    /// Number of squad players from one team.
    #[must_use]
    pub fn team_count(&self, team: &TeamId) -> u32 {
        self.players.iter().filter(|p| p.team() == team).count() as u32
    }

    /// Squad players at one position, best first.
    #[must_use]
    pub fn ranked_at(&self, position: Position) -> Vec<Player> {
        let mut group: Vec<Player> = self
            .players
            .iter()
            .filter(|p| p.position() == position)
            .cloned()
            .collect();
        sort_by_rank(&mut group);
        group
    }
}

/// Starting eleven, bench and the formation they were picked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lineup {
    formation: Formation,
    starters: Vec<Player>,
    bench: Vec<Player>,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    starting_score: Points,
}

impl Lineup {
    /// Build a lineup. Starters and bench are stored grouped by position,
    /// best first within each group.
    #[must_use]
    pub fn new(formation: Formation, mut starters: Vec<Player>, mut bench: Vec<Player>) -> Self {
        starters.sort_by(|a, b| {
            a.position()
                .cmp(&b.position())
                .then_with(|| rank_order(a, b))
        });
        bench.sort_by(|a, b| {
            a.position()
                .cmp(&b.position())
                .then_with(|| rank_order(a, b))
        });
        let starting_score = total_score(&starters);
        Self {
            formation,
            starters,
            bench,
            starting_score,
        }
    }

    #[must_use]
    pub const fn formation(&self) -> Formation {
        self.formation
    }

    #[must_use]
    pub fn starters(&self) -> &[Player] {
        &self.starters
    }

    #[must_use]
    pub fn bench(&self) -> &[Player] {
        &self.bench
    }

    /// Summed score of the starting eleven, without any captain bonus.
    #[must_use]
    pub const fn starting_score(&self) -> Points {
        self.starting_score
    }

    #[must_use]
    pub fn bench_score(&self) -> Points {
        total_score(&self.bench)
    }

    #[must_use]
    pub fn starters_by_position(&self) -> Vec<(Position, Vec<&Player>)> {
        group_by_position(&self.starters)
    }

    #[must_use]
    pub fn bench_by_position(&self) -> Vec<(Position, Vec<&Player>)> {
        group_by_position(&self.bench)
    }
}

/// Captain and vice-captain, both drawn from the starting eleven.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaptaincyAssignment {
    captain: Option<Player>,
    vice_captain: Option<Player>,
}

impl CaptaincyAssignment {
    #[must_use]
    pub const fn new(captain: Option<Player>, vice_captain: Option<Player>) -> Self {
        Self {
            captain,
            vice_captain,
        }
    }

    #[must_use]
    pub const fn captain(&self) -> Option<&Player> {
        self.captain.as_ref()
    }

    #[must_use]
    pub const fn vice_captain(&self) -> Option<&Player> {
        self.vice_captain.as_ref()
    }

    /// Extra points credited for the captain: the captain's score counts
    /// twice in the reported total.
    #[must_use]
    pub fn bonus(&self) -> Points {
        self.captain.as_ref().map_or(Points::ZERO, Player::score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn player(id: u32, position: Position, price: Price, score: Points) -> Player {
        Player::try_new(
            PlayerId::new(id),
            None,
            position,
            TeamId::from("A"),
            price,
            score,
        )
        .unwrap()
    }

    #[test]
    fn squad_orders_players_by_id() {
        let squad = Squad::new(vec![
            player(5, Position::Forward, dec!(7.0), dec!(3)),
            player(1, Position::Goalkeeper, dec!(4.5), dec!(2)),
        ]);
        assert_eq!(squad.ids(), vec![PlayerId::new(1), PlayerId::new(5)]);
        assert!(squad.contains(PlayerId::new(5)));
        assert!(!squad.contains(PlayerId::new(2)));
        assert_eq!(squad.total_price(), dec!(11.5));
        assert_eq!(squad.total_score(), dec!(5));
    }

    #[test]
    fn lineup_groups_starters_by_position() {
        let lineup = Lineup::new(
            Formation::new(3, 4, 3),
            vec![
                player(3, Position::Forward, dec!(8), dec!(6)),
                player(1, Position::Goalkeeper, dec!(5), dec!(3)),
                player(2, Position::Defender, dec!(5), dec!(4)),
            ],
            vec![player(4, Position::Midfielder, dec!(5), dec!(1.5))],
        );
        let order: Vec<u32> = lineup.starters().iter().map(|p| p.id().value()).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(lineup.starting_score(), dec!(13));
        assert_eq!(lineup.bench_score(), dec!(1.5));
    }

    #[test]
    fn captain_bonus_is_captain_score() {
        let captain = player(7, Position::Midfielder, dec!(10), dec!(8.5));
        let assignment = CaptaincyAssignment::new(Some(captain), None);
        assert_eq!(assignment.bonus(), dec!(8.5));
        assert_eq!(CaptaincyAssignment::default().bonus(), dec!(0));
    }
}
