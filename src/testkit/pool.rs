//! Player pools for selection tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use super::domain::player;
use crate::domain::{PerPosition, Player, Position, SquadRules};
use crate::error::Result;
use crate::port::outbound::source::{PlayerRecord, PlayerSource};

/// Shape of a synthetic pool.
#[derive(Debug, Clone, Copy)]
pub struct PoolShape {
    /// Players generated per position.
    pub per_position: PerPosition<u32>,
    /// Number of distinct teams players are spread over.
    pub teams: u32,
    /// Inclusive price range in tenths.
    pub price_tenths: (i64, i64),
}

impl PoolShape {
    /// Shape with `extra` players beyond each default quota.
    #[must_use]
    pub fn around_quotas(rules: &SquadRules, extra: u32, teams: u32) -> Self {
        let quota = |p| rules.quota(p) + extra;
        Self {
            per_position: PerPosition {
                gk: quota(Position::Goalkeeper),
                def: quota(Position::Defender),
                mid: quota(Position::Midfielder),
                fwd: quota(Position::Forward),
            },
            teams,
            price_tenths: (40, 130),
        }
    }
}

/// Exactly the quota at each position, each player on their own team.
pub fn quota_pool(rules: &SquadRules, price: Decimal, score: Decimal) -> Vec<Player> {
    let mut pool = Vec::new();
    let mut id = 0;
    for position in Position::ALL {
        for _ in 0..rules.quota(position) {
            id += 1;
            pool.push(player(id, position, &format!("T{id}"), price, score));
        }
    }
    pool
}

/// Seeded random pool. The same seed and shape always yield the same pool.
///
/// Scores carry three decimals so ties are rare but possible.
pub fn random_pool(seed: u64, shape: PoolShape) -> Vec<Player> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pool = Vec::new();
    let mut id = 0;
    let (lo, hi) = shape.price_tenths;
    for position in Position::ALL {
        for _ in 0..shape.per_position.get(position) {
            id += 1;
            let team = format!("T{}", rng.gen_range(0..shape.teams.max(1)));
            let price = Decimal::new(rng.gen_range(lo..=hi), 1);
            let score = Decimal::new(rng.gen_range(0..=9_000), 3);
            pool.push(player(id, position, &team, price, score));
        }
    }
    pool
}

/// Serialize players into the JSON pool document the CLI reads.
///
/// # Panics
///
/// Panics if serialization fails.
pub fn pool_json(players: &[Player]) -> String {
    serde_json::to_string_pretty(players).unwrap_or_else(|e| panic!("pool serialization: {e}"))
}

/// [`PlayerSource`] serving a fixed set of records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlayerSource {
    records: Vec<PlayerRecord>,
}

impl InMemoryPlayerSource {
    #[must_use]
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        Self { records }
    }
}

impl PlayerSource for InMemoryPlayerSource {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn load(&self) -> Result<Vec<PlayerRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn random_pool_is_reproducible() {
        let shape = PoolShape::around_quotas(&SquadRules::default(), 2, 6);
        let a = random_pool(7, shape);
        let b = random_pool(7, shape);

        assert_eq!(a, b);
        assert_eq!(a.len(), 23);
        assert!(a.iter().all(|p| p.price() >= dec!(4.0) && p.price() <= dec!(13.0)));
    }

    #[test]
    fn quota_pool_matches_rules() {
        let pool = quota_pool(&SquadRules::default(), dec!(5.0), dec!(1));
        assert_eq!(pool.len(), 15);
        assert_eq!(pool.iter().filter(|p| p.position() == Position::Forward).count(), 3);
    }
}
