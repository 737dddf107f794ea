//! Selection rules passed explicitly into every component.

use rust_decimal::Decimal;
use serde::Serialize;

use super::formation::{Formation, DEFAULT_FORMATIONS, OUTFIELD_SLOTS};
use super::money::Price;
use super::position::{PerPosition, Position};
use crate::error::ConfigError;

/// Hard constraints on squad and lineup construction.
///
/// There is no process-wide instance: callers build one (usually from the
/// config file) and hand it to each component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SquadRules {
    /// Maximum total squad price.
    pub budget: Price,
    /// Exact number of players in a squad.
    pub squad_size: u32,
    /// Exact number of players per position.
    pub quotas: PerPosition<u32>,
    /// Maximum players from a single team.
    pub team_cap: u32,
    /// Formations searched by the lineup composer, in tie-break order.
    pub formations: Vec<Formation>,
}

impl Default for SquadRules {
    fn default() -> Self {
        Self {
            budget: Decimal::from(100),
            squad_size: 15,
            quotas: PerPosition {
                gk: 2,
                def: 5,
                mid: 5,
                fwd: 3,
            },
            team_cap: 3,
            formations: DEFAULT_FORMATIONS.to_vec(),
        }
    }
}

impl SquadRules {
    /// Rules with a different budget cap.
    #[must_use]
    pub fn with_budget(mut self, budget: Price) -> Self {
        self.budget = budget;
        self
    }

    /// Required count at a position.
    #[must_use]
    pub fn quota(&self, position: Position) -> u32 {
        self.quotas.get(position)
    }

    /// Check that the rules describe a solvable shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.budget < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "budget",
                reason: "must be 0 or greater".to_string(),
            });
        }
        if self.squad_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "squad_size",
                reason: "must be greater than 0".to_string(),
            });
        }
        let quota_total: u32 = Position::ALL.iter().map(|p| self.quota(*p)).sum();
        if quota_total != self.squad_size {
            return Err(ConfigError::InvalidValue {
                field: "quotas",
                reason: format!(
                    "quotas sum to {quota_total} but squad_size is {}",
                    self.squad_size
                ),
            });
        }
        if self.team_cap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "team_cap",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.formations.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "formations",
                reason: "at least one formation is required".to_string(),
            });
        }
        for formation in &self.formations {
            if formation.outfield() != OUTFIELD_SLOTS {
                return Err(ConfigError::InvalidValue {
                    field: "formations",
                    reason: format!("{formation} does not have {OUTFIELD_SLOTS} outfield players"),
                });
            }
            if let Some(position) = Position::ALL
                .iter()
                .find(|p| formation.slots(**p) > self.quota(**p))
            {
                return Err(ConfigError::InvalidValue {
                    field: "formations",
                    reason: format!("{formation} needs more {position} than the squad quota"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_rules_are_valid() {
        let rules = SquadRules::default();
        assert!(rules.validate().is_ok());
        assert_eq!(rules.budget, dec!(100));
        assert_eq!(rules.quota(Position::Forward), 3);
    }

    #[test]
    fn rejects_quota_size_mismatch() {
        let mut rules = SquadRules::default();
        rules.quotas.def = 4;
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::InvalidValue { field: "quotas", .. })
        ));
    }

    #[test]
    fn rejects_formation_exceeding_quota() {
        let mut rules = SquadRules::default();
        rules.formations = vec![Formation::new(2, 4, 4)];
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::InvalidValue { field: "formations", .. })
        ));
    }

    #[test]
    fn rejects_negative_budget() {
        let rules = SquadRules::default().with_budget(dec!(-1));
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::InvalidValue { field: "budget", .. })
        ));
    }
}
