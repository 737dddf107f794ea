//! Squad rules configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Formation, PerPosition, SquadRules, DEFAULT_FORMATIONS};

/// The `[rules]` table.
///
/// Every field is optional; missing fields take the standard game values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Spending cap in currency units.
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,

    /// Players per squad.
    pub squad_size: u32,

    /// Maximum players from a single team.
    pub team_cap: u32,

    /// Required players per position.
    pub quotas: PerPosition<u32>,

    /// Allowed formations, in tie-break order.
    pub formations: Vec<Formation>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        let rules = SquadRules::default();
        Self {
            budget: rules.budget,
            squad_size: rules.squad_size,
            team_cap: rules.team_cap,
            quotas: rules.quotas,
            formations: DEFAULT_FORMATIONS.to_vec(),
        }
    }
}

impl RulesConfig {
    /// Build the rules value passed into each component.
    #[must_use]
    pub fn to_rules(&self) -> SquadRules {
        SquadRules {
            budget: self.budget,
            squad_size: self.squad_size,
            quotas: self.quotas,
            team_cap: self.team_cap,
            formations: self.formations.clone(),
        }
    }
}
