//! The squad selection problem as an explicit 0/1 program.
//!
//! ```text
//! max   Σ score_i · x_i
//! s.t.  Σ price_i · x_i          ≤ budget
//!       Σ_{i ∈ pos} x_i          = quota(pos)      for each position
//!       Σ_{i ∈ team} x_i         ≤ team_cap        for each team
//!       x_i ∈ {0, 1}
//! ```
//!
//! Columns follow the pool order, which is ascending player id.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::{Constraint, Player, Position, SquadRules, TeamId};

/// Objective and constraint rows over one pool.
#[derive(Debug, Clone)]
pub struct SquadProgram {
    objective: Vec<Decimal>,
    constraints: Vec<Constraint>,
    /// Dense team index per column, teams numbered in ascending id order.
    team_of: Vec<usize>,
    teams: Vec<TeamId>,
}

impl SquadProgram {
    /// Build the program for `pool` under `rules`.
    #[must_use]
    pub fn build(pool: &[Player], rules: &SquadRules) -> Self {
        let objective = pool.iter().map(Player::score).collect();

        let mut team_index: BTreeMap<&TeamId, usize> = BTreeMap::new();
        for player in pool {
            team_index.entry(player.team()).or_insert(0);
        }
        for (index, slot) in team_index.values_mut().enumerate() {
            *slot = index;
        }
        let teams: Vec<TeamId> = team_index.keys().map(|t| (*t).clone()).collect();
        let team_of: Vec<usize> = pool.iter().map(|p| team_index[p.team()]).collect();

        let mut constraints = Vec::with_capacity(1 + Position::ALL.len() + teams.len());
        constraints.push(Constraint::leq(
            "budget",
            pool.iter().map(Player::price).collect(),
            rules.budget,
        ));
        for position in Position::ALL {
            constraints.push(Constraint::eq(
                format!("quota_{}", position.code()),
                indicator(pool, |p| p.position() == position),
                Decimal::from(rules.quota(position)),
            ));
        }
        for (index, team) in teams.iter().enumerate() {
            constraints.push(Constraint::leq(
                format!("team_{team}"),
                team_of
                    .iter()
                    .map(|t| if *t == index { Decimal::ONE } else { Decimal::ZERO })
                    .collect(),
                Decimal::from(rules.team_cap),
            ));
        }

        Self {
            objective,
            constraints,
            team_of,
            teams,
        }
    }

    /// Number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Team index of column `var`.
    #[must_use]
    pub fn team_of(&self, var: usize) -> usize {
        self.team_of[var]
    }

    /// Number of distinct teams in the pool.
    #[must_use]
    pub fn num_teams(&self) -> usize {
        self.teams.len()
    }

    /// Objective value of a selection.
    #[must_use]
    pub fn value(&self, selected: &[bool]) -> Decimal {
        self.objective
            .iter()
            .zip(selected)
            .filter(|(_, on)| **on)
            .map(|(c, _)| *c)
            .sum()
    }

    /// First constraint row the selection breaks, if any.
    #[must_use]
    pub fn first_violation(&self, selected: &[bool]) -> Option<&Constraint> {
        self.constraints.iter().find(|c| !c.is_satisfied(selected))
    }

    /// Dense selection mask from column indices.
    #[must_use]
    pub fn mask(&self, vars: &[usize]) -> Vec<bool> {
        let mut selected = vec![false; self.num_vars()];
        for var in vars {
            selected[*var] = true;
        }
        selected
    }
}

fn indicator(pool: &[Player], pred: impl Fn(&Player) -> bool) -> Vec<Decimal> {
    pool.iter()
        .map(|p| if pred(p) { Decimal::ONE } else { Decimal::ZERO })
        .collect()
}
