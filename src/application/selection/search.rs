//! Depth-first branch-and-bound over the squad program.
//!
//! Each node fixes some columns in or out. Nodes are closed when a quota
//! cannot be filled, when the cheapest fill breaks the budget, or when the
//! Lagrangian bound cannot beat the incumbent under the tie-break ordering.
//! A parallel run first expands the root breadth-first into a frontier of
//! disjoint subtrees, then a fixed rayon pool drains that frontier.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use rust_decimal::RoundingStrategy;
use tracing::{debug, warn};

use super::incumbent::{Candidate, Incumbent};
use super::program::SquadProgram;
use super::relaxation::{self, branch_preference, fractional_columns, Relaxation, Residual};
use crate::domain::money::SCORE_SCALE;
use crate::domain::{rank_order, PerPosition, Player, Points, Position, Price, SquadRules};
use crate::error::Result;
use crate::port::outbound::solver::SearchStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Free,
    Include,
    Exclude,
}

#[derive(Debug, Clone)]
struct Node {
    decisions: Vec<Decision>,
}

impl Node {
    fn root(columns: usize) -> Self {
        Self {
            decisions: vec![Decision::Free; columns],
        }
    }

    fn with(&self, column: usize, decision: Decision) -> Self {
        let mut child = self.clone();
        child.decisions[column] = decision;
        child
    }
}

enum Expansion {
    Closed,
    Branch { include: Node, exclude: Node },
}

/// Cooperative stop flag plus an optional deadline.
#[derive(Debug)]
struct StopControl {
    stop: AtomicBool,
    deadline: Option<Instant>,
}

impl StopControl {
    fn should_stop(&self) -> bool {
        if self.stop.load(Ordering::Relaxed) {
            return true;
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            self.stop.store(true, Ordering::Relaxed);
            return true;
        }
        false
    }

    fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// Result of one search run.
#[derive(Debug)]
pub struct Outcome {
    pub best: Option<Candidate>,
    /// The deadline cut the search short.
    pub interrupted: bool,
    pub stats: SearchStats,
}

/// One branch-and-bound run over a validated pool.
#[derive(Debug)]
pub struct Search<'a> {
    pool: &'a [Player],
    rules: &'a SquadRules,
    program: &'a SquadProgram,
    incumbent: Incumbent,
    control: StopControl,
    explored: AtomicU64,
    pruned: AtomicU64,
}

impl<'a> Search<'a> {
    #[must_use]
    pub fn new(
        pool: &'a [Player],
        rules: &'a SquadRules,
        program: &'a SquadProgram,
        deadline: Option<Instant>,
    ) -> Self {
        Self {
            pool,
            rules,
            program,
            incumbent: Incumbent::new(),
            control: StopControl {
                stop: AtomicBool::new(false),
                deadline,
            },
            explored: AtomicU64::new(0),
            pruned: AtomicU64::new(0),
        }
    }

    /// Run the search to exhaustion or until the deadline.
    ///
    /// `frontier_size` is the number of open subtrees handed to the pool when
    /// `workers > 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be started.
    pub fn run(self, workers: usize, frontier_size: usize) -> Result<Outcome> {
        let started = Instant::now();
        let root = Node::root(self.pool.len());

        if workers <= 1 {
            self.drain(root);
        } else {
            let frontier = self.frontier(root, frontier_size.max(workers));
            debug!(subtrees = frontier.len(), workers, "Frontier expanded");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()?;
            pool.install(|| {
                frontier.into_par_iter().for_each(|node| self.drain(node));
            });
        }

        let stats = SearchStats {
            nodes_explored: self.explored.load(Ordering::Relaxed),
            nodes_pruned: self.pruned.load(Ordering::Relaxed),
            incumbent_updates: self.incumbent.updates(),
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        Ok(Outcome {
            interrupted: self.control.stopped(),
            best: self.incumbent.into_inner(),
            stats,
        })
    }

    /// Breadth-first expansion until `target` open nodes exist.
    fn frontier(&self, root: Node, target: usize) -> Vec<Node> {
        let mut queue = VecDeque::from([root]);
        while queue.len() < target && !self.control.should_stop() {
            let Some(node) = queue.pop_front() else {
                break;
            };
            if let Expansion::Branch { include, exclude } = self.expand(&node) {
                queue.push_back(include);
                queue.push_back(exclude);
            }
        }
        queue.into()
    }

    /// Depth-first search of one subtree, include branch first.
    fn drain(&self, root: Node) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if self.control.should_stop() {
                return;
            }
            if let Expansion::Branch { include, exclude } = self.expand(&node) {
                stack.push(exclude);
                stack.push(include);
            }
        }
    }

    fn prune(&self) -> Expansion {
        self.pruned.fetch_add(1, Ordering::Relaxed);
        Expansion::Closed
    }

    fn expand(&self, node: &Node) -> Expansion {
        self.explored.fetch_add(1, Ordering::Relaxed);

        let mut included = Vec::new();
        let mut counts: PerPosition<u32> = PerPosition::splat(0);
        let mut team_counts = vec![0_u32; self.program.num_teams()];
        let mut spent = Price::ZERO;
        let mut score = Points::ZERO;
        for (column, decision) in node.decisions.iter().enumerate() {
            if *decision == Decision::Include {
                let player = &self.pool[column];
                included.push(column);
                *counts.get_mut(player.position()) += 1;
                team_counts[self.program.team_of(column)] += 1;
                spent += player.price();
                score += player.score();
            }
        }
        if spent > self.rules.budget {
            return self.prune();
        }

        let mut residual = Residual::new(self.pool, self.rules.budget - spent);
        for position in Position::ALL {
            let Some(need) = self.rules.quota(position).checked_sub(counts.get(position)) else {
                return self.prune();
            };
            if need == 0 {
                continue;
            }
            let candidates = (0..self.pool.len())
                .filter(|c| {
                    node.decisions[*c] == Decision::Free
                        && self.pool[*c].position() == position
                        && team_counts[self.program.team_of(*c)] < self.rules.team_cap
                })
                .collect();
            residual.push_group(candidates, need as usize);
        }

        if residual.is_complete() {
            self.accept(included);
            return Expansion::Closed;
        }
        if residual.has_shortfall() {
            return self.prune();
        }
        let cheapest = residual.cheapest_completion();
        if cheapest > residual.budget() {
            return self.prune();
        }
        let Some(relaxed) = relaxation::solve(&residual) else {
            return self.prune();
        };

        // Reachable scores are multiples of 10^-6, so the bound may be floored.
        let bound = (score + relaxed.bound())
            .round_dp_with_strategy(SCORE_SCALE, RoundingStrategy::ToNegativeInfinity);
        if let Some((best_score, best_price)) = self.incumbent.key() {
            if bound < best_score || (bound == best_score && spent + cheapest > best_price) {
                return self.prune();
            }
        }

        match relaxed {
            Relaxation::Integral { fill, .. } => {
                let mut columns = included;
                columns.extend(fill.picks.iter().copied());
                match self.over_cap_team(&columns) {
                    None => {
                        // Best fill by score, then price, then id: nothing
                        // else in this subtree can be preferred.
                        self.accept(columns);
                        Expansion::Closed
                    }
                    Some(team) => {
                        let column = fill
                            .picks
                            .iter()
                            .copied()
                            .filter(|c| self.program.team_of(*c) == team)
                            .max_by(|a, b| rank_order(&self.pool[*a], &self.pool[*b]));
                        match column {
                            Some(column) => Self::branch(node, column),
                            None => self.prune(),
                        }
                    }
                }
            }
            Relaxation::Fractional {
                over, under, theta, ..
            } => {
                let mut columns = included;
                columns.extend(under.picks.iter().copied());
                if self.over_cap_team(&columns).is_none() {
                    self.accept(columns);
                }
                let column = fractional_columns(&over, &under, theta)
                    .into_iter()
                    .min_by(|a, b| branch_preference(self.pool, *a, *b))
                    .map(|(column, _)| column);
                match column {
                    Some(column) => Self::branch(node, column),
                    None => self.prune(),
                }
            }
        }
    }

    fn branch(node: &Node, column: usize) -> Expansion {
        Expansion::Branch {
            include: node.with(column, Decision::Include),
            exclude: node.with(column, Decision::Exclude),
        }
    }

    /// Lowest-numbered team holding more players than the cap allows.
    fn over_cap_team(&self, columns: &[usize]) -> Option<usize> {
        let mut team_counts = vec![0_u32; self.program.num_teams()];
        for column in columns {
            team_counts[self.program.team_of(*column)] += 1;
        }
        team_counts.iter().position(|n| *n > self.rules.team_cap)
    }

    /// Search depth-first until one squad is accepted, then raise the stop
    /// flag as an expired deadline would.
    #[cfg(test)]
    pub(super) fn stop_at_first_incumbent(&self) {
        let mut stack = vec![Node::root(self.pool.len())];
        while let Some(node) = stack.pop() {
            if let Expansion::Branch { include, exclude } = self.expand(&node) {
                stack.push(exclude);
                stack.push(include);
            }
            if self.incumbent.updates() > 0 {
                break;
            }
        }
        self.control.stop.store(true, Ordering::Relaxed);
    }

    fn accept(&self, columns: Vec<usize>) {
        let mask = self.program.mask(&columns);
        if let Some(row) = self.program.first_violation(&mask) {
            warn!(constraint = %row.label, "Discarding squad that breaks a constraint row");
            return;
        }
        let score = self.program.value(&mask);
        self.incumbent
            .offer(Candidate::from_columns(self.pool, columns, score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlayerId, TeamId};
    use rust_decimal_macros::dec;

    fn player(id: u32, position: Position, team: &str, price: Price, score: Points) -> Player {
        Player::try_new(
            PlayerId::new(id),
            None,
            position,
            TeamId::from(team),
            price,
            score,
        )
        .unwrap()
    }

    fn tiny_rules() -> SquadRules {
        SquadRules {
            budget: dec!(20),
            squad_size: 2,
            quotas: PerPosition {
                gk: 1,
                def: 1,
                mid: 0,
                fwd: 0,
            },
            team_cap: 1,
            formations: Vec::new(),
        }
    }

    #[test]
    fn finds_best_pair_under_team_cap() {
        let pool = vec![
            player(1, Position::Goalkeeper, "A", dec!(5.0), dec!(6)),
            player(2, Position::Goalkeeper, "B", dec!(4.0), dec!(4)),
            player(3, Position::Defender, "A", dec!(5.0), dec!(9)),
            player(4, Position::Defender, "C", dec!(6.0), dec!(5)),
        ];
        let rules = tiny_rules();
        let program = SquadProgram::build(&pool, &rules);

        let outcome = Search::new(&pool, &rules, &program, None).run(1, 1).unwrap();
        let best = outcome.best.unwrap();

        // {1,3} breaks the team cap; {2,3} scores 13 against {1,4} at 11.
        assert_eq!(best.ids, vec![PlayerId::new(2), PlayerId::new(3)]);
        assert!(!outcome.interrupted);
        assert!(outcome.stats.nodes_explored > 0);
    }

    #[test]
    fn stop_after_first_squad_keeps_it() {
        let pool = vec![
            player(1, Position::Goalkeeper, "A", dec!(5.0), dec!(6)),
            player(2, Position::Goalkeeper, "B", dec!(4.0), dec!(4)),
            player(3, Position::Defender, "A", dec!(5.0), dec!(9)),
            player(4, Position::Defender, "C", dec!(6.0), dec!(5)),
        ];
        let rules = tiny_rules();
        let program = SquadProgram::build(&pool, &rules);

        let search = Search::new(&pool, &rules, &program, None);
        search.stop_at_first_incumbent();
        let outcome = search.run(1, 1).unwrap();

        assert!(outcome.interrupted);
        assert_eq!(outcome.stats.incumbent_updates, 1);
        let best = outcome.best.unwrap();
        assert_eq!(best.ids.len(), 2);
        assert!(best.price <= rules.budget);
    }

    #[test]
    fn expired_deadline_stops_before_search() {
        let pool = vec![
            player(1, Position::Goalkeeper, "A", dec!(5.0), dec!(6)),
            player(2, Position::Defender, "B", dec!(5.0), dec!(9)),
        ];
        let rules = tiny_rules();
        let program = SquadProgram::build(&pool, &rules);

        let outcome = Search::new(&pool, &rules, &program, Some(Instant::now()))
            .run(1, 1)
            .unwrap();
        assert!(outcome.interrupted);
        assert!(outcome.best.is_none());
    }
}
