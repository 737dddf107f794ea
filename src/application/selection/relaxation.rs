//! Lagrangian relaxation of the budget row.
//!
//! With team caps relaxed and the budget moved into the objective with a
//! multiplier `λ ≥ 0`, the node problem separates by position:
//!
//! ```text
//! h(λ) = λ·B' + Σ_pos top_k(score_i − λ·price_i)
//! ```
//!
//! `h(λ)` bounds the node optimum from above for every `λ ≥ 0`. The multiplier
//! is searched by bisection on the budget subgradient and kept at six decimal
//! places, so every bound below is exact decimal arithmetic.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::domain::{Player, Points, Price};

/// Smallest multiplier step the bisection distinguishes.
const LAMBDA_SCALE: u32 = 6;

/// Hard cap on bisection rounds.
const MAX_BISECTION_STEPS: u32 = 64;

/// Free players that may still enter the squad at a node, with how many each
/// position still needs.
#[derive(Debug)]
pub struct Residual<'a> {
    pool: &'a [Player],
    groups: Vec<Group>,
    budget: Price,
}

#[derive(Debug)]
struct Group {
    candidates: Vec<usize>,
    need: usize,
}

impl<'a> Residual<'a> {
    #[must_use]
    pub fn new(pool: &'a [Player], budget: Price) -> Self {
        Self {
            pool,
            groups: Vec::new(),
            budget,
        }
    }

    /// Register one open position: its candidate columns and open slots.
    pub fn push_group(&mut self, candidates: Vec<usize>, need: usize) {
        if need > 0 {
            self.groups.push(Group { candidates, need });
        }
    }

    /// Remaining budget `B'`.
    #[must_use]
    pub const fn budget(&self) -> Price {
        self.budget
    }

    /// Return `true` if no slot is left open.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.groups.is_empty()
    }

    /// Return `true` if some open position has fewer candidates than slots.
    #[must_use]
    pub fn has_shortfall(&self) -> bool {
        self.groups.iter().any(|g| g.candidates.len() < g.need)
    }

    /// Price of the cheapest way to fill every open slot, team caps ignored.
    #[must_use]
    pub fn cheapest_completion(&self) -> Price {
        self.groups
            .iter()
            .map(|group| {
                let mut prices: Vec<Price> = group
                    .candidates
                    .iter()
                    .map(|i| self.pool[*i].price())
                    .collect();
                prices.sort_unstable();
                prices.iter().take(group.need).copied().sum::<Price>()
            })
            .sum()
    }

    /// Best fill of every open slot for a fixed multiplier.
    ///
    /// Players are ranked by `score − λ·price`, then lower price, then lower
    /// id. At `λ = 0` this is the ordinary player ranking.
    #[must_use]
    pub fn select(&self, lambda: Decimal) -> Selection {
        let mut selection = Selection::default();

        for group in &self.groups {
            let mut ranked: Vec<(Decimal, usize)> = group
                .candidates
                .iter()
                .map(|i| {
                    let p = &self.pool[*i];
                    (p.score() - lambda * p.price(), *i)
                })
                .collect();
            ranked.sort_by(|(ra, ia), (rb, ib)| {
                rb.cmp(ra)
                    .then_with(|| self.pool[*ia].price().cmp(&self.pool[*ib].price()))
                    .then_with(|| ia.cmp(ib))
            });

            for (reduced, index) in ranked.into_iter().take(group.need) {
                let p = &self.pool[index];
                selection.picks.push(index);
                selection.spend += p.price();
                selection.score += p.score();
                selection.reduced += reduced;
            }
        }

        selection.picks.sort_unstable();
        selection
    }

    /// Multiplier above which the ranking is by price first.
    ///
    /// Prices differ by at least a tenth, so once `λ/10` exceeds the score
    /// spread the cheaper of two differently priced players always ranks
    /// higher and [`Self::select`] returns a cheapest completion.
    fn price_dominant_lambda(&self) -> Decimal {
        let mut scores = self
            .groups
            .iter()
            .flat_map(|g| g.candidates.iter())
            .map(|i| self.pool[*i].score());
        let Some(first) = scores.next() else {
            return Decimal::ONE;
        };
        let (low, high) = scores.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));
        let spread = high - low;
        spread * Decimal::TEN + Decimal::ONE
    }

    fn dual(&self, lambda: Decimal, selection: &Selection) -> Decimal {
        lambda * self.budget + selection.reduced
    }
}

/// One integral fill of the open slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected columns, ascending.
    pub picks: Vec<usize>,
    pub spend: Price,
    pub score: Points,
    /// Sum of `score − λ·price` at the multiplier that produced it.
    reduced: Decimal,
}

/// Solution of the node relaxation.
#[derive(Debug, Clone)]
pub enum Relaxation {
    /// The unconstrained best fill already fits the budget.
    Integral { bound: Points, fill: Selection },

    /// The budget binds; the relaxed optimum mixes two integral fills.
    Fractional {
        bound: Points,
        /// Fill just over budget (smaller multiplier).
        over: Selection,
        /// Fill within budget (larger multiplier).
        under: Selection,
        /// Weight of `over` in the budget-exact mix.
        theta: Decimal,
    },
}

impl Relaxation {
    /// Upper bound on the score the open slots can add.
    #[must_use]
    pub const fn bound(&self) -> Points {
        match self {
            Self::Integral { bound, .. } | Self::Fractional { bound, .. } => *bound,
        }
    }
}

/// Solve the node relaxation.
///
/// Returns `None` when no fill of the open slots fits the remaining budget.
#[must_use]
pub fn solve(residual: &Residual<'_>) -> Option<Relaxation> {
    let budget = residual.budget();
    let unconstrained = residual.select(Decimal::ZERO);
    if unconstrained.spend <= budget {
        return Some(Relaxation::Integral {
            bound: unconstrained.score,
            fill: unconstrained,
        });
    }

    let ceiling = residual.price_dominant_lambda();
    let mut best_dual = unconstrained.score;

    let mut lo = Decimal::ZERO;
    let mut over = unconstrained;
    let mut hi = Decimal::ONE.min(ceiling);
    let mut under = residual.select(hi);
    best_dual = best_dual.min(residual.dual(hi, &under));
    while under.spend > budget {
        if hi >= ceiling {
            return None;
        }
        lo = hi;
        over = under;
        hi = (hi * Decimal::TWO).min(ceiling);
        under = residual.select(hi);
        best_dual = best_dual.min(residual.dual(hi, &under));
    }

    let step = Decimal::new(1, LAMBDA_SCALE);
    for _ in 0..MAX_BISECTION_STEPS {
        if hi - lo <= step {
            break;
        }
        let mid = ((lo + hi) / Decimal::TWO).round_dp(LAMBDA_SCALE);
        if mid <= lo || mid >= hi {
            break;
        }
        let fill = residual.select(mid);
        best_dual = best_dual.min(residual.dual(mid, &fill));
        if fill.spend > budget {
            lo = mid;
            over = fill;
        } else {
            hi = mid;
            under = fill;
        }
    }

    let theta = (budget - under.spend) / (over.spend - under.spend);
    Some(Relaxation::Fractional {
        bound: best_dual,
        over,
        under,
        theta,
    })
}

/// Fractional value of each column in the budget-exact mix, for columns that
/// appear in exactly one of the two fills.
#[must_use]
pub fn fractional_columns(over: &Selection, under: &Selection, theta: Decimal) -> Vec<(usize, Decimal)> {
    let mut columns = Vec::new();
    for index in &over.picks {
        if under.picks.binary_search(index).is_err() {
            columns.push((*index, theta));
        }
    }
    for index in &under.picks {
        if over.picks.binary_search(index).is_err() {
            columns.push((*index, Decimal::ONE - theta));
        }
    }
    columns
}

/// Distance of a relaxed value from the nearest integer.
#[must_use]
pub fn fractionality(value: Decimal) -> Decimal {
    value.min(Decimal::ONE - value)
}

/// Order two fractional columns so the preferred branching column comes
/// first: most fractional, then higher score, then lower id.
#[must_use]
pub fn branch_preference(
    pool: &[Player],
    (ia, va): (usize, Decimal),
    (ib, vb): (usize, Decimal),
) -> Ordering {
    fractionality(vb)
        .cmp(&fractionality(va))
        .then_with(|| pool[ib].score().cmp(&pool[ia].score()))
        .then_with(|| ia.cmp(&ib))
}
