//! Best squad found so far, shared by every search worker.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use parking_lot::Mutex;

use crate::domain::{Player, PlayerId, Points, Price};

/// A complete feasible squad, as pool columns plus its tie-break key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Pool columns, ascending. The pool is ordered by id, so this is also
    /// the ascending id sequence.
    pub columns: Vec<usize>,
    pub ids: Vec<PlayerId>,
    pub score: Points,
    pub price: Price,
}

impl Candidate {
    /// `score` is the objective value of the selection.
    #[must_use]
    pub fn from_columns(pool: &[Player], mut columns: Vec<usize>, score: Points) -> Self {
        columns.sort_unstable();
        let ids = columns.iter().map(|c| pool[*c].id()).collect();
        let price = columns.iter().map(|c| pool[*c].price()).sum();
        Self {
            columns,
            ids,
            score,
            price,
        }
    }

    /// Selection order: higher score, then lower price, then the
    /// lexicographically smaller id sequence. `Less` means `self` wins.
    #[must_use]
    pub fn preference(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.price.cmp(&other.price))
            .then_with(|| self.ids.cmp(&other.ids))
    }
}

/// Incumbent guarded by a lock; replaced only by a strictly preferred squad.
#[derive(Debug, Default)]
pub struct Incumbent {
    best: Mutex<Option<Candidate>>,
    updates: AtomicU64,
}

impl Incumbent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a squad; returns `true` if it replaced the incumbent.
    pub fn offer(&self, candidate: Candidate) -> bool {
        let mut best = self.best.lock();
        let improves = best
            .as_ref()
            .map_or(true, |current| candidate.preference(current) == Ordering::Less);
        if improves {
            tracing::debug!(
                score = %candidate.score,
                price = %candidate.price,
                "New incumbent squad"
            );
            *best = Some(candidate);
            self.updates.fetch_add(1, AtomicOrdering::Relaxed);
        }
        improves
    }

    /// Score and price of the incumbent, for pruning.
    #[must_use]
    pub fn key(&self) -> Option<(Points, Price)> {
        self.best.lock().as_ref().map(|c| (c.score, c.price))
    }

    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates.load(AtomicOrdering::Relaxed)
    }

    /// Consume the incumbent.
    #[must_use]
    pub fn into_inner(self) -> Option<Candidate> {
        self.best.into_inner()
    }
}
