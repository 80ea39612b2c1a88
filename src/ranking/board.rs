//! Dishboard Ranking Store
//!
//! The leaderboard holds every dish in popularity order and applies the
//! upsert transition:
//!
//! ```text
//! Candidate → replace (edit) | append (add) → stable sort desc → ranks 1..N
//! ```
//!
//! Transitions are pure: `upsert` borrows the current board and returns the
//! next one, so callers swap state whole and readers never observe a
//! half-sorted list.

use crate::ranking::error::{RankingError, RankingResult};
use crate::ranking::seed::{default_seed, SeedDish};
use crate::ranking::types::{Candidate, Dish, DishId, Rank, Standing};
use serde::Serialize;
use std::fmt;

/// Ordered collection of dishes, most requested first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    /// Sorted by `order_count` descending; ties keep previous order
    dishes: Vec<Dish>,
    /// Next identifier to hand out; ids are never reused
    #[serde(skip)]
    next_id: DishId,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self {
            dishes: Vec::new(),
            next_id: DishId::new(1),
        }
    }

    /// Leaderboard holding the built-in house dishes
    pub fn seeded() -> Self {
        Self::from_seed(&default_seed())
    }

    /// Build a leaderboard from seed entries
    ///
    /// Ids are assigned in seed order before sorting, so an already sorted
    /// seed yields ids equal to the initial ranks.
    pub fn from_seed(seed: &[SeedDish]) -> Self {
        let mut board = Self::new();
        for entry in seed {
            let Ok(next_id) = board.next_id.next() else {
                tracing::warn!(kept = board.dishes.len(), "Seed larger than the id space");
                break;
            };
            board.dishes.push(Dish::new(
                board.next_id,
                entry.name.clone(),
                entry.order_count,
            ));
            board.next_id = next_id;
        }
        sort_by_popularity(&mut board.dishes);

        tracing::debug!(dishes = board.dishes.len(), "Seeded leaderboard");
        board
    }

    /// Apply an add or edit and return the resorted board
    ///
    /// Edits replace the target in place before sorting, which keeps it
    /// behind any dish it now ties with that was previously ahead of it.
    /// Adds are appended and so rank last among equal counts.
    ///
    /// Returns the new board together with the id of the affected dish.
    pub fn upsert(&self, candidate: Candidate) -> RankingResult<(Self, DishId)> {
        let mut dishes = self.dishes.clone();
        let mut next_id = self.next_id;

        let id = match candidate.target {
            Some(id) => {
                let dish = dishes
                    .iter_mut()
                    .find(|d| d.id == id)
                    .ok_or(RankingError::UnknownDish(id))?;
                tracing::debug!(
                    %id,
                    from = dish.order_count.get(),
                    to = candidate.order_count.get(),
                    "Replacing dish"
                );
                dish.name = candidate.name;
                dish.order_count = candidate.order_count;
                id
            }
            None => {
                let id = next_id;
                next_id = next_id.next()?;
                tracing::debug!(%id, count = candidate.order_count.get(), "Appending dish");
                dishes.push(Dish::new(id, candidate.name, candidate.order_count));
                id
            }
        };

        sort_by_popularity(&mut dishes);

        Ok((Self { dishes, next_id }, id))
    }

    /// Number of dishes on the board
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// All dishes in rank order
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Get a dish by id
    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    /// Current rank of a dish
    pub fn rank_of(&self, id: DishId) -> Option<Rank> {
        self.dishes
            .iter()
            .position(|d| d.id == id)
            .map(Rank::from_index)
    }

    /// Dish currently holding a rank
    pub fn at_rank(&self, rank: Rank) -> Option<&Dish> {
        self.dishes.get(rank.index())
    }

    /// Every dish paired with its rank, best first
    pub fn standings(&self) -> impl Iterator<Item = Standing<'_>> {
        self.dishes
            .iter()
            .enumerate()
            .map(|(index, dish)| Standing {
                rank: Rank::from_index(index),
                dish,
            })
    }

    /// Summary statistics
    pub fn stats(&self) -> BoardStats {
        BoardStats {
            dishes: self.dishes.len(),
            total_orders: self
                .dishes
                .iter()
                .map(|d| u64::from(d.order_count.get()))
                .sum(),
            leader: self.dishes.first().map(|d| d.name.to_string()),
        }
    }
}

/// Leaderboard summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub dishes: usize,
    pub total_orders: u64,
    pub leader: Option<String>,
}

impl fmt::Display for BoardStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dishes={}, total_orders={}, leader={}",
            self.dishes,
            self.total_orders,
            self.leader.as_deref().unwrap_or("-")
        )
    }
}

fn sort_by_popularity(dishes: &mut [Dish]) {
    // `sort_by` is stable, which is what breaks ties
    dishes.sort_by(|a, b| b.order_count.cmp(&a.order_count));
}

/// Whether a slice of dishes is in leaderboard order
pub fn is_ranked(dishes: &[Dish]) -> bool {
    dishes
        .windows(2)
        .all(|pair| pair[0].order_count >= pair[1].order_count)
}
