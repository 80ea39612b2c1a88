//! Core data types for the dish leaderboard
//!
//! This module defines the fundamental types used by the ranking store:
//! - `Dish`: A single leaderboard entry
//! - `DishId`: Stable identity, assigned once at creation
//! - `Rank`: 1-based position, derived from sort order
//! - `DishName` and `OrderCount`: Validated field types
//! - `Candidate`: A validated add or edit request

use crate::ranking::error::{RankingError, RankingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Stable identifier of a dish
///
/// Allocated by the leaderboard when a dish is first added and never
/// reused. Unlike [`Rank`], it survives every resort.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DishId(u32);

impl DishId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The id after this one
    pub(crate) fn next(self) -> RankingResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or(RankingError::IdsExhausted)
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 1-based position of a dish in the sorted leaderboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Rank(usize);

impl Rank {
    /// Rank for a 0-based position
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Parse a user-supplied rank; zero is not a rank
    pub fn new(rank: usize) -> Option<Self> {
        (rank >= 1).then_some(Self(rank))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// 0-based position in the leaderboard
    pub fn index(self) -> usize {
        self.0 - 1
    }

    /// Whether this rank falls within the highlighted top positions
    pub fn is_podium(self, podium_size: usize) -> bool {
        self.0 <= podium_size
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-blank display name of a dish
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct DishName(String);

impl DishName {
    /// Create a name, trimming surrounding whitespace
    pub fn new(name: impl AsRef<str>) -> RankingResult<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RankingError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DishName {
    type Error = RankingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DishName> for String {
    fn from(name: DishName) -> Self {
        name.0
    }
}

impl fmt::Display for DishName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of times a dish was requested; always at least 1
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct OrderCount(NonZeroU32);

impl OrderCount {
    pub const MIN: OrderCount = OrderCount(NonZeroU32::MIN);

    pub fn new(count: u32) -> RankingResult<Self> {
        NonZeroU32::new(count)
            .map(Self)
            .ok_or(RankingError::ZeroOrderCount)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for OrderCount {
    type Error = RankingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderCount> for u32 {
    fn from(count: OrderCount) -> Self {
        count.get()
    }
}

impl fmt::Display for OrderCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single leaderboard entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dish {
    /// Stable identity
    pub id: DishId,
    /// Display name
    pub name: DishName,
    /// Popularity metric driving the sort order
    pub order_count: OrderCount,
}

impl Dish {
    pub fn new(id: DishId, name: DishName, order_count: OrderCount) -> Self {
        Self {
            id,
            name,
            order_count,
        }
    }
}

/// A dish paired with its derived rank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standing<'a> {
    pub rank: Rank,
    pub dish: &'a Dish,
}

/// A validated request to add or edit a dish
///
/// `target` is `Some` when editing an existing dish and `None` when adding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub target: Option<DishId>,
    pub name: DishName,
    pub order_count: OrderCount,
}

impl Candidate {
    /// Candidate for a new dish
    pub fn add(name: DishName, order_count: OrderCount) -> Self {
        Self {
            target: None,
            name,
            order_count,
        }
    }

    /// Candidate replacing the fields of an existing dish
    pub fn edit(id: DishId, name: DishName, order_count: OrderCount) -> Self {
        Self {
            target: Some(id),
            name,
            order_count,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }
}
