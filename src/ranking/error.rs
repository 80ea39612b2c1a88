//! Ranking store error types
//!
//! Defines all errors that can occur when building or updating a leaderboard.

use crate::ranking::types::DishId;
use thiserror::Error;

/// Errors that can occur in the ranking store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    /// Edit targeted an id that is not on the board
    #[error("Dish not found: {0}")]
    UnknownDish(DishId),

    /// Dish name was empty or whitespace only
    #[error("Dish name must not be empty")]
    EmptyName,

    /// Order counts start at 1
    #[error("Order count must be at least 1")]
    ZeroOrderCount,

    /// Every dish id has been handed out
    #[error("No dish ids left to assign")]
    IdsExhausted,
}

/// Result type alias for ranking operations
pub type RankingResult<T> = Result<T, RankingError>;
