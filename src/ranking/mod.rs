//! Dishboard Ranking Store
//!
//! This module provides the leaderboard itself:
//!
//! - **types**: Core data structures (Dish, DishId, Rank, Candidate)
//! - **board**: The leaderboard and its upsert transition
//! - **seed**: Built-in starting dishes
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use dishboard::ranking::{Candidate, DishName, Leaderboard, OrderCount};
//!
//! # fn main() -> Result<(), dishboard::ranking::RankingError> {
//! let board = Leaderboard::seeded();
//! let (board, id) = board.upsert(Candidate::add(
//!     DishName::new("Truffle Pasta")?,
//!     OrderCount::new(400)?,
//! ))?;
//!
//! assert_eq!(board.rank_of(id).map(|r| r.get()), Some(1));
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod error;
pub mod seed;
pub mod types;

// Re-export commonly used types
pub use board::{is_ranked, BoardStats, Leaderboard};
pub use error::{RankingError, RankingResult};
pub use seed::{default_seed, SeedDish};
pub use types::{Candidate, Dish, DishId, DishName, OrderCount, Rank, Standing};
