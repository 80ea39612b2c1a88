//! State Management
//!
//! The leaderboard session and the last validation error, as signals.

pub mod board;

pub use board::{provide_board_state, use_board_state, BoardState};
