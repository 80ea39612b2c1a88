//! UI Components
//!
//! Leptos components for the leaderboard page.

pub mod dish_dialog;
pub mod leaderboard;

pub use dish_dialog::DishDialog;
pub use leaderboard::LeaderboardCard;
