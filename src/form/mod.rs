//! Dish Entry Form
//!
//! Captures a dish name and order count as typed, validates them, and
//! produces a [`crate::ranking::Candidate`] for the leaderboard.

pub mod entry;
pub mod error;

pub use entry::{parse_order_count, EntryForm, FormMode, NAME_LABEL, ORDER_COUNT_LABEL};
pub use error::{FormError, FormResult};
