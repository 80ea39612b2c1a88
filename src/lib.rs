//! # Dishboard
//!
//! An in-memory leaderboard of the most requested dishes. Dishes can be
//! added and edited; after every change the board is re-sorted by order
//! count and ranks are re-derived from position.
//!
//! ## Modules
//!
//! - [`ranking`]: The leaderboard and its upsert transition
//! - [`form`]: Entry form validation
//! - [`surface`]: Open/closed dialog state and selection
//! - [`session`]: One board plus one surface, driven by user actions
//! - [`view`]: Render-ready snapshot for front ends
//! - [`console`]: Line-command front end over a session
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use dishboard::Session;
//!
//! # fn main() -> Result<(), dishboard::SessionError> {
//! let mut session = Session::seeded();
//!
//! // Request a new dish
//! session.begin_add();
//! session.set_name("Truffle Pasta")?;
//! session.set_order_count("400")?;
//! let outcome = session.submit()?;
//!
//! assert_eq!(outcome.rank.get(), 1);
//! assert!(!session.surface().is_open());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod console;
pub mod form;
pub mod ranking;
pub mod session;
pub mod surface;
pub mod view;

// Re-export top-level types for convenience
pub use form::{EntryForm, FormError, FormMode};
pub use ranking::{
    Candidate, Dish, DishId, DishName, Leaderboard, OrderCount, Rank, RankingError,
};
pub use session::{Session, SessionError, SessionResult, SubmitOutcome};
pub use surface::EditSurface;
pub use view::{BoardView, RowView, ViewOptions};
