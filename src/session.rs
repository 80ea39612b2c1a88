//! Leaderboard Session
//!
//! One leaderboard plus one edit surface, driven by discrete user actions.
//! Every action runs to completion before the next; a successful submit
//! swaps in the resorted board and closes the surface in the same call.

use crate::form::FormError;
use crate::ranking::{DishId, Leaderboard, Rank, RankingError};
use crate::surface::EditSurface;
use thiserror::Error;

/// Errors returned by session actions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Field edit or submit with no open surface
    #[error("No dish form is open")]
    SurfaceClosed,

    /// Row selection by rank past the end of the board
    #[error("No dish at rank {0}")]
    NoDishAtRank(usize),

    /// Submitted input failed validation
    #[error(transparent)]
    Form(#[from] FormError),

    /// Leaderboard rejected the change
    #[error(transparent)]
    Ranking(#[from] RankingError),
}

/// Result type alias for session actions
pub type SessionResult<T> = Result<T, SessionError>;

/// What a successful submit changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// The dish that was added or edited
    pub dish: DishId,
    /// Its rank after resorting
    pub rank: Rank,
    /// Whether an existing dish was edited
    pub edited: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Leaderboard,
    surface: EditSurface,
}

impl Session {
    pub fn new(board: Leaderboard) -> Self {
        Self {
            board,
            surface: EditSurface::Closed,
        }
    }

    /// Session over the built-in house dishes
    pub fn seeded() -> Self {
        Self::new(Leaderboard::seeded())
    }

    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    pub fn surface(&self) -> &EditSurface {
        &self.surface
    }

    /// Open the surface to request a new dish
    pub fn begin_add(&mut self) {
        self.surface.begin_add();
    }

    /// Open the surface to edit the dish with `id`
    pub fn begin_edit(&mut self, id: DishId) -> SessionResult<()> {
        let dish = self.board.get(id).ok_or(RankingError::UnknownDish(id))?;
        self.surface.begin_edit(dish);
        Ok(())
    }

    /// Open the surface to edit whichever dish holds `rank`
    pub fn begin_edit_at(&mut self, rank: usize) -> SessionResult<()> {
        let dish = Rank::new(rank)
            .and_then(|r| self.board.at_rank(r))
            .ok_or(SessionError::NoDishAtRank(rank))?;
        self.surface.begin_edit(dish);
        Ok(())
    }

    /// Dismiss the surface without saving
    pub fn close_surface(&mut self) {
        self.surface.close();
    }

    /// Replace the name text of the open form
    pub fn set_name(&mut self, name: impl Into<String>) -> SessionResult<()> {
        let form = self.surface.form_mut().ok_or(SessionError::SurfaceClosed)?;
        form.set_name(name);
        Ok(())
    }

    /// Replace the order count text of the open form
    pub fn set_order_count(&mut self, order_count: impl Into<String>) -> SessionResult<()> {
        let form = self.surface.form_mut().ok_or(SessionError::SurfaceClosed)?;
        form.set_order_count(order_count);
        Ok(())
    }

    /// Validate the open form, upsert it, and close the surface
    ///
    /// On error nothing changes: the board is untouched and the surface
    /// stays open with the typed input intact.
    pub fn submit(&mut self) -> SessionResult<SubmitOutcome> {
        let form = self.surface.form().ok_or(SessionError::SurfaceClosed)?;

        let candidate = form.submit().map_err(|e| {
            tracing::warn!(error = %e, "Rejected dish submission");
            e
        })?;
        let edited = candidate.is_edit();

        let (board, dish) = self.board.upsert(candidate)?;
        let rank = board
            .rank_of(dish)
            .ok_or(RankingError::UnknownDish(dish))?;

        self.board = board;
        self.surface.close();

        if edited {
            tracing::info!(%dish, %rank, "Updated dish");
        } else {
            tracing::info!(%dish, %rank, total = self.board.len(), "Added dish");
        }

        Ok(SubmitOutcome { dish, rank, edited })
    }
}
