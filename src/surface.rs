//! Edit Surface
//!
//! The open/closed dialog state and the dish selected for editing. This is
//! presentation state and is kept apart from the leaderboard data.
//!
//! ```text
//! Closed ──begin_add──▶ Open(Add) ──submit/close──▶ Closed
//! Closed ──begin_edit─▶ Open(Edit) ─submit/close──▶ Closed
//! ```
//!
//! Opening while already open replaces the form wholesale, so no input or
//! selection from the previous mode survives.

use crate::form::{EntryForm, FormMode};
use crate::ranking::{Dish, DishId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSurface {
    #[default]
    Closed,
    Open(EntryForm),
}

impl EditSurface {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Open with a blank form and no selection
    pub fn begin_add(&mut self) {
        tracing::debug!("Opening surface to add a dish");
        *self = EditSurface::Open(EntryForm::blank());
    }

    /// Open with a form pre-filled from `dish`
    pub fn begin_edit(&mut self, dish: &Dish) {
        tracing::debug!(id = %dish.id, "Opening surface to edit a dish");
        *self = EditSurface::Open(EntryForm::prefilled(dish));
    }

    /// Close and discard any unsaved input
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("Closing surface");
        }
        *self = EditSurface::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSurface::Open(_))
    }

    /// Dish currently selected for editing, if any
    pub fn selected(&self) -> Option<DishId> {
        match self.form()?.mode() {
            FormMode::Edit(id) => Some(id),
            FormMode::Add => None,
        }
    }

    pub fn form(&self) -> Option<&EntryForm> {
        match self {
            EditSurface::Open(form) => Some(form),
            EditSurface::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EntryForm> {
        match self {
            EditSurface::Open(form) => Some(form),
            EditSurface::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::Leaderboard;

    #[test]
    fn test_starts_closed() {
        let surface = EditSurface::new();
        assert!(!surface.is_open());
        assert_eq!(surface.selected(), None);
        assert!(surface.form().is_none());
    }

    #[test]
    fn test_begin_add_has_no_selection() {
        let mut surface = EditSurface::new();
        surface.begin_add();

        assert!(surface.is_open());
        assert_eq!(surface.selected(), None);
        assert_eq!(surface.form(), Some(&EntryForm::blank()));
    }

    #[test]
    fn test_edit_replaces_pending_add() {
        let board = Leaderboard::seeded();
        let salmon = &board.dishes()[2];

        let mut surface = EditSurface::new();
        surface.begin_add();
        if let Some(form) = surface.form_mut() {
            form.set_name("Half-typed");
            form.set_order_count("9");
        }
        surface.begin_edit(salmon);

        assert_eq!(surface.selected(), Some(salmon.id));
        let form = surface.form().unwrap();
        assert_eq!(form.mode(), FormMode::Edit(salmon.id));
        assert_eq!(form.name(), "Grilled Salmon");
        assert_eq!(form.order_count(), "275");
    }

    #[test]
    fn test_close_clears_selection() {
        let board = Leaderboard::seeded();
        let mut surface = EditSurface::new();
        surface.begin_edit(&board.dishes()[0]);
        surface.close();

        assert!(!surface.is_open());
        assert_eq!(surface.selected(), None);

        // Reopening to add does not remember the old target
        surface.begin_add();
        assert_eq!(surface.selected(), None);
    }
}
