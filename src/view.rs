//! View Model
//!
//! What a front end needs to draw the leaderboard: one row per dish with its
//! rank badge and order label, the podium flag for the top rows, and the
//! dialog contents while the edit surface is open. Front ends render these
//! values; they never read the leaderboard directly.

use crate::form::{FormMode, NAME_LABEL, ORDER_COUNT_LABEL};
use crate::ranking::{DishId, Standing};
use crate::session::Session;
use serde::Serialize;
use std::fmt;

/// Title used when none is configured
pub const DEFAULT_TITLE: &str = "Most Requested Dishes";

/// Number of highlighted rows at the top of the board
pub const DEFAULT_PODIUM_SIZE: usize = 3;

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub title: String,
    pub podium_size: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            podium_size: DEFAULT_PODIUM_SIZE,
        }
    }
}

/// One rendered leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub rank: usize,
    pub id: DishId,
    pub name: String,
    pub order_count: u32,
    pub orders_label: String,
    pub podium: bool,
}

impl RowView {
    fn from_standing(standing: Standing<'_>, podium_size: usize) -> Self {
        let count = standing.dish.order_count.get();
        Self {
            rank: standing.rank.get(),
            id: standing.dish.id,
            name: standing.dish.name.to_string(),
            order_count: count,
            orders_label: orders_label(count),
            podium: standing.rank.is_podium(podium_size),
        }
    }
}

/// The open dialog and its form contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogView {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub name_label: &'static str,
    pub order_count_label: &'static str,
    pub name: String,
    pub order_count: String,
    pub selected: Option<DishId>,
}

/// Complete snapshot of what to draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub title: String,
    pub rows: Vec<RowView>,
    pub dialog: Option<DialogView>,
}

impl BoardView {
    /// Snapshot the session for rendering
    pub fn build(session: &Session, options: &ViewOptions) -> Self {
        let rows = session
            .board()
            .standings()
            .map(|s| RowView::from_standing(s, options.podium_size))
            .collect();

        let dialog = session.surface().form().map(|form| {
            let mode = form.mode();
            DialogView {
                title: mode.title(),
                submit_label: mode.submit_label(),
                name_label: NAME_LABEL,
                order_count_label: ORDER_COUNT_LABEL,
                name: form.name().to_string(),
                order_count: form.order_count().to_string(),
                selected: match mode {
                    FormMode::Edit(id) => Some(id),
                    FormMode::Add => None,
                },
            }
        });

        Self {
            title: options.title.clone(),
            rows,
            dialog,
        }
    }

    /// Plain-text rendering for terminals
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .rows
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(4);
        let rule_width = name_width + 24;

        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "─".repeat(rule_width))?;

        if self.rows.is_empty() {
            writeln!(f, "  (no dishes yet)")?;
        }
        for row in &self.rows {
            let marker = if row.podium { '★' } else { ' ' };
            writeln!(
                f,
                "{} {:>3}  {:<width$}  {:>12}",
                marker,
                row.rank,
                row.name,
                row.orders_label,
                width = name_width
            )?;
        }

        if let Some(dialog) = &self.dialog {
            writeln!(f)?;
            writeln!(f, "[{}]", dialog.title)?;
            writeln!(f, "  {}: {}", dialog.name_label, dialog.name)?;
            writeln!(f, "  {}: {}", dialog.order_count_label, dialog.order_count)?;
            writeln!(f, "  ({} with `submit`, dismiss with `close`)", dialog.submit_label)?;
        }

        Ok(())
    }
}

/// "N orders" label shown beside each dish
pub fn orders_label(count: u32) -> String {
    format!("{} orders", count)
}
