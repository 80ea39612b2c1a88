//! Dish Entry Form
//!
//! Holds the raw text of the name and order count fields and turns it into
//! a [`Candidate`] on submit. Text is kept exactly as typed so a rejected
//! submission can be corrected in place.

use crate::form::error::{FormError, FormResult};
use crate::ranking::{Candidate, Dish, DishId, DishName, OrderCount};
use serde::Serialize;
use std::num::IntErrorKind;

/// Whether the form creates a new dish or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "dish", rename_all = "lowercase")]
pub enum FormMode {
    Add,
    Edit(DishId),
}

impl FormMode {
    /// Dialog heading
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Add => "Request a Dish",
            FormMode::Edit(_) => "Edit Dish",
        }
    }

    /// Label of the submit button
    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Add => "Add Dish",
            FormMode::Edit(_) => "Update Dish",
        }
    }
}

/// Field labels shown next to the inputs
pub const NAME_LABEL: &str = "Dish Name";
pub const ORDER_COUNT_LABEL: &str = "Number of Requests";

/// Name and order count input, unparsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryForm {
    mode: FormMode,
    name: String,
    order_count: String,
}

impl EntryForm {
    /// Empty form for a new dish
    pub fn blank() -> Self {
        Self {
            mode: FormMode::Add,
            name: String::new(),
            order_count: String::new(),
        }
    }

    /// Form pre-filled from an existing dish
    pub fn prefilled(dish: &Dish) -> Self {
        Self {
            mode: FormMode::Edit(dish.id),
            name: dish.name.to_string(),
            order_count: dish.order_count.to_string(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order_count(&self) -> &str {
        &self.order_count
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_order_count(&mut self, order_count: impl Into<String>) {
        self.order_count = order_count.into();
    }

    /// Validate the fields and build a candidate
    pub fn submit(&self) -> FormResult<Candidate> {
        let name = DishName::new(&self.name).map_err(|_| FormError::EmptyName)?;
        let order_count = parse_order_count(&self.order_count)?;

        Ok(match self.mode {
            FormMode::Add => Candidate::add(name, order_count),
            FormMode::Edit(id) => Candidate::edit(id, name, order_count),
        })
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::blank()
    }
}

/// Parse order count text as a base-10 integer of at least 1
pub fn parse_order_count(text: &str) -> FormResult<OrderCount> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::Empty => FormError::MissingOrderCount,
        IntErrorKind::PosOverflow => FormError::OrderCountTooLarge,
        IntErrorKind::NegOverflow => FormError::OrderCountBelowMinimum,
        _ => FormError::InvalidOrderCount(trimmed.to_string()),
    })?;

    if value < 1 {
        return Err(FormError::OrderCountBelowMinimum);
    }
    let value = u32::try_from(value).map_err(|_| FormError::OrderCountTooLarge)?;
    OrderCount::new(value).map_err(|_| FormError::OrderCountBelowMinimum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::Leaderboard;

    #[test]
    fn test_blank_form_submits_add() {
        let mut form = EntryForm::blank();
        form.set_name("Truffle Pasta");
        form.set_order_count("400");

        let candidate = form.submit().unwrap();
        assert!(!candidate.is_edit());
        assert_eq!(candidate.name.as_str(), "Truffle Pasta");
        assert_eq!(candidate.order_count.get(), 400);
    }

    #[test]
    fn test_prefilled_form_submits_edit() {
        let board = Leaderboard::seeded();
        let dish = &board.dishes()[9];
        let mut form = EntryForm::prefilled(dish);

        assert_eq!(form.name(), "Fish and Chips");
        assert_eq!(form.order_count(), "162");
        assert_eq!(form.mode(), FormMode::Edit(dish.id));

        form.set_order_count("500");
        let candidate = form.submit().unwrap();
        assert_eq!(candidate.target, Some(dish.id));
        assert_eq!(candidate.order_count.get(), 500);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut form = EntryForm::blank();
        form.set_name("   ");
        form.set_order_count("3");
        assert_eq!(form.submit(), Err(FormError::EmptyName));
    }

    #[test]
    fn test_order_count_parsing() {
        assert_eq!(parse_order_count(" 42 ").unwrap().get(), 42);
        assert_eq!(parse_order_count("+7").unwrap().get(), 7);
        assert_eq!(parse_order_count(""), Err(FormError::MissingOrderCount));
        assert_eq!(parse_order_count("  "), Err(FormError::MissingOrderCount));
        assert_eq!(
            parse_order_count("12abc"),
            Err(FormError::InvalidOrderCount("12abc".to_string()))
        );
        assert_eq!(
            parse_order_count("4.5"),
            Err(FormError::InvalidOrderCount("4.5".to_string()))
        );
        assert_eq!(parse_order_count("0"), Err(FormError::OrderCountBelowMinimum));
        assert_eq!(parse_order_count("-3"), Err(FormError::OrderCountBelowMinimum));
        assert_eq!(
            parse_order_count("4294967296"),
            Err(FormError::OrderCountTooLarge)
        );
        assert_eq!(
            parse_order_count("99999999999999999999"),
            Err(FormError::OrderCountTooLarge)
        );
    }

    #[test]
    fn test_labels_follow_mode() {
        assert_eq!(FormMode::Add.title(), "Request a Dish");
        assert_eq!(FormMode::Add.submit_label(), "Add Dish");

        let edit = FormMode::Edit(DishId::new(1));
        assert_eq!(edit.title(), "Edit Dish");
        assert_eq!(edit.submit_label(), "Update Dish");
    }
}
