//! Board State
//!
//! Reactive wrapper around a `dishboard::Session`. Components never mutate
//! the session directly; they call the methods here, which also keep the
//! inline error message in step.

use dishboard::config::BoardConfig;
use dishboard::{BoardView, DishId, Session, SessionError, ViewOptions};
use leptos::*;

/// Board state provided to all components
#[derive(Clone, Copy)]
pub struct BoardState {
    /// The leaderboard plus the edit surface
    pub session: RwSignal<Session>,
    /// Title and podium size
    pub options: StoredValue<ViewOptions>,
    /// Message from the last rejected action
    pub error: RwSignal<Option<String>>,
}

/// Provide board state to the component tree
pub fn provide_board_state() {
    provide_context(BoardState::new(&BoardConfig::default()));
}

/// Board state from context
pub fn use_board_state() -> BoardState {
    use_context::<BoardState>().expect("BoardState not found")
}

impl BoardState {
    /// Fresh session over the configured seed
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            session: create_rw_signal(Session::new(config.leaderboard())),
            options: store_value(config.view_options()),
            error: create_rw_signal(None),
        }
    }

    /// Snapshot for rendering; tracks the session signal
    pub fn view(&self) -> BoardView {
        let options = self.options.get_value();
        self.session.with(|session| BoardView::build(session, &options))
    }

    /// Whether the dialog should be shown
    pub fn is_open(&self) -> bool {
        self.session.with(|session| session.surface().is_open())
    }

    /// "+" button
    pub fn begin_add(&self) {
        self.error.set(None);
        self.session.update(|session| session.begin_add());
    }

    /// Row click
    pub fn begin_edit(&self, id: DishId) {
        self.error.set(None);
        let result = self.session.try_update(|session| session.begin_edit(id));
        self.report(result);
    }

    /// Dialog dismissed
    pub fn close(&self) {
        self.error.set(None);
        self.session.update(|session| session.close_surface());
    }

    /// Form submitted with the raw field text
    pub fn submit(&self, name: String, order_count: String) {
        let result = self.session.try_update(|session| {
            session.set_name(name)?;
            session.set_order_count(order_count)?;
            session.submit().map(|_| ())
        });
        self.report(result);
    }

    fn report(&self, result: Option<Result<(), SessionError>>) {
        match result {
            Some(Err(e)) => self.error.set(Some(e.to_string())),
            _ => self.error.set(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_state(test: impl FnOnce(BoardState)) {
        let runtime = create_runtime();
        test(BoardState::new(&BoardConfig::default()));
        runtime.dispose();
    }

    fn board_len(state: &BoardState) -> usize {
        state.session.with_untracked(|session| session.board().len())
    }

    #[test]
    fn test_rejected_submit_shows_error() {
        with_state(|state| {
            state.begin_add();
            state.submit("Mystery Meat".to_string(), "lots".to_string());

            assert!(state.error.get_untracked().is_some());
            assert!(state.is_open());
            assert_eq!(board_len(&state), 10);

            let dialog = state.view().dialog.unwrap();
            assert_eq!(dialog.name, "Mystery Meat");
            assert_eq!(dialog.order_count, "lots");
        });
    }

    #[test]
    fn test_submit_clears_error_and_closes() {
        with_state(|state| {
            state.begin_add();
            state.submit(String::new(), "400".to_string());
            assert!(state.error.get_untracked().is_some());

            state.submit("Truffle Pasta".to_string(), "400".to_string());

            assert_eq!(state.error.get_untracked(), None);
            assert!(!state.is_open());
            let rows = state.view().rows;
            assert_eq!(rows.len(), 11);
            assert_eq!(rows[0].name, "Truffle Pasta");
            assert!(rows[0].podium);
        });
    }

    #[test]
    fn test_reopening_clears_error() {
        with_state(|state| {
            state.begin_add();
            state.submit("Soup".to_string(), "0".to_string());
            assert!(state.error.get_untracked().is_some());

            state.close();
            assert_eq!(state.error.get_untracked(), None);

            state.begin_edit(DishId::new(99));
            assert!(state.error.get_untracked().is_some());
            assert!(!state.is_open());

            state.begin_edit(DishId::new(10));
            assert_eq!(state.error.get_untracked(), None);
            assert_eq!(state.view().dialog.unwrap().name, "Fish and Chips");
        });
    }
}
