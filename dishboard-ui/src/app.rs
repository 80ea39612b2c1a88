//! App Root Component

use leptos::*;

use crate::components::LeaderboardCard;
use crate::state::provide_board_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_board_state();

    view! {
        <main class="min-h-screen bg-amber-50/40 py-10 px-4">
            <LeaderboardCard />
        </main>
    }
}
