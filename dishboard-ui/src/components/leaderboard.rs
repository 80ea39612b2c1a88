//! Leaderboard Card
//!
//! Card with the title, the "+" button, and one row per dish. The top
//! rows get the podium styling.

use dishboard::RowView;
use leptos::*;

use crate::components::DishDialog;
use crate::state::use_board_state;

/// The leaderboard card
#[component]
pub fn LeaderboardCard() -> impl IntoView {
    let state = use_board_state();
    let title = state.options.with_value(|options| options.title.clone());

    view! {
        <div class="w-full max-w-2xl mx-auto bg-white rounded-xl shadow border border-gray-200">
            // Header
            <div class="flex flex-row items-center justify-between p-6">
                <h1 class="text-2xl font-bold">{title}</h1>
                <button
                    type="button"
                    aria-label="Request a Dish"
                    on:click=move |_| state.begin_add()
                    class="w-9 h-9 rounded-full bg-amber-100 hover:bg-amber-600 hover:text-white
                           transition-colors duration-300 flex items-center justify-center"
                >
                    "+"
                </button>
            </div>

            // Ranked list
            <div class="px-6 pb-6">
                <ul class="space-y-2">
                    {move || {
                        state.view().rows.into_iter().map(|row| {
                            view! { <DishRow row=row /> }
                        }).collect_view()
                    }}
                </ul>
            </div>

            // Dialog
            {move || {
                if state.is_open() {
                    view! { <DishDialog /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Single leaderboard row
#[component]
fn DishRow(row: RowView) -> impl IntoView {
    let state = use_board_state();
    let id = row.id;

    let (row_class, badge_class) = if row.podium {
        ("bg-amber-50", "bg-amber-600 text-white")
    } else {
        ("bg-white", "bg-gray-100 text-gray-700")
    };

    view! {
        <li
            on:click=move |_| state.begin_edit(id)
            class=format!(
                "flex items-center justify-between p-4 rounded-lg shadow cursor-pointer \
                 transition-all duration-300 ease-in-out {}",
                row_class
            )
        >
            <div class="flex items-center space-x-4 flex-grow">
                <span class=format!(
                    "w-8 h-8 rounded-full flex items-center justify-center text-sm font-bold \
                     flex-shrink-0 {}",
                    badge_class
                )>
                    {row.rank}
                </span>
                <span class="font-semibold">{row.name}</span>
            </div>
            <span class="text-sm text-gray-500 ml-4 flex-shrink-0">{row.orders_label}</span>
        </li>
    }
}
