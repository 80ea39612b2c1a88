//! Dish Dialog
//!
//! Modal hosting the entry form. Field text stays local until submit and
//! is then handed to the session unparsed.

use dishboard::view::DialogView;
use leptos::*;

use crate::state::use_board_state;

/// Modal shown while the edit surface is open
#[component]
pub fn DishDialog() -> impl IntoView {
    let state = use_board_state();

    // The dialog is recreated each time the surface opens, so a snapshot
    // taken here always matches the current form.
    let Some(dialog) = state.view().dialog else {
        return view! {}.into_view();
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-xl p-6 w-full max-w-md mx-4 shadow-lg">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">{dialog.title}</h2>
                    <button
                        type="button"
                        aria-label="Close"
                        on:click=move |_| state.close()
                        class="text-gray-400 hover:text-gray-900"
                    >
                        "✕"
                    </button>
                </div>

                <DishForm dialog=dialog />
            </div>
        </div>
    }
    .into_view()
}

/// Name and order count inputs
#[component]
fn DishForm(dialog: DialogView) -> impl IntoView {
    let state = use_board_state();

    let (name, set_name) = create_signal(dialog.name);
    let (order_count, set_order_count) = create_signal(dialog.order_count);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit(name.get(), order_count.get());
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Name
            <div>
                <label for="name" class="block text-sm text-gray-600 mb-2">{dialog.name_label}</label>
                <input
                    id="name"
                    type="text"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full rounded-lg px-4 py-3 border border-gray-300
                           focus:border-amber-500 focus:outline-none"
                />
            </div>

            // Order count
            <div>
                <label for="orderCount" class="block text-sm text-gray-600 mb-2">
                    {dialog.order_count_label}
                </label>
                <input
                    id="orderCount"
                    type="number"
                    min="1"
                    required=true
                    prop:value=move || order_count.get()
                    on:input=move |ev| set_order_count.set(event_target_value(&ev))
                    class="w-full rounded-lg px-4 py-3 border border-gray-300
                           focus:border-amber-500 focus:outline-none"
                />
            </div>

            // Validation error
            {move || {
                state.error.get().map(|message| view! {
                    <p class="text-sm text-red-600">{message}</p>
                })
            }}

            <button
                type="submit"
                class="px-4 py-2 bg-gray-900 hover:bg-gray-700 text-white rounded-lg font-medium transition-colors"
            >
                {dialog.submit_label}
            </button>
        </form>
    }
}
