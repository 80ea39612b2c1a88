//! Dishboard Page
//!
//! The most requested dishes leaderboard, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in a `dishboard::Session` held in a signal;
//! components render `BoardView` snapshots and forward clicks and form
//! submissions to the session.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
