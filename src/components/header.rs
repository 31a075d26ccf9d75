//! Header Component
//!
//! Top bar with the app title and the single "new plate" action.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] on_open_add: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Food Dashboard"</h1>
            <button class="new-plate-btn" on:click=move |_| on_open_add.run(())>
                "New plate"
            </button>
        </header>
    }
}
