//! Modal Component
//!
//! Overlay dialog shell shared by the add and edit forms. Clicking the
//! overlay closes the dialog; clicks inside the panel do not propagate.

use leptos::prelude::*;

#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
