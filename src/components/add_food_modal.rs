//! Add Food Modal
//!
//! Dialog form for creating a new plate. Collects the four editable fields,
//! hands them to the `on_submit` callback and closes itself.

use leptos::prelude::*;

use crate::components::Modal;
use crate::models::FoodDraft;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn AddFoodModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<FoodDraft>,
) -> impl IntoView {
    let store = use_dashboard_store();
    let is_open = Signal::derive(move || store.add_modal_open().get());

    let (name, set_name) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() {
            return;
        }
        on_submit.run(FoodDraft {
            name: name.get(),
            image: image.get(),
            price: price.get(),
            description: description.get(),
        });
        set_name.set(String::new());
        set_image.set(String::new());
        set_price.set(String::new());
        set_description.set(String::new());
        on_close.run(());
    };

    view! {
        <Modal is_open=is_open on_close=on_close>
            <h2>"New plate"</h2>
            <form class="food-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Image URL"
                    prop:value=move || image.get()
                    on:input=move |ev| set_image.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Price, e.g. 19.90"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">"Add plate"</button>
            </form>
        </Modal>
    }
}
