//! Food List Component
//!
//! Grid of plate cards, one per entry in the collection. Pure view over the
//! store: an empty collection simply renders an empty grid.

use leptos::prelude::*;

use crate::components::FoodCard;
use crate::models::FoodPlate;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn FoodList(
    #[prop(into)] on_edit: Callback<FoodPlate>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="foods-list">
            <For
                each=move || store.foods().get()
                key=|food| {
                    // Key on every editable field so in-place edits re-render
                    (
                        food.id,
                        food.name.clone(),
                        food.image.clone(),
                        food.price.clone(),
                        food.description.clone(),
                        food.available,
                    )
                }
                children=move |food| {
                    view! {
                        <FoodCard food=food on_edit=on_edit on_delete=on_delete/>
                    }
                }
            />
        </div>
    }
}
