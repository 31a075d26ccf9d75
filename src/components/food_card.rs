//! Food Card Component
//!
//! One plate in the list, with edit and delete actions.

use leptos::prelude::*;

use crate::models::FoodPlate;

#[component]
pub fn FoodCard(
    food: FoodPlate,
    #[prop(into)] on_edit: Callback<FoodPlate>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let id = food.id;
    let edit_food = food.clone();
    let badge_class = if food.available {
        "badge available"
    } else {
        "badge unavailable"
    };
    let badge_text = if food.available { "Available" } else { "Unavailable" };

    view! {
        <div class="food-card">
            <img class="food-image" src=food.image.clone() alt=food.name.clone()/>
            <div class="food-body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <span class="food-price">"R$ " {food.price.clone()}</span>
            </div>
            <div class="food-footer">
                <span class=badge_class>{badge_text}</span>
                <button
                    class="edit-btn"
                    on:click=move |_| on_edit.run(edit_food.clone())
                >
                    "Edit"
                </button>
                <button
                    class="delete-btn"
                    on:click=move |_| on_delete.run(id)
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
