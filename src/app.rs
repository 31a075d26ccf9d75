//! Food Dashboard App
//!
//! Main application component. Owns the plate collection, the editing
//! selection and both dialog flags; children mutate state only through the
//! callbacks created here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::models::{FoodDraft, FoodPlate};
use crate::plates;
use crate::store::{DashboardState, DashboardStateStoreFields};
use crate::components::{AddFoodModal, EditFoodModal, FoodList, Header};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(DashboardState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load the collection on mount, and again on manual retry
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match api::list_foods().await {
                Ok(foods) => {
                    store.load_error().set(None);
                    store.foods().set(foods);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[DASH] load failed: {}", err).into());
                    store.load_error().set(Some(err));
                }
            }
        });
    });

    let toggle_add_modal = Callback::new(move |_: ()| {
        let open = store.add_modal_open().get();
        store.add_modal_open().set(!open);
    });

    let toggle_edit_modal = Callback::new(move |_: ()| {
        let open = store.edit_modal_open().get();
        store.edit_modal_open().set(!open);
    });

    // Optimistic add: the plate shows up immediately under a provisional id,
    // then the create call either confirms it (adopting the assigned id) or
    // rolls it back.
    let handle_add_food = Callback::new(move |draft: FoodDraft| {
        let plate = {
            let foods_field = store.foods();
            let mut foods = foods_field.write();
            let plate = plates::new_plate(draft, foods.len());
            plates::add_plate(&mut foods, plate.clone());
            plate
        };
        spawn_local(async move {
            match api::create_food(&plate).await {
                Ok(saved) => {
                    if saved.id != plate.id {
                        plates::adopt_id(&mut store.foods().write(), plate.id, saved.id);
                    }
                    store.sync_error().set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[DASH] create failed: {}", err).into());
                    let _ = plates::take_plate(&mut store.foods().write(), plate.id);
                    store
                        .sync_error()
                        .set(Some(format!("Could not save \"{}\": {}", plate.name, err)));
                }
            }
        });
    });

    // Update keyed on the editing selection. A stale selection is reported
    // instead of silently ignored.
    let handle_update_food = Callback::new(move |draft: FoodDraft| {
        let Some(editing) = store.editing_food().get() else {
            store
                .sync_error()
                .set(Some("No plate is selected for editing".to_string()));
            return;
        };
        let target_id = editing.id;

        // Scope the write guard so the store is free again before reporting
        let previous = {
            let foods_field = store.foods();
            let mut foods = foods_field.write();
            plates::apply_edit(&mut foods, target_id, &draft)
        };
        let Some(previous) = previous else {
            store
                .sync_error()
                .set(Some(format!("Plate #{} is no longer in the list", target_id)));
            return;
        };

        let updated = FoodPlate {
            name: draft.name,
            image: draft.image,
            price: draft.price,
            description: draft.description,
            ..previous.clone()
        };
        spawn_local(async move {
            match api::update_food(&updated).await {
                Ok(_) => store.sync_error().set(None),
                Err(err) => {
                    web_sys::console::error_1(&format!("[DASH] update failed: {}", err).into());
                    plates::replace_plate(&mut store.foods().write(), previous);
                    store
                        .sync_error()
                        .set(Some(format!("Could not update \"{}\": {}", updated.name, err)));
                }
            }
        });
    });

    // Deleting an id that is not in the list is a no-op.
    let handle_delete_food = Callback::new(move |id: u32| {
        let Some((index, removed)) = plates::take_plate(&mut store.foods().write(), id) else {
            return;
        };
        spawn_local(async move {
            match api::delete_food(id).await {
                Ok(()) => store.sync_error().set(None),
                Err(err) => {
                    web_sys::console::error_1(&format!("[DASH] delete failed: {}", err).into());
                    let name = removed.name.clone();
                    plates::restore_plate(&mut store.foods().write(), index, removed);
                    store
                        .sync_error()
                        .set(Some(format!("Could not delete \"{}\": {}", name, err)));
                }
            }
        });
    });

    let handle_edit_food = Callback::new(move |food: FoodPlate| {
        store.editing_food().set(Some(food));
        toggle_edit_modal.run(());
    });

    view! {
        <Header on_open_add=toggle_add_modal/>

        {move || store.load_error().get().map(|err| view! {
            <div class="banner banner-error">
                <p>"Could not load the menu: " {err}</p>
                <button on:click=move |_| set_reload_trigger.update(|v| *v += 1)>
                    "Try again"
                </button>
            </div>
        })}

        {move || store.sync_error().get().map(|err| view! {
            <div class="banner banner-warning">
                <p>{err}</p>
                <button on:click=move |_| store.sync_error().set(None)>"Dismiss"</button>
            </div>
        })}

        <AddFoodModal on_close=toggle_add_modal on_submit=handle_add_food/>
        <EditFoodModal on_close=toggle_edit_modal on_submit=handle_update_food/>

        <FoodList on_edit=handle_edit_food on_delete=handle_delete_food/>
    }
}
