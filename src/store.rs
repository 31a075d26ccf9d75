//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! owned by the `App` component; everything else reads it through context
//! and mutates only via callbacks created in `App`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::FoodPlate;

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// All plates, newest first
    pub foods: Vec<FoodPlate>,
    /// Plate currently loaded into the edit dialog
    pub editing_food: Option<FoodPlate>,
    /// Add dialog visibility
    pub add_modal_open: bool,
    /// Edit dialog visibility
    pub edit_modal_open: bool,
    /// Set when loading the collection fails, cleared on retry
    pub load_error: Option<String>,
    /// Set when persisting a local change fails
    pub sync_error: Option<String>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_flags_start_closed_and_double_toggle_is_identity() {
        let mut state = DashboardState::default();
        assert!(!state.add_modal_open);
        assert!(!state.edit_modal_open);

        // the toggle callbacks invert the flag; two inversions restore it
        state.add_modal_open = !state.add_modal_open;
        assert!(state.add_modal_open);
        state.add_modal_open = !state.add_modal_open;
        assert!(!state.add_modal_open);

        state.edit_modal_open = !state.edit_modal_open;
        state.edit_modal_open = !state.edit_modal_open;
        assert!(!state.edit_modal_open);
    }
}
