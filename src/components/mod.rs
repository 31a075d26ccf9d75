//! UI Components
//!
//! Reusable Leptos components.

mod add_food_modal;
mod edit_food_modal;
mod food_card;
mod food_list;
mod header;
mod modal;

pub use add_food_modal::AddFoodModal;
pub use edit_food_modal::EditFoodModal;
pub use food_card::FoodCard;
pub use food_list::FoodList;
pub use header::Header;
pub use modal::Modal;
