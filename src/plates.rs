//! Plate Collection Rules
//!
//! Pure reconciliation rules for the in-memory plate collection.
//! Everything here is plain data manipulation so it can be unit tested
//! without a browser.

use crate::models::{FoodDraft, FoodPlate};

/// Build a new plate from form input.
///
/// New plates always start available. The id is provisional (one past the
/// current collection size) and is swapped for the API-assigned id once the
/// create call comes back, see [`adopt_id`].
pub fn new_plate(draft: FoodDraft, collection_len: usize) -> FoodPlate {
    FoodPlate {
        id: collection_len as u32 + 1,
        name: draft.name,
        image: draft.image,
        price: draft.price,
        description: draft.description,
        available: true,
    }
}

/// Prepend a plate: newest entries are shown first.
pub fn add_plate(foods: &mut Vec<FoodPlate>, plate: FoodPlate) {
    foods.insert(0, plate);
}

/// Apply edited fields to the plate with the given id, in place.
///
/// Availability is left untouched; the edit form does not collect it.
/// Returns the pre-edit plate for rollback, or `None` when no entry
/// matches (stale edit target).
pub fn apply_edit(foods: &mut [FoodPlate], id: u32, draft: &FoodDraft) -> Option<FoodPlate> {
    let food = foods.iter_mut().find(|food| food.id == id)?;
    let previous = food.clone();
    food.name = draft.name.clone();
    food.image = draft.image.clone();
    food.price = draft.price.clone();
    food.description = draft.description.clone();
    Some(previous)
}

/// Replace the plate whose id matches `plate.id`.
///
/// Used to roll an entry back after a failed API write.
pub fn replace_plate(foods: &mut [FoodPlate], plate: FoodPlate) -> bool {
    match foods.iter_mut().find(|food| food.id == plate.id) {
        Some(food) => {
            *food = plate;
            true
        }
        None => false,
    }
}

/// Remove the plate with the given id, returning it together with its
/// position so a failed delete can be rolled back. Removing an unknown id
/// is a no-op and returns `None`.
pub fn take_plate(foods: &mut Vec<FoodPlate>, id: u32) -> Option<(usize, FoodPlate)> {
    let index = foods.iter().position(|food| food.id == id)?;
    Some((index, foods.remove(index)))
}

/// Put a previously removed plate back where it was.
pub fn restore_plate(foods: &mut Vec<FoodPlate>, index: usize, plate: FoodPlate) {
    foods.insert(index.min(foods.len()), plate);
}

/// Swap a provisional local id for the id assigned by the API.
pub fn adopt_id(foods: &mut [FoodPlate], local_id: u32, assigned_id: u32) {
    if let Some(food) = foods.iter_mut().find(|food| food.id == local_id) {
        food.id = assigned_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(id: u32, name: &str) -> FoodPlate {
        FoodPlate {
            id,
            name: name.to_string(),
            image: format!("https://example.com/{}.png", id),
            price: "19.90".to_string(),
            description: format!("Description of {}", name),
            available: true,
        }
    }

    fn draft(name: &str) -> FoodDraft {
        FoodDraft {
            name: name.to_string(),
            image: "https://example.com/new.png".to_string(),
            price: "9.90".to_string(),
            description: format!("Description of {}", name),
        }
    }

    #[test]
    fn test_new_plate_starts_available_with_provisional_id() {
        let new = new_plate(draft("A"), 0);
        assert_eq!(new.id, 1);
        assert!(new.available);

        let new = new_plate(draft("B"), 3);
        assert_eq!(new.id, 4);
        assert!(new.available);
    }

    #[test]
    fn test_add_plate_prepends() {
        let mut foods = vec![plate(1, "Rice"), plate(2, "Beans")];
        add_plate(&mut foods, plate(3, "Pasta"));

        assert_eq!(foods.len(), 3);
        assert_eq!(foods[0].name, "Pasta");
        assert_eq!(foods[1].name, "Rice");
        assert_eq!(foods[2].name, "Beans");
    }

    #[test]
    fn test_apply_edit_changes_only_the_target() {
        let mut foods = vec![plate(1, "Rice"), plate(5, "Beans"), plate(7, "Pasta")];

        let previous = apply_edit(&mut foods, 5, &draft("Black beans"));
        assert_eq!(previous.unwrap().name, "Beans");

        assert_eq!(foods.len(), 3);
        assert_eq!(foods[1].id, 5);
        assert_eq!(foods[1].name, "Black beans");
        assert_eq!(foods[1].price, "9.90");
        // availability survives the edit
        assert!(foods[1].available);
        // neighbours untouched
        assert_eq!(foods[0], plate(1, "Rice"));
        assert_eq!(foods[2], plate(7, "Pasta"));
    }

    #[test]
    fn test_apply_edit_missing_target_changes_nothing() {
        let mut foods = vec![plate(1, "Rice"), plate(2, "Beans")];
        let snapshot = foods.clone();

        assert!(apply_edit(&mut foods, 99, &draft("Ghost")).is_none());
        assert_eq!(foods, snapshot);
    }

    #[test]
    fn test_replace_plate_rolls_back_an_edit() {
        let mut foods = vec![plate(1, "Rice"), plate(2, "Beans")];
        let previous = apply_edit(&mut foods, 2, &draft("Black beans")).unwrap();

        assert!(replace_plate(&mut foods, previous));
        assert_eq!(foods[1], plate(2, "Beans"));

        assert!(!replace_plate(&mut foods, plate(99, "Ghost")));
    }

    #[test]
    fn test_take_plate_removes_exactly_one_id() {
        let mut foods = vec![plate(1, "Rice"), plate(2, "Beans"), plate(3, "Pasta")];

        let (index, removed) = take_plate(&mut foods, 2).unwrap();
        assert_eq!(index, 1);
        assert_eq!(removed.name, "Beans");
        assert_eq!(foods.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_take_plate_unknown_id_is_a_noop() {
        let mut foods = vec![plate(1, "Rice"), plate(2, "Beans"), plate(3, "Pasta")];
        let snapshot = foods.clone();

        assert!(take_plate(&mut foods, 99).is_none());
        assert_eq!(foods, snapshot);
    }

    #[test]
    fn test_restore_plate_returns_entry_to_its_position() {
        let mut foods = vec![plate(1, "Rice"), plate(2, "Beans"), plate(3, "Pasta")];
        let (index, removed) = take_plate(&mut foods, 2).unwrap();

        restore_plate(&mut foods, index, removed);
        assert_eq!(foods.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        // index past the end is clamped
        let mut short = vec![plate(1, "Rice")];
        restore_plate(&mut short, 5, plate(2, "Beans"));
        assert_eq!(short.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_adopt_id_swaps_the_provisional_id() {
        let mut foods = vec![plate(2, "Beans"), plate(1, "Rice")];

        adopt_id(&mut foods, 2, 17);
        assert_eq!(foods[0].id, 17);
        assert_eq!(foods[1].id, 1);

        // unknown local id leaves everything alone
        adopt_id(&mut foods, 99, 42);
        assert_eq!(foods[0].id, 17);
    }

    #[test]
    fn test_add_then_delete_scenario() {
        // start from what the API returned
        let mut foods = vec![plate(1, "Rice")];

        let new = new_plate(draft("Beans"), foods.len());
        add_plate(&mut foods, new);

        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].id, 2);
        assert_eq!(foods[0].name, "Beans");
        assert!(foods[0].available);
        assert_eq!(foods[1].id, 1);
        assert_eq!(foods[1].name, "Rice");

        let _ = take_plate(&mut foods, 1);
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].id, 2);
        assert_eq!(foods[0].name, "Beans");
    }
}
