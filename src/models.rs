//! Frontend Models
//!
//! Data structures matching the foods API records.

use serde::{Deserialize, Serialize};

/// Food plate record (matches the API wire shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPlate {
    pub id: u32,
    pub name: String,
    pub image: String,
    /// Decimal-formatted text, not a number
    pub price: String,
    pub description: String,
    pub available: bool,
}

/// The four editable fields collected by the add/edit forms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_plate_wire_shape() {
        let json = r#"{
            "id": 1,
            "name": "Ao molho",
            "image": "https://example.com/ao_molho.png",
            "price": "19.90",
            "description": "Macarrão ao molho branco",
            "available": true
        }"#;

        let plate: FoodPlate = serde_json::from_str(json).unwrap();
        assert_eq!(plate.id, 1);
        assert_eq!(plate.name, "Ao molho");
        assert_eq!(plate.price, "19.90");
        assert!(plate.available);
    }
}
