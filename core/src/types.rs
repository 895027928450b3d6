//! Domain DTOs for the menu API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! `price` stays a `String` end to end. The backend stores it as text and
//! parsing it into a float would lose the exact decimal the user typed.

use serde::{Deserialize, Serialize};

/// A single menu item as acknowledged by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl Food {
    /// Combine a persisted identity and availability with freshly edited fields.
    pub fn from_draft(id: i64, available: bool, draft: FoodDraft) -> Self {
        Self {
            id,
            name: draft.name,
            image: draft.image,
            price: draft.price,
            description: draft.description,
            available,
        }
    }

    /// Copy of this record with `available` inverted, ready to send as a toggle.
    pub fn toggled(&self) -> Self {
        Self {
            available: !self.available,
            ..self.clone()
        }
    }
}

/// Form values for a menu item. Carries neither an id nor availability;
/// both are owned by the server or by the record being edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

/// Request payload for creating a new menu item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFood {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl NewFood {
    pub fn from_draft(draft: FoodDraft, available: bool) -> Self {
        Self {
            name: draft.name,
            image: draft.image,
            price: draft.price,
            description: draft.description,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> FoodDraft {
        FoodDraft {
            name: "Ao molho".to_string(),
            image: "https://example.com/ao-molho.png".to_string(),
            price: "19.90".to_string(),
            description: "Macarrão ao molho branco".to_string(),
        }
    }

    #[test]
    fn from_draft_keeps_identity_and_availability() {
        let food = Food::from_draft(5, false, draft());
        assert_eq!(food.id, 5);
        assert!(!food.available);
        assert_eq!(food.name, "Ao molho");
        assert_eq!(food.price, "19.90");
    }

    #[test]
    fn toggled_only_flips_available() {
        let food = Food::from_draft(1, true, draft());
        let flipped = food.toggled();
        assert!(!flipped.available);
        assert_eq!(flipped, Food { available: false, ..food.clone() });
        assert_eq!(flipped.toggled(), food);
    }

    #[test]
    fn price_is_kept_as_text() {
        let food: Food = serde_json::from_str(
            r#"{"id":1,"name":"A","image":"a.png","price":"10.10","description":"d","available":true}"#,
        )
        .unwrap();
        assert_eq!(food.price, "10.10");
        let json = serde_json::to_value(&food).unwrap();
        assert_eq!(json["price"], "10.10");
    }

    #[test]
    fn food_rejects_missing_id() {
        let result: Result<Food, _> = serde_json::from_str(
            r#"{"name":"A","image":"a.png","price":"1","description":"d","available":true}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_food_serializes_without_id() {
        let json = serde_json::to_value(NewFood::from_draft(draft(), true)).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["available"], true);
        assert_eq!(json["description"], "Macarrão ao molho branco");
    }
}
