//! Menu Model

use super::dish::Dish;
use serde::{Deserialize, Serialize};

/// Named menu (Breakfast, Dinner, ...) holding an ordered list of dishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl Menu {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dishes: Vec::new(),
        }
    }

    pub fn with_dishes(mut self, dishes: Vec<Dish>) -> Self {
        self.dishes = dishes;
        self
    }

    pub fn find_dish(&self, dish_id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == dish_id)
    }
}
