//! Dish Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Image shown for dishes created without one
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Dish entity (one card on a menu)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique within its menu
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in currency unit, never negative
    pub price: Decimal,
    /// Image URI
    pub image: String,
}

impl Dish {
    /// Build a dish from a draft whose fields have already been validated
    pub fn from_draft(id: String, draft: DishDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price.unwrap_or_default(),
            image: draft
                .image
                .filter(|img| !img.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        }
    }
}

/// Add-dish payload
///
/// `price` is optional so an unfilled price field can be told apart from
/// one the user typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
}

impl DishDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: Some(price),
            image: None,
        }
    }
}
