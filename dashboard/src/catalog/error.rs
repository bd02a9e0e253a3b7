use crate::utils::FieldError;
use rust_decimal::Decimal;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Price left at zero while zero counts as "not filled in"
    #[error("price must be set")]
    ZeroPrice,

    #[error("price must not be negative: {0}")]
    NegativePrice(Decimal),

    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    #[error("Dish not found: {dish_id} in menu {menu_id}")]
    DishNotFound { menu_id: String, dish_id: String },

    #[error("Duplicate menu id: {0}")]
    DuplicateMenu(String),

    #[error("Duplicate dish id: {dish_id} in menu {menu_id}")]
    DuplicateDish { menu_id: String, dish_id: String },
}

impl CatalogError {
    /// Input the user can correct with the dialog still open
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Field(_) | Self::ZeroPrice | Self::NegativePrice(_))
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Field(e) => e.into(),
            // Same prompt as an empty field: a zero price reads as "unfilled"
            CatalogError::ZeroPrice => AppError::required_field("price"),
            CatalogError::NegativePrice(price) => {
                AppError::with_message(
                    ErrorCode::DishInvalidPrice,
                    format!("Price must not be negative: {}", price),
                )
                .with_detail("field", "price")
            }
            CatalogError::MenuNotFound(id) => {
                AppError::new(ErrorCode::MenuNotFound).with_detail("menu_id", id)
            }
            CatalogError::DishNotFound { menu_id, dish_id } => {
                AppError::new(ErrorCode::DishNotFound)
                    .with_detail("menu_id", menu_id)
                    .with_detail("dish_id", dish_id)
            }
            CatalogError::DuplicateMenu(id) => AppError::already_exists(format!("Menu {}", id)),
            CatalogError::DuplicateDish { menu_id, dish_id } => {
                AppError::already_exists(format!("Dish {}", dish_id))
                    .with_detail("menu_id", menu_id)
            }
        }
    }
}
