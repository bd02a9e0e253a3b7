//! Dish catalog
//!
//! Owns the fixed set of menus and their dishes. Mutations follow the same
//! two-step shape as the rest of the crate:
//!
//! ```text
//! CatalogCommand → handle() (validate, no mutation) → CatalogEvent → apply()
//! ```
//!
//! `handle` never touches state, so a rejected command leaves the catalog
//! exactly as it was. `apply` is a pure state transition and cannot fail.

mod error;

pub use error::CatalogError;

use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Dish, DishDraft, Menu, PLACEHOLDER_IMAGE};
use std::collections::HashSet;

/// How a zero price is treated by add/edit validation
///
/// `RejectZero` keeps the dashboard's historical behavior where an unfilled
/// price field and a price of 0 are indistinguishable. `AllowZero` lets a
/// free dish through. Negative prices are rejected under both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePolicy {
    #[default]
    RejectZero,
    AllowZero,
}

/// Catalog commands
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCommand {
    AddDish { menu_id: String, draft: DishDraft },
    EditDish { menu_id: String, dish: Dish },
}

/// Catalog events, produced by `handle` and consumed by `apply`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogEvent {
    DishAdded { menu_id: String, dish: Dish },
    DishUpdated {
        menu_id: String,
        dish: Dish,
        previous: Dish,
    },
}

/// Borrowed, filtered view of one menu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub dishes: Vec<&'a Dish>,
}

/// Menus and their dishes
#[derive(Debug, Clone)]
pub struct DishCatalog {
    menus: Vec<Menu>,
    price_policy: PricePolicy,
}

impl DishCatalog {
    /// Build a catalog, rejecting duplicate ids and negative prices
    pub fn new(menus: Vec<Menu>) -> Result<Self, CatalogError> {
        let mut menu_ids = HashSet::new();
        for menu in &menus {
            if !menu_ids.insert(menu.id.as_str()) {
                return Err(CatalogError::DuplicateMenu(menu.id.clone()));
            }
            let mut dish_ids = HashSet::new();
            for dish in &menu.dishes {
                if !dish_ids.insert(dish.id.as_str()) {
                    return Err(CatalogError::DuplicateDish {
                        menu_id: menu.id.clone(),
                        dish_id: dish.id.clone(),
                    });
                }
                if dish.price.is_sign_negative() && !dish.price.is_zero() {
                    return Err(CatalogError::NegativePrice(dish.price));
                }
            }
        }

        Ok(Self {
            menus,
            price_policy: PricePolicy::default(),
        })
    }

    pub fn with_price_policy(mut self, policy: PricePolicy) -> Self {
        self.price_policy = policy;
        self
    }

    pub fn price_policy(&self) -> PricePolicy {
        self.price_policy
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn menu(&self, menu_id: &str) -> Option<&Menu> {
        self.menus.iter().find(|m| m.id == menu_id)
    }

    /// Menu selected when the catalog is first shown
    pub fn first_menu_id(&self) -> Option<&str> {
        self.menus.first().map(|m| m.id.as_str())
    }

    pub fn dish_count(&self) -> usize {
        self.menus.iter().map(|m| m.dishes.len()).sum()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Case-insensitive name filter across every menu
    ///
    /// Every menu is returned, possibly with no dishes; an empty term keeps
    /// all dishes.
    pub fn search(&self, term: &str) -> Vec<MenuView<'_>> {
        let needle = term.to_lowercase();
        self.menus
            .iter()
            .map(|menu| MenuView {
                id: &menu.id,
                name: &menu.name,
                dishes: menu
                    .dishes
                    .iter()
                    .filter(|dish| needle.is_empty() || dish.name.to_lowercase().contains(&needle))
                    .collect(),
            })
            .collect()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Validate a command and produce the event it would cause
    pub fn handle(&self, command: &CatalogCommand) -> Result<CatalogEvent, CatalogError> {
        match command {
            CatalogCommand::AddDish { menu_id, draft } => {
                validate_dish_fields(
                    &draft.name,
                    &draft.description,
                    draft.price,
                    draft.image.as_deref(),
                    self.price_policy,
                )?;
                self.menu(menu_id)
                    .ok_or_else(|| CatalogError::MenuNotFound(menu_id.clone()))?;

                let dish = Dish::from_draft(shared::util::dish_id(), draft.clone());
                Ok(CatalogEvent::DishAdded {
                    menu_id: menu_id.clone(),
                    dish,
                })
            }
            CatalogCommand::EditDish { menu_id, dish } => {
                validate_dish_fields(
                    &dish.name,
                    &dish.description,
                    Some(dish.price),
                    Some(dish.image.as_str()),
                    self.price_policy,
                )?;
                let menu = self
                    .menu(menu_id)
                    .ok_or_else(|| CatalogError::MenuNotFound(menu_id.clone()))?;
                let previous = menu.find_dish(&dish.id).ok_or_else(|| {
                    CatalogError::DishNotFound {
                        menu_id: menu_id.clone(),
                        dish_id: dish.id.clone(),
                    }
                })?;

                let mut dish = dish.clone();
                if dish.image.trim().is_empty() {
                    dish.image = PLACEHOLDER_IMAGE.to_string();
                }
                Ok(CatalogEvent::DishUpdated {
                    menu_id: menu_id.clone(),
                    dish,
                    previous: previous.clone(),
                })
            }
        }
    }

    /// Apply an event produced by [`handle`](Self::handle)
    ///
    /// Events naming an unknown menu or dish are ignored.
    pub fn apply(&mut self, event: &CatalogEvent) {
        match event {
            CatalogEvent::DishAdded { menu_id, dish } => {
                if let Some(menu) = self.menus.iter_mut().find(|m| &m.id == menu_id) {
                    menu.dishes.push(dish.clone());
                }
            }
            CatalogEvent::DishUpdated { menu_id, dish, .. } => {
                // Only the targeted menu; another menu may reuse the id
                if let Some(slot) = self
                    .menus
                    .iter_mut()
                    .find(|m| &m.id == menu_id)
                    .and_then(|m| m.dishes.iter_mut().find(|d| d.id == dish.id))
                {
                    *slot = dish.clone();
                }
            }
        }
    }

    /// `handle` then `apply`
    pub fn execute(&mut self, command: CatalogCommand) -> Result<CatalogEvent, CatalogError> {
        let event = match self.handle(&command) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    validation = e.is_validation(),
                    "Catalog command rejected"
                );
                return Err(e);
            }
        };
        self.apply(&event);

        match &event {
            CatalogEvent::DishAdded { menu_id, dish } => {
                tracing::info!(
                    menu_id = %menu_id,
                    dish_id = %dish.id,
                    name = %dish.name,
                    "Dish added"
                );
            }
            CatalogEvent::DishUpdated { menu_id, dish, .. } => {
                tracing::info!(menu_id = %menu_id, dish_id = %dish.id, "Dish updated");
            }
        }
        Ok(event)
    }

    /// Add a dish to `menu_id`, returning the stored dish
    pub fn add_dish(&mut self, menu_id: &str, draft: DishDraft) -> Result<Dish, CatalogError> {
        let event = self.execute(CatalogCommand::AddDish {
            menu_id: menu_id.to_string(),
            draft,
        })?;
        Ok(event_dish(event))
    }

    /// Replace the dish with `updated.id` inside `menu_id` only
    pub fn edit_dish(&mut self, menu_id: &str, updated: Dish) -> Result<Dish, CatalogError> {
        let event = self.execute(CatalogCommand::EditDish {
            menu_id: menu_id.to_string(),
            dish: updated,
        })?;
        Ok(event_dish(event))
    }
}

fn event_dish(event: CatalogEvent) -> Dish {
    match event {
        CatalogEvent::DishAdded { dish, .. } | CatalogEvent::DishUpdated { dish, .. } => dish,
    }
}

/// Name, description and price must be filled in; order matches the form
fn validate_dish_fields(
    name: &str,
    description: &str,
    price: Option<Decimal>,
    image: Option<&str>,
    policy: PricePolicy,
) -> Result<(), CatalogError> {
    validate_required_text(name, "name", MAX_NAME_LEN)?;
    validate_required_text(description, "description", MAX_NOTE_LEN)?;

    let price = price.ok_or(crate::utils::FieldError::Missing("price"))?;
    if price.is_zero() {
        if policy == PricePolicy::RejectZero {
            return Err(CatalogError::ZeroPrice);
        }
    } else if price.is_sign_negative() {
        return Err(CatalogError::NegativePrice(price));
    }

    validate_optional_text(image, "image", MAX_URL_LEN)?;
    Ok(())
}
