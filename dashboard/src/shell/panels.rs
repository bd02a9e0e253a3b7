//! 面板
//!
//! 每个标签页一个面板，持有数据、视图参数和对话框。切换标签页不会重置面板。

use crate::catalog::{CatalogError, DishCatalog, MenuView};
use crate::dialog::DialogState;
use crate::orders::{OrderBook, OrderQuery, StatusFilter};
use crate::reservations::{ReservationBook, ReservationError, ReservationOrder};
use serde::{Deserialize, Serialize};
use shared::models::{Dish, DishDraft, Order, Reservation, ReservationForm};
use shared::{AppError, AppResult};

/// Dish being edited and the menu it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishEdit {
    pub menu_id: String,
    pub dish: Dish,
}

/// Reservation being edited, pre-filled with its current values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationEdit {
    pub id: String,
    pub form: ReservationForm,
}

fn no_dialog(kind: &str) -> AppError {
    AppError::invalid_request(format!("No {} dialog is open", kind))
}

fn no_menu_selected() -> AppError {
    AppError::invalid_request("No menu selected")
}

// =============================================================================
// Menu
// =============================================================================

#[derive(Debug, Clone)]
pub struct MenuPanel {
    catalog: DishCatalog,
    search_term: String,
    selected_menu: Option<String>,
    draft: DishDraft,
    dialog: DialogState<DishEdit>,
}

#[derive(Debug, Serialize)]
pub struct MenuPanelView<'a> {
    pub menus: Vec<MenuView<'a>>,
    pub selected_menu: Option<&'a str>,
    pub search_term: &'a str,
    pub draft: &'a DishDraft,
    pub dialog: &'a DialogState<DishEdit>,
}

impl MenuPanel {
    pub fn new(catalog: DishCatalog) -> Self {
        let selected_menu = catalog.first_menu_id().map(String::from);
        Self {
            catalog,
            search_term: String::new(),
            selected_menu,
            draft: DishDraft::default(),
            dialog: DialogState::default(),
        }
    }

    pub fn catalog(&self) -> &DishCatalog {
        &self.catalog
    }

    pub fn dialog(&self) -> &DialogState<DishEdit> {
        &self.dialog
    }

    pub fn draft(&self) -> &DishDraft {
        &self.draft
    }

    pub fn selected_menu(&self) -> Option<&str> {
        self.selected_menu.as_deref()
    }

    pub fn select_menu(&mut self, menu_id: &str) -> Result<(), CatalogError> {
        if self.catalog.menu(menu_id).is_none() {
            return Err(CatalogError::MenuNotFound(menu_id.to_string()));
        }
        self.selected_menu = Some(menu_id.to_string());
        Ok(())
    }

    pub fn search(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn open_add(&mut self) {
        self.dialog.open_add();
    }

    /// Add the draft to the selected menu
    ///
    /// On failure the dialog and the draft are left as they were.
    pub fn submit_add(&mut self, draft: Option<DishDraft>) -> AppResult<Dish> {
        if !self.dialog.is_adding() {
            return Err(no_dialog("add dish"));
        }
        if let Some(draft) = draft {
            self.draft = draft;
        }
        let menu_id = self
            .selected_menu
            .clone()
            .ok_or_else(no_menu_selected)?;

        let dish = self.catalog.add_dish(&menu_id, self.draft.clone())?;
        self.draft = DishDraft::default();
        self.dialog.close();
        Ok(dish)
    }

    pub fn open_edit(&mut self, menu_id: Option<String>, dish_id: &str) -> AppResult<()> {
        let menu_id = match menu_id.or_else(|| self.selected_menu.clone()) {
            Some(id) => id,
            None => return Err(no_menu_selected()),
        };
        let menu = self
            .catalog
            .menu(&menu_id)
            .ok_or_else(|| CatalogError::MenuNotFound(menu_id.clone()))?;
        let dish = menu
            .find_dish(dish_id)
            .ok_or_else(|| CatalogError::DishNotFound {
                menu_id: menu_id.clone(),
                dish_id: dish_id.to_string(),
            })?
            .clone();

        self.dialog.open_edit(DishEdit { menu_id, dish });
        Ok(())
    }

    /// Save the edit dialog; the dish id always comes from the open dialog
    pub fn submit_edit(&mut self, dish: Option<Dish>) -> AppResult<Dish> {
        let edit = self
            .dialog
            .editing_mut()
            .ok_or_else(|| no_dialog("edit dish"))?;
        if let Some(mut dish) = dish {
            dish.id = edit.dish.id.clone();
            edit.dish = dish;
        }
        let target = edit.clone();

        let dish = self.catalog.edit_dish(&target.menu_id, target.dish)?;
        self.dialog.close();
        Ok(dish)
    }

    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    pub fn view(&self) -> MenuPanelView<'_> {
        MenuPanelView {
            menus: self.catalog.search(&self.search_term),
            selected_menu: self.selected_menu.as_deref(),
            search_term: &self.search_term,
            draft: &self.draft,
            dialog: &self.dialog,
        }
    }
}

// =============================================================================
// Orders
// =============================================================================

#[derive(Debug, Clone)]
pub struct OrderPanel {
    book: OrderBook,
    query: OrderQuery,
}

#[derive(Debug, Serialize)]
pub struct OrderPanelView<'a> {
    pub orders: Vec<&'a Order>,
    pub query: &'a OrderQuery,
}

impl OrderPanel {
    pub fn new(book: OrderBook) -> Self {
        Self {
            book,
            query: OrderQuery::default(),
        }
    }

    pub fn query(&self) -> &OrderQuery {
        &self.query
    }

    pub fn filter(&mut self, status: StatusFilter) {
        self.query.status = status;
    }

    pub fn search(&mut self, term: String) {
        self.query.search = term;
    }

    pub fn toggle_sort(&mut self) {
        self.query.direction = self.query.direction.toggle();
    }

    pub fn view(&self) -> OrderPanelView<'_> {
        OrderPanelView {
            orders: self.book.query(&self.query),
            query: &self.query,
        }
    }
}

// =============================================================================
// Reservations
// =============================================================================

#[derive(Debug, Clone)]
pub struct ReservationPanel {
    book: ReservationBook,
    order: ReservationOrder,
    draft: ReservationForm,
    dialog: DialogState<ReservationEdit>,
}

#[derive(Debug, Serialize)]
pub struct ReservationPanelView<'a> {
    pub reservations: Vec<&'a Reservation>,
    pub order: ReservationOrder,
    pub draft: &'a ReservationForm,
    pub dialog: &'a DialogState<ReservationEdit>,
}

impl ReservationPanel {
    pub fn new(book: ReservationBook) -> Self {
        Self {
            book,
            order: ReservationOrder::default(),
            draft: ReservationForm::default(),
            dialog: DialogState::default(),
        }
    }

    pub fn book(&self) -> &ReservationBook {
        &self.book
    }

    pub fn dialog(&self) -> &DialogState<ReservationEdit> {
        &self.dialog
    }

    pub fn order(&self) -> ReservationOrder {
        self.order
    }

    pub fn toggle_sort(&mut self) {
        self.order = self.order.toggle();
    }

    pub fn open_add(&mut self) {
        self.dialog.open_add();
    }

    pub fn submit_add(&mut self, form: Option<ReservationForm>) -> AppResult<Reservation> {
        if !self.dialog.is_adding() {
            return Err(no_dialog("add reservation"));
        }
        if let Some(form) = form {
            self.draft = form;
        }

        let reservation = self.book.add_reservation(self.draft.clone())?;
        self.draft = ReservationForm::default();
        self.dialog.close();
        Ok(reservation)
    }

    pub fn open_edit(&mut self, id: &str) -> Result<(), ReservationError> {
        let reservation = self
            .book
            .get(id)
            .ok_or_else(|| ReservationError::NotFound(id.to_string()))?;
        self.dialog.open_edit(ReservationEdit {
            id: reservation.id.clone(),
            form: ReservationForm::from(reservation),
        });
        Ok(())
    }

    pub fn submit_edit(&mut self, form: Option<ReservationForm>) -> AppResult<Reservation> {
        let edit = self
            .dialog
            .editing_mut()
            .ok_or_else(|| no_dialog("edit reservation"))?;
        if let Some(form) = form {
            edit.form = form;
        }
        let target = edit.clone();

        let reservation = self.book.edit_reservation(&target.id, target.form)?;
        self.dialog.close();
        Ok(reservation)
    }

    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    pub fn view(&self) -> ReservationPanelView<'_> {
        ReservationPanelView {
            reservations: self.book.sorted(self.order),
            order: self.order,
            draft: &self.draft,
            dialog: &self.dialog,
        }
    }
}
