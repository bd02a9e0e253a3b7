//! 外壳命令
//!
//! 每行 stdin JSON 解析为一个 [`ShellCommand`]，按 `cmd` 字段区分。

use crate::orders::StatusFilter;
use serde::{Deserialize, Serialize};
use shared::models::{Dish, DishDraft, ReservationForm};

use super::Tab;

/// One user action against the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ShellCommand {
    // ========== Session ==========
    Login {
        #[serde(default)]
        email: String,
        #[serde(default)]
        password: String,
    },
    Logout,
    SwitchTab {
        tab: Tab,
    },
    Render,

    // ========== Menu ==========
    SelectMenu {
        menu_id: String,
    },
    SearchDishes {
        #[serde(default)]
        term: String,
    },
    OpenAddDish,
    /// Submit the add dialog; `draft` replaces the kept draft when present
    SubmitAddDish {
        #[serde(default)]
        draft: Option<DishDraft>,
    },
    /// Open the edit dialog; `menu_id` defaults to the selected menu
    OpenEditDish {
        #[serde(default)]
        menu_id: Option<String>,
        dish_id: String,
    },
    SubmitEditDish {
        #[serde(default)]
        dish: Option<Dish>,
    },
    /// Close the dialog of the active tab
    CloseDialog,

    // ========== Orders ==========
    FilterOrders {
        status: StatusFilter,
    },
    SearchOrders {
        #[serde(default)]
        term: String,
    },
    ToggleOrderSort,

    // ========== Reservations ==========
    OpenAddReservation,
    SubmitAddReservation {
        #[serde(default)]
        form: Option<ReservationForm>,
    },
    OpenEditReservation {
        id: String,
    },
    SubmitEditReservation {
        #[serde(default)]
        form: Option<ReservationForm>,
    },
    ToggleReservationSort,
}

impl ShellCommand {
    /// Accepted before login
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login { .. })
    }

    /// Stable name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::SwitchTab { .. } => "switch_tab",
            Self::Render => "render",
            Self::SelectMenu { .. } => "select_menu",
            Self::SearchDishes { .. } => "search_dishes",
            Self::OpenAddDish => "open_add_dish",
            Self::SubmitAddDish { .. } => "submit_add_dish",
            Self::OpenEditDish { .. } => "open_edit_dish",
            Self::SubmitEditDish { .. } => "submit_edit_dish",
            Self::CloseDialog => "close_dialog",
            Self::FilterOrders { .. } => "filter_orders",
            Self::SearchOrders { .. } => "search_orders",
            Self::ToggleOrderSort => "toggle_order_sort",
            Self::OpenAddReservation => "open_add_reservation",
            Self::SubmitAddReservation { .. } => "submit_add_reservation",
            Self::OpenEditReservation { .. } => "open_edit_reservation",
            Self::SubmitEditReservation { .. } => "submit_edit_reservation",
            Self::ToggleReservationSort => "toggle_reservation_sort",
        }
    }
}
