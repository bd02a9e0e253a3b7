//! 仪表盘外壳
//!
//! 三个标签页（菜单 / 订单 / 预订）、登录门禁和通知：
//!
//! ```text
//! ShellCommand → dispatch() → Option<Notification>
//!                render()   → ShellView
//! ```
//!
//! 命令失败不会修改任何数据，只产生一条 destructive 通知。

mod command;
mod panels;

pub use command::ShellCommand;
pub use panels::{
    DishEdit, MenuPanel, MenuPanelView, OrderPanel, OrderPanelView, ReservationEdit,
    ReservationPanel, ReservationPanelView,
};

use crate::auth::{AuthError, Authenticator, CredentialStore, Principal};
use crate::catalog::DishCatalog;
use crate::core::Config;
use crate::orders::OrderBook;
use crate::reservations::ReservationBook;
use crate::seed;
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_PASSWORD_LEN, validate_required_text};
use serde::{Deserialize, Serialize};
use shared::{AppError, AppResult, ErrorCode};

/// Dashboard tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Menu,
    Orders,
    Reservations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Success,
    Destructive,
}

/// Toast shown after a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// Destructive toast carrying the error message
    pub fn from_error(err: &AppError) -> Self {
        let title = match err.code {
            ErrorCode::InvalidCredentials => "Login failed",
            _ => "Error",
        };
        Self::destructive(title, err.message.clone())
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Serializable snapshot of what the active tab shows
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ShellView<'a> {
    Locked { message: &'static str },
    Menu(MenuPanelView<'a>),
    Orders(OrderPanelView<'a>),
    Reservations(ReservationPanelView<'a>),
}

/// Whole dashboard session
pub struct DashboardShell {
    tab: Tab,
    menu: MenuPanel,
    orders: OrderPanel,
    reservations: ReservationPanel,
    authenticator: Box<dyn Authenticator>,
    session: Option<Principal>,
}

impl DashboardShell {
    pub fn new(
        catalog: DishCatalog,
        orders: OrderBook,
        reservations: ReservationBook,
        authenticator: Box<dyn Authenticator>,
    ) -> Self {
        Self {
            tab: Tab::default(),
            menu: MenuPanel::new(catalog),
            orders: OrderPanel::new(orders),
            reservations: ReservationPanel::new(reservations),
            authenticator,
            session: None,
        }
    }

    /// 按配置构建：演示数据、价格策略和凭据表
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let (menus, orders) = if config.seed_demo_data {
            (seed::demo_menus(), seed::demo_orders())
        } else {
            (Vec::new(), Vec::new())
        };

        let catalog = DishCatalog::new(menus)?.with_price_policy(config.price_policy());
        let orders = OrderBook::new(orders)?;
        let authenticator = CredentialStore::from_config(config);

        tracing::info!(
            dishes = catalog.dish_count(),
            orders = orders.len(),
            price_policy = ?catalog.price_policy(),
            "Dashboard initialized"
        );

        Ok(Self::new(
            catalog,
            orders,
            ReservationBook::new(),
            Box::new(authenticator),
        ))
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn session(&self) -> Option<&Principal> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn menu_panel(&self) -> &MenuPanel {
        &self.menu
    }

    pub fn order_panel(&self) -> &OrderPanel {
        &self.orders
    }

    pub fn reservation_panel(&self) -> &ReservationPanel {
        &self.reservations
    }

    /// Apply one command
    ///
    /// Failures come back as a destructive notification and change nothing.
    pub fn dispatch(&mut self, command: ShellCommand) -> Option<Notification> {
        let name = command.name();
        match self.try_dispatch(command) {
            Ok(notification) => notification,
            Err(err) => {
                tracing::warn!(
                    command = name,
                    code = %err.code,
                    category = err.code.category().name(),
                    validation = err.is_validation(),
                    error = %err.message,
                    "Command failed"
                );
                Some(Notification::from_error(&err))
            }
        }
    }

    fn try_dispatch(&mut self, command: ShellCommand) -> AppResult<Option<Notification>> {
        if self.session.is_none() && !command.is_public() {
            return Err(AuthError::NotAuthenticated.into());
        }
        tracing::debug!(command = command.name(), tab = ?self.tab, "Dispatching command");

        match command {
            ShellCommand::Login { email, password } => self.login(&email, &password).map(Some),
            ShellCommand::Logout => {
                if let Some(principal) = self.session.take() {
                    tracing::info!(email = %principal.email, "Signed out");
                }
                Ok(Some(Notification::success(
                    "Signed out",
                    "You have been signed out",
                )))
            }
            ShellCommand::SwitchTab { tab } => {
                self.tab = tab;
                Ok(None)
            }
            ShellCommand::Render => Ok(None),

            ShellCommand::SelectMenu { menu_id } => {
                self.menu.select_menu(&menu_id)?;
                Ok(None)
            }
            ShellCommand::SearchDishes { term } => {
                self.menu.search(term);
                Ok(None)
            }
            ShellCommand::OpenAddDish => {
                self.menu.open_add();
                Ok(None)
            }
            ShellCommand::SubmitAddDish { draft } => {
                self.menu.submit_add(draft)?;
                Ok(Some(Notification::success("Success", "Dish added successfully")))
            }
            ShellCommand::OpenEditDish { menu_id, dish_id } => {
                self.menu.open_edit(menu_id, &dish_id)?;
                Ok(None)
            }
            ShellCommand::SubmitEditDish { dish } => {
                self.menu.submit_edit(dish)?;
                Ok(Some(Notification::success("Success", "Dish updated successfully")))
            }
            ShellCommand::CloseDialog => {
                match self.tab {
                    Tab::Menu => self.menu.close_dialog(),
                    Tab::Reservations => self.reservations.close_dialog(),
                    Tab::Orders => {}
                }
                Ok(None)
            }

            ShellCommand::FilterOrders { status } => {
                self.orders.filter(status);
                Ok(None)
            }
            ShellCommand::SearchOrders { term } => {
                self.orders.search(term);
                Ok(None)
            }
            ShellCommand::ToggleOrderSort => {
                self.orders.toggle_sort();
                Ok(None)
            }

            ShellCommand::OpenAddReservation => {
                self.reservations.open_add();
                Ok(None)
            }
            ShellCommand::SubmitAddReservation { form } => {
                self.reservations.submit_add(form)?;
                Ok(Some(Notification::success(
                    "Success",
                    "Reservation added successfully",
                )))
            }
            ShellCommand::OpenEditReservation { id } => {
                self.reservations.open_edit(&id)?;
                Ok(None)
            }
            ShellCommand::SubmitEditReservation { form } => {
                self.reservations.submit_edit(form)?;
                Ok(Some(Notification::success(
                    "Success",
                    "Reservation updated successfully",
                )))
            }
            ShellCommand::ToggleReservationSort => {
                self.reservations.toggle_sort();
                Ok(None)
            }
        }
    }

    fn login(&mut self, email: &str, password: &str) -> AppResult<Notification> {
        validate_required_text(email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(password, "password", MAX_PASSWORD_LEN)?;

        let principal = self.authenticator.authenticate(email, password)?;
        tracing::info!(email = %principal.email, "Login successful");
        self.session = Some(principal);
        Ok(Notification::success(
            "Login successful",
            "Welcome back to your dashboard",
        ))
    }

    /// View of the active tab, or the sign-in prompt when locked
    pub fn render(&self) -> ShellView<'_> {
        if self.session.is_none() {
            return ShellView::Locked {
                message: "Please sign in to access your dashboard",
            };
        }
        match self.tab {
            Tab::Menu => ShellView::Menu(self.menu.view()),
            Tab::Orders => ShellView::Orders(self.orders.view()),
            Tab::Reservations => ShellView::Reservations(self.reservations.view()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{DishDraft, ReservationForm};

    struct FixedLogin;

    impl Authenticator for FixedLogin {
        fn authenticate(&self, email: &str, password: &str) -> Result<Principal, AuthError> {
            if email == "manager@bistro.test" && password == "pw" {
                Ok(Principal {
                    email: email.to_string(),
                })
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    fn create_shell() -> DashboardShell {
        DashboardShell::new(
            DishCatalog::new(seed::demo_menus()).unwrap(),
            OrderBook::new(seed::demo_orders()).unwrap(),
            ReservationBook::new(),
            Box::new(FixedLogin),
        )
    }

    fn login(shell: &mut DashboardShell) {
        let n = shell.dispatch(ShellCommand::Login {
            email: "manager@bistro.test".to_string(),
            password: "pw".to_string(),
        });
        assert_eq!(n.unwrap().title, "Login successful");
    }

    #[test]
    fn test_commands_refused_before_login() {
        let mut shell = create_shell();
        let n = shell.dispatch(ShellCommand::OpenAddDish).unwrap();
        assert!(n.is_destructive());
        assert_eq!(n.description, "Please sign in first");
        assert!(!shell.menu_panel().dialog().is_open());
        assert!(matches!(shell.render(), ShellView::Locked { .. }));
    }

    #[test]
    fn test_login_failure() {
        let mut shell = create_shell();
        let n = shell
            .dispatch(ShellCommand::Login {
                email: "manager@bistro.test".to_string(),
                password: "wrong".to_string(),
            })
            .unwrap();
        assert_eq!(n.title, "Login failed");
        assert_eq!(n.description, "Invalid email or password");
        assert!(!shell.is_authenticated());
    }

    #[test]
    fn test_login_empty_fields() {
        let mut shell = create_shell();
        let n = shell
            .dispatch(ShellCommand::Login {
                email: String::new(),
                password: "pw".to_string(),
            })
            .unwrap();
        assert_eq!(n.description, "Please fill in all fields");
        assert!(!shell.is_authenticated());
    }

    #[test]
    fn test_logout_relocks() {
        let mut shell = create_shell();
        login(&mut shell);
        assert!(matches!(shell.render(), ShellView::Menu(_)));

        shell.dispatch(ShellCommand::Logout);
        assert!(!shell.is_authenticated());
        assert!(matches!(shell.render(), ShellView::Locked { .. }));
    }

    #[test]
    fn test_add_dish_notifications() {
        let mut shell = create_shell();
        login(&mut shell);
        shell.dispatch(ShellCommand::OpenAddDish);

        let n = shell
            .dispatch(ShellCommand::SubmitAddDish {
                draft: Some(DishDraft::new("Soup", "Hot soup", Decimal::ZERO)),
            })
            .unwrap();
        assert!(n.is_destructive());
        assert_eq!(n.description, "Please fill in all fields");
        assert!(shell.menu_panel().dialog().is_adding());

        let n = shell
            .dispatch(ShellCommand::SubmitAddDish {
                draft: Some(DishDraft::new("Soup", "Hot soup", Decimal::new(55, 1))),
            })
            .unwrap();
        assert_eq!(n, Notification::success("Success", "Dish added successfully"));
        assert_eq!(shell.menu_panel().catalog().dish_count(), 5);
    }

    #[test]
    fn test_panels_keep_state_across_tabs() {
        let mut shell = create_shell();
        login(&mut shell);

        shell.dispatch(ShellCommand::SearchDishes {
            term: "egg".to_string(),
        });
        shell.dispatch(ShellCommand::OpenAddDish);
        shell.dispatch(ShellCommand::SwitchTab { tab: Tab::Orders });
        shell.dispatch(ShellCommand::ToggleOrderSort);
        shell.dispatch(ShellCommand::SwitchTab { tab: Tab::Menu });

        assert!(shell.menu_panel().dialog().is_adding());
        match shell.render() {
            ShellView::Menu(view) => assert_eq!(view.search_term, "egg"),
            other => panic!("unexpected view: {:?}", other),
        }
        assert_eq!(
            shell.order_panel().query().direction,
            crate::orders::SortDirection::Asc
        );
    }

    #[test]
    fn test_close_dialog_only_active_tab() {
        let mut shell = create_shell();
        login(&mut shell);

        shell.dispatch(ShellCommand::OpenAddDish);
        shell.dispatch(ShellCommand::SwitchTab {
            tab: Tab::Reservations,
        });
        shell.dispatch(ShellCommand::OpenAddReservation);
        shell.dispatch(ShellCommand::CloseDialog);

        assert!(!shell.reservation_panel().dialog().is_open());
        assert!(shell.menu_panel().dialog().is_adding());
    }

    #[test]
    fn test_reservation_flow() {
        let mut shell = create_shell();
        login(&mut shell);
        shell.dispatch(ShellCommand::SwitchTab {
            tab: Tab::Reservations,
        });
        shell.dispatch(ShellCommand::OpenAddReservation);
        let n = shell
            .dispatch(ShellCommand::SubmitAddReservation {
                form: Some(ReservationForm::new("Jane Doe", "555-0001", "4")),
            })
            .unwrap();
        assert_eq!(n.description, "Reservation added successfully");

        let id = shell.reservation_panel().book().reservations()[0].id.clone();
        shell.dispatch(ShellCommand::OpenEditReservation { id: id.clone() });
        let n = shell
            .dispatch(ShellCommand::SubmitEditReservation {
                form: Some(ReservationForm::new("Jane Doe", "555-0001", "6")),
            })
            .unwrap();
        assert_eq!(n.description, "Reservation updated successfully");
        assert_eq!(
            shell.reservation_panel().book().get(&id).unwrap().table_number,
            "6"
        );
    }

    #[test]
    fn test_from_config_without_seed() {
        let config = Config::with_overrides(false, true);
        let shell = DashboardShell::from_config(&config).unwrap();
        assert_eq!(shell.menu_panel().catalog().dish_count(), 0);
        assert_eq!(shell.menu_panel().selected_menu(), None);
        assert!(shell.order_panel().view().orders.is_empty());
    }

    #[test]
    fn test_render_serializes_with_view_tag() {
        let mut shell = create_shell();
        let json = serde_json::to_value(shell.render()).unwrap();
        assert_eq!(json["view"], "locked");

        login(&mut shell);
        shell.dispatch(ShellCommand::SwitchTab { tab: Tab::Orders });
        let json = serde_json::to_value(shell.render()).unwrap();
        assert_eq!(json["view"], "orders");
        assert_eq!(json["orders"][0]["id"], "ORD002");
        assert_eq!(json["query"]["status"], "all");
    }
}
