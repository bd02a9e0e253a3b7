use dashboard::{
    Config, DashboardShell, NotificationVariant, ShellCommand, ShellView, Tab, auth::hash_password,
};
use rust_decimal::Decimal;
use shared::models::{DishDraft, OrderStatus, ReservationForm};

const EMAIL: &str = "owner@bistro.test";
const PASSWORD: &str = "correct horse";

fn create_shell() -> DashboardShell {
    let mut config = Config::with_overrides(true, false);
    config.admin_email = Some(EMAIL.to_string());
    config.admin_password_hash = Some(hash_password(PASSWORD).unwrap());
    DashboardShell::from_config(&config).unwrap()
}

fn parse(line: &str) -> ShellCommand {
    serde_json::from_str(line).unwrap()
}

#[test]
fn test_full_session_over_json_commands() {
    let mut shell = create_shell();

    // Locked until login
    let n = shell.dispatch(parse(r#"{"cmd":"switch_tab","tab":"orders"}"#)).unwrap();
    assert_eq!(n.variant, NotificationVariant::Destructive);
    assert_eq!(shell.tab(), Tab::Menu);

    let n = shell
        .dispatch(parse(&format!(
            r#"{{"cmd":"login","email":"{}","password":"{}"}}"#,
            EMAIL.to_uppercase(),
            PASSWORD
        )))
        .unwrap();
    assert_eq!(n.title, "Login successful");
    assert_eq!(n.variant, NotificationVariant::Success);

    // Menu: add a dish to Breakfast
    shell.dispatch(parse(r#"{"cmd":"open_add_dish"}"#));
    let n = shell
        .dispatch(parse(
            r#"{"cmd":"submit_add_dish","draft":{"name":"Soup","description":"Hot soup","price":5.5}}"#,
        ))
        .unwrap();
    assert_eq!(n.description, "Dish added successfully");

    let breakfast = shell.menu_panel().catalog().menu("1").unwrap();
    assert_eq!(breakfast.dishes.len(), 3);
    let soup = breakfast.dishes.last().unwrap();
    assert_eq!(soup.price, Decimal::new(55, 1));
    assert_eq!(soup.image, "/placeholder.svg");

    shell.dispatch(parse(r#"{"cmd":"search_dishes","term":"sou"}"#));
    match shell.render() {
        ShellView::Menu(view) => {
            let names: Vec<&str> = view
                .menus
                .iter()
                .flat_map(|m| m.dishes.iter().map(|d| d.name.as_str()))
                .collect();
            assert_eq!(names, vec!["Soup"]);
        }
        other => panic!("unexpected view: {:?}", other),
    }

    // Orders: completed only
    shell.dispatch(parse(r#"{"cmd":"switch_tab","tab":"orders"}"#));
    shell.dispatch(parse(r#"{"cmd":"filter_orders","status":"completed"}"#));
    match shell.render() {
        ShellView::Orders(view) => {
            assert_eq!(view.orders.len(), 1);
            assert_eq!(view.orders[0].status, OrderStatus::Completed);
        }
        other => panic!("unexpected view: {:?}", other),
    }

    // Reservations: add then edit
    shell.dispatch(parse(r#"{"cmd":"switch_tab","tab":"reservations"}"#));
    shell.dispatch(parse(r#"{"cmd":"open_add_reservation"}"#));
    let n = shell
        .dispatch(parse(
            r#"{"cmd":"submit_add_reservation","form":{"name":"Jane Doe","phoneNumber":"555-0001","tableNumber":"4"}}"#,
        ))
        .unwrap();
    assert_eq!(n.description, "Reservation added successfully");

    let created = shell.reservation_panel().book().reservations()[0].clone();
    shell.dispatch(ShellCommand::OpenEditReservation {
        id: created.id.clone(),
    });
    shell.dispatch(ShellCommand::SubmitEditReservation {
        form: Some(ReservationForm::new("Jane Smith", "555-0001", "4")),
    });
    let stored = shell.reservation_panel().book().get(&created.id).unwrap();
    assert_eq!(stored.name, "Jane Smith");
    assert_eq!(stored.date, created.date);

    let json = serde_json::to_value(shell.render()).unwrap();
    assert_eq!(json["view"], "reservations");
    assert_eq!(json["reservations"][0]["phoneNumber"], "555-0001");
    assert_eq!(json["order"], "newest");
}

#[test]
fn test_wrong_password_stays_locked() {
    let mut shell = create_shell();
    let n = shell
        .dispatch(ShellCommand::Login {
            email: EMAIL.to_string(),
            password: "wrong".to_string(),
        })
        .unwrap();
    assert_eq!(n.title, "Login failed");
    assert_eq!(n.description, "Invalid email or password");
    assert!(matches!(shell.render(), ShellView::Locked { .. }));
}

#[test]
fn test_allow_zero_price_policy() {
    let mut config = Config::with_overrides(true, true);
    config.admin_email = Some(EMAIL.to_string());
    config.admin_password_hash = Some(hash_password(PASSWORD).unwrap());
    let mut shell = DashboardShell::from_config(&config).unwrap();

    shell.dispatch(ShellCommand::Login {
        email: EMAIL.to_string(),
        password: PASSWORD.to_string(),
    });
    shell.dispatch(ShellCommand::OpenAddDish);
    let n = shell
        .dispatch(ShellCommand::SubmitAddDish {
            draft: Some(DishDraft::new("Tap Water", "Still", Decimal::ZERO)),
        })
        .unwrap();
    assert_eq!(n.variant, NotificationVariant::Success);

    shell.dispatch(ShellCommand::OpenAddDish);
    let n = shell
        .dispatch(ShellCommand::SubmitAddDish {
            draft: Some(DishDraft::new("Refund", "Negative", Decimal::new(-100, 2))),
        })
        .unwrap();
    assert_eq!(n.variant, NotificationVariant::Destructive);
    assert!(shell.menu_panel().dialog().is_adding());
    assert_eq!(shell.menu_panel().catalog().dish_count(), 5);
}
