//! 演示数据
//!
//! `SEED_DEMO_DATA=true` 时在启动时加载。

use rust_decimal::Decimal;
use shared::models::{Dish, Menu, Order, OrderStatus, PLACEHOLDER_IMAGE};

fn dish(id: &str, name: &str, description: &str, cents: i64) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(cents, 2),
        image: PLACEHOLDER_IMAGE.to_string(),
    }
}

fn order(id: &str, items: &[&str], cents: i64, status: OrderStatus, date: &str) -> Order {
    Order {
        id: id.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
        total: Decimal::new(cents, 2),
        status,
        date: date.to_string(),
    }
}

/// Breakfast and Dinner menus, two dishes each
pub fn demo_menus() -> Vec<Menu> {
    vec![
        Menu::new("1", "Breakfast").with_dishes(vec![
            dish("b1", "Classic Pancakes", "Fluffy pancakes served with maple syrup", 1299),
            dish("b2", "Eggs Benedict", "Poached eggs with hollandaise sauce", 1499),
        ]),
        Menu::new("2", "Dinner").with_dishes(vec![
            dish("d1", "Grilled Salmon", "Fresh salmon with seasonal vegetables", 2499),
            dish("d2", "Beef Tenderloin", "Premium cut served with wine sauce", 2999),
        ]),
    ]
}

pub fn demo_orders() -> Vec<Order> {
    vec![
        order(
            "ORD001",
            &["Classic Pancakes", "Coffee"],
            1699,
            OrderStatus::Completed,
            "2024-02-20 09:30",
        ),
        order(
            "ORD002",
            &["Beef Tenderloin", "Wine"],
            4599,
            OrderStatus::InKitchen,
            "2024-02-20 19:15",
        ),
        order(
            "ORD003",
            &["Grilled Salmon", "Salad"],
            3299,
            OrderStatus::Pending,
            "2024-02-20 18:45",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DishCatalog;
    use crate::orders::OrderBook;

    #[test]
    fn test_demo_data_is_valid() {
        let catalog = DishCatalog::new(demo_menus()).unwrap();
        assert_eq!(catalog.dish_count(), 4);
        assert_eq!(catalog.first_menu_id(), Some("1"));

        let book = OrderBook::new(demo_orders()).unwrap();
        assert_eq!(book.len(), 3);
        assert_eq!(book.get("ORD002").map(|o| o.status), Some(OrderStatus::InKitchen));
    }
}
