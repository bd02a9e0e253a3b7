//! Order book
//!
//! Read-only list of orders. The only thing that changes is how the list is
//! viewed: status filter, id search and sort direction by total.

mod query;

pub use query::{OrderQuery, SortDirection, StatusFilter};

use rust_decimal::Decimal;
use shared::models::Order;
use shared::{AppError, ErrorCode};
use std::collections::HashSet;
use thiserror::Error;

/// Order book errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderBookError {
    #[error("Duplicate order id: {0}")]
    DuplicateOrder(String),

    #[error("Order {order_id} has a negative total: {total}")]
    NegativeTotal { order_id: String, total: Decimal },

    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}

impl From<OrderBookError> for AppError {
    fn from(err: OrderBookError) -> Self {
        match err {
            OrderBookError::DuplicateOrder(id) => AppError::already_exists(format!("Order {}", id)),
            OrderBookError::NegativeTotal { ref order_id, .. } => {
                let message = err.to_string();
                AppError::with_message(ErrorCode::OrderInvalidTotal, message)
                    .with_detail("order_id", order_id.clone())
            }
            OrderBookError::UnknownStatus(status) => {
                AppError::new(ErrorCode::OrderInvalidStatus).with_detail("status", status)
            }
        }
    }
}

/// Seeded, read-only order list
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Build the book, rejecting duplicate ids and negative totals
    pub fn new(orders: Vec<Order>) -> Result<Self, OrderBookError> {
        let mut ids = HashSet::new();
        for order in &orders {
            if !ids.insert(order.id.as_str()) {
                return Err(OrderBookError::DuplicateOrder(order.id.clone()));
            }
            if order.total < Decimal::ZERO {
                return Err(OrderBookError::NegativeTotal {
                    order_id: order.id.clone(),
                    total: order.total,
                });
            }
        }
        Ok(Self { orders })
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Filter by status and id substring, then sort by total
    ///
    /// The id match is case-insensitive. Orders with equal totals keep their
    /// seed order.
    pub fn filter_and_sort(
        &self,
        status: StatusFilter,
        search: &str,
        direction: SortDirection,
    ) -> Vec<&Order> {
        let needle = search.to_lowercase();
        let mut result: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| status.matches(o.status) && o.id.to_lowercase().contains(&needle))
            .collect();

        match direction {
            SortDirection::Asc => result.sort_by(|a, b| a.total.cmp(&b.total)),
            SortDirection::Desc => result.sort_by(|a, b| b.total.cmp(&a.total)),
        }

        tracing::debug!(
            status = %status,
            search,
            ?direction,
            matched = result.len(),
            "Order list filtered"
        );
        result
    }

    pub fn query(&self, query: &OrderQuery) -> Vec<&Order> {
        self.filter_and_sort(query.status, &query.search, query.direction)
    }
}
