use common::OrderId;

use crate::customer::Customer;
use crate::entity::Entity;
use crate::money::Money;

use super::{Order, OrderError, OrderItem};

/// Operations spanning orders and customers.
pub struct OrderService;

impl OrderService {
    /// Places an order for `customer` and credits half of the total, in cents,
    /// as reward points.
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::NoItemsToPlace);
        }

        let order = Order::new(OrderId::generate(), customer.id().clone(), items)?;
        customer.add_reward_points(order.total().cents() / 2);

        tracing::debug!(
            order_id = %order.id(),
            customer_id = %customer.id(),
            total = %order.total(),
            "order placed"
        );
        Ok(order)
    }

    /// Sum of the totals of `orders`.
    pub fn total(orders: &[Order]) -> Money {
        orders.iter().map(Order::total).sum()
    }
}
