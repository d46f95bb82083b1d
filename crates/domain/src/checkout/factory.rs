use common::{CustomerId, OrderId, OrderItemId, ProductId};

use crate::money::Money;

use super::{Order, OrderError, OrderItem};

/// Plain input for one order line.
#[derive(Debug, Clone)]
pub struct OrderItemProps {
    pub id: OrderItemId,
    pub name: String,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Money,
}

/// Plain input for an order.
#[derive(Debug, Clone)]
pub struct OrderFactoryProps {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub items: Vec<OrderItemProps>,
}

/// Builds orders from plain props.
pub struct OrderFactory;

impl OrderFactory {
    pub fn create(props: OrderFactoryProps) -> Result<Order, OrderError> {
        let items = props
            .items
            .into_iter()
            .map(|item| {
                OrderItem::new(item.id, item.name, item.price, item.product_id, item.quantity)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Order::new(props.id, props.customer_id, items)
    }
}
