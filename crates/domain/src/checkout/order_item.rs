use common::{OrderItemId, ProductId};
use serde::Serialize;

use crate::money::Money;

use super::OrderError;

/// A line of an order.
///
/// Holds a copy of the product's name and price at the time it was ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    id: OrderItemId,
    name: String,
    price: Money,
    product_id: ProductId,
    quantity: u32,
}

impl OrderItem {
    /// Creates an order item. The quantity must be positive.
    pub fn new(
        id: impl Into<OrderItemId>,
        name: impl Into<String>,
        price: Money,
        product_id: impl Into<ProductId>,
        quantity: u32,
    ) -> Result<Self, OrderError> {
        let id = id.into();
        if id.is_empty() {
            return Err(OrderError::IdRequired);
        }
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity);
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        })
    }

    pub fn id(&self) -> &OrderItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the total price for this item (price * quantity).
    pub fn total(&self) -> Money {
        self.price.multiply(self.quantity)
    }

    /// Sets a new quantity. The quantity must be positive.
    pub fn change_quantity(&mut self, quantity: u32) -> Result<(), OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity);
        }
        self.quantity = quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_total() {
        let item = OrderItem::new("1", "Product 1", Money::from_cents(10), "123", 2).unwrap();
        assert_eq!(item.total(), Money::from_cents(20));
    }

    #[test]
    fn test_change_quantity_recomputes_total() {
        let mut item = OrderItem::new("1", "Product 1", Money::from_cents(10), "123", 2).unwrap();

        for n in [1, 3, 7, 1000] {
            item.change_quantity(n).unwrap();
            assert_eq!(item.quantity(), n);
            assert_eq!(item.total(), Money::from_cents(10 * i64::from(n)));
        }
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let err = OrderItem::new("1", "Product 1", Money::from_cents(10), "123", 0).unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than 0");

        let mut item = OrderItem::new("1", "Product 1", Money::from_cents(10), "123", 2).unwrap();
        assert_eq!(item.change_quantity(0), Err(OrderError::InvalidQuantity));
        assert_eq!(item.quantity(), 2);
    }
}
