//! Order aggregate implementation.

use std::collections::HashSet;

use common::{CustomerId, OrderId, OrderItemId};
use serde::Serialize;

use crate::entity::Entity;
use crate::money::Money;

use super::{OrderError, OrderItem};

/// Order aggregate root.
///
/// Owns its items in insertion order. The customer is referenced by id only.
/// The total is always derived from the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn entity_name() -> &'static str {
        "Order"
    }
}

impl Order {
    /// Creates a validated order.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::IdRequired);
        }
        if self.customer_id.is_empty() {
            return Err(OrderError::CustomerIdRequired);
        }
        if self.items.is_empty() {
            return Err(OrderError::ItemsRequired);
        }
        if self.items.iter().any(|item| item.quantity() == 0) {
            return Err(OrderError::InvalidQuantity);
        }
        let mut seen = HashSet::with_capacity(self.items.len());
        if let Some(item) = self.items.iter().find(|item| !seen.insert(item.id())) {
            return Err(OrderError::DuplicateItem {
                item_id: item.id().to_string(),
            });
        }
        Ok(())
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns an item by id.
    pub fn get_item(&self, item_id: &OrderItemId) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    /// Sum of the item totals.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Appends a new item.
    pub fn add_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        if self.get_item(item.id()).is_some() {
            return Err(OrderError::DuplicateItem {
                item_id: item.id().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces the item that has the same id as `item`, keeping its position.
    pub fn update_order_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        let slot = self
            .items
            .iter_mut()
            .find(|existing| existing.id() == item.id())
            .ok_or_else(|| OrderError::ItemNotFound {
                item_id: item.id().to_string(),
            })?;
        *slot = item;
        Ok(())
    }

    /// Changes the quantity of one item.
    pub fn change_item_quantity(
        &mut self,
        item_id: &OrderItemId,
        quantity: u32,
    ) -> Result<(), OrderError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == item_id)
            .ok_or_else(|| OrderError::ItemNotFound {
                item_id: item_id.to_string(),
            })?;
        item.change_quantity(quantity)
    }
}
