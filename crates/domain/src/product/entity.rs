use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::money::Money;

use super::ProductError;

/// A product that can be sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductFields")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn entity_name() -> &'static str {
        "Product"
    }
}

#[derive(Deserialize)]
struct ProductFields {
    id: ProductId,
    name: String,
    price: Money,
}

impl TryFrom<ProductFields> for Product {
    type Error = ProductError;

    fn try_from(fields: ProductFields) -> Result<Self, Self::Error> {
        Product::new(fields.id, fields.name, fields.price)
    }
}

impl Product {
    /// Creates a validated product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        if !self.price.is_positive() {
            return Err(ProductError::InvalidPrice);
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: Money) -> Result<(), ProductError> {
        if !price.is_positive() {
            return Err(ProductError::InvalidPrice);
        }
        self.price = price;
        Ok(())
    }
}
