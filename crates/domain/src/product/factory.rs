use common::ProductId;

use crate::money::Money;

use super::{Product, ProductError};

/// Builds products with generated identifiers.
pub struct ProductFactory;

impl ProductFactory {
    pub fn create(name: impl Into<String>, price: Money) -> Result<Product, ProductError> {
        Product::new(ProductId::generate(), name, price)
    }
}
