use crate::money::Money;

use super::{Product, ProductError};

/// Operations spanning several products.
pub struct ProductService;

impl ProductService {
    /// Raises the price of every product by `percentage` percent.
    ///
    /// Validates every new price before changing any product.
    pub fn increase_price(products: &mut [Product], percentage: i64) -> Result<(), ProductError> {
        let new_prices: Vec<Money> = products
            .iter()
            .map(|p| p.price() + p.price().percentage(percentage))
            .collect();
        if new_prices.iter().any(|price| !price.is_positive()) {
            return Err(ProductError::InvalidPrice);
        }
        for (product, price) in products.iter_mut().zip(new_prices) {
            product.change_price(price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_price_of_all_products() {
        let mut products = vec![
            Product::new("p1", "Product 1", Money::from_cents(1000)).unwrap(),
            Product::new("p2", "Product 2", Money::from_cents(2000)).unwrap(),
        ];

        ProductService::increase_price(&mut products, 100).unwrap();

        assert_eq!(products[0].price().cents(), 2000);
        assert_eq!(products[1].price().cents(), 4000);
    }

    #[test]
    fn test_increase_price_rejects_non_positive_result() {
        let mut products = vec![
            Product::new("p1", "Product 1", Money::from_cents(1000)).unwrap(),
            Product::new("p2", "Product 2", Money::from_cents(2000)).unwrap(),
        ];

        let err = ProductService::increase_price(&mut products, -100).unwrap_err();
        assert_eq!(err, ProductError::InvalidPrice);
        assert_eq!(products[0].price().cents(), 1000);
    }
}
