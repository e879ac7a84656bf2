//! Merchandising subsets shown above the main grid.

use crate::catalog::Product;

/// Default size of the featured and new-arrival strips.
pub const DEFAULT_COLLECTION_LIMIT: usize = 4;

/// The first `limit` featured products in catalog order.
pub fn featured(products: &[Product], limit: usize) -> Vec<&Product> {
    products.iter().filter(|p| p.featured).take(limit).collect()
}

/// The first `limit` new-arrival products in catalog order.
pub fn new_arrivals(products: &[Product], limit: usize) -> Vec<&Product> {
    products.iter().filter(|p| p.is_new).take(limit).collect()
}
