//! Storefront error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront state operations.
///
/// None of these are fatal; the orchestrator turns each one into a no-op.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Product not found in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Locale code outside the string table.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Currency code outside the rate table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Category absent from the loaded catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Sort mode that is not one of the supported orderings.
    #[error("Unknown sort mode: {0}")]
    UnknownSort(String),

    /// Cart is empty.
    #[error("Cart is empty")]
    EmptyCart,
}
