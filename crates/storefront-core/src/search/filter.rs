//! Search filter types.

use crate::catalog::{CategoryFilter, Product};
use serde::{Deserialize, Serialize};

/// A predicate over catalog products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring search in name, description and category.
    Text(String),
    /// Exact category match; `All` accepts everything.
    Category(CategoryFilter),
}

impl Filter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create a category filter from a `<select>` value.
    pub fn category(value: &str) -> Self {
        Filter::Category(CategoryFilter::from_value(value))
    }

    /// Check whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(query) => product.matches_text(&query.to_lowercase()),
            Filter::Category(category) => category.accepts(product),
        }
    }

    /// A filter that accepts every product.
    pub fn is_noop(&self) -> bool {
        match self {
            Filter::Text(query) => query.is_empty(),
            Filter::Category(category) => category.is_all(),
        }
    }
}
