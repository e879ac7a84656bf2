//! Category filter and category listing.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// The active category selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category filtering.
    #[default]
    All,
    /// Only products whose category equals the given label exactly.
    Only(String),
}

impl CategoryFilter {
    /// Parse a `<select>` value. `"all"` and the empty string disable filtering.
    pub fn from_value(value: &str) -> Self {
        match value {
            "" | ALL_CATEGORIES => CategoryFilter::All,
            other => CategoryFilter::Only(other.to_string()),
        }
    }

    /// The value written back to the category `<select>`.
    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Check whether a product passes this filter.
    pub fn accepts(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => product.category == *name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Distinct categories in first-seen catalog order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| *c == product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Category label with its first character uppercased.
pub fn display_name(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
