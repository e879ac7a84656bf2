//! Product catalog module.
//!
//! Contains the product type, category selection, and the featured and
//! new-arrival subsets.

mod category;
mod collections;
mod product;

pub use category::{categories, display_name, CategoryFilter, ALL_CATEGORIES};
pub use collections::{featured, new_arrivals, DEFAULT_COLLECTION_LIMIT};
pub use product::{
    Product, BESTSELLER_BADGE, BESTSELLER_MIN_RATING, FEATURED_MIN_RATING, NEW_MIN_REVIEWS,
};
