//! Storefront domain state and logic.
//!
//! This crate holds everything about the storefront that does not touch the
//! network or the page:
//!
//! - **Catalog**: products, derived merchandising flags, categories
//! - **Search**: the pure filter/sort pipeline behind the product grid
//! - **Cart**: cart lines and the cart engine
//! - **Store**: the state container and its durable-storage boundary
//! - **Locale/Currency**: string tables and the static rate table
//!
//! # Example
//!
//! ```
//! use storefront_cache::MemoryStorage;
//! use storefront_core::prelude::*;
//! use storefront_observability::{SessionId, StructuredLogger};
//!
//! let logger = StructuredLogger::new(SessionId::generate());
//! let mut store = Store::new(MemoryStorage::new(), "storefront", &logger);
//! store.set(StateUpdate::Products(vec![
//!     Product::new(3, "Mug", Money::from_decimal(12.5, Currency::USD)).with_rating(4.6, 120),
//! ]));
//!
//! store.add_to_cart(ProductId::new(3)).unwrap();
//! store.add_to_cart(ProductId::new(3)).unwrap();
//! assert_eq!(store.cart_total().display(), "$25.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod change;
pub mod content;
pub mod i18n;
pub mod search;
pub mod state;
pub mod store;

pub use change::Change;
pub use error::StorefrontError;
pub use i18n::Locale;
pub use ids::*;
pub use money::{Currency, Money};
pub use state::{AppState, StateKey, StateUpdate};
pub use store::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::change::Change;
    pub use crate::error::StorefrontError;
    pub use crate::i18n::Locale;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::state::{AppState, StateKey, StateUpdate};
    pub use crate::store::{Store, DEFAULT_STORAGE_PREFIX};

    // Catalog
    pub use crate::catalog::{CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, Receipt};

    // Content
    pub use crate::content::{AboutItem, BlogPost, StarSlot, Testimonial};

    // Search
    pub use crate::search::{Filter, SearchQuery, SortMode};
}
