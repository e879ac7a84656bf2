//! Durable storage boundary for the storefront client.
//!
//! A small synchronous slot store ([`Storage`]) with an in-memory backend and,
//! on wasm32, a `localStorage` backend. [`Cache`] adds key namespacing and
//! automatic JSON serialization on top.
//!
//! # Example
//!
//! ```
//! use storefront_cache::{Cache, MemoryStorage};
//!
//! let cache = Cache::new(MemoryStorage::new(), "storefront");
//! cache.set_str("currency", "EUR").unwrap();
//! assert_eq!(cache.get_str("currency").unwrap().as_deref(), Some("EUR"));
//! ```

mod error;
mod kv;

pub use error::CacheError;
#[cfg(target_arch = "wasm32")]
pub use kv::LocalStorage;
pub use kv::{Cache, MemoryStorage, Storage};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, MemoryStorage, Storage};
}
