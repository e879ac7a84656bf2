//! Storefront page layer.
//!
//! Turns [`storefront_core`] state into page sections and user intents into
//! state changes:
//!
//! - **sections**: pure HTML renderers, one per page section
//! - **render**: the change → views invalidation map and the [`Renderer`]
//! - **sink**: the [`ViewSink`] trait and the in-memory [`SectionBuffer`]
//! - **debounce**: cancellable timers driven by host time
//! - **app**: the [`Storefront`] orchestrator
//!
//! On wasm32 the crate also exports `WebStorefront` to the page script.
//!
//! # Example
//!
//! ```
//! use storefront_cache::MemoryStorage;
//! use storefront_core::catalog::Product;
//! use storefront_core::{Currency, Money, ProductId};
//! use storefront_observability::{MemoryLog, StructuredLogger};
//! use storefront_web::{Loaded, SectionBuffer, Storefront, StorefrontConfig};
//!
//! let logger = StructuredLogger::in_memory(&MemoryLog::new());
//! let mut page = Storefront::new(
//!     &StorefrontConfig::default(),
//!     MemoryStorage::new(),
//!     SectionBuffer::with_page_targets(),
//!     &logger,
//! );
//! page.prepare();
//! page.install(Loaded {
//!     products: vec![Product::new(1u32, "Mug", Money::new(1250, Currency::USD))],
//!     ..Loaded::default()
//! });
//!
//! page.add_to_cart(ProductId::new(1));
//! assert_eq!(page.sink().html("cart-total"), "$12.50");
//! ```

pub mod app;
pub mod config;
pub mod debounce;
pub mod render;
pub mod sections;
pub mod sink;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use app::{load_all, Loaded, Storefront};
pub use config::{LoggingConfig, StorefrontConfig};
pub use debounce::{Debouncer, Ticket, WakeupSlot};
pub use render::{invalidated, RenderContext, Renderer, UiState, View};
pub use sink::{Section, SectionBuffer, ViewSink};

#[cfg(target_arch = "wasm32")]
pub use dom::DomSink;
#[cfg(target_arch = "wasm32")]
pub use wasm::WebStorefront;
