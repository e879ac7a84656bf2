//! Data access for the storefront client.
//!
//! This crate provides:
//! - `FetchClient` - JSON fetch over HTTP with dependency tagging
//! - `CatalogSource` / `HttpCatalogSource` - the remote catalog and its normalization
//! - `ContentSource` / `StaticContentSource` - testimonials and blog posts
//!
//! Every loader degrades to an empty result on failure; nothing here is fatal.

mod catalog;
mod client;
mod content;
mod dependency;

pub use catalog::*;
pub use client::*;
pub use content::*;
pub use dependency::*;
