//! Descriptions of what a state mutation changed.
//!
//! Mutations return a [`Change`] instead of touching any view. The render
//! dispatch layer decides which views a change invalidates.

use serde::Serialize;

/// Something that changed in application or view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Change {
    /// A fresh catalog was loaded.
    Catalog,
    /// Testimonials or blog posts were loaded.
    Content,
    /// Display locale changed.
    Locale,
    /// Display currency changed.
    Currency,
    /// Cart lines or the cart drawer changed.
    Cart,
    /// Search text, category, or sort changed.
    Filters,
    /// The product modal opened or closed.
    Modal,
    /// Newsletter feedback appeared or cleared.
    Newsletter,
}
