//! The application state container.

use crate::cart::Cart;
use crate::catalog::{categories, CategoryFilter, Product};
use crate::change::Change;
use crate::content::{BlogPost, Testimonial};
use crate::i18n::Locale;
use crate::money::Currency;
use crate::search::{self, SortMode};

/// The single source of truth for one page session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Loaded catalog, in service order.
    pub products: Vec<Product>,
    pub cart: Cart,
    /// Search text as typed, trimmed.
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortMode,
    pub locale: Locale,
    pub currency: Currency,
    pub testimonials: Vec<Testimonial>,
    pub blog_posts: Vec<BlogPost>,
}

impl AppState {
    /// Visible product grid. Derived on every call, never stored.
    pub fn filtered(&self) -> Vec<&Product> {
        search::apply(&self.products, &self.search, &self.category, self.sort)
    }

    /// Distinct catalog categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        categories(&self.products)
    }

    /// Find a catalog product.
    pub fn product(&self, id: crate::ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Addressable fields of [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    Products,
    Cart,
    Search,
    Category,
    Sort,
    Locale,
    Currency,
    Testimonials,
    BlogPosts,
}

impl StateKey {
    /// Storage slot name for persisted fields.
    pub fn slot(&self) -> Option<&'static str> {
        match self {
            StateKey::Cart => Some("cart"),
            StateKey::Locale => Some("lang"),
            StateKey::Currency => Some("currency"),
            _ => None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.slot().is_some()
    }

    /// The change setting this field produces.
    pub fn change(&self) -> Change {
        match self {
            StateKey::Products => Change::Catalog,
            StateKey::Cart => Change::Cart,
            StateKey::Search | StateKey::Category | StateKey::Sort => Change::Filters,
            StateKey::Locale => Change::Locale,
            StateKey::Currency => Change::Currency,
            StateKey::Testimonials | StateKey::BlogPosts => Change::Content,
        }
    }
}

/// A write to one non-cart field.
///
/// The cart is absent on purpose: only the cart engine writes it.
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    Products(Vec<Product>),
    Search(String),
    Category(CategoryFilter),
    Sort(SortMode),
    Locale(Locale),
    Currency(Currency),
    Testimonials(Vec<Testimonial>),
    BlogPosts(Vec<BlogPost>),
}

impl StateUpdate {
    pub fn key(&self) -> StateKey {
        match self {
            StateUpdate::Products(_) => StateKey::Products,
            StateUpdate::Search(_) => StateKey::Search,
            StateUpdate::Category(_) => StateKey::Category,
            StateUpdate::Sort(_) => StateKey::Sort,
            StateUpdate::Locale(_) => StateKey::Locale,
            StateUpdate::Currency(_) => StateKey::Currency,
            StateUpdate::Testimonials(_) => StateKey::Testimonials,
            StateUpdate::BlogPosts(_) => StateKey::BlogPosts,
        }
    }

    pub(crate) fn apply(self, state: &mut AppState) {
        match self {
            StateUpdate::Products(products) => state.products = products,
            StateUpdate::Search(search) => state.search = search,
            StateUpdate::Category(category) => state.category = category,
            StateUpdate::Sort(sort) => state.sort = sort,
            StateUpdate::Locale(locale) => state.locale = locale,
            StateUpdate::Currency(currency) => state.currency = currency,
            StateUpdate::Testimonials(items) => state.testimonials = items,
            StateUpdate::BlogPosts(posts) => state.blog_posts = posts,
        }
    }
}
