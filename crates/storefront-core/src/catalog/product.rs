//! Product type and its derived merchandising flags.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Rating above which a product is featured.
pub const FEATURED_MIN_RATING: f64 = 4.0;
/// Rating above which a product carries the bestseller badge.
pub const BESTSELLER_MIN_RATING: f64 = 4.5;
/// Review count above which a product counts as a new arrival.
pub const NEW_MIN_REVIEWS: u32 = 100;
/// Badge label for top-rated products.
pub const BESTSELLER_BADGE: &str = "Bestseller";

/// A product in the catalog.
///
/// `featured`, `new` and `badge` are derived from `rating` and `reviews`
/// when the product is built and are only refreshed by a fresh catalog load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in the reference currency.
    #[serde(with = "reference_price")]
    pub price: Money,
    pub description: String,
    /// Free-form category label.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    /// Number of ratings.
    pub reviews: u32,
    pub featured: bool,
    #[serde(rename = "new")]
    pub is_new: bool,
    #[serde(default)]
    pub badge: Option<String>,
}

impl Product {
    /// Create an unrated product. Derived flags start cleared.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            rating: 0.0,
            reviews: 0,
            featured: false,
            is_new: false,
            badge: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set rating statistics and derive the merchandising flags from them.
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self.featured = rating > FEATURED_MIN_RATING;
        self.is_new = reviews > NEW_MIN_REVIEWS;
        self.badge = (rating > BESTSELLER_MIN_RATING).then(|| BESTSELLER_BADGE.to_string());
        self
    }

    /// Case-insensitive substring match over name, description and category.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

/// Serializes a reference-currency price as a plain decimal, the way the
/// catalog service and the persisted cart carry it.
mod reference_price {
    use crate::money::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(price: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(price.convert(Currency::REFERENCE).to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount, Currency::REFERENCE))
    }
}
