//! Catalog loading and normalization.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storefront_core::catalog::Product;
use storefront_core::money::{Currency, Money};
use storefront_observability::StructuredLogger;

use crate::client::{FetchClient, FetchError};
use crate::dependency::DependencyTag;

/// Default catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Rating statistics as the catalog service reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiRating {
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub count: Option<u32>,
}

/// One catalog item in the service's wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiProduct {
    pub id: u32,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<ApiRating>,
}

impl ApiProduct {
    /// Convert to the internal product shape.
    ///
    /// A missing rating object or field counts as zero before the derived
    /// flags are computed.
    pub fn normalize(self) -> Product {
        let rating = self.rating.unwrap_or_default();
        Product::new(
            self.id,
            self.title,
            Money::from_decimal(self.price, Currency::REFERENCE),
        )
        .with_description(self.description)
        .with_category(self.category)
        .with_image(self.image)
        .with_rating(rating.rate.unwrap_or(0.0), rating.count.unwrap_or(0))
    }
}

/// A source of raw catalog items.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch the full catalog. No pagination.
    async fn fetch_products(&self) -> Result<Vec<ApiProduct>, FetchError>;
}

/// Catalog source backed by the HTTP catalog service.
pub struct HttpCatalogSource {
    client: FetchClient,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(client: FetchClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<ApiProduct>, FetchError> {
        self.client.fetch(&self.url, DependencyTag::Catalog).await
    }
}

/// Fetch and normalize the catalog.
///
/// Never fails: a transport or decode error is logged and yields an empty
/// catalog.
pub async fn fetch_catalog<C: CatalogSource + ?Sized>(
    source: &C,
    logger: &StructuredLogger,
) -> Vec<Product> {
    match source.fetch_products().await {
        Ok(items) => items.into_iter().map(ApiProduct::normalize).collect(),
        Err(e) => {
            logger
                .warn_builder("catalog fetch failed, continuing with an empty catalog")
                .field("dependency", DependencyTag::Catalog.name())
                .error(&e)
                .emit();
            Vec::new()
        }
    }
}
