//! Search query and the filter/sort pipeline.
//!
//! The pipeline is fixed: text search, then category, then a stable sort. It is pure and may be re-run at will.

use crate::catalog::{CategoryFilter, Product};
use crate::search::Filter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort options for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep catalog order.
    #[default]
    Default,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Default,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::Rating,
    ];

    /// The `<select>` value for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::Rating => "rating",
        }
    }

    /// String table key for the option label.
    pub fn label_key(&self) -> &'static str {
        match self {
            SortMode::Default => "sort.default",
            SortMode::PriceAsc => "sort.price-asc",
            SortMode::PriceDesc => "sort.price-desc",
            SortMode::Rating => "sort.rating",
        }
    }

    /// Stable-sort `products` in place.
    pub fn sort(&self, products: &mut [&Product]) {
        match self {
            SortMode::Default => {}
            SortMode::PriceAsc => products.sort_by_key(|p| p.price.amount_cents),
            SortMode::PriceDesc => {
                products.sort_by_key(|p| std::cmp::Reverse(p.price.amount_cents))
            }
            SortMode::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A search query over the loaded catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchQuery {
    /// Text query.
    pub search: String,
    /// Category selection.
    pub category: CategoryFilter,
    /// Sort option.
    pub sort: SortMode,
}

impl SearchQuery {
    /// Create an unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        self.search = q.into();
        self
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Filters in evaluation order.
    pub fn pipeline(&self) -> Vec<Filter> {
        [
            Filter::Text(self.search.clone()),
            Filter::Category(self.category.clone()),
        ]
        .into_iter()
        .filter(|f| !f.is_noop())
        .collect()
    }

    /// Run the query against `products`.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let pipeline = self.pipeline();
        let mut visible: Vec<&Product> = products.iter().collect();
        for filter in &pipeline {
            visible.retain(|p| filter.matches(p));
        }
        self.sort.sort(&mut visible);
        visible
    }
}

/// Visible subset for the given search text, category and sort mode.
pub fn apply<'a>(
    products: &'a [Product],
    search: &str,
    category: &CategoryFilter,
    sort: SortMode,
) -> Vec<&'a Product> {
    SearchQuery::new()
        .with_search(search)
        .with_category(category.clone())
        .with_sort(sort)
        .apply(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use proptest::prelude::*;

    fn item(id: u32, name: &str, description: &str, category: &str, cents: i64, rating: f64) -> Product {
        Product::new(id, name, Money::new(cents, Currency::USD))
            .with_description(description)
            .with_category(category)
            .with_rating(rating, 10)
    }

    fn fixture() -> Vec<Product> {
        vec![
            item(1, "Standing Desk", "Adjustable height", "furniture", 32000, 4.5),
            item(2, "Desk Lamp", "Warm LED", "lighting", 4500, 4.1),
            item(3, "Office Chair", "Pairs with any desk", "furniture", 18000, 4.7),
            item(4, "Monitor", "27 inch", "electronics", 29900, 4.3),
            item(5, "Notebook", "Dotted pages", "stationery", 1200, 3.9),
            item(6, "DESK Organizer", "Bamboo", "furniture", 4500, 4.0),
            item(7, "Keyboard", "Mechanical", "electronics", 12900, 4.6),
            item(8, "Rug", "Wool", "desk accessories", 8900, 3.5),
            item(9, "Pen", "Gel ink", "stationery", 300, 4.2),
            item(10, "Plant", "Succulent", "decor", 2500, 4.4),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_desk_price_desc_scenario() {
        let products = fixture();
        let visible = apply(&products, "desk", &CategoryFilter::All, SortMode::PriceDesc);
        // 2 and 6 tie on price and keep their catalog order.
        assert_eq!(ids(&visible), vec![1, 3, 8, 2, 6]);
    }

    #[test]
    fn test_default_sort_keeps_catalog_order() {
        let products = fixture();
        let visible = apply(&products, "", &CategoryFilter::All, SortMode::Default);
        assert_eq!(ids(&visible), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_category_then_sort() {
        let products = fixture();
        let category = CategoryFilter::Only("furniture".into());
        assert_eq!(ids(&apply(&products, "", &category, SortMode::PriceAsc)), vec![6, 3, 1]);
        assert_eq!(ids(&apply(&products, "", &category, SortMode::Rating)), vec![3, 1, 6]);
    }

    #[test]
    fn test_search_within_category() {
        let products = fixture();
        let query = SearchQuery::new()
            .with_search("desk")
            .with_category(CategoryFilter::Only("furniture".into()))
            .with_sort(SortMode::PriceAsc);
        assert_eq!(ids(&query.apply(&products)), vec![6, 3, 1]);
        assert_eq!(query.pipeline().len(), 2);
        assert!(SearchQuery::new().pipeline().is_empty());
    }

    #[test]
    fn test_sort_mode_values() {
        assert_eq!("price-desc".parse::<SortMode>(), Ok(SortMode::PriceDesc));
        assert!("cheapest".parse::<SortMode>().is_err());
        assert_eq!(SortMode::Rating.to_string(), "rating");
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
        let categories = prop::sample::select(vec!["a", "b", "c"]);
        prop::collection::vec(
            (0i64..500, 0.0f64..5.0, categories, "[a-z]{0,6}"),
            0..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (cents, rating, category, name))| {
                    item(i as u32, &name, "", category, cents, rating)
                })
                .collect()
        })
    }

    fn arb_sort() -> impl Strategy<Value = SortMode> {
        prop::sample::select(SortMode::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_apply_is_deterministic(
            products in arb_catalog(),
            search in "[a-z]{0,2}",
            category in prop::sample::select(vec!["all", "a", "b"]),
            sort in arb_sort(),
        ) {
            let category = CategoryFilter::from_value(category);
            let first = ids(&apply(&products, &search, &category, sort));
            let second = ids(&apply(&products, &search, &category, sort));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_sorts_are_stable(products in arb_catalog(), sort in arb_sort()) {
            let visible = apply(&products, "", &CategoryFilter::All, sort);
            prop_assert_eq!(visible.len(), products.len());
            for pair in visible.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let tied = match sort {
                    SortMode::Default => true,
                    SortMode::PriceAsc | SortMode::PriceDesc => a.price == b.price,
                    SortMode::Rating => a.rating == b.rating,
                };
                if tied {
                    prop_assert!(a.id < b.id);
                }
            }
        }
    }
}
