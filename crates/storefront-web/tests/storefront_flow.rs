//! End-to-end page flows over in-memory storage and an in-memory sink.

use async_trait::async_trait;
use futures::executor::block_on;
use storefront_cache::MemoryStorage;
use storefront_core::content::{BlogPost, Testimonial};
use storefront_core::{Currency, Locale, ProductId};
use storefront_data::{ApiProduct, CatalogSource, ContentSource, FetchError, StaticContentSource};
use storefront_observability::{LogLevel, MemoryLog, StructuredLogger};
use storefront_web::render::target;
use storefront_web::{SectionBuffer, Storefront, StorefrontConfig, ViewSink};

const CATALOG: &str = r#"[
    {"id":1,"title":"Oak Desk","price":120,"description":"Solid oak","category":"furniture",
     "image":"https://img.example/1.jpg","rating":{"rate":4.6,"count":150}},
    {"id":2,"title":"Desk Lamp","price":35.5,"description":"Warm light","category":"lighting",
     "image":"https://img.example/2.jpg","rating":{"rate":4.1,"count":80}},
    {"id":3,"title":"Gold Ring","price":168,"description":"18k","category":"jewelery",
     "image":"https://img.example/3.jpg","rating":{"rate":3.9,"count":400}},
    {"id":4,"title":"Cotton Tee","price":12,"description":"Plain","category":"men's clothing",
     "image":"https://img.example/4.jpg"}
]"#;

struct FakeCatalog;

#[async_trait(?Send)]
impl CatalogSource for FakeCatalog {
    async fn fetch_products(&self) -> Result<Vec<ApiProduct>, FetchError> {
        serde_json::from_str(CATALOG).map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}

struct DownCatalog;

#[async_trait(?Send)]
impl CatalogSource for DownCatalog {
    async fn fetch_products(&self) -> Result<Vec<ApiProduct>, FetchError> {
        Err(FetchError::Http {
            status: 503,
            url: "https://catalog.example/products".into(),
        })
    }
}

struct NoContent;

#[async_trait(?Send)]
impl ContentSource for NoContent {
    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, FetchError> {
        Err(FetchError::Timeout("testimonials".into()))
    }

    async fn fetch_blog_posts(&self) -> Result<Vec<BlogPost>, FetchError> {
        Ok(Vec::new())
    }
}

type Page = Storefront<MemoryStorage, SectionBuffer>;

fn page_over(storage: &MemoryStorage, log: &MemoryLog) -> Page {
    let mut page = Storefront::new(
        &StorefrontConfig::default(),
        storage.clone(),
        SectionBuffer::with_page_targets(),
        &StructuredLogger::in_memory(log),
    );
    block_on(page.bootstrap(&FakeCatalog, &StaticContentSource));
    page
}

fn grid_names(page: &Page) -> Vec<String> {
    page.visible_products()
        .iter()
        .map(|p| p.name.clone())
        .collect()
}

#[test]
fn test_bootstrap_renders_every_section() {
    let log = MemoryLog::new();
    let page = page_over(&MemoryStorage::new(), &log);
    let sink = page.sink();

    assert_eq!(page.state().products.len(), 4);
    assert!(sink.html(target::PRODUCT_GRID).contains("Cotton Tee"));
    assert!(sink.html(target::FEATURED_GRID).contains("Oak Desk"));
    assert!(sink.html(target::FEATURED_GRID).contains("Desk Lamp"));
    assert!(!sink.html(target::FEATURED_GRID).contains("Gold Ring"));
    assert!(sink.html(target::NEW_ARRIVALS_GRID).contains("Gold Ring"));
    assert!(sink.html(target::CATEGORIES_GRID).contains(r#"data-category="lighting""#));
    assert!(sink.html(target::CATEGORY_FILTER).contains(">Furniture</option>"));
    assert!(sink.html(target::TESTIMONIALS_GRID).contains("Sarah Johnson"));
    assert!(sink.html(target::BLOG_GRID).contains("Oct 15, 2023"));
    assert!(sink.html(target::CART_ITEMS).contains("Your cart is empty."));
    assert!(sink.has_class(target::CART_COUNT, "hidden"));
    assert!(sink.has_class(target::PRODUCT_MODAL, "hidden"));
    assert_eq!(sink.dir(), Some("ltr"));
    assert!(log.contains("bootstrap finished"));
}

#[test]
fn test_render_all_is_idempotent() {
    let log = MemoryLog::new();
    let mut page = page_over(&MemoryStorage::new(), &log);
    page.add_to_cart(ProductId::new(2));
    page.set_currency("EUR");

    page.render_all();
    let first = page.sink().snapshot();
    page.render_all();
    assert_eq!(page.sink().snapshot(), first);
}

#[test]
fn test_search_is_debounced() {
    let log = MemoryLog::new();
    let mut page = page_over(&MemoryStorage::new(), &log);
    let before = page.sink().html(target::PRODUCT_GRID).to_string();

    page.search_input("de", 1_000);
    assert!(!page.tick(1_100));
    page.search_input(" desk ", 1_200);
    assert_eq!(page.state().search, "desk");
    assert!(!page.tick(1_300));
    assert_eq!(page.sink().html(target::PRODUCT_GRID), before);

    assert!(page.tick(1_450));
    assert_eq!(grid_names(&page), ["Oak Desk", "Desk Lamp"]);
    assert!(!page.sink().html(target::PRODUCT_GRID).contains("Gold Ring"));
    assert!(!page.tick(2_000));
}

#[test]
fn test_clear_search_cancels_pending_recompute() {
    let log = MemoryLog::new();
    let mut page = page_over(&MemoryStorage::new(), &log);
    // Typed into the mobile box.
    page.sink_mut().set_value(target::SEARCH_INPUT_MOBILE, "ring");
    page.search_input("ring", 0);
    assert!(!page.sink().has_class(target::SEARCH_CLEAR_MOBILE, "hidden"));
    page.clear_search();

    assert!(!page.tick(10_000));
    assert_eq!(page.visible_products().len(), 4);
    assert_eq!(page.sink().value(target::SEARCH_INPUT), Some(""));
    assert_eq!(page.sink().value(target::SEARCH_INPUT_MOBILE), Some(""));
    assert!(page.sink().has_class(target::SEARCH_CLEAR, "hidden"));
    assert!(page.sink().has_class(target::SEARCH_CLEAR_MOBILE, "hidden"));
}

#[test]
fn test_filter_change_renders_grid_only() {
    let log = MemoryLog::new();
    let mut page = page_over(&MemoryStorage::new(), &log);
    page.sink_mut().reset_writes();

    assert!(page.set_sort("price-desc"));
    assert_eq!(
        grid_names(&page),
        ["Gold Ring", "Oak Desk", "Desk Lamp", "Cotton Tee"]
    );
    assert_eq!(page.sink().writes(), 1);
}

#[test]
fn test_cart_change_renders_cart_only() {
    let log = MemoryLog::new();
    let mut page = page_over(&MemoryStorage::new(), &log);
    let before = page.sink().snapshot();

    assert!(page.add_to_cart(ProductId::new(1)));
    assert!(page.add_to_cart(ProductId::new(1)));
    let sink = page.sink();

    assert_eq!(sink.html(target::CART_COUNT), "2");
    assert!(!sink.has_class(target::CART_COUNT, "hidden"));
    assert_eq!(sink.html(target::CART_TOTAL), "$240.00");
    assert!(sink.has_class(target::CART_DRAWER, "open"));
    assert!(!sink.has_class(target::CART_OVERLAY, "hidden"));
    for untouched in [
        target::PRODUCT_GRID,
        target::FEATURED_GRID,
        target::BLOG_GRID,
        target::CATEGORY_FILTER,
    ] {
        assert_eq!(sink.html(untouched), before.html(untouched));
    }
}

#[test]
fn test_currency_change_reprices_every_view() {
    let storage = MemoryStorage::new();
    let log = MemoryLog::new();
    let mut page = page_over(&storage, &log);
    page.add_to_cart(ProductId::new(4));

    assert!(page.set_currency("egp"));
    let sink = page.sink();
    assert!(sink.html(target::PRODUCT_GRID).contains("E£3708.00"));
    assert!(sink.html(target::FEATURED_GRID).contains("E£3708.00"));
    assert_eq!(sink.html(target::CART_TOTAL), "E£370.80");
    assert_eq!(sink.html(target::CURRENCY_CURRENT), "EGP");
    assert_eq!(storage.raw("storefront:currency").as_deref(), Some("EGP"));
}

#[test]
fn test_arabic_is_right_to_left_and_persists() {
    let storage = MemoryStorage::new();
    let log = MemoryLog::new();
    let mut page = page_over(&storage, &log);

    assert!(page.set_locale("ar"));
    assert_eq!(page.sink().dir(), Some("rtl"));
    assert_eq!(page.sink().lang(), Some("ar"));
    assert_eq!(page.sink().labels(), Some(Locale::Ar));
    assert!(page.sink().html(target::BLOG_GRID).contains("15 أكتوبر 2023"));

    let reloaded = page_over(&storage, &log);
    assert_eq!(reloaded.state().locale, Locale::Ar);
    assert_eq!(reloaded.sink().dir(), Some("rtl"));
}

#[test]
fn test_unknown_locale_and_currency_are_noops() {
    let storage = MemoryStorage::new();
    let log = MemoryLog::new();
    let mut page = page_over(&storage, &log);
    page.sink_mut().reset_writes();

    assert!(!page.set_locale("fr"));
    assert!(!page.set_currency("JPY"));
    assert_eq!(page.state().locale, Locale::En);
    assert_eq!(page.state().currency, Currency::USD);
    assert_eq!(page.sink().writes(), 0);
    assert!(storage.raw("storefront:lang").is_none());
    assert!(log
        .at_level(LogLevel::Debug)
        .iter()
        .any(|e| e.message == "intent rejected"));
}

#[test]
fn test_cart_survives_reload() {
    let storage = MemoryStorage::new();
    let log = MemoryLog::new();
    let mut page = page_over(&storage, &log);
    page.add_to_cart(ProductId::new(3));
    page.update_qty(ProductId::new(3), 2);

    let reloaded = page_over(&storage, &log);
    assert_eq!(reloaded.state().cart, page.state().cart);
    assert_eq!(reloaded.sink().html(target::CART_COUNT), "3");
    assert!(!reloaded.ui().cart_open);
}

#[test]
fn test_checkout_clears_cart_and_closes_drawer() {
    let storage = MemoryStorage::new();
    let log = MemoryLog::new();
    let mut page = page_over(&storage, &log);
    assert!(page.checkout().is_none());

    page.add_to_cart(ProductId::new(1));
    page.add_to_cart(ProductId::new(2));
    let receipt = page.checkout().unwrap();

    assert_eq!(receipt.items, 2);
    assert_eq!(receipt.total.display(), "$155.50");
    assert!(receipt.message(Locale::En).contains("Thank you for your order!"));
    assert!(page.state().cart.is_empty());
    assert!(!page.sink().has_class(target::CART_DRAWER, "open"));
    assert!(page.sink().has_class(target::CART_COUNT, "hidden"));
    assert_eq!(storage.raw("storefront:cart").as_deref(), Some("[]"));
    assert!(log.contains("checkout simulated"));

    page.set_locale("ar");
    page.add_to_cart(ProductId::new(1));
    let receipt = page.checkout().unwrap();
    let message = receipt.message(page.state().locale);
    assert!(message.contains("العناصر: 1"));
    assert!(message.ends_with("شكراً لطلبك!"));
}

#[test]
fn test_update_qty_to_zero_removes_line() {
    let log = MemoryLog::new();
    let mut page = page_over(&MemoryStorage::new(), &log);
    page.add_to_cart(ProductId::new(3));
    page.add_to_cart(ProductId::new(3));
    assert!(page.update_qty(ProductId::new(3), -2));
    assert!(page.state().cart.is_empty());
    assert!(page.sink().html(target::CART_ITEMS).contains("Your cart is empty."));

    assert!(!page.update_qty(ProductId::new(3), 1));
    assert!(!page.add_to_cart(ProductId::new(42)));
}

#[test]
fn test_newsletter_message_clears_after_delay() {
    let log = MemoryLog::new();
    let mut page = page_over(&MemoryStorage::new(), &log);

    assert!(!page.subscribe_newsletter("   ", 0));
    assert_eq!(page.sink().html(target::NEWSLETTER_MSG), "");

    assert!(page.subscribe_newsletter("reader@example.com", 10_000));
    assert_eq!(
        page.sink().html(target::NEWSLETTER_MSG),
        "Thank you for subscribing!"
    );
    assert!(page.sink().has_class(target::NEWSLETTER_MSG, "text-amber-400"));

    assert!(!page.tick(13_999));
    assert!(page.tick(14_000));
    assert_eq!(page.sink().html(target::NEWSLETTER_MSG), "");
    assert!(page.sink().has_class(target::NEWSLETTER_MSG, "text-muted"));
}

#[test]
fn test_modal_open_and_escape() {
    let log = MemoryLog::new();
    let mut page = page_over(&MemoryStorage::new(), &log);
    page.open_cart();

    assert!(page.open_product(ProductId::new(1)));
    let modal = page.sink().html(target::MODAL_CONTENT).to_string();
    assert!(modal.contains("4.6 (150 rating)"));
    assert!(!page.sink().has_class(target::PRODUCT_MODAL, "hidden"));

    page.escape();
    assert!(page.sink().has_class(target::PRODUCT_MODAL, "hidden"));
    assert!(!page.sink().has_class(target::CART_DRAWER, "open"));
}

#[test]
fn test_fetch_failures_degrade_to_empty() {
    let log = MemoryLog::new();
    let mut page = Storefront::new(
        &StorefrontConfig::default(),
        MemoryStorage::new(),
        SectionBuffer::with_page_targets(),
        &StructuredLogger::in_memory(&log),
    );
    block_on(page.bootstrap(&DownCatalog, &NoContent));

    assert!(page.state().products.is_empty());
    assert!(page.state().testimonials.is_empty());
    assert_eq!(page.sink().html(target::PRODUCT_GRID), "");
    assert!(page.sink().html(target::CART_ITEMS).contains("Your cart is empty."));
    assert_eq!(log.at_level(LogLevel::Warn).len(), 2);
    assert!(log.contains("catalog fetch failed"));
}

#[test]
fn test_page_without_optional_sections() {
    let log = MemoryLog::new();
    let mut page = Storefront::new(
        &StorefrontConfig::default(),
        MemoryStorage::new(),
        SectionBuffer::with_targets([target::PRODUCT_GRID, target::CART_COUNT]),
        &StructuredLogger::in_memory(&log),
    );
    block_on(page.bootstrap(&FakeCatalog, &StaticContentSource));
    page.add_to_cart(ProductId::new(2));

    assert!(page.sink().html(target::PRODUCT_GRID).contains("Desk Lamp"));
    assert_eq!(page.sink().html(target::CART_COUNT), "1");
    assert!(log.contains("render target missing"));
}
