//! Page orchestration: bootstrap, user intents, and render dispatch.
//!
//! Every intent follows the same path: mutate the store, get a [`Change`],
//! hand it to the [`Renderer`]. Rejected intents leave state untouched and
//! are logged at debug level.

use storefront_cache::Storage;
use storefront_core::cart::Receipt;
use storefront_core::catalog::{CategoryFilter, Product};
use storefront_core::content::{BlogPost, Testimonial};
use storefront_core::search::SortMode;
use storefront_core::{
    AppState, Change, Currency, Locale, ProductId, StateUpdate, Store, StorefrontError,
};
use storefront_data::{fetch_catalog, load_blog_posts, load_testimonials, CatalogSource, ContentSource};
use storefront_observability::StructuredLogger;

use crate::config::StorefrontConfig;
use crate::debounce::Debouncer;
use crate::render::{target, RenderContext, Renderer, UiState};
use crate::sink::ViewSink;

/// Desktop and mobile search boxes with their clear buttons.
const SEARCH_BOXES: [(&str, &str); 2] = [
    (target::SEARCH_INPUT, target::SEARCH_CLEAR),
    (target::SEARCH_INPUT_MOBILE, target::SEARCH_CLEAR_MOBILE),
];

/// Results of the initial fetches, each already degraded to empty on
/// failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loaded {
    pub products: Vec<Product>,
    pub testimonials: Vec<Testimonial>,
    pub blog_posts: Vec<BlogPost>,
}

/// Run the catalog, testimonial and blog fetches concurrently.
pub async fn load_all<C, T>(catalog: &C, content: &T, logger: &StructuredLogger) -> Loaded
where
    C: CatalogSource + ?Sized,
    T: ContentSource + ?Sized,
{
    let (products, testimonials, blog_posts) = futures::join!(
        fetch_catalog(catalog, logger),
        load_testimonials(content, logger),
        load_blog_posts(content, logger),
    );
    Loaded {
        products,
        testimonials,
        blog_posts,
    }
}

/// The storefront page.
pub struct Storefront<S, K> {
    store: Store<S>,
    sink: K,
    renderer: Renderer,
    ui: UiState,
    search: Debouncer,
    newsletter: Debouncer,
    logger: StructuredLogger,
}

impl<S: Storage, K: ViewSink> Storefront<S, K> {
    /// Create a page over `storage` that renders into `sink`.
    ///
    /// Nothing is read or rendered until [`Storefront::prepare`].
    pub fn new(config: &StorefrontConfig, storage: S, sink: K, logger: &StructuredLogger) -> Self {
        let mut store = Store::new(storage, config.storage_prefix.clone(), logger);
        store.set(StateUpdate::Locale(config.locale()));
        store.set(StateUpdate::Currency(config.currency()));

        Self {
            store,
            sink,
            renderer: Renderer::new(config.featured_limit, config.new_arrivals_limit, logger),
            ui: UiState::default(),
            search: Debouncer::new(config.search_debounce_ms),
            newsletter: Debouncer::new(config.newsletter_message_ms),
            logger: logger.for_component("storefront"),
        }
    }

    /// Restore persisted state and render the empty page in the right
    /// locale, before any data arrives.
    pub fn prepare(&mut self) {
        self.logger.info("bootstrap start");
        self.store.load_persisted();
        self.render_all();
    }

    /// Install fetched data and render every view.
    pub fn install(&mut self, loaded: Loaded) {
        let (products, testimonials, posts) = (
            loaded.products.len(),
            loaded.testimonials.len(),
            loaded.blog_posts.len(),
        );
        self.store.set(StateUpdate::Products(loaded.products));
        self.store.set(StateUpdate::Testimonials(loaded.testimonials));
        self.store.set(StateUpdate::BlogPosts(loaded.blog_posts));
        self.render_all();

        self.logger
            .info_builder("bootstrap finished")
            .field_i64("products", products as i64)
            .field_i64("testimonials", testimonials as i64)
            .field_i64("blog_posts", posts as i64)
            .emit();
    }

    /// Full startup: restore, fetch concurrently, render.
    pub async fn bootstrap<C, T>(&mut self, catalog: &C, content: &T)
    where
        C: CatalogSource + ?Sized,
        T: ContentSource + ?Sized,
    {
        self.prepare();
        let loaded = load_all(catalog, content, &self.logger).await;
        self.install(loaded);
    }

    /// Rebuild every view.
    pub fn render_all(&mut self) {
        let ctx = RenderContext {
            state: self.store.state(),
            ui: &self.ui,
        };
        self.renderer.render_all(ctx, &mut self.sink);
    }

    /// Rebuild the views `change` invalidates.
    pub fn dispatch(&mut self, change: Change) {
        self.logger
            .debug_builder("dispatch")
            .field("change", format!("{change:?}"))
            .emit();
        let ctx = RenderContext {
            state: self.store.state(),
            ui: &self.ui,
        };
        self.renderer.dispatch(change, ctx, &mut self.sink);
    }

    // Search and filters

    /// Record typed search text and (re)schedule the grid recomputation.
    pub fn search_input(&mut self, text: &str, now_ms: u64) {
        self.store.set(StateUpdate::Search(text.trim().to_string()));
        let empty = self.store.state().search.is_empty();
        for (_, clear) in SEARCH_BOXES {
            self.sink.toggle_class(clear, "hidden", empty);
        }
        self.search.schedule(now_ms);
    }

    /// Clear both search boxes and recompute at once.
    pub fn clear_search(&mut self) {
        self.search.cancel();
        let key = self.store.set(StateUpdate::Search(String::new()));
        for (input, clear) in SEARCH_BOXES {
            self.sync_control(input, "");
            self.sink.toggle_class(clear, "hidden", true);
        }
        self.dispatch(key.change());
    }

    /// Advance host time, firing due timers. Returns whether anything was
    /// re-rendered.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut rendered = false;
        if self.search.poll(now_ms).is_some() {
            self.dispatch(Change::Filters);
            rendered = true;
        }
        if self.newsletter.poll(now_ms).is_some() {
            self.ui.newsletter_message = None;
            self.dispatch(Change::Newsletter);
            rendered = true;
        }
        rendered
    }

    /// Earliest pending timer deadline, for hosts that schedule wakeups.
    pub fn next_deadline(&self) -> Option<u64> {
        [self.search.due_at(), self.newsletter.due_at()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Select a category by its filter value; `"all"` clears the filter.
    pub fn set_category(&mut self, value: &str) -> bool {
        let result = self.try_set_category(value);
        if result.is_ok() {
            let value = self.store.state().category.as_value().to_string();
            self.sync_control(target::CATEGORY_FILTER, &value);
        }
        self.settle("set_category", result)
    }

    pub fn set_sort(&mut self, value: &str) -> bool {
        let result = value
            .parse::<SortMode>()
            .map_err(StorefrontError::UnknownSort)
            .map(|sort| self.store.set(StateUpdate::Sort(sort)).change());
        self.settle("set_sort", result)
    }

    // Locale and currency

    pub fn set_locale(&mut self, code: &str) -> bool {
        let result = Locale::from_code(code)
            .ok_or_else(|| StorefrontError::UnknownLocale(code.to_string()))
            .map(|locale| {
                self.store
                    .set_and_persist(StateUpdate::Locale(locale))
                    .change()
            });
        self.settle("set_locale", result)
    }

    pub fn set_currency(&mut self, code: &str) -> bool {
        let result = Currency::from_code(code)
            .ok_or_else(|| StorefrontError::UnknownCurrency(code.to_string()))
            .map(|currency| {
                self.store
                    .set_and_persist(StateUpdate::Currency(currency))
                    .change()
            });
        self.settle("set_currency", result)
    }

    // Cart

    /// Add one unit and open the drawer.
    pub fn add_to_cart(&mut self, id: ProductId) -> bool {
        let result = self.store.add_to_cart(id);
        if result.is_ok() {
            self.ui.cart_open = true;
        }
        self.settle("add_to_cart", result)
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let result = self.store.remove_from_cart(id);
        self.settle("remove_from_cart", result)
    }

    pub fn update_qty(&mut self, id: ProductId, delta: i64) -> bool {
        let result = self.store.update_cart_qty(id, delta);
        self.settle("update_qty", result)
    }

    pub fn open_cart(&mut self) {
        self.ui.cart_open = true;
        self.dispatch(Change::Cart);
    }

    pub fn close_cart(&mut self) {
        self.ui.cart_open = false;
        self.dispatch(Change::Cart);
    }

    /// Simulated checkout. Returns the receipt to confirm, or `None` for an
    /// empty cart.
    pub fn checkout(&mut self) -> Option<Receipt> {
        match self.store.checkout() {
            Ok((receipt, change)) => {
                self.ui.cart_open = false;
                self.dispatch(change);
                Some(receipt)
            }
            Err(e) => {
                self.reject("checkout", &e);
                None
            }
        }
    }

    // Product modal

    pub fn open_product(&mut self, id: ProductId) -> bool {
        let result = match self.store.state().product(id) {
            Some(_) => {
                self.ui.modal = Some(id);
                Ok(Change::Modal)
            }
            None => Err(StorefrontError::ProductNotFound(id)),
        };
        self.settle("open_product", result)
    }

    pub fn close_modal(&mut self) {
        self.ui.modal = None;
        self.dispatch(Change::Modal);
    }

    /// Add the product shown in the modal, then close the modal.
    pub fn add_from_modal(&mut self) -> bool {
        let Some(id) = self.ui.modal else {
            return false;
        };
        let added = self.add_to_cart(id);
        self.close_modal();
        added
    }

    /// Close every overlay.
    pub fn escape(&mut self) {
        self.close_modal();
        self.close_cart();
    }

    /// Keyboard shortcuts. `card` is the product card holding focus, if any.
    pub fn key_pressed(&mut self, key: &str, card: Option<ProductId>) -> bool {
        match (key, card) {
            ("Escape", _) => {
                self.escape();
                true
            }
            ("Enter", Some(id)) => self.open_product(id),
            _ => false,
        }
    }

    // Newsletter

    /// Show the thank-you message for a non-empty email, cleared after the
    /// configured delay. An empty email is ignored.
    pub fn subscribe_newsletter(&mut self, email: &str, now_ms: u64) -> bool {
        if email.trim().is_empty() {
            return false;
        }
        let locale = self.store.state().locale;
        self.ui.newsletter_message = Some(locale.t("newsletter.thanks").to_string());
        self.newsletter.schedule(now_ms);
        self.dispatch(Change::Newsletter);
        true
    }

    // Accessors

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// The product grid as currently derived.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.store.state().filtered()
    }

    fn try_set_category(&mut self, value: &str) -> Result<Change, StorefrontError> {
        let filter = CategoryFilter::from_value(value.trim());
        if let CategoryFilter::Only(name) = &filter {
            if !self.store.state().categories().contains(name) {
                return Err(StorefrontError::UnknownCategory(name.clone()));
            }
        }
        Ok(self.store.set(StateUpdate::Category(filter)).change())
    }

    fn sync_control(&mut self, target: &str, value: &str) {
        if self.sink.has_target(target) {
            self.sink.set_value(target, value);
        }
    }

    fn settle(&mut self, op: &str, result: Result<Change, StorefrontError>) -> bool {
        match result {
            Ok(change) => {
                self.dispatch(change);
                true
            }
            Err(e) => {
                self.reject(op, &e);
                false
            }
        }
    }

    fn reject(&self, op: &str, e: &StorefrontError) {
        self.logger
            .debug_builder("intent rejected")
            .field("op", op)
            .error(e)
            .emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SectionBuffer;
    use storefront_cache::MemoryStorage;
    use storefront_core::Money;
    use storefront_observability::{LogLevel, MemoryLog};

    fn page(log: &MemoryLog) -> Storefront<MemoryStorage, SectionBuffer> {
        let mut page = Storefront::new(
            &StorefrontConfig::default(),
            MemoryStorage::new(),
            SectionBuffer::with_page_targets(),
            &StructuredLogger::in_memory(log),
        );
        page.prepare();
        page.install(Loaded {
            products: vec![
                Product::new(1, "Desk", Money::new(5000, Currency::USD)).with_category("home"),
                Product::new(2, "Ring", Money::new(9000, Currency::USD)).with_category("jewelery"),
            ],
            ..Loaded::default()
        });
        page
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let log = MemoryLog::new();
        let mut page = page(&log);
        assert!(!page.set_category("toys"));
        assert_eq!(page.state().category, CategoryFilter::All);
        assert!(log.at_level(LogLevel::Debug).iter().any(|e| e.message == "intent rejected"));

        assert!(page.set_category("jewelery"));
        assert_eq!(page.visible_products().len(), 1);
        assert_eq!(page.sink().value(target::CATEGORY_FILTER), Some("jewelery"));
    }

    #[test]
    fn test_sort_values() {
        let log = MemoryLog::new();
        let mut page = page(&log);
        assert!(page.set_sort("price-desc"));
        assert_eq!(page.visible_products()[0].name, "Ring");
        assert!(!page.set_sort("cheapest"));
        assert_eq!(page.state().sort, SortMode::PriceDesc);
    }

    #[test]
    fn test_modal_add_and_escape() {
        let log = MemoryLog::new();
        let mut page = page(&log);
        assert!(!page.open_product(ProductId::new(99)));
        assert!(page.open_product(ProductId::new(2)));
        assert!(page.add_from_modal());
        assert_eq!(page.ui().modal, None);
        assert!(page.ui().cart_open);
        assert_eq!(page.state().cart.item_count(), 1);

        page.escape();
        assert!(!page.ui().cart_open);
        assert!(page.sink().has_class(target::CART_OVERLAY, "hidden"));
    }

    #[test]
    fn test_enter_on_card_opens_modal() {
        let log = MemoryLog::new();
        let mut page = page(&log);
        assert!(!page.key_pressed("Enter", None));
        assert!(!page.key_pressed("a", Some(ProductId::new(2))));
        assert!(page.ui().modal.is_none());

        assert!(page.key_pressed("Enter", Some(ProductId::new(2))));
        assert_eq!(page.ui().modal, Some(ProductId::new(2)));
        assert!(page.sink().html(target::MODAL_CONTENT).contains("Ring"));

        assert!(page.key_pressed("Escape", None));
        assert!(page.ui().modal.is_none());
    }

    #[test]
    fn test_clear_buttons_follow_search_text() {
        let log = MemoryLog::new();
        let mut page = page(&log);
        page.search_input("   ", 0);
        assert!(page.sink().has_class(target::SEARCH_CLEAR, "hidden"));
        assert!(page.sink().has_class(target::SEARCH_CLEAR_MOBILE, "hidden"));

        page.search_input("lamp", 10);
        assert!(!page.sink().has_class(target::SEARCH_CLEAR, "hidden"));
        assert!(!page.sink().has_class(target::SEARCH_CLEAR_MOBILE, "hidden"));
    }

    #[test]
    fn test_next_deadline() {
        let log = MemoryLog::new();
        let mut page = page(&log);
        assert_eq!(page.next_deadline(), None);
        page.subscribe_newsletter("a@b.c", 0);
        page.search_input("desk", 100);
        assert_eq!(page.next_deadline(), Some(350));
        page.tick(350);
        assert_eq!(page.next_deadline(), Some(4000));
    }
}
