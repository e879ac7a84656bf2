//! Render dispatch: which views a change invalidates, and how each view is
//! written to a [`ViewSink`].

use storefront_core::catalog::{featured, new_arrivals};
use storefront_core::{AppState, Change, ProductId};
use storefront_observability::StructuredLogger;

use crate::sections;
use crate::sink::ViewSink;

/// Element ids the storefront page defines.
pub mod target {
    pub const PRODUCT_GRID: &str = "product-grid";
    pub const FEATURED_GRID: &str = "featured-grid";
    pub const NEW_ARRIVALS_GRID: &str = "new-arrivals-grid";
    pub const CATEGORIES_GRID: &str = "categories-grid";
    pub const CATEGORY_FILTER: &str = "category-filter";
    pub const SORT_SELECT: &str = "sort-select";
    pub const SEARCH_INPUT: &str = "search-input";
    pub const SEARCH_INPUT_MOBILE: &str = "search-input-mobile";
    pub const SEARCH_CLEAR: &str = "search-clear";
    pub const SEARCH_CLEAR_MOBILE: &str = "search-clear-mobile";
    pub const ABOUT_STRIP: &str = "about-strip";
    pub const TESTIMONIALS_GRID: &str = "testimonials-grid";
    pub const BLOG_GRID: &str = "blog-grid";
    pub const CART_ITEMS: &str = "cart-items";
    pub const CART_COUNT: &str = "cart-count";
    pub const CART_TOTAL: &str = "cart-total";
    pub const CART_DRAWER: &str = "cart-drawer";
    pub const CART_OVERLAY: &str = "cart-overlay";
    pub const PRODUCT_MODAL: &str = "product-modal";
    pub const MODAL_CONTENT: &str = "modal-content";
    pub const LANG_CURRENT: &str = "lang-current";
    pub const CURRENCY_CURRENT: &str = "currency-current";
    pub const NEWSLETTER_MSG: &str = "newsletter-msg";
}

/// Every target id, for hosts that want a complete in-memory page.
pub const PAGE_TARGETS: [&str; 23] = [
    target::PRODUCT_GRID,
    target::FEATURED_GRID,
    target::NEW_ARRIVALS_GRID,
    target::CATEGORIES_GRID,
    target::CATEGORY_FILTER,
    target::SORT_SELECT,
    target::SEARCH_INPUT,
    target::SEARCH_INPUT_MOBILE,
    target::SEARCH_CLEAR,
    target::SEARCH_CLEAR_MOBILE,
    target::ABOUT_STRIP,
    target::TESTIMONIALS_GRID,
    target::BLOG_GRID,
    target::CART_ITEMS,
    target::CART_COUNT,
    target::CART_TOTAL,
    target::CART_DRAWER,
    target::CART_OVERLAY,
    target::PRODUCT_MODAL,
    target::MODAL_CONTENT,
    target::LANG_CURRENT,
    target::CURRENCY_CURRENT,
    target::NEWSLETTER_MSG,
];

/// A dependent view of the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    ProductGrid,
    Featured,
    NewArrivals,
    Categories,
    CategoryFilter,
    AboutStrip,
    Testimonials,
    Blog,
    Cart,
    Modal,
    Labels,
    Newsletter,
}

impl View {
    /// Every view, in render order.
    pub const ALL: [View; 12] = [
        View::Labels,
        View::Featured,
        View::NewArrivals,
        View::Categories,
        View::AboutStrip,
        View::CategoryFilter,
        View::Testimonials,
        View::Blog,
        View::ProductGrid,
        View::Cart,
        View::Modal,
        View::Newsletter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            View::ProductGrid => "product-grid",
            View::Featured => "featured",
            View::NewArrivals => "new-arrivals",
            View::Categories => "categories",
            View::CategoryFilter => "category-filter",
            View::AboutStrip => "about-strip",
            View::Testimonials => "testimonials",
            View::Blog => "blog",
            View::Cart => "cart",
            View::Modal => "modal",
            View::Labels => "labels",
            View::Newsletter => "newsletter",
        }
    }
}

/// Views a change invalidates.
pub fn invalidated(change: Change) -> &'static [View] {
    match change {
        Change::Cart => &[View::Cart],
        Change::Filters => &[View::ProductGrid],
        Change::Modal => &[View::Modal],
        Change::Newsletter => &[View::Newsletter],
        Change::Catalog | Change::Content | Change::Locale | Change::Currency => &View::ALL,
    }
}

/// Page state that lives outside [`AppState`]: overlays and transient
/// feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub cart_open: bool,
    pub modal: Option<ProductId>,
    pub newsletter_message: Option<String>,
}

/// Everything a render reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub ui: &'a UiState,
}

/// Writes views to a sink.
#[derive(Debug, Clone)]
pub struct Renderer {
    featured_limit: usize,
    new_arrivals_limit: usize,
    logger: StructuredLogger,
}

impl Renderer {
    pub fn new(featured_limit: usize, new_arrivals_limit: usize, logger: &StructuredLogger) -> Self {
        Self {
            featured_limit,
            new_arrivals_limit,
            logger: logger.for_component("render"),
        }
    }

    /// Rebuild every view from the current state.
    pub fn render_all<K: ViewSink + ?Sized>(&self, ctx: RenderContext<'_>, sink: &mut K) {
        for view in View::ALL {
            self.render(view, ctx, sink);
        }
    }

    /// Rebuild the views `change` invalidates.
    pub fn dispatch<K: ViewSink + ?Sized>(
        &self,
        change: Change,
        ctx: RenderContext<'_>,
        sink: &mut K,
    ) {
        for &view in invalidated(change) {
            self.render(view, ctx, sink);
        }
    }

    /// Rebuild one view.
    pub fn render<K: ViewSink + ?Sized>(&self, view: View, ctx: RenderContext<'_>, sink: &mut K) {
        let state = ctx.state;
        let (locale, currency) = (state.locale, state.currency);
        let mut out = Writer {
            sink,
            view,
            logger: &self.logger,
        };

        match view {
            View::ProductGrid => out.html(
                target::PRODUCT_GRID,
                || sections::render_product_grid(&state.filtered(), locale, currency),
            ),
            View::Featured => out.html(target::FEATURED_GRID, || {
                sections::render_product_grid(
                    &featured(&state.products, self.featured_limit),
                    locale,
                    currency,
                )
            }),
            View::NewArrivals => out.html(target::NEW_ARRIVALS_GRID, || {
                sections::render_product_grid(
                    &new_arrivals(&state.products, self.new_arrivals_limit),
                    locale,
                    currency,
                )
            }),
            View::Categories => out.html(target::CATEGORIES_GRID, || {
                sections::render_category_chips(&state.categories())
            }),
            View::CategoryFilter => {
                out.html(target::CATEGORY_FILTER, || {
                    sections::render_category_options(&state.categories(), locale)
                });
                out.value(target::CATEGORY_FILTER, state.category.as_value());
            }
            View::AboutStrip => out.html(target::ABOUT_STRIP, || {
                sections::render_about_strip(locale)
            }),
            View::Testimonials => out.html(target::TESTIMONIALS_GRID, || {
                sections::render_testimonials(&state.testimonials)
            }),
            View::Blog => out.html(target::BLOG_GRID, || {
                sections::render_blog(&state.blog_posts, locale)
            }),
            View::Cart => {
                let count = state.cart.item_count();
                out.html(target::CART_ITEMS, || {
                    sections::render_cart_items(&state.cart, locale, currency)
                });
                out.html(target::CART_COUNT, || count.to_string());
                out.class(target::CART_COUNT, "hidden", count == 0);
                out.html(target::CART_TOTAL, || {
                    sections::render_cart_total(&state.cart, currency)
                });
                out.class(target::CART_DRAWER, "open", ctx.ui.cart_open);
                out.class(target::CART_OVERLAY, "hidden", !ctx.ui.cart_open);
            }
            View::Modal => {
                let product = ctx.ui.modal.and_then(|id| state.product(id));
                if let Some(product) = product {
                    out.html(target::MODAL_CONTENT, || {
                        sections::render_product_modal(product, locale, currency)
                    });
                }
                out.class(target::PRODUCT_MODAL, "hidden", product.is_none());
            }
            View::Labels => {
                out.sink.set_document_locale(locale.code(), locale.dir());
                out.sink.apply_labels(locale);
                out.html(target::LANG_CURRENT, || locale.code().to_uppercase());
                out.html(target::CURRENCY_CURRENT, || currency.code().to_string());
                out.value(target::SORT_SELECT, state.sort.as_str());
            }
            View::Newsletter => {
                let message = ctx.ui.newsletter_message.as_deref();
                out.html(target::NEWSLETTER_MSG, || {
                    sections::html_escape(message.unwrap_or(""))
                });
                out.class(target::NEWSLETTER_MSG, "text-amber-400", message.is_some());
                out.class(target::NEWSLETTER_MSG, "text-muted", message.is_none());
            }
        }
    }
}

/// Skips writes to absent targets without building their markup.
struct Writer<'s, 'l, K: ?Sized> {
    sink: &'s mut K,
    view: View,
    logger: &'l StructuredLogger,
}

impl<K: ViewSink + ?Sized> Writer<'_, '_, K> {
    fn present(&self, target: &str) -> bool {
        if self.sink.has_target(target) {
            return true;
        }
        self.logger
            .debug_builder("render target missing, skipped")
            .field("view", self.view.name())
            .field("target", target)
            .emit();
        false
    }

    fn html(&mut self, target: &str, build: impl FnOnce() -> String) {
        if self.present(target) {
            let html = build();
            self.sink.replace_html(target, &html);
        }
    }

    fn class(&mut self, target: &str, class: &str, on: bool) {
        if self.present(target) {
            self.sink.toggle_class(target, class, on);
        }
    }

    fn value(&mut self, target: &str, value: &str) {
        if self.present(target) {
            self.sink.set_value(target, value);
        }
    }
}
