//! JavaScript entry point.
//!
//! The page script constructs a [`WebStorefront`] and calls `start()`.
//! Page events are handled by delegated listeners on the document, so
//! re-rendered sections need no rebinding.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use storefront_cache::LocalStorage;
use storefront_core::ProductId;
use storefront_data::{FetchClient, HttpCatalogSource, StaticContentSource};
use storefront_observability::StructuredLogger;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement, KeyboardEvent,
};

use crate::app::{load_all, Storefront};
use crate::config::StorefrontConfig;
use crate::debounce::WakeupSlot;
use crate::dom::DomSink;
use crate::render::target;

type Page = Storefront<LocalStorage, DomSink>;
type Wakeup = Rc<WakeupSlot<i32>>;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn js_error(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Storefront handle exported to JavaScript.
#[wasm_bindgen]
pub struct WebStorefront {
    page: Rc<RefCell<Page>>,
    wakeup: Wakeup,
    catalog: Rc<HttpCatalogSource>,
    logger: StructuredLogger,
}

#[wasm_bindgen]
impl WebStorefront {
    /// Create the storefront from an optional JSON config document.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebStorefront, JsValue> {
        Self::build(config_json.as_deref()).map_err(js_error)
    }

    /// Restore state, wire page events, then fetch and render.
    pub fn start(&self) -> Result<js_sys::Promise, JsValue> {
        self.page.borrow_mut().prepare();
        install_handlers(&self.page, &self.wakeup)?;

        let page = Rc::clone(&self.page);
        let catalog = Rc::clone(&self.catalog);
        let logger = self.logger.clone();
        Ok(wasm_bindgen_futures::future_to_promise(async move {
            let loaded = load_all(catalog.as_ref(), &StaticContentSource, &logger).await;
            page.borrow_mut().install(loaded);
            Ok(JsValue::UNDEFINED)
        }))
    }

    pub fn search(&self, text: &str) {
        self.page.borrow_mut().search_input(text, now_ms());
        schedule_wakeup(&self.page, &self.wakeup);
    }

    #[wasm_bindgen(js_name = setCategory)]
    pub fn set_category(&self, value: &str) -> bool {
        self.page.borrow_mut().set_category(value)
    }

    #[wasm_bindgen(js_name = setSort)]
    pub fn set_sort(&self, value: &str) -> bool {
        self.page.borrow_mut().set_sort(value)
    }

    #[wasm_bindgen(js_name = setLocale)]
    pub fn set_locale(&self, code: &str) -> bool {
        self.page.borrow_mut().set_locale(code)
    }

    #[wasm_bindgen(js_name = setCurrency)]
    pub fn set_currency(&self, code: &str) -> bool {
        self.page.borrow_mut().set_currency(code)
    }

    #[wasm_bindgen(js_name = addToCart)]
    pub fn add_to_cart(&self, id: u32) -> bool {
        self.page.borrow_mut().add_to_cart(ProductId::new(id))
    }

    /// Units in the cart.
    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> u32 {
        self.page.borrow().state().cart.item_count()
    }
}

impl WebStorefront {
    fn build(config_json: Option<&str>) -> Result<Self> {
        let config = match config_json {
            Some(json) => StorefrontConfig::from_json_str(json)?,
            None => StorefrontConfig::default(),
        };
        let logger = config.build_logger();
        let storage = LocalStorage::open().context("Failed to open localStorage")?;
        let sink = DomSink::from_window().context("No document to render into")?;
        let catalog = HttpCatalogSource::new(FetchClient::new(&logger), config.catalog_url.clone());
        let page = Storefront::new(&config, storage, sink, &logger);

        Ok(Self {
            page: Rc::new(RefCell::new(page)),
            wakeup: Rc::new(WakeupSlot::new()),
            catalog: Rc::new(catalog),
            logger,
        })
    }
}

/// Wake up when the earliest pending timer is due, and again while any
/// remain. At most one browser timeout is armed at a time.
fn schedule_wakeup(page: &Rc<RefCell<Page>>, wakeup: &Wakeup) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(deadline) = page.try_borrow().ok().and_then(|p| p.next_deadline()) else {
        if let Some(stale) = wakeup.disarm() {
            window.clear_timeout_with_handle(stale);
        }
        return;
    };
    let delay = deadline.saturating_sub(now_ms()).min(i32::MAX as u64) as i32;
    let (page, slot) = (Rc::clone(page), Rc::clone(wakeup));
    let callback = Closure::once_into_js(move || {
        slot.disarm();
        if let Ok(mut p) = page.try_borrow_mut() {
            p.tick(now_ms());
        }
        schedule_wakeup(&page, &slot);
    });
    let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay,
    ) else {
        return;
    };
    if let Some(previous) = wakeup.arm(handle) {
        window.clear_timeout_with_handle(previous);
    }
}

fn listen(
    document: &Document,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

fn data_id(element: &Element) -> Option<ProductId> {
    element.get_attribute("data-id")?.parse().ok()
}

fn install_handlers(page: &Rc<RefCell<Page>>, wakeup: &Wakeup) -> Result<(), JsValue> {
    let document = page.borrow().sink().document().clone();

    let p = Rc::clone(page);
    listen(&document, "click", move |event| {
        let Some(element) = event_element(&event) else {
            return;
        };
        let receipt = {
            let Ok(mut page) = p.try_borrow_mut() else {
                return;
            };
            on_click(&mut page, &element)
        };
        if let Some(message) = receipt {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        }
    })?;

    let (p, w) = (Rc::clone(page), Rc::clone(wakeup));
    listen(&document, "input", move |event| {
        let Some(input) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        if !input.id().starts_with(target::SEARCH_INPUT) {
            return;
        }
        if let Ok(mut page) = p.try_borrow_mut() {
            page.search_input(&input.value(), now_ms());
        }
        schedule_wakeup(&p, &w);
    })?;

    let p = Rc::clone(page);
    listen(&document, "change", move |event| {
        let Some(select) = event.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
            return;
        };
        let Ok(mut page) = p.try_borrow_mut() else {
            return;
        };
        match select.id().as_str() {
            target::CATEGORY_FILTER => {
                page.set_category(&select.value());
            }
            target::SORT_SELECT => {
                page.set_sort(&select.value());
            }
            _ => {}
        }
    })?;

    let p = Rc::clone(page);
    listen(&document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        // Buttons inside a card keep their own Enter behavior.
        let card = event_element(&event)
            .filter(|e| closest(e, "button").is_none())
            .and_then(|e| closest(&e, "article[data-id]"))
            .and_then(|card| data_id(&card));
        if let Ok(mut page) = p.try_borrow_mut() {
            page.key_pressed(&key, card);
        }
    })?;

    let (p, w) = (Rc::clone(page), Rc::clone(wakeup));
    listen(&document, "submit", move |event| {
        let Some(form) = event.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok()) else {
            return;
        };
        if form.id() != "newsletter-form" {
            return;
        }
        event.prevent_default();
        let email = form
            .query_selector("input[type=\"email\"]")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        let subscribed = match p.try_borrow_mut() {
            Ok(mut page) => page.subscribe_newsletter(&email, now_ms()),
            Err(_) => false,
        };
        if subscribed {
            form.reset();
            schedule_wakeup(&p, &w);
        }
    })?;

    Ok(())
}

/// Route a click to its intent. Returns a checkout confirmation to show.
fn on_click(page: &mut Page, element: &Element) -> Option<String> {
    if let Some(button) = closest(element, ".add-to-cart") {
        if let Some(id) = data_id(&button) {
            page.add_to_cart(id);
        }
    } else if let Some(button) = closest(element, ".qty-btn") {
        let delta = button
            .get_attribute("data-delta")
            .and_then(|d| d.parse::<i64>().ok());
        if let (Some(id), Some(delta)) = (data_id(&button), delta) {
            page.update_qty(id, delta);
        }
    } else if let Some(button) = closest(element, ".remove-btn") {
        if let Some(id) = data_id(&button) {
            page.remove_from_cart(id);
        }
    } else if closest(element, "#modal-add-cart").is_some() {
        page.add_from_modal();
    } else if let Some(card) = closest(element, ".view-details, article[data-id]") {
        if let Some(id) = data_id(&card) {
            page.open_product(id);
        }
    } else if let Some(chip) = closest(element, "[data-category]") {
        if let Some(category) = chip.get_attribute("data-category") {
            page.set_category(&category);
        }
    } else if let Some(item) = closest(element, "[data-lang]") {
        if let Some(code) = item.get_attribute("data-lang") {
            page.set_locale(&code);
        }
    } else if let Some(item) = closest(element, "[data-currency]") {
        if let Some(code) = item.get_attribute("data-currency") {
            page.set_currency(&code);
        }
    } else if closest(element, "#checkout-btn").is_some() {
        let receipt = page.checkout()?;
        return Some(receipt.message(page.state().locale));
    } else if closest(element, "#cart-toggle").is_some() {
        page.open_cart();
    } else if closest(element, "#cart-close, #cart-overlay").is_some() {
        page.close_cart();
    } else if closest(element, "#modal-close, #modal-overlay").is_some() {
        page.close_modal();
    } else if closest(element, "#search-clear, #search-clear-mobile").is_some() {
        page.clear_search();
    }
    None
}
