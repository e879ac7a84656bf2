//! Browser DOM sink.

use storefront_core::Locale;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use crate::sink::ViewSink;

/// Writes views into the live document by element id.
#[derive(Debug, Clone)]
pub struct DomSink {
    document: Document,
}

impl DomSink {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Sink over the current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, target: &str) -> Option<Element> {
        self.document.get_element_by_id(target)
    }

    fn relabel(&self, selector: &str, attribute: &str, apply: impl Fn(&Element, &str)) {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if let Some(key) = element.get_attribute(attribute) {
                apply(&element, &key);
            }
        }
    }
}

impl ViewSink for DomSink {
    fn has_target(&self, target: &str) -> bool {
        self.element(target).is_some()
    }

    fn replace_html(&mut self, target: &str, html: &str) {
        if let Some(element) = self.element(target) {
            element.set_inner_html(html);
        }
    }

    fn toggle_class(&mut self, target: &str, class: &str, on: bool) {
        if let Some(element) = self.element(target) {
            // Only fails for class names containing whitespace.
            let _ = element.class_list().toggle_with_force(class, on);
        }
    }

    fn set_value(&mut self, target: &str, value: &str) {
        let Some(element) = self.element(target) else {
            return;
        };
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn set_document_locale(&mut self, lang: &str, dir: &str) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("lang", lang);
            let _ = root.set_attribute("dir", dir);
        }
    }

    fn apply_labels(&mut self, locale: Locale) {
        self.relabel("[data-i18n]", "data-i18n", |element, key| {
            element.set_text_content(Some(locale.t(key)));
        });
        self.relabel(
            "[data-i18n-placeholder]",
            "data-i18n-placeholder",
            |element, key| {
                let _ = element.set_attribute("placeholder", locale.t(key));
            },
        );
    }
}
