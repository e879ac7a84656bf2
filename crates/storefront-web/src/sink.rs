//! View sinks: where rendered sections are written.

use std::collections::BTreeMap;

use storefront_core::Locale;

/// Destination for rendered views.
///
/// Targets are element ids. Writers check [`ViewSink::has_target`] first;
/// a sink is never asked to write to a target it does not have.
pub trait ViewSink {
    /// Whether the target exists on the page.
    fn has_target(&self, target: &str) -> bool;

    /// Replace the target's content with `html`.
    fn replace_html(&mut self, target: &str, html: &str);

    /// Add or remove a class on the target.
    fn toggle_class(&mut self, target: &str, class: &str, on: bool);

    /// Set a form control's value.
    fn set_value(&mut self, target: &str, value: &str);

    /// Set the document root's `lang` and `dir` attributes.
    fn set_document_locale(&mut self, lang: &str, dir: &str);

    /// Relabel every static `data-i18n` element for `locale`.
    fn apply_labels(&mut self, locale: Locale);
}

/// State of one target in a [`SectionBuffer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub html: String,
    pub classes: BTreeMap<String, bool>,
    pub value: Option<String>,
}

impl Section {
    /// Whether `class` is currently applied.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.get(class).copied().unwrap_or(false)
    }
}

/// In-memory sink.
///
/// Holds the latest write per target so two renders can be compared with
/// `==`. Only registered targets exist, mirroring a page that may omit
/// sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBuffer {
    sections: BTreeMap<String, Section>,
    lang: Option<String>,
    dir: Option<String>,
    labels: Option<Locale>,
    writes: usize,
}

impl SectionBuffer {
    /// Empty buffer with no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer with every target the storefront page defines.
    pub fn with_page_targets() -> Self {
        Self::with_targets(crate::render::PAGE_TARGETS.iter().copied())
    }

    pub fn with_targets<'a>(targets: impl IntoIterator<Item = &'a str>) -> Self {
        let mut buffer = Self::new();
        for target in targets {
            buffer.add_target(target);
        }
        buffer
    }

    pub fn add_target(&mut self, target: &str) {
        self.sections.entry(target.to_string()).or_default();
    }

    pub fn remove_target(&mut self, target: &str) {
        self.sections.remove(target);
    }

    pub fn section(&self, target: &str) -> Option<&Section> {
        self.sections.get(target)
    }

    /// The target's html, empty when absent.
    pub fn html(&self, target: &str) -> &str {
        self.sections
            .get(target)
            .map(|s| s.html.as_str())
            .unwrap_or("")
    }

    pub fn has_class(&self, target: &str, class: &str) -> bool {
        self.sections
            .get(target)
            .is_some_and(|s| s.has_class(class))
    }

    pub fn value(&self, target: &str) -> Option<&str> {
        self.sections.get(target).and_then(|s| s.value.as_deref())
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn dir(&self) -> Option<&str> {
        self.dir.as_deref()
    }

    /// Locale the static labels were last applied for.
    pub fn labels(&self) -> Option<Locale> {
        self.labels
    }

    /// Write operations received since the last reset.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn reset_writes(&mut self) {
        self.writes = 0;
    }

    /// Copy of the visible state, without the write counter.
    pub fn snapshot(&self) -> SectionBuffer {
        SectionBuffer {
            writes: 0,
            ..self.clone()
        }
    }
}

impl ViewSink for SectionBuffer {
    fn has_target(&self, target: &str) -> bool {
        self.sections.contains_key(target)
    }

    fn replace_html(&mut self, target: &str, html: &str) {
        if let Some(section) = self.sections.get_mut(target) {
            section.html = html.to_string();
            self.writes += 1;
        }
    }

    fn toggle_class(&mut self, target: &str, class: &str, on: bool) {
        if let Some(section) = self.sections.get_mut(target) {
            section.classes.insert(class.to_string(), on);
            self.writes += 1;
        }
    }

    fn set_value(&mut self, target: &str, value: &str) {
        if let Some(section) = self.sections.get_mut(target) {
            section.value = Some(value.to_string());
            self.writes += 1;
        }
    }

    fn set_document_locale(&mut self, lang: &str, dir: &str) {
        self.lang = Some(lang.to_string());
        self.dir = Some(dir.to_string());
        self.writes += 1;
    }

    fn apply_labels(&mut self, locale: Locale) {
        self.labels = Some(locale);
        self.writes += 1;
    }
}
