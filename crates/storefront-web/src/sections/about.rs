//! About strip.

use storefront_core::content::ABOUT_ITEMS;
use storefront_core::Locale;

use super::html_escape;

/// Render the statistics strip with localized captions.
pub fn render_about_strip(locale: Locale) -> String {
    ABOUT_ITEMS
        .iter()
        .map(|item| {
            format!(
                r#"<div class="p-4 bg-slate-900/70 rounded-xl border border-amber-100/10">
    <div class="font-display text-3xl font-bold text-gradient mb-1">{}</div>
    <div class="text-secondary">{}</div>
</div>"#,
                html_escape(item.value),
                html_escape(locale.t(item.label_key))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
