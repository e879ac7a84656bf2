//! Category chips and the category `<select>` options.

use storefront_core::catalog::{display_name, ALL_CATEGORIES};
use storefront_core::Locale;

use super::html_escape;

/// Render the "shop by category" chips.
pub fn render_category_chips(categories: &[String]) -> String {
    categories
        .iter()
        .map(|category| {
            let escaped = html_escape(category);
            format!(
                r#"<div class="card p-4 text-center cursor-pointer" data-category="{escaped}">
    <div class="w-12 h-12 mx-auto rounded-full bg-gradient-to-br from-amber-900/30 to-slate-800 flex items-center justify-center mb-3"></div>
    <span class="font-medium text-primary capitalize">{escaped}</span>
</div>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the filter options: "all" first, then each category capitalized.
///
/// The selected value is control state and is synced separately.
pub fn render_category_options(categories: &[String], locale: Locale) -> String {
    let mut options = vec![format!(
        r#"<option value="{}">{}</option>"#,
        ALL_CATEGORIES,
        html_escape(locale.t("filters.all"))
    )];
    options.extend(categories.iter().map(|category| {
        format!(
            r#"<option value="{}">{}</option>"#,
            html_escape(category),
            html_escape(&display_name(category))
        )
    }));
    options.join("")
}
