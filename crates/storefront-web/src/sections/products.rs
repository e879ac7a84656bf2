//! Product cards and grids.

use storefront_core::catalog::Product;
use storefront_core::{Currency, Locale};

use super::{html_escape, STAR_ICON};

/// Render one product card.
pub fn render_product_card(product: &Product, locale: Locale, currency: Currency) -> String {
    let name = html_escape(&product.name);
    let badge = product
        .badge
        .as_deref()
        .map(|badge| {
            format!(
                r#"<span class="absolute top-3 start-3 bg-gradient-to-r from-amber-400 to-amber-600 text-white text-xs font-bold px-2 py-1 rounded shadow-sm">{}</span>"#,
                html_escape(badge)
            )
        })
        .unwrap_or_default();
    let new_tag = if product.is_new {
        format!(
            r#"<span class="absolute top-3 end-3 bg-slate-800 text-amber-400 text-xs font-bold px-2 py-1 rounded">{}</span>"#,
            html_escape(locale.t("product.new"))
        )
    } else {
        String::new()
    };

    format!(
        r#"<article class="card group cursor-pointer" data-id="{id}" role="button" tabindex="0">
    <div class="relative aspect-square overflow-hidden rounded-t-xl bg-slate-900/50">
        <img src="{image}" alt="{name}" class="product-image" loading="lazy">
        {badge}
        {new_tag}
        <button class="add-to-cart absolute end-3 bottom-3 bg-slate-800 text-primary p-2 rounded-full shadow cursor-pointer border border-amber-200/20" aria-label="Add {name} to cart" data-id="{id}">+</button>
    </div>
    <div class="p-4 space-y-2">
        <h3 class="font-display font-medium text-primary line-clamp-1">{name}</h3>
        <div class="flex items-center justify-between">
            <span class="text-amber-400 font-semibold">{price}</span>
            <div class="flex items-center gap-1 text-sm text-muted">{star}<span>{rating:.1}</span></div>
        </div>
        <button class="view-details w-full mt-2 btn-secondary text-sm py-2 cursor-pointer" data-id="{id}">{view}</button>
    </div>
</article>"#,
        id = product.id,
        image = html_escape(&product.image),
        name = name,
        badge = badge,
        new_tag = new_tag,
        price = html_escape(&product.price.display_in(currency)),
        star = STAR_ICON,
        rating = product.rating,
        view = html_escape(locale.t("modal.view")),
    )
}

/// Render a grid of product cards, in the given order.
pub fn render_product_grid(products: &[&Product], locale: Locale, currency: Currency) -> String {
    products
        .iter()
        .map(|p| render_product_card(p, locale, currency))
        .collect::<Vec<_>>()
        .join("\n")
}
