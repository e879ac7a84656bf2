//! Product detail modal.

use storefront_core::catalog::Product;
use storefront_core::{Currency, Locale};

use super::{html_escape, STAR_ICON};

/// Render the modal body for a product.
pub fn render_product_modal(product: &Product, locale: Locale, currency: Currency) -> String {
    format!(
        r#"<div class="grid md:grid-cols-2 gap-8">
    <div class="aspect-square rounded-xl overflow-hidden bg-slate-900/70 border border-amber-100/10 flex items-center justify-center">
        <img src="{image}" alt="{name}" class="product-image" loading="lazy">
    </div>
    <div class="space-y-4">
        <h3 id="modal-title" class="font-display text-2xl font-bold text-gradient">{name}</h3>
        <div class="flex items-center gap-3">
            <span class="text-2xl font-bold text-amber-400">{price}</span>
            <div class="flex items-center gap-1 text-sm text-muted">{star}<span>{rating:.1} ({reviews} {rating_label})</span></div>
        </div>
        <p class="text-secondary leading-relaxed">{description}</p>
        <div class="pt-4 border-t border-amber-100/10">
            <button id="modal-add-cart" class="btn-primary w-full cursor-pointer" data-id="{id}">{add}</button>
        </div>
    </div>
</div>"#,
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        price = html_escape(&product.price.display_in(currency)),
        star = STAR_ICON,
        rating = product.rating,
        reviews = product.reviews,
        rating_label = html_escape(locale.t("product.rating")),
        description = html_escape(&product.description),
        id = product.id,
        add = html_escape(locale.t("cart.add")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    #[test]
    fn test_modal_details() {
        let product = Product::new(9, "Ring", Money::new(16800, Currency::USD))
            .with_description("Solid gold")
            .with_rating(4.6, 400);
        let html = render_product_modal(&product, Locale::En, Currency::GBP);
        assert!(html.contains("£132.72"));
        assert!(html.contains("4.6 (400 rating)"));
        assert!(html.contains("Solid gold"));
        assert!(html.contains(r#"data-id="9">Add to Cart</button>"#));
    }
}
