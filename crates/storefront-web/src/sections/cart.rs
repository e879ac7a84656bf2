//! Cart drawer contents.

use storefront_core::cart::{Cart, CartLine};
use storefront_core::{Currency, Locale};

use super::html_escape;

fn render_cart_line(line: &CartLine, locale: Locale, currency: Currency) -> String {
    let id = line.id();
    format!(
        r#"<div class="flex gap-4 p-3 bg-slate-900/70 rounded-lg border border-amber-100/10" data-id="{id}">
    <img src="{image}" alt="{name}" class="w-20 h-20 object-contain rounded bg-slate-900/50 p-2" loading="lazy">
    <div class="flex-1 min-w-0">
        <h4 class="font-medium text-primary truncate">{name}</h4>
        <div class="text-amber-400 font-semibold mt-1">{price}</div>
        <div class="flex items-center gap-2 mt-2">
            <button class="qty-btn w-7 h-7 rounded border border-amber-300/50 cursor-pointer text-primary" data-id="{id}" data-delta="-1">−</button>
            <span class="w-8 text-center text-primary">{qty}</span>
            <button class="qty-btn w-7 h-7 rounded border border-amber-300/50 cursor-pointer text-primary" data-id="{id}" data-delta="1">+</button>
            <button class="remove-btn ms-auto text-muted hover:text-amber-400 cursor-pointer" data-id="{id}" aria-label="{remove}">×</button>
        </div>
    </div>
</div>"#,
        id = id,
        image = html_escape(&line.product.image),
        name = html_escape(&line.product.name),
        price = html_escape(&line.product.price.display_in(currency)),
        qty = line.qty,
        remove = html_escape(locale.t("cart.remove")),
    )
}

/// Render the drawer's line list, or the empty-cart message.
pub fn render_cart_items(cart: &Cart, locale: Locale, currency: Currency) -> String {
    if cart.is_empty() {
        return format!(
            r#"<p id="cart-empty" class="text-center text-muted py-8">{}</p>"#,
            html_escape(locale.t("cart.empty"))
        );
    }
    cart.lines()
        .iter()
        .map(|line| render_cart_line(line, locale, currency))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The cart total in the display currency.
pub fn render_cart_total(cart: &Cart, currency: Currency) -> String {
    html_escape(&cart.total().display_in(currency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::Product;
    use storefront_core::Money;

    #[test]
    fn test_empty_cart_message() {
        let html = render_cart_items(&Cart::new(), Locale::En, Currency::USD);
        assert!(html.contains("Your cart is empty."));
        assert_eq!(render_cart_total(&Cart::new(), Currency::EUR), "€0.00");
    }

    #[test]
    fn test_lines_and_total() {
        let mut cart = Cart::new();
        let mug = Product::new(3, "Mug", Money::new(1250, Currency::USD));
        cart.add(&mug);
        cart.add(&mug);

        let html = render_cart_items(&cart, Locale::En, Currency::USD);
        assert!(html.contains("$12.50"));
        assert!(html.contains(r#"<span class="w-8 text-center text-primary">2</span>"#));
        assert!(html.contains(r#"data-delta="-1""#));
        assert_eq!(render_cart_total(&cart, Currency::USD), "$25.00");
    }
}
