//! Cart engine: the only writer of the cart.
//!
//! Every successful mutation persists the cart before returning its
//! [`Change`], so a caller cannot observe an unpersisted cart.

use serde::Serialize;
use storefront_cache::Storage;

use crate::change::Change;
use crate::error::StorefrontError;
use crate::i18n::Locale;
use crate::ids::ProductId;
use crate::money::Money;
use crate::state::StateKey;
use crate::store::Store;

/// Outcome of the simulated checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    /// Units purchased.
    pub items: u32,
    /// Total in the display currency at checkout time.
    pub total: Money,
}

impl Receipt {
    /// Confirmation text shown to the shopper.
    pub fn message(&self, locale: Locale) -> String {
        format!(
            "{}\n\n{}: {}\n{}: {}\n\n{}",
            locale.t("checkout.title"),
            locale.t("checkout.items"),
            self.items,
            locale.t("checkout.total"),
            self.total,
            locale.t("checkout.thanks"),
        )
    }
}

impl<S: Storage> Store<S> {
    /// Add one unit of a catalog product.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<Change, StorefrontError> {
        let product = self
            .state()
            .product(id)
            .cloned()
            .ok_or(StorefrontError::ProductNotFound(id))?;
        self.cart_mut().add(&product);
        Ok(self.commit_cart())
    }

    /// Remove a product's line.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<Change, StorefrontError> {
        self.cart_mut().remove(id)?;
        Ok(self.commit_cart())
    }

    /// Adjust a line's quantity; a result of zero or less removes it.
    pub fn update_cart_qty(&mut self, id: ProductId, delta: i64) -> Result<Change, StorefrontError> {
        self.cart_mut().update_qty(id, delta)?;
        Ok(self.commit_cart())
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> Change {
        self.cart_mut().clear();
        self.commit_cart()
    }

    /// Cart total in the reference currency.
    pub fn cart_total(&self) -> Money {
        self.state().cart.total()
    }

    /// Units in the cart.
    pub fn cart_item_count(&self) -> u32 {
        self.state().cart.item_count()
    }

    /// Simulate checkout: record a receipt, then empty and persist the cart.
    pub fn checkout(&mut self) -> Result<(Receipt, Change), StorefrontError> {
        if self.state().cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }
        let receipt = Receipt {
            items: self.cart_item_count(),
            total: self.cart_total().convert(self.state().currency),
        };
        let change = self.clear_cart();
        self.logger()
            .info_builder("checkout simulated")
            .field_i64("items", i64::from(receipt.items))
            .field("total", receipt.total.display())
            .emit();
        Ok((receipt, change))
    }

    fn commit_cart(&mut self) -> Change {
        self.persist(StateKey::Cart);
        StateKey::Cart.change()
    }
}
