//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::StorefrontError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One product-with-quantity entry.
///
/// The product fields are a snapshot taken when the line was created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub qty: u32,
}

impl CartLine {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity, in the reference currency.
    pub fn line_total(&self) -> Money {
        self.product.price * i64::from(self.qty)
    }
}

/// The shopping cart.
///
/// Holds at most one line per product id and never a line with a zero
/// quantity. Serialized as a bare list of lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from untrusted lines, e.g. ones read back from storage.
    ///
    /// Zero-quantity lines are dropped and duplicate ids are merged into the
    /// first occurrence.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Cart::new();
        for line in lines {
            if line.qty == 0 {
                continue;
            }
            match cart.lines.iter_mut().find(|l| l.id() == line.id()) {
                Some(existing) => existing.qty = existing.qty.saturating_add(line.qty),
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Add one unit of `product`.
    ///
    /// Returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id() == product.id) {
            existing.qty = existing.qty.saturating_add(1);
            return existing.qty;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            qty: 1,
        });
        1
    }

    /// Remove the line for `id`.
    pub fn remove(&mut self, id: ProductId) -> Result<CartLine, StorefrontError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.id() == id)
            .ok_or(StorefrontError::ItemNotInCart(id))?;
        Ok(self.lines.remove(index))
    }

    /// Adjust the quantity of the line for `id` by `delta`.
    ///
    /// A result of zero or less removes the line and returns `None`.
    pub fn update_qty(&mut self, id: ProductId, delta: i64) -> Result<Option<u32>, StorefrontError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or(StorefrontError::ItemNotInCart(id))?;

        let quantity = i64::from(line.qty).saturating_add(delta);
        if quantity <= 0 {
            self.remove(id)?;
            return Ok(None);
        }
        line.qty = u32::try_from(quantity).unwrap_or(u32::MAX);
        Ok(Some(line.qty))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * qty` in the reference currency.
    pub fn total(&self) -> Money {
        Money::sum(self.lines.iter().map(CartLine::line_total), Currency::REFERENCE)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0, |n, l| n.saturating_add(l.qty))
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Find the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
