//! Shopping cart module.
//!
//! Contains the cart and line types and the cart engine that mutates the
//! cart held by the store.

mod cart;
mod engine;

pub use cart::{Cart, CartLine};
pub use engine::Receipt;
