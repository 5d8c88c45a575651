//! Shopping cart module.
//!
//! The cart is the single source of truth for the visitor's in-progress
//! order. All quantity math lives here so totals are never computed
//! inconsistently in multiple places.

mod cart;
mod summary;

pub use cart::{Cart, LineItem, FREE_SHIPPING_THRESHOLD, MAX_QUANTITY_PER_ITEM};
pub use summary::ProductSummary;
