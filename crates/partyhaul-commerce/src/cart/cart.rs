//! Cart state container and line item types.

use crate::cart::ProductSummary;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// Order total at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::new(25_000);

/// The visitor's in-progress order.
///
/// Line items are keyed by product identifier: adding a product that is
/// already present increments its quantity instead of creating a second
/// line. Insertion order is preserved for display. Items are private so
/// every mutation goes through the operations below, keeping the derived
/// totals trustworthy.
///
/// The cart lives for one browsing session; it is never persisted server
/// side. It serializes cleanly so a session layer can stash it if needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a product to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented by `quantity`; otherwise a new line is appended.
    ///
    /// Returns an error if:
    /// - Quantity is not positive (`InvalidQuantity`; rejected, not clamped)
    /// - The resulting quantity would exceed MAX_QUANTITY_PER_ITEM
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(LineItem {
            product: ProductSummary::from(product),
            quantity,
        });
        Ok(())
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: &Product) -> Result<(), CommerceError> {
        self.add(product, 1)
    }

    /// Set a line item's quantity.
    ///
    /// A quantity of zero or less removes the line. An unknown product id
    /// is a silent no-op, not an error: the caller may hold a stale
    /// reference to a line that was already removed.
    ///
    /// Returns whether a line was updated or removed.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove(product_id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = quantity;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line item. No-op if the product is not in the cart.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Remove all line items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total unit count (sum of quantities across lines).
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total monetary amount (sum of price x quantity per line).
    ///
    /// Recomputed from the lines on every call, never cached.
    pub fn total_amount(&self) -> Result<Money, CommerceError> {
        let line_totals = self
            .items
            .iter()
            .map(|item| item.line_total().ok_or(CommerceError::Overflow))
            .collect::<Result<Vec<Money>, CommerceError>>()?;
        Money::try_sum(line_totals.iter()).ok_or(CommerceError::Overflow)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current quantity of a product, if present.
    pub fn quantity_of(&self, product_id: &ProductId) -> Option<i64> {
        self.items
            .iter()
            .find(|i| &i.product.id == product_id)
            .map(|i| i.quantity)
    }

    /// Whether the order total qualifies for free shipping.
    pub fn qualifies_for_free_shipping(&self) -> Result<bool, CommerceError> {
        Ok(self.total_amount()? >= FREE_SHIPPING_THRESHOLD)
    }

    /// Amount still needed to reach free shipping. Zero once qualified.
    pub fn remaining_for_free_shipping(&self) -> Result<Money, CommerceError> {
        let total = self.total_amount()?;
        if total >= FREE_SHIPPING_THRESHOLD {
            Ok(Money::zero())
        } else {
            FREE_SHIPPING_THRESHOLD
                .try_subtract(&total)
                .ok_or(CommerceError::Overflow)
        }
    }
}

/// A line item in the cart: one product and its quantity.
///
/// Quantity is always at least 1; a line that would drop to zero is
/// removed from the cart instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Snapshot of the product being purchased.
    pub product: ProductSummary,
    /// Quantity (>= 1).
    pub quantity: i64,
}

impl LineItem {
    /// Line total (unit price x quantity), None on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.product.unit_price.try_multiply(self.quantity)
    }
}
