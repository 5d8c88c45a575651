//! Product snapshot carried by cart line items.

use crate::catalog::{Product, StockStatus};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The slice of a product a cart line needs for display and pricing.
///
/// Denormalized at add time so the cart stays renderable even if the
/// catalog entry changes or drops out of the loaded listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSummary {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Pre-discount price, if on sale.
    pub original_price: Option<Money>,
    /// Units per wholesale case.
    pub case_quantity: Option<i64>,
    /// Primary image URL.
    pub image_url: String,
    /// Stock availability at add time.
    pub stock_status: StockStatus,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            slug: product.slug.clone(),
            unit_price: product.price,
            original_price: product.original_price,
            case_quantity: product.case_quantity,
            image_url: product.image_url.clone(),
            stock_status: product.stock_status,
        }
    }
}
