//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock availability of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Product is in stock.
    #[default]
    InStock,
    /// Product is running low.
    LowStock,
    /// Product is out of stock.
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in_stock" => Some(StockStatus::InStock),
            "low_stock" => Some(StockStatus::LowStock),
            "out_of_stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }

    /// Whether the product can be shown in a default listing.
    pub fn is_available(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

/// A product in the catalog.
///
/// Read-only from the storefront's perspective; the catalog backend owns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Display name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Unit price.
    pub price: Money,
    /// Pre-discount price, shown struck through when on sale.
    pub original_price: Option<Money>,
    /// Units per wholesale case.
    pub case_quantity: Option<i64>,
    /// Average customer rating (0.0-5.0).
    pub rating: f64,
    /// Number of customer reviews.
    pub review_count: i64,
    /// Primary image URL.
    pub image_url: String,
    /// Promotional badge text (e.g., "Best Seller").
    pub badge: Option<String>,
    /// Whether the product is on sale.
    pub is_sale: bool,
    /// Whether the product is featured on the home page.
    pub is_featured: bool,
    /// Stock availability.
    pub stock_status: StockStatus,
    /// Category this product belongs to.
    pub category_id: Option<CategoryId>,
    /// Category name (denormalized for display).
    pub category_name: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Server-side sort position within the catalog.
    pub position: i64,
    /// Whether the product is visible in the storefront at all.
    pub is_active: bool,
}

impl Product {
    /// Create a new active product with defaults for the optional fields.
    ///
    /// The slug doubles as the identifier until the backend assigns one.
    pub fn new(slug: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        let slug = slug.into();
        Self {
            id: ProductId::new(slug.clone()),
            sku: None,
            name: name.into(),
            slug,
            price,
            original_price: None,
            case_quantity: None,
            rating: 0.0,
            review_count: 0,
            image_url: String::new(),
            badge: None,
            is_sale: false,
            is_featured: false,
            stock_status: StockStatus::InStock,
            category_id: None,
            category_name: None,
            description: None,
            position: 0,
            is_active: true,
        }
    }

    /// Check if the product is on sale with a known original price.
    pub fn has_discount(&self) -> bool {
        self.original_price
            .map(|orig| orig > self.price)
            .unwrap_or(false)
    }

    /// Amount saved per unit versus the original price, if discounted.
    pub fn savings(&self) -> Option<Money> {
        let orig = self.original_price?;
        if orig > self.price {
            orig.try_subtract(&self.price)
        } else {
            None
        }
    }

    /// Check if the product is visible and purchasable.
    pub fn is_available(&self) -> bool {
        self.is_active && self.stock_status.is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_roundtrip() {
        for status in [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ] {
            assert_eq!(StockStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(StockStatus::from_str("backordered"), None);
    }

    #[test]
    fn test_savings() {
        let mut product = Product::new("plush-bear", "Plush Bear", Money::new(448));
        assert!(!product.has_discount());
        assert_eq!(product.savings(), None);

        product.original_price = Some(Money::new(599));
        assert!(product.has_discount());
        assert_eq!(product.savings(), Some(Money::new(151)));

        // Original price at or below current price is not a discount
        product.original_price = Some(Money::new(400));
        assert!(!product.has_discount());
    }

    #[test]
    fn test_availability() {
        let mut product = Product::new("plush-bear", "Plush Bear", Money::new(448));
        assert!(product.is_available());

        product.stock_status = StockStatus::LowStock;
        assert!(product.is_available());

        product.stock_status = StockStatus::OutOfStock;
        assert!(!product.is_available());
    }
}
