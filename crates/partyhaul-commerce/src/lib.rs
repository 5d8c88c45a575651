//! Storefront domain types and cart state for Partyhaul.
//!
//! This crate provides the domain layer of a wholesale toys/party-supplies
//! storefront:
//!
//! - **Catalog**: products, categories, brands and stock status
//! - **Cart**: the visitor's in-progress order, with derived totals
//! - **Money**: cents-based USD amounts with checked arithmetic
//!
//! # Example
//!
//! ```rust,ignore
//! use partyhaul_commerce::prelude::*;
//!
//! let plush = Product::new("bear-plush-12in", "12\" Plush Bear", Money::from_dollars(4.48));
//!
//! let mut cart = Cart::new();
//! cart.add(&plush, 3)?;
//!
//! assert_eq!(cart.total_items(), 3);
//! assert_eq!(cart.total_amount()?.to_string(), "$13.44");
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Brand, Category, Product, StockStatus};

    // Cart
    pub use crate::cart::{Cart, LineItem, ProductSummary, FREE_SHIPPING_THRESHOLD};
}
