//! Fetched result pages.

use partyhaul_commerce::catalog::Product;
use serde::{Deserialize, Serialize};

/// One page of query results plus the server-reported total match count.
///
/// The total is exact for the query that produced the page, so the
/// listing can tell when its accumulated prefix is complete.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductPage {
    /// Products in this page, in server order.
    pub products: Vec<Product>,
    /// Total number of products matching the query.
    pub total: i64,
}

impl ProductPage {
    /// Create a page.
    pub fn new(products: Vec<Product>, total: i64) -> Self {
        Self { products, total }
    }

    /// An empty result set (e.g., unknown category slug).
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            total: 0,
        }
    }

    /// Number of products in this page.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if this page carries no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
