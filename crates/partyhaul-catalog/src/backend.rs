//! The async seam to the catalog backend.

use crate::error::CatalogError;
use crate::page::ProductPage;
use crate::query::ProductQuery;
use async_trait::async_trait;
use partyhaul_commerce::catalog::{Brand, Category, Product};
use partyhaul_commerce::{CategoryId, ProductId};

/// The catalog read API.
///
/// The storefront treats the catalog as an opaque asynchronous data
/// source: filter by category identifier, case-insensitive substring
/// search on name, range pagination with an exact total count. Transport
/// and schema live behind this trait; implementations only surface
/// [`CatalogError`] on failure.
///
/// Inactive products and categories are invisible through every method.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Resolve a category slug to the category, if it exists and is active.
    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, CatalogError>;

    /// All active categories, in position order.
    async fn categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// All active brands, in position order, for the home-page brand grid.
    async fn brands(&self) -> Result<Vec<Brand>, CatalogError>;

    /// One page of products matching the query, with the exact total.
    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, CatalogError>;

    /// Look up a single product by slug for the product detail page.
    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, CatalogError>;

    /// Products related to the given one, preferring the same category.
    /// Never includes the product itself.
    async fn related_products(
        &self,
        product_id: &ProductId,
        category_id: Option<&CategoryId>,
        limit: i64,
    ) -> Result<Vec<Product>, CatalogError>;
}
