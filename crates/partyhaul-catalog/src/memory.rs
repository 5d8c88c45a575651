//! In-memory catalog backend.

use crate::backend::CatalogBackend;
use crate::error::CatalogError;
use crate::page::ProductPage;
use crate::query::ProductQuery;
use async_trait::async_trait;
use partyhaul_commerce::catalog::{Brand, Category, Product};
use partyhaul_commerce::{CategoryId, ProductId};

/// A catalog backend over in-memory data.
///
/// Applies the same query semantics the remote backend does: active
/// rows only, category by id, case-insensitive substring search on
/// name, position ordering, range pagination with an exact total.
/// Backs the test suite and the static-catalog deployment variant.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog with products.
    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.extend(products);
        self
    }

    /// Seed the catalog with categories.
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Seed the catalog with brands.
    pub fn with_brands(mut self, brands: impl IntoIterator<Item = Brand>) -> Self {
        self.brands.extend(brands);
        self
    }

    fn matches(product: &Product, query: &ProductQuery) -> bool {
        if !product.is_active {
            return false;
        }
        if let Some(category_id) = &query.category_id {
            if product.category_id.as_ref() != Some(category_id) {
                return false;
            }
        }
        if let Some(search) = &query.search {
            if !product
                .name
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(max) = &query.max_price {
            if product.price > *max {
                return false;
            }
        }
        if query.featured_only && !product.is_featured {
            return false;
        }
        true
    }
}

#[async_trait]
impl CatalogBackend for MemoryCatalog {
    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, CatalogError> {
        Ok(self
            .categories
            .iter()
            .find(|c| c.is_active && c.slug == slug)
            .cloned())
    }

    async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        categories.sort_by_key(|c| c.position);
        Ok(categories)
    }

    async fn brands(&self) -> Result<Vec<Brand>, CatalogError> {
        let mut brands: Vec<Brand> = self
            .brands
            .iter()
            .filter(|b| b.is_active)
            .cloned()
            .collect();
        brands.sort_by_key(|b| b.position);
        Ok(brands)
    }

    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, CatalogError> {
        let mut matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| Self::matches(p, query))
            .collect();
        matching.sort_by_key(|p| p.position);

        let total = matching.len() as i64;
        let page: Vec<Product> = matching
            .into_iter()
            .skip(query.offset.max(0) as usize)
            .take(query.limit.max(0) as usize)
            .cloned()
            .collect();

        Ok(ProductPage::new(page, total))
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .find(|p| p.is_active && p.slug == slug)
            .cloned())
    }

    async fn related_products(
        &self,
        product_id: &ProductId,
        category_id: Option<&CategoryId>,
        limit: i64,
    ) -> Result<Vec<Product>, CatalogError> {
        let mut related: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.is_active && &p.id != product_id)
            .filter(|p| match category_id {
                Some(cat) => p.category_id.as_ref() == Some(cat),
                None => true,
            })
            .collect();
        related.sort_by_key(|p| p.position);

        Ok(related
            .into_iter()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}
