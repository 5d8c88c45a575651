//! Composed catalog backend requests.

use crate::filter::ListingFilter;
use partyhaul_commerce::{CategoryId, Money};
use serde::{Deserialize, Serialize};

/// Default number of products per page on the collection page.
pub const DEFAULT_PAGE_SIZE: i64 = 24;

/// A well-formed product query against the catalog backend.
///
/// The backend filters by category identifier, never by slug: compose this
/// after slug resolution. Search and category constraints apply with
/// logical AND. Ordering is always the server's catalog position; display
/// sorts are applied locally by [`crate::Listing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Resolved category identifier.
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring match on product names.
    pub search: Option<String>,
    /// Only products at or below this price.
    pub max_price: Option<Money>,
    /// Only featured products.
    pub featured_only: bool,
    /// Range pagination offset.
    pub offset: i64,
    /// Maximum number of products to return.
    pub limit: i64,
}

impl ProductQuery {
    /// Compose a query from a filter snapshot and a resolved category id.
    pub fn compose(
        filter: &ListingFilter,
        category_id: Option<CategoryId>,
        offset: i64,
        limit: i64,
    ) -> Self {
        Self {
            category_id,
            search: filter.search.clone(),
            max_price: filter.max_price,
            featured_only: filter.featured_only,
            offset: offset.max(0),
            limit: limit.clamp(1, 100),
        }
    }

    /// A query for the featured-products carousel.
    pub fn featured(limit: i64) -> Self {
        Self {
            category_id: None,
            search: None,
            max_price: None,
            featured_only: true,
            offset: 0,
            limit: limit.clamp(1, 100),
        }
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category_id: None,
            search: None,
            max_price: None,
            featured_only: false,
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SortKey;

    #[test]
    fn test_compose_carries_filter_constraints() {
        let filter = ListingFilter::new()
            .with_category_slug("plush-toys")
            .with_search("bear")
            .with_sort(SortKey::PriceLow);

        let query = ProductQuery::compose(
            &filter,
            Some(CategoryId::new("cat-7")),
            24,
            DEFAULT_PAGE_SIZE,
        );

        // Category travels as an id, search as-is; sort stays local.
        assert_eq!(query.category_id, Some(CategoryId::new("cat-7")));
        assert_eq!(query.search.as_deref(), Some("bear"));
        assert_eq!(query.offset, 24);
        assert_eq!(query.limit, 24);
    }

    #[test]
    fn test_compose_clamps_bounds() {
        let query = ProductQuery::compose(&ListingFilter::new(), None, -5, 500);
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, 100);
    }
}
