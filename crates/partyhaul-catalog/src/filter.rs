//! Collection page filter controls.

use partyhaul_commerce::Money;
use serde::{Deserialize, Serialize};

/// Sort options for the collection page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Server-provided order (catalog position).
    #[default]
    Recommended,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Name A-Z.
    Name,
}

impl SortKey {
    pub fn from_str(s: &str) -> Self {
        match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "name" => Self::Name,
            _ => Self::Recommended,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Name => "Name: A-Z",
        }
    }

    /// Whether this sort is applied locally to the loaded prefix rather
    /// than by the backend.
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Recommended)
    }
}

/// The active filter configuration of a collection page.
///
/// Replacing any field invalidates the accumulated listing and restarts
/// pagination from offset 0 (see [`crate::Listing::set_filter`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ListingFilter {
    /// Category slug, resolved to a category id per fetch.
    pub category_slug: Option<String>,
    /// Free-text search against product names (case-insensitive substring).
    pub search: Option<String>,
    /// Show out-of-stock products. Hidden by default.
    pub show_out_of_stock: bool,
    /// Sort order.
    pub sort: SortKey,
    /// Only products at or below this price.
    pub max_price: Option<Money>,
    /// Only featured products (home page carousel).
    pub featured_only: bool,
}

impl ListingFilter {
    /// Create the default filter: everything, recommended order,
    /// out-of-stock hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category slug.
    pub fn with_category_slug(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    /// Set the search string. An empty string clears the search.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.is_empty() { None } else { Some(search) };
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set whether out-of-stock products are shown.
    pub fn show_out_of_stock(mut self, show: bool) -> Self {
        self.show_out_of_stock = show;
        self
    }

    /// Only include products at or below the given price.
    pub fn with_max_price(mut self, max: Money) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Only include featured products.
    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_roundtrip() {
        for key in [
            SortKey::Recommended,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Name,
        ] {
            assert_eq!(SortKey::from_str(key.as_str()), key);
        }
        // Unknown keys fall back to the server order
        assert_eq!(SortKey::from_str("rating"), SortKey::Recommended);
    }

    #[test]
    fn test_only_recommended_is_server_side() {
        assert!(!SortKey::Recommended.is_local());
        assert!(SortKey::PriceLow.is_local());
        assert!(SortKey::PriceHigh.is_local());
        assert!(SortKey::Name.is_local());
    }

    #[test]
    fn test_builder() {
        let filter = ListingFilter::new()
            .with_category_slug("plush-toys")
            .with_search("bear")
            .with_sort(SortKey::PriceLow)
            .show_out_of_stock(true);

        assert_eq!(filter.category_slug.as_deref(), Some("plush-toys"));
        assert_eq!(filter.search.as_deref(), Some("bear"));
        assert_eq!(filter.sort, SortKey::PriceLow);
        assert!(filter.show_out_of_stock);
    }

    #[test]
    fn test_empty_search_clears() {
        let filter = ListingFilter::new().with_search("bear").with_search("");
        assert_eq!(filter.search, None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let filter = ListingFilter::new()
            .with_category_slug("plush-toys")
            .with_sort(SortKey::Name);

        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("\"name\""));
        let restored: ListingFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(filter, restored);
    }
}
