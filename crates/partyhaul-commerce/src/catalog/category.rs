//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// URL-friendly slug (unique), used in collection page routes.
    pub slug: String,
    /// Category image URL.
    pub image_url: Option<String>,
    /// Sort order position.
    pub position: i64,
    /// Whether the category is visible in the storefront.
    pub is_active: bool,
}

impl Category {
    /// Create a new active category.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: CategoryId::new(slug.clone()),
            name: name.into(),
            slug,
            image_url: None,
            position: 0,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_is_id_by_default() {
        let cat = Category::new("plush-toys", "Plush Toys");
        assert_eq!(cat.id.as_str(), "plush-toys");
        assert_eq!(cat.slug, "plush-toys");
        assert!(cat.is_active);
    }
}
