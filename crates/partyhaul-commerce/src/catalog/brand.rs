//! Brand types for the home-page brand grid.

use crate::ids::BrandId;
use serde::{Deserialize, Serialize};

/// A brand carried by the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// Brand name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Sort order position.
    pub position: i64,
    /// Whether the brand is visible in the storefront.
    pub is_active: bool,
}

impl Brand {
    /// Create a new active brand.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: BrandId::new(slug.clone()),
            name: name.into(),
            slug,
            logo_url: None,
            position: 0,
            is_active: true,
        }
    }
}
