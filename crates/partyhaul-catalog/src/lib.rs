//! Catalog listing and query composition for Partyhaul.
//!
//! This crate turns the collection page's filter/sort/pagination controls
//! into well-formed requests against the catalog backend and assembles the
//! returned pages into one growing, displayable list:
//!
//! - **Filter**: category, search, stock visibility, sort key
//! - **Query**: the composed backend request (category by id, offset/limit)
//! - **Listing**: accumulated pages with a stale-fetch guard
//! - **Backend**: the async seam to the remote catalog, plus an in-memory
//!   implementation for tests and local data
//!
//! # Example
//!
//! ```rust,ignore
//! use partyhaul_catalog::prelude::*;
//!
//! let mut listing = Listing::new();
//! listing.set_filter(
//!     ListingFilter::new()
//!         .with_category_slug("plush-toys")
//!         .with_search("bear")
//!         .with_sort(SortKey::PriceLow),
//! );
//!
//! while listing.has_more() {
//!     listing.load_more(&backend).await?;
//! }
//!
//! for product in listing.visible_products() {
//!     println!("{} {}", product.name, product.price);
//! }
//! ```

pub mod backend;
pub mod error;
pub mod filter;
pub mod listing;
pub mod memory;
pub mod page;
pub mod query;

pub use backend::CatalogBackend;
pub use error::CatalogError;
pub use filter::{ListingFilter, SortKey};
pub use listing::{fetch_page, Listing, ListingPhase, LoadOutcome, PageSnapshot};
pub use memory::MemoryCatalog;
pub use page::ProductPage;
pub use query::{ProductQuery, DEFAULT_PAGE_SIZE};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::backend::CatalogBackend;
    pub use crate::error::CatalogError;
    pub use crate::filter::{ListingFilter, SortKey};
    pub use crate::listing::{fetch_page, Listing, ListingPhase, LoadOutcome, PageSnapshot};
    pub use crate::memory::MemoryCatalog;
    pub use crate::page::ProductPage;
    pub use crate::query::{ProductQuery, DEFAULT_PAGE_SIZE};
}
