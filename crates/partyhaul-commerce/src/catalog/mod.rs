//! Product catalog module.
//!
//! Contains the read-only catalog entities as the storefront sees them:
//! products, categories and brands. They are owned by the catalog backend
//! and never mutated on this side.

mod brand;
mod category;
mod product;

pub use brand::Brand;
pub use category::Category;
pub use product::{Product, StockStatus};
