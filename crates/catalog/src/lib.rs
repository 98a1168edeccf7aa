//! Catalog domain module.
//!
//! This crate contains the storefront's pure view logic — the product value
//! object, filter/search predicates, facet aggregation, per-session view
//! state, and the inquiry deep link — with no IO, no HTTP, no storage.

pub mod facet;
pub mod filter;
pub mod inquiry;
pub mod product;
pub mod view;

pub use facet::{Facet, facets};
pub use filter::{ALL_CATEGORIES, CatalogFilter, StatusPolicy, filter};
pub use inquiry::{InquiryConfig, inquiry_link};
pub use product::Product;
pub use view::CatalogView;
