use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Sentinel category that bypasses category matching.
pub const ALL_CATEGORIES: &str = "Todos";

/// Whether the visible list is restricted to active products.
///
/// The adapter never filters on status; this is a view policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    #[default]
    ActiveOnly,
    Any,
}

/// User-driven filter state: free-text search ANDed with an exact category
/// match (unless the sentinel is selected) ANDed with the status policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub category: String,
    pub status: StatusPolicy,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            status: StatusPolicy::default(),
        }
    }
}

impl CatalogFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_category(product) && self.matches_status(product)
    }

    /// Case-insensitive substring match against name, category, and tags.
    /// An empty search term matches everything.
    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product.category.to_lowercase().contains(&term)
            || product.tags.to_lowercase().contains(&term)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category == ALL_CATEGORIES || product.category == self.category
    }

    fn matches_status(&self, product: &Product) -> bool {
        match self.status {
            StatusPolicy::ActiveOnly => product.is_active(),
            StatusPolicy::Any => true,
        }
    }
}

/// The visible subset: a stateless, deterministic function of
/// (products, filter). Input order is preserved.
pub fn filter<'a>(products: &'a [Product], filter: &CatalogFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}
