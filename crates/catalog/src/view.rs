use crate::facet::{Facet, facets};
use crate::filter::{CatalogFilter, StatusPolicy, filter};
use crate::product::Product;

/// Per-session view state: the product list plus the user's transient
/// selections (search term, category, expanded product).
///
/// Each page/session owns its own instance; there is no shared or global
/// state. Selection is independent of filter state and never affects the
/// visible list.
#[derive(Debug, Clone)]
pub struct CatalogView {
    products: Vec<Product>,
    filter: CatalogFilter,
    selected: Option<i64>,
    facets: Vec<Facet>,
}

impl CatalogView {
    pub fn new(products: Vec<Product>) -> Self {
        let facets = facets(&products);
        Self {
            products,
            filter: CatalogFilter::default(),
            selected: None,
            facets,
        }
    }

    /// Replace the product list (a fresh fetch) and recompute facets.
    /// Filter and selection state are kept as-is.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.facets = facets(&products);
        self.products = products;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn set_status_policy(&mut self, policy: StatusPolicy) {
        self.filter.status = policy;
    }

    /// Expand a product's detail view, or collapse it with `None`.
    pub fn select_product(&mut self, id: Option<i64>) {
        self.selected = id;
    }

    /// The currently expanded product, if any.
    pub fn selected(&self) -> Option<&Product> {
        let id = self.selected?;
        self.products.iter().find(|p| p.id == id)
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    /// The visible subset under the current filter state.
    pub fn visible(&self) -> Vec<&Product> {
        filter(&self.products, &self.filter)
    }

    /// Facets for the full (unfiltered) list.
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }
}
