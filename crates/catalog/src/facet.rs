use serde::Serialize;

use crate::filter::ALL_CATEGORIES;
use crate::product::Product;

/// A (category, count) pair used to render filter options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    #[serde(rename = "categoria")]
    pub category: String,
    pub count: usize,
}

/// Derive category facets from the full product list.
///
/// Distinct category values are collected in first-appearance order and
/// prepended with the "all categories" sentinel. Each count is the number of
/// products matching that facet under no other filter, so the sentinel's
/// count equals the total product count. Pure aggregation; recompute
/// whenever the list changes.
pub fn facets(products: &[Product]) -> Vec<Facet> {
    let mut facets = vec![Facet {
        category: ALL_CATEGORIES.to_string(),
        count: products.len(),
    }];

    for product in products {
        // Skip the sentinel at index 0; a literal "Todos" category stays a
        // facet of its own.
        match facets[1..].iter().position(|f| f.category == product.category) {
            Some(i) => facets[i + 1].count += 1,
            None => facets.push(Facet {
                category: product.category.clone(),
                count: 1,
            }),
        }
    }

    facets
}
