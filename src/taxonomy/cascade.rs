//! Cascading category delete
//!
//! The one operation that spans both stores. The doomed set (the target plus
//! every descendant) is computed up front against a snapshot of the tree;
//! products assigned to that set are removed first, then the categories
//! themselves. Callers hold `&mut` over both stores for the whole call, so
//! no reader can observe a product pointing at a deleted category.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CategoryId, Sku};
use crate::store::{CategoryStore, ProductStore};
use crate::taxonomy::traversal;

/// What a cascade removed, for observability and auditing
///
/// `deleted_categories` lists the target first, then its descendants in BFS
/// order; `deleted_products` is in store iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeOutcome {
    pub deleted_categories: Vec<CategoryId>,
    pub deleted_products: Vec<Sku>,
}

/// Delete `id` and its whole subtree, plus every product assigned to it
pub fn cascade_delete(
    categories: &mut CategoryStore,
    products: &mut ProductStore,
    id: CategoryId,
) -> CatalogResult<CascadeOutcome> {
    if !categories.contains(id) {
        return Err(CatalogError::CategoryNotFound { id });
    }

    let mut doomed_order = vec![id];
    doomed_order.extend(traversal::descendants(categories, id));
    let doomed: BTreeSet<CategoryId> = doomed_order.iter().copied().collect();

    // Products first, categories second: the doomed set is already fixed, so
    // the relative order only matters for reasoning about partial progress.
    let doomed_skus: Vec<Sku> = products
        .list()
        .filter(|p| doomed.contains(&p.category_id))
        .map(|p| p.sku.clone())
        .collect();
    let mut deleted_products = Vec::with_capacity(doomed_skus.len());
    for sku in doomed_skus {
        if products.delete(&sku).is_ok() {
            deleted_products.push(sku);
        }
    }

    let mut deleted_categories = Vec::with_capacity(doomed_order.len());
    for category_id in doomed_order {
        if categories.delete(category_id).is_ok() {
            deleted_categories.push(category_id);
        }
    }

    Ok(CascadeOutcome {
        deleted_categories,
        deleted_products,
    })
}
