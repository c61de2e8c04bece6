//! Catalog query engine
//!
//! Read-only predicate scans over the product store. Every filter is a
//! linear pass returning matches in store iteration order; an empty match is
//! an empty vec, never an error. No indexes at this scale.

use crate::error::{CatalogError, CatalogResult};
use crate::models::{ModeOfSale, Product, ProductStatus};
use crate::store::ProductStore;

/// Does the product carry at least one of the requested keywords?
pub fn matches_any_keyword(product: &Product, keywords: &[String]) -> bool {
    keywords.iter().any(|k| product.keywords.contains(k))
}

/// Products carrying at least one of the requested keywords
pub fn by_keyword<'a>(products: &'a ProductStore, keywords: &[String]) -> Vec<&'a Product> {
    products
        .list()
        .filter(|p| matches_any_keyword(p, keywords))
        .collect()
}

/// Products whose brand is one of the requested brands
pub fn by_brand<'a>(products: &'a ProductStore, brands: &[String]) -> Vec<&'a Product> {
    products
        .list()
        .filter(|p| brands.iter().any(|b| p.brand == *b))
        .collect()
}

/// Products whose color is one of the requested colors
///
/// A product with no color never matches.
pub fn by_color<'a>(products: &'a ProductStore, colors: &[String]) -> Vec<&'a Product> {
    products
        .list()
        .filter(|p| match &p.color {
            Some(color) => colors.iter().any(|c| color == c),
            None => false,
        })
        .collect()
}

/// Products sold in exactly the given mode
pub fn by_mode(products: &ProductStore, mode: ModeOfSale) -> Vec<&Product> {
    products.list().filter(|p| p.mode_of_sale == mode).collect()
}

/// Products in exactly the given listing status
pub fn by_status(products: &ProductStore, status: ProductStatus) -> Vec<&Product> {
    products.list().filter(|p| p.status == status).collect()
}

/// Products sharing at least one field value with the given product
///
/// Shared means: same category, same brand, same (present) color, or at
/// least one common keyword. The product itself is always excluded, even
/// though trivially every one of its own fields matches.
pub fn similar_to<'a>(products: &'a ProductStore, sku: &str) -> CatalogResult<Vec<&'a Product>> {
    let target = products.get(sku).ok_or_else(|| CatalogError::ProductNotFound {
        sku: sku.to_string(),
    })?;

    Ok(products
        .list()
        .filter(|p| p.sku != target.sku && shares_field(p, target))
        .collect())
}

fn shares_field(a: &Product, b: &Product) -> bool {
    if a.category_id == b.category_id || a.brand == b.brand {
        return true;
    }
    if let (Some(x), Some(y)) = (&a.color, &b.color) {
        if x == y {
            return true;
        }
    }
    !a.keywords.is_disjoint(&b.keywords)
}
