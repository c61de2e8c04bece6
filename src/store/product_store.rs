//! Product store
//!
//! Owns every product record, keyed by SKU. Foreign keys (`category_id`,
//! `tax_category_id`) are checked against the category store and tax table
//! before any field is written; whatever the update payload supplies is
//! re-validated even when it equals the stored value.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CategoryId, Product, ProductDraft, ProductPatch, Sku};
use crate::store::CategoryStore;
use crate::tax::TaxBracketTable;

#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    items: BTreeMap<Sku, Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.items.get(sku)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.items.contains_key(sku)
    }

    /// Create a product, validating SKU uniqueness and both foreign keys
    pub fn create(
        &mut self,
        draft: ProductDraft,
        categories: &CategoryStore,
        tax: &TaxBracketTable,
    ) -> CatalogResult<&Product> {
        if self.items.contains_key(&draft.sku) {
            return Err(CatalogError::DuplicateSku { sku: draft.sku });
        }
        if !categories.contains(draft.category_id) {
            return Err(CatalogError::InvalidCategory {
                category_id: draft.category_id,
            });
        }
        if !tax.contains(draft.tax_category_id) {
            return Err(CatalogError::InvalidTaxBracket {
                tax_category_id: draft.tax_category_id,
            });
        }

        let now = Utc::now();
        let product = Product {
            sku: draft.sku,
            name: draft.name,
            category_id: draft.category_id,
            keywords: draft.keywords,
            brand: draft.brand,
            color: draft.color,
            mode_of_sale: draft.mode_of_sale,
            base_price: draft.base_price,
            tax_category_id: draft.tax_category_id,
            image_urls: draft.image_urls,
            stock: draft.stock,
            status: draft.status,
            created_at: now,
            updated_at: now,
        };
        let sku = product.sku.clone();
        Ok(self.items.entry(sku).or_insert(product))
    }

    /// Apply a partial update atomically
    ///
    /// Supplied foreign keys are validated first; on any rejection the stored
    /// record keeps every prior field value. Structured fields (`keywords`,
    /// `image_urls`) are fully replaced, not merged.
    pub fn update(
        &mut self,
        sku: &str,
        patch: ProductPatch,
        categories: &CategoryStore,
        tax: &TaxBracketTable,
    ) -> CatalogResult<&Product> {
        if !self.items.contains_key(sku) {
            return Err(CatalogError::ProductNotFound {
                sku: sku.to_string(),
            });
        }
        if let Some(category_id) = patch.category_id {
            if !categories.contains(category_id) {
                return Err(CatalogError::InvalidCategory { category_id });
            }
        }
        if let Some(tax_category_id) = patch.tax_category_id {
            if !tax.contains(tax_category_id) {
                return Err(CatalogError::InvalidTaxBracket { tax_category_id });
            }
        }

        let product = self
            .items
            .get_mut(sku)
            .ok_or_else(|| CatalogError::ProductNotFound {
                sku: sku.to_string(),
            })?;
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(category_id) = patch.category_id {
            product.category_id = category_id;
        }
        if let Some(keywords) = patch.keywords {
            product.keywords = keywords;
        }
        if let Some(brand) = patch.brand {
            product.brand = brand;
        }
        if let Some(color) = patch.color {
            product.color = Some(color);
        }
        if let Some(mode_of_sale) = patch.mode_of_sale {
            product.mode_of_sale = mode_of_sale;
        }
        if let Some(base_price) = patch.base_price {
            product.base_price = base_price;
        }
        if let Some(tax_category_id) = patch.tax_category_id {
            product.tax_category_id = tax_category_id;
        }
        if let Some(image_urls) = patch.image_urls {
            product.image_urls = image_urls;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(status) = patch.status {
            product.status = status;
        }
        product.updated_at = Utc::now();
        Ok(product)
    }

    /// Remove a single record and return it
    pub fn delete(&mut self, sku: &str) -> CatalogResult<Product> {
        self.items
            .remove(sku)
            .ok_or_else(|| CatalogError::ProductNotFound {
                sku: sku.to_string(),
            })
    }

    pub fn list(&self) -> impl Iterator<Item = &Product> {
        self.items.values()
    }

    pub fn list_by_category(&self, category_id: CategoryId) -> Vec<&Product> {
        self.items
            .values()
            .filter(|p| p.category_id == category_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
