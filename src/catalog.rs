//! Catalog facade
//!
//! The single entry point external callers use. Owns both stores, the tax
//! table, and the audit log; every mutation goes through `&mut self`, which
//! serializes writers and keeps the cascade's snapshot-then-mutate sequence
//! free of interleaving by construction.

use tracing::info;

use crate::audit::{AuditLog, AuditOperation, EntityKind};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    Category, CategoryDraft, CategoryId, CategoryPatch, ModeOfSale, Product, ProductDraft,
    ProductPatch, ProductStatus,
};
use crate::query;
use crate::store::{CategoryStore, ProductStore};
use crate::tax::TaxBracketTable;
use crate::taxonomy::{self, CascadeOutcome};

pub struct Catalog {
    categories: CategoryStore,
    products: ProductStore,
    tax: TaxBracketTable,
    audit: AuditLog,
}

impl Catalog {
    /// Build an empty catalog around a fixed tax bracket table
    pub fn new(tax: TaxBracketTable) -> Self {
        Self {
            categories: CategoryStore::new(),
            products: ProductStore::new(),
            tax,
            audit: AuditLog::new(),
        }
    }

    // ========================================================================
    // Categories
    // ========================================================================

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.list()
    }

    pub fn create_category(&mut self, draft: CategoryDraft) -> CatalogResult<&Category> {
        let category = self.categories.create(draft)?;
        info!(category_id = category.id, "category created");
        let summary = format!("create category {} ({})", category.name, category.id);
        self.audit.record(
            AuditOperation::Create,
            EntityKind::Category,
            category.id.to_string(),
            summary,
        );
        Ok(category)
    }

    pub fn update_category(
        &mut self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> CatalogResult<&Category> {
        let category = self.categories.update(id, patch)?;
        info!(category_id = id, "category updated");
        self.audit.record(
            AuditOperation::Update,
            EntityKind::Category,
            id.to_string(),
            format!("update category {id}"),
        );
        Ok(category)
    }

    /// Delete a category together with all descendant categories and every
    /// product assigned to any of them
    pub fn delete_category_cascade(&mut self, id: CategoryId) -> CatalogResult<CascadeOutcome> {
        let outcome = taxonomy::cascade_delete(&mut self.categories, &mut self.products, id)?;
        info!(
            category_id = id,
            categories = outcome.deleted_categories.len(),
            products = outcome.deleted_products.len(),
            "category cascade deleted"
        );
        self.audit.record(
            AuditOperation::CascadeDelete,
            EntityKind::Category,
            id.to_string(),
            format!(
                "cascade delete category {} ({} categories, {} products)",
                id,
                outcome.deleted_categories.len(),
                outcome.deleted_products.len()
            ),
        );
        Ok(outcome)
    }

    /// Top-level categories (no parent)
    pub fn root_categories(&self) -> Vec<&Category> {
        taxonomy::children(&self.categories, None)
            .into_iter()
            .filter_map(|id| self.categories.get(id))
            .collect()
    }

    /// Direct children of a category
    pub fn sub_categories(&self, id: CategoryId) -> CatalogResult<Vec<&Category>> {
        if !self.categories.contains(id) {
            return Err(CatalogError::CategoryNotFound { id });
        }
        Ok(taxonomy::children(&self.categories, Some(id))
            .into_iter()
            .filter_map(|child| self.categories.get(child))
            .collect())
    }

    // ========================================================================
    // Products
    // ========================================================================

    pub fn product(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.list()
    }

    pub fn create_product(&mut self, draft: ProductDraft) -> CatalogResult<&Product> {
        let product = self.products.create(draft, &self.categories, &self.tax)?;
        info!(sku = %product.sku, "product created");
        let summary = format!("create product {} ({})", product.name, product.sku);
        let sku = product.sku.clone();
        self.audit
            .record(AuditOperation::Create, EntityKind::Product, sku, summary);
        Ok(product)
    }

    pub fn update_product(&mut self, sku: &str, patch: ProductPatch) -> CatalogResult<&Product> {
        let product = self
            .products
            .update(sku, patch, &self.categories, &self.tax)?;
        info!(sku = %product.sku, "product updated");
        self.audit.record(
            AuditOperation::Update,
            EntityKind::Product,
            sku.to_string(),
            format!("update product {sku}"),
        );
        Ok(product)
    }

    pub fn delete_product(&mut self, sku: &str) -> CatalogResult<Product> {
        let removed = self.products.delete(sku)?;
        info!(sku = %removed.sku, "product deleted");
        self.audit.record(
            AuditOperation::Delete,
            EntityKind::Product,
            removed.sku.clone(),
            format!("delete product {}", removed.sku),
        );
        Ok(removed)
    }

    /// Products assigned directly to a category (not its descendants)
    pub fn products_in_category(&self, id: CategoryId) -> CatalogResult<Vec<&Product>> {
        if !self.categories.contains(id) {
            return Err(CatalogError::CategoryNotFound { id });
        }
        Ok(self.products.list_by_category(id))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn products_by_keyword(&self, keywords: &[String]) -> Vec<&Product> {
        query::by_keyword(&self.products, keywords)
    }

    pub fn products_by_brand(&self, brands: &[String]) -> Vec<&Product> {
        query::by_brand(&self.products, brands)
    }

    pub fn products_by_color(&self, colors: &[String]) -> Vec<&Product> {
        query::by_color(&self.products, colors)
    }

    pub fn products_by_mode(&self, mode: ModeOfSale) -> Vec<&Product> {
        query::by_mode(&self.products, mode)
    }

    pub fn products_by_status(&self, status: ProductStatus) -> Vec<&Product> {
        query::by_status(&self.products, status)
    }

    pub fn similar_products(&self, sku: &str) -> CatalogResult<Vec<&Product>> {
        query::similar_to(&self.products, sku)
    }

    // ========================================================================
    // Tax table and audit
    // ========================================================================

    pub fn tax_table(&self) -> &TaxBracketTable {
        &self.tax
    }

    pub fn audit_log(&self) -> &[crate::audit::AuditEntry] {
        self.audit.entries()
    }
}
