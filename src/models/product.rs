//! Product records
//!
//! A product always references an existing category and an existing tax
//! bracket; both references are validated by the product store at create and
//! update time.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CategoryId;
use crate::tax::TaxBracketId;

/// Product primary key (stock-keeping unit)
pub type Sku = String;

/// Where a product is offered for sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeOfSale {
    Online,
    Offline,
    Both,
}

/// Listing status of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Live,
    Draft,
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Draft
    }
}

/// A product record as owned by the product store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub category_id: CategoryId,
    pub keywords: BTreeSet<String>,
    pub brand: String,
    pub color: Option<String>,
    pub mode_of_sale: ModeOfSale,
    pub base_price: Decimal,
    pub tax_category_id: TaxBracketId,
    pub image_urls: Vec<String>,
    pub stock: u32,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a product; timestamps are store-assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub sku: Sku,
    pub name: String,
    pub category_id: CategoryId,
    #[serde(default)]
    pub keywords: BTreeSet<String>,
    pub brand: String,
    #[serde(default)]
    pub color: Option<String>,
    pub mode_of_sale: ModeOfSale,
    pub base_price: Decimal,
    pub tax_category_id: TaxBracketId,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub status: ProductStatus,
}

/// Partial update for a product
///
/// Supplied fields fully replace the stored values; `keywords` and
/// `image_urls` are replaced wholesale, never merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category_id: Option<CategoryId>,
    pub keywords: Option<BTreeSet<String>>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub mode_of_sale: Option<ModeOfSale>,
    pub base_price: Option<Decimal>,
    pub tax_category_id: Option<TaxBracketId>,
    pub image_urls: Option<Vec<String>>,
    pub stock: Option<u32>,
    pub status: Option<ProductStatus>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category_id.is_none()
            && self.keywords.is_none()
            && self.brand.is_none()
            && self.color.is_none()
            && self.mode_of_sale.is_none()
            && self.base_price.is_none()
            && self.tax_category_id.is_none()
            && self.image_urls.is_none()
            && self.stock.is_none()
            && self.status.is_none()
    }
}
