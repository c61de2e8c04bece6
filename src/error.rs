//! Error handling for the catalog core
//!
//! Every failure the core can produce is a typed, expected outcome: a lookup
//! miss or a referential-integrity rejection. There is no fatal error
//! category; the stores are left in their last consistent state whenever one
//! of these is returned.

use thiserror::Error;

use crate::models::{CategoryId, Sku};
use crate::tax::TaxBracketId;

/// Main error type for catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("category {id} does not exist")]
    CategoryNotFound { id: CategoryId },

    #[error("product {sku} does not exist")]
    ProductNotFound { sku: Sku },

    #[error("category {id} already exists")]
    DuplicateCategory { id: CategoryId },

    #[error("product {sku} already exists")]
    DuplicateSku { sku: Sku },

    #[error("parent category {parent_id} does not exist")]
    InvalidParent { parent_id: CategoryId },

    #[error("category {category_id} does not exist")]
    InvalidCategory { category_id: CategoryId },

    #[error("tax bracket {tax_category_id} does not exist")]
    InvalidTaxBracket { tax_category_id: TaxBracketId },
}

/// Result type alias for convenience
pub type CatalogResult<T> = Result<T, CatalogError>;
