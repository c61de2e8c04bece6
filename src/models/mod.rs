//! Catalog record types
//!
//! Plain data: the category and product records the stores own, plus the
//! draft and patch structs used for creation and partial update. Referential
//! validation lives with the stores, not here.

pub mod category;
pub mod product;

pub use category::{Category, CategoryDraft, CategoryId, CategoryPatch, ParentPatch};
pub use product::{ModeOfSale, Product, ProductDraft, ProductPatch, ProductStatus, Sku};
