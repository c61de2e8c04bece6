//! Product catalog management core
//!
//! In-memory CRUD over categories and products plus catalog search. The
//! interesting part is the category tree: categories form a parent/child
//! hierarchy, and deleting one cascades over every descendant category and
//! every product assigned to any of them.
//!
//! ## Quick Start
//!
//! ```rust
//! use product_catalog::{Catalog, CategoryDraft, TaxBracketTable};
//!
//! let mut catalog = Catalog::new(TaxBracketTable::standard());
//! catalog
//!     .create_category(CategoryDraft {
//!         id: 1,
//!         name: "Electronics".to_string(),
//!         parent_id: None,
//!     })
//!     .expect("fresh catalog");
//! assert!(catalog.category(1).is_some());
//! ```
//!
//! All state lives in the [`Catalog`] facade; there is no persistence layer.
//! The optional REST boundary (feature `server`) wraps a shared catalog in
//! an `Arc<RwLock<_>>` and maps the typed outcomes to HTTP statuses.

// Core error handling
pub mod error;

// Record types
pub mod models;

// Static tax bracket lookup
pub mod tax;

// Owned in-memory stores
pub mod store;

// Tree traversal and cascading delete
pub mod taxonomy;

// Read-only predicate scans
pub mod query;

// Mutation audit log
pub mod audit;

// The facade everything external talks to
pub mod catalog;

// REST API boundary (when enabled)
#[cfg(feature = "server")]
pub mod api;

// Public re-exports for the common path
pub use audit::{AuditEntry, AuditLog, AuditOperation, EntityKind};
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use models::{
    Category, CategoryDraft, CategoryId, CategoryPatch, ModeOfSale, ParentPatch, Product,
    ProductDraft, ProductPatch, ProductStatus, Sku,
};
pub use store::{CategoryStore, ProductStore};
pub use tax::{TaxBracketId, TaxBracketTable};
pub use taxonomy::{children, descendants, CascadeOutcome};
