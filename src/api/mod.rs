//! REST API boundary
//!
//! The transport collaborator for the catalog core: shape-validates request
//! bodies (including the `-1` clear-parent wire sentinel) and maps the
//! core's typed outcomes to HTTP statuses. The core never depends on
//! anything in here.

mod routes;

pub use routes::{create_catalog_router, ApiError, SharedCatalog};
