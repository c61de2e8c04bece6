//! Catalog REST routes
//!
//! One router over a shared catalog. Handlers stay thin: decode the wire
//! shape, take the lock, call the facade, encode the result. Outcome
//! mapping: `*NotFound` → 404, `Duplicate*` → 409, referential-integrity
//! rejections → 422, malformed wire values → 400.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::{
    Category, CategoryDraft, CategoryId, CategoryPatch, ModeOfSale, ParentPatch, Product,
    ProductDraft, ProductPatch, ProductStatus,
};
use crate::query;
use crate::taxonomy::CascadeOutcome;

/// Shared, writer-serialized catalog state
pub type SharedCatalog = Arc<RwLock<Catalog>>;

// ============================================================================
// Error mapping
// ============================================================================

/// Transport-level error: an HTTP status plus a message body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let status = match &err {
            CatalogError::CategoryNotFound { .. } | CatalogError::ProductNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            CatalogError::DuplicateCategory { .. } | CatalogError::DuplicateSku { .. } => {
                StatusCode::CONFLICT
            }
            CatalogError::InvalidParent { .. }
            | CatalogError::InvalidCategory { .. }
            | CatalogError::InvalidTaxBracket { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Category creation body; `parent_id: -1` (or absent) means root
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl CreateCategoryRequest {
    fn into_draft(self) -> Result<CategoryDraft, ApiError> {
        let parent_id = match self.parent_id {
            None | Some(-1) => None,
            Some(raw) => Some(checked_category_id(raw)?),
        };
        Ok(CategoryDraft {
            id: self.id,
            name: self.name,
            parent_id,
        })
    }
}

/// Category patch body; `parent_id: -1` clears the parent
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub parent_id: Option<i64>,
}

impl UpdateCategoryRequest {
    fn into_patch(self) -> Result<CategoryPatch, ApiError> {
        let parent = match self.parent_id {
            None => None,
            Some(-1) => Some(ParentPatch::Clear),
            Some(raw) => Some(ParentPatch::Set(checked_category_id(raw)?)),
        };
        Ok(CategoryPatch {
            name: self.name,
            parent,
        })
    }
}

fn checked_category_id(raw: i64) -> Result<CategoryId, ApiError> {
    CategoryId::try_from(raw)
        .map_err(|_| ApiError::bad_request(format!("invalid category id {raw}")))
}

/// Optional product filters, applied as a conjunction
#[derive(Debug, Default, Deserialize)]
pub struct ProductFilterParams {
    pub keyword: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub mode: Option<ModeOfSale>,
    pub status: Option<ProductStatus>,
}

impl ProductFilterParams {
    fn matches(&self, product: &Product) -> bool {
        if let Some(keyword) = &self.keyword {
            if !query::matches_any_keyword(product, std::slice::from_ref(keyword)) {
                return false;
            }
        }
        if let Some(brand) = &self.brand {
            if product.brand != *brand {
                return false;
            }
        }
        if let Some(color) = &self.color {
            if product.color.as_deref() != Some(color.as_str()) {
                return false;
            }
        }
        if let Some(mode) = self.mode {
            if product.mode_of_sale != mode {
                return false;
            }
        }
        if let Some(status) = self.status {
            if product.status != status {
                return false;
            }
        }
        true
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_catalog_router(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/:id",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
        .route("/api/categories/:id/children", get(category_children))
        .route("/api/categories/:id/products", get(category_products))
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/:sku",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route("/api/products/:sku/similar", get(similar_products))
        .with_state(catalog)
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "product-catalog" }))
}

async fn list_categories(State(catalog): State<SharedCatalog>) -> Json<Vec<Category>> {
    let catalog = catalog.read().await;
    Json(catalog.categories().cloned().collect())
}

async fn create_category(
    State(catalog): State<SharedCatalog>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let draft = req.into_draft()?;
    let mut catalog = catalog.write().await;
    let category = catalog.create_category(draft)?.clone();
    Ok((StatusCode::CREATED, Json(category)))
}

async fn get_category(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Category>, ApiError> {
    let catalog = catalog.read().await;
    let category = catalog
        .category(id)
        .ok_or(CatalogError::CategoryNotFound { id })?
        .clone();
    Ok(Json(category))
}

async fn update_category(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<CategoryId>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let patch = req.into_patch()?;
    let mut catalog = catalog.write().await;
    let category = catalog.update_category(id, patch)?.clone();
    Ok(Json(category))
}

async fn delete_category(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<CategoryId>,
) -> Result<Json<CascadeOutcome>, ApiError> {
    let mut catalog = catalog.write().await;
    let outcome = catalog.delete_category_cascade(id)?;
    Ok(Json(outcome))
}

async fn category_children(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let catalog = catalog.read().await;
    let children = catalog.sub_categories(id)?.into_iter().cloned().collect();
    Ok(Json(children))
}

async fn category_products(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let catalog = catalog.read().await;
    let products = catalog
        .products_in_category(id)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(products))
}

async fn list_products(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<ProductFilterParams>,
) -> Json<Vec<Product>> {
    let catalog = catalog.read().await;
    Json(
        catalog
            .products()
            .filter(|p| params.matches(p))
            .cloned()
            .collect(),
    )
}

async fn create_product(
    State(catalog): State<SharedCatalog>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let mut catalog = catalog.write().await;
    let product = catalog.create_product(draft)?.clone();
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(
    State(catalog): State<SharedCatalog>,
    Path(sku): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let catalog = catalog.read().await;
    let product = catalog
        .product(&sku)
        .ok_or(CatalogError::ProductNotFound { sku: sku.clone() })?
        .clone();
    Ok(Json(product))
}

async fn update_product(
    State(catalog): State<SharedCatalog>,
    Path(sku): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    let mut catalog = catalog.write().await;
    let product = catalog.update_product(&sku, patch)?.clone();
    Ok(Json(product))
}

async fn delete_product(
    State(catalog): State<SharedCatalog>,
    Path(sku): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let mut catalog = catalog.write().await;
    let removed = catalog.delete_product(&sku)?;
    Ok(Json(removed))
}

async fn similar_products(
    State(catalog): State<SharedCatalog>,
    Path(sku): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let catalog = catalog.read().await;
    let similar = catalog.similar_products(&sku)?.into_iter().cloned().collect();
    Ok(Json(similar))
}
