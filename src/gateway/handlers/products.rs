//! Product catalog handlers. Reads are public; mutations are admin-gated.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::{Capability, Claims, Policy};
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult, StrictDecimal};
use crate::store::models::Product;
use crate::store::products::{ProductRepository, ProductUpdate};

/// New product request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Mechanical Keyboard")]
    pub name: String,
    pub description: Option<String>,
    /// Format validated by StrictDecimal
    #[schema(value_type = String, example = "89.99")]
    pub price: StrictDecimal,
    #[serde(default)]
    pub stock: i32,
    #[schema(example = "electronics")]
    pub category: String,
    pub image_url: Option<String>,
}

/// Partial product update request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub price: Option<StrictDecimal>,
    pub stock: Option<i32>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// List the catalog
///
/// GET /api/v1/products
#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "All products", body = ApiResponse<Vec<Product>>)
    ),
    tag = "Catalog"
)]
pub async fn list_products(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Product>> {
    let products = ProductRepository::list_all(state.db.pool())
        .await
        .map_err(ApiError::db_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success(products))))
}

/// Get one product
///
/// GET /api/v1/products/{product_id}
#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}",
    params(("product_id" = i64, Path, description = "Product to fetch")),
    responses(
        (status = 200, description = "Product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
) -> ApiResult<Product> {
    let product = ProductRepository::get_by_id(state.db.pool(), product_id)
        .await
        .map_err(ApiError::db_error)?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(product))))
}

/// Create a product
///
/// POST /api/v1/products
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<i64>),
        (status = 400, description = "Missing name, price or category"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_jwt" = [])),
    tag = "Catalog"
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<i64> {
    Policy::require(state.db.pool(), claims.user_id(), Capability::ManageProducts)
        .await
        .map_err(ApiError::from)?;

    if req.name.trim().is_empty() || req.category.trim().is_empty() {
        return Err(ApiError::bad_request("Name and category are required").into());
    }
    if req.stock < 0 {
        return Err(ApiError::bad_request("Stock cannot be negative").into());
    }

    let product_id = ProductRepository::create(
        state.db.pool(),
        &req.name,
        req.description.as_deref(),
        req.price.inner(),
        req.stock,
        &req.category,
        req.image_url.as_deref(),
    )
    .await
    .map_err(ApiError::db_error)?;

    tracing::info!(product_id, actor = claims.user_id(), "product created");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(product_id))))
}

/// Update a product
///
/// PUT /api/v1/products/{product_id}
#[utoipa::path(
    put,
    path = "/api/v1/products/{product_id}",
    params(("product_id" = i64, Path, description = "Product to update")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Catalog"
)]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i64>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<()> {
    Policy::require(state.db.pool(), claims.user_id(), Capability::ManageProducts)
        .await
        .map_err(ApiError::from)?;

    if let Some(stock) = req.stock {
        if stock < 0 {
            return Err(ApiError::bad_request("Stock cannot be negative").into());
        }
    }

    let updated = ProductRepository::update(
        state.db.pool(),
        product_id,
        ProductUpdate {
            name: req.name,
            description: req.description,
            price: req.price.map(|p| p.inner()),
            stock: req.stock,
            category: req.category,
            image_url: req.image_url,
        },
    )
    .await
    .map_err(ApiError::db_error)?;

    if !updated {
        return Err(ApiError::not_found("Product not found").into());
    }

    Ok((StatusCode::OK, Json(ApiResponse::success(()))))
}

/// Delete a product
///
/// DELETE /api/v1/products/{product_id}
#[utoipa::path(
    delete,
    path = "/api/v1/products/{product_id}",
    params(("product_id" = i64, Path, description = "Product to delete")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Catalog"
)]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i64>,
) -> ApiResult<()> {
    Policy::require(state.db.pool(), claims.user_id(), Capability::ManageProducts)
        .await
        .map_err(ApiError::from)?;

    let deleted = ProductRepository::delete(state.db.pool(), product_id)
        .await
        .map_err(ApiError::db_error)?;

    if !deleted {
        return Err(ApiError::not_found("Product not found").into());
    }

    tracing::info!(product_id, actor = claims.user_id(), "product deleted");
    Ok((StatusCode::OK, Json(ApiResponse::success(()))))
}
