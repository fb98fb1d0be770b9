//! Cart handlers; every route is scoped to the authenticated user.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::Claims;
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult};
use crate::store::cart::{CartLineView, CartRepository};
use crate::store::products::ProductRepository;

/// Add-to-cart request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: i64,
    /// Merged into an existing line for the same product
    #[schema(example = 1, minimum = 1)]
    pub quantity: i32,
}

/// Quantity update request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// Zero or below removes the line
    pub quantity: i32,
}

/// List the cart
///
/// GET /api/v1/cart
#[utoipa::path(
    get,
    path = "/api/v1/cart",
    responses(
        (status = 200, description = "Cart contents", body = ApiResponse<Vec<CartLineView>>)
    ),
    security(("bearer_jwt" = [])),
    tag = "Cart"
)]
pub async fn list_cart(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Vec<CartLineView>> {
    let lines = CartRepository::list_for_user(state.db.pool(), claims.user_id())
        .await
        .map_err(ApiError::db_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success(lines))))
}

/// Add a product to the cart
///
/// POST /api/v1/cart/add
#[utoipa::path(
    post,
    path = "/api/v1/cart/add",
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Line added or merged"),
        (status = 400, description = "Quantity must be at least 1"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AddToCartRequest>,
) -> ApiResult<()> {
    if req.quantity < 1 {
        return Err(ApiError::bad_request("Quantity must be at least 1").into());
    }

    // The FK would catch this too; checking first gives a clean 404
    let product = ProductRepository::get_by_id(state.db.pool(), req.product_id)
        .await
        .map_err(ApiError::db_error)?;
    if product.is_none() {
        return Err(ApiError::not_found("Product not found").into());
    }

    CartRepository::upsert(state.db.pool(), claims.user_id(), req.product_id, req.quantity)
        .await
        .map_err(ApiError::db_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(()))))
}

/// Set a line's quantity
///
/// PUT /api/v1/cart/update/{product_id}
#[utoipa::path(
    put,
    path = "/api/v1/cart/update/{product_id}",
    params(("product_id" = i64, Path, description = "Product line to update")),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity updated (or line removed at qty <= 0)"),
        (status = 404, description = "Not in cart")
    ),
    security(("bearer_jwt" = [])),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i64>,
    Json(req): Json<UpdateQuantityRequest>,
) -> ApiResult<()> {
    let touched =
        CartRepository::set_quantity(state.db.pool(), claims.user_id(), product_id, req.quantity)
            .await
            .map_err(ApiError::db_error)?;

    if !touched {
        return Err(ApiError::not_found("Not in cart").into());
    }

    Ok((StatusCode::OK, Json(ApiResponse::success(()))))
}

/// Remove a product from the cart
///
/// DELETE /api/v1/cart/remove/{product_id}
#[utoipa::path(
    delete,
    path = "/api/v1/cart/remove/{product_id}",
    params(("product_id" = i64, Path, description = "Product line to remove")),
    responses(
        (status = 200, description = "Line removed"),
        (status = 404, description = "Not in cart")
    ),
    security(("bearer_jwt" = [])),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i64>,
) -> ApiResult<()> {
    let removed = CartRepository::remove(state.db.pool(), claims.user_id(), product_id)
        .await
        .map_err(ApiError::db_error)?;

    if !removed {
        return Err(ApiError::not_found("Not in cart").into());
    }

    Ok((StatusCode::OK, Json(ApiResponse::success(()))))
}

/// Empty the cart
///
/// DELETE /api/v1/cart/clear
#[utoipa::path(
    delete,
    path = "/api/v1/cart/clear",
    responses(
        (status = 200, description = "Cart emptied", body = ApiResponse<u64>)
    ),
    security(("bearer_jwt" = [])),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<u64> {
    let removed = CartRepository::clear(state.db.pool(), claims.user_id())
        .await
        .map_err(ApiError::db_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success(removed))))
}
