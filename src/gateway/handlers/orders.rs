//! Order handlers: placement, history, tracking, status updates.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::{Capability, Claims, Policy};
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult, error_codes};
use crate::orders::OrderError;
use crate::orders::service::{OrderView, TrackingView};

fn map_order_error(e: OrderError) -> ApiError {
    match e {
        OrderError::EmptyCart => ApiError::new(
            StatusCode::BAD_REQUEST,
            error_codes::EMPTY_CART,
            "Cart is empty",
        ),
        OrderError::NotFound => ApiError::not_found("Order not found"),
        OrderError::InvalidStatus => ApiError::bad_request("Status is required"),
        OrderError::Database(e) => ApiError::db_error(e),
    }
}

/// Placement response
#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceOrderResponse {
    pub order_id: i64,
}

/// Status update request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(example = "Shipped")]
    pub status: String,
}

/// Status update response: the status as stored
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateStatusResponse {
    #[schema(example = "Shipped")]
    pub new_status: String,
}

/// Place an order from the caller's cart
///
/// POST /api/v1/order/create
#[utoipa::path(
    post,
    path = "/api/v1/order/create",
    responses(
        (status = 201, description = "Order placed", body = ApiResponse<PlaceOrderResponse>),
        (status = 400, description = "Cart is empty"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<PlaceOrderResponse> {
    let order_id = state
        .orders
        .place_order(claims.user_id())
        .await
        .map_err(map_order_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(PlaceOrderResponse { order_id })),
    ))
}

/// The caller's order history, newest first
///
/// GET /api/v1/order/history
#[utoipa::path(
    get,
    path = "/api/v1/order/history",
    responses(
        (status = 200, description = "Orders with nested items", body = ApiResponse<Vec<OrderView>>)
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn order_history(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Vec<OrderView>> {
    let orders = state
        .orders
        .order_history(claims.user_id())
        .await
        .map_err(map_order_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success(orders))))
}

/// Track one of the caller's orders
///
/// GET /api/v1/order/track/{order_id}
#[utoipa::path(
    get,
    path = "/api/v1/order/track/{order_id}",
    params(("order_id" = i64, Path, description = "Order to track")),
    responses(
        (status = 200, description = "Tracking info", body = ApiResponse<TrackingView>),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn track_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<i64>,
) -> ApiResult<TrackingView> {
    let tracking = state
        .orders
        .track_order(claims.user_id(), order_id)
        .await
        .map_err(map_order_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success(tracking))))
}

/// Overwrite an order's status
///
/// PUT /api/v1/order/update/{order_id}
#[utoipa::path(
    put,
    path = "/api/v1/order/update/{order_id}",
    params(("order_id" = i64, Path, description = "Order to update")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<UpdateStatusResponse>),
        (status = 400, description = "Status is required"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<UpdateStatusResponse> {
    Policy::require(state.db.pool(), claims.user_id(), Capability::UpdateOrders)
        .await
        .map_err(ApiError::from)?;

    let new_status = state
        .orders
        .update_status(order_id, &req.status)
        .await
        .map_err(map_order_error)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(UpdateStatusResponse { new_status })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_status_response_carries_new_status() {
        let resp = ApiResponse::success(UpdateStatusResponse {
            new_status: "Shipped".to_string(),
        });
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["data"]["new_status"], "Shipped");
    }
}
