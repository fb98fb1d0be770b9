//! Payment handlers

use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::Claims;
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult};
use crate::payments::PaymentError;
use crate::store::models::Payment;

fn map_payment_error(e: PaymentError) -> ApiError {
    match e {
        PaymentError::OrderNotFound => ApiError::not_found("Order not found"),
        PaymentError::NotPayable(status) => {
            ApiError::conflict(format!("Order is not payable in status {}", status))
        }
        PaymentError::Database(e) => ApiError::db_error(e),
    }
}

/// Checkout request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub order_id: i64,
    #[schema(example = "card")]
    pub method: String,
}

/// Pay for a pending order
///
/// POST /api/v1/payment/checkout
#[utoipa::path(
    post,
    path = "/api/v1/payment/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Payment captured", body = ApiResponse<Payment>),
        (status = 400, description = "Payment method is required"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order already completed")
    ),
    security(("bearer_jwt" = [])),
    tag = "Payments"
)]
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CheckoutRequest>,
) -> ApiResult<Payment> {
    if req.method.trim().is_empty() {
        return Err(ApiError::bad_request("Payment method is required").into());
    }

    let payment = state
        .payments
        .checkout(claims.user_id(), req.order_id, &req.method)
        .await
        .map_err(map_payment_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(payment))))
}

/// The caller's payments, newest first
///
/// GET /api/v1/payment/history
#[utoipa::path(
    get,
    path = "/api/v1/payment/history",
    responses(
        (status = 200, description = "Payments", body = ApiResponse<Vec<Payment>>)
    ),
    security(("bearer_jwt" = [])),
    tag = "Payments"
)]
pub async fn payment_history(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Vec<Payment>> {
    let payments = state
        .payments
        .list(claims.user_id())
        .await
        .map_err(map_payment_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success(payments))))
}
