//! Analytics handlers (admin-gated aggregates)

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::auth::{Capability, Claims, Policy};
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult};
use crate::store::analytics::{AnalyticsRepository, SalesSummary, TopProduct};

#[derive(Debug, Deserialize, IntoParams)]
pub struct TopProductsParams {
    /// Number of products to return (default 10, max 100)
    pub limit: Option<i64>,
}

/// Store-wide sales summary
///
/// GET /api/v1/analytics/summary
#[utoipa::path(
    get,
    path = "/api/v1/analytics/summary",
    responses(
        (status = 200, description = "Sales summary", body = ApiResponse<SalesSummary>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_jwt" = [])),
    tag = "Analytics"
)]
pub async fn sales_summary(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<SalesSummary> {
    Policy::require(state.db.pool(), claims.user_id(), Capability::ViewAnalytics)
        .await
        .map_err(ApiError::from)?;

    let summary = AnalyticsRepository::sales_summary(state.db.pool())
        .await
        .map_err(ApiError::db_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success(summary))))
}

/// Best sellers by revenue
///
/// GET /api/v1/analytics/top-products
#[utoipa::path(
    get,
    path = "/api/v1/analytics/top-products",
    params(TopProductsParams),
    responses(
        (status = 200, description = "Best sellers", body = ApiResponse<Vec<TopProduct>>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_jwt" = [])),
    tag = "Analytics"
)]
pub async fn top_products(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<TopProductsParams>,
) -> ApiResult<Vec<TopProduct>> {
    Policy::require(state.db.pool(), claims.user_id(), Capability::ViewAnalytics)
        .await
        .map_err(ApiError::from)?;

    let limit = params.limit.unwrap_or(10).clamp(1, 100);
    let top = AnalyticsRepository::top_products(state.db.pool(), limit)
        .await
        .map_err(ApiError::db_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success(top))))
}
