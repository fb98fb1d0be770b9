use axum::{Extension, Json, extract::State, http::StatusCode};
use std::sync::Arc;
use validator::Validate;

use super::service::{AuthError, AuthResponse, Claims, LoginRequest, RegisterRequest};
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult};

fn map_auth_error(e: AuthError) -> ApiError {
    match e {
        AuthError::Duplicate => ApiError::conflict("Username or email already exists"),
        AuthError::InvalidCredentials => ApiError::unauthorized("Invalid email or password"),
        AuthError::Database(e) => ApiError::db_error(e),
        AuthError::Token(_) | AuthError::Revoked => {
            ApiError::unauthorized("Invalid or expired token")
        }
        AuthError::Hash(e) => {
            tracing::error!("Password hashing failed: {}", e);
            ApiError::internal("Registration failed")
        }
    }
}

/// Register a new user
///
/// POST /api/v1/auth/register
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = ApiResponse<i64>),
        (status = 400, description = "Invalid username, email or password"),
        (status = 409, description = "Username or email already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<i64> {
    if let Err(e) = req.validate() {
        return Err(ApiError::bad_request(format!("Invalid input: {}", e)).into());
    }

    match state.auth.register(req).await {
        Ok(user_id) => Ok((StatusCode::CREATED, Json(ApiResponse::success(user_id)))),
        Err(AuthError::Duplicate) => {
            tracing::warn!("Registration attempt for existing user");
            Err(map_auth_error(AuthError::Duplicate).into())
        }
        Err(e) => Err(map_auth_error(e).into()),
    }
}

/// Login user
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    match state.auth.login(req).await {
        Ok(resp) => Ok((StatusCode::OK, Json(ApiResponse::success(resp)))),
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            Err(map_auth_error(e).into())
        }
    }
}

/// Logout: revoke the presented token
///
/// POST /api/v1/auth/logout
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 200, description = "Token revoked"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_jwt" = [])),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<()> {
    match state.auth.logout(&claims).await {
        Ok(()) => Ok((StatusCode::OK, Json(ApiResponse::success(())))),
        Err(e) => Err(map_auth_error(e).into()),
    }
}
