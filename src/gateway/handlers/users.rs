//! User management handlers (admin or self, via the policy)

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::{Capability, Claims, Policy};
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult};
use crate::store::models::{UserProfile, roles};
use crate::store::users::{UserRepository, UserUpdate};

/// Partial profile update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8))]
    pub password: Option<String>,
    pub profile_image: Option<String>,
}

/// List all users
///
/// GET /api/v1/users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<UserProfile>>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_jwt" = [])),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Vec<UserProfile>> {
    Policy::require(state.db.pool(), claims.user_id(), Capability::ManageUsers)
        .await
        .map_err(ApiError::from)?;

    let users = UserRepository::list_all(state.db.pool())
        .await
        .map_err(ApiError::db_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success(users))))
}

/// Get one user's profile
///
/// GET /api/v1/users/{user_id}
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User to fetch")),
    responses(
        (status = 200, description = "User profile", body = ApiResponse<UserProfile>),
        (status = 403, description = "Not your profile"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> ApiResult<UserProfile> {
    Policy::require_self_or(
        state.db.pool(),
        claims.user_id(),
        user_id,
        Capability::ManageUsers,
    )
    .await
    .map_err(ApiError::from)?;

    let user = UserRepository::get_by_id(state.db.pool(), user_id)
        .await
        .map_err(ApiError::db_error)?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(user.into()))))
}

/// Update a user's profile
///
/// PUT /api/v1/users/{user_id}
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User to update")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not your profile"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username or email already taken")
    ),
    security(("bearer_jwt" = [])),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<()> {
    Policy::require_self_or(
        state.db.pool(),
        claims.user_id(),
        user_id,
        Capability::ManageUsers,
    )
    .await
    .map_err(ApiError::from)?;

    if let Err(e) = req.validate() {
        return Err(ApiError::bad_request(format!("Invalid input: {}", e)).into());
    }

    let password_hash = match req.password.as_deref() {
        Some(password) => Some(
            crate::auth::AuthService::hash_password(password)
                .map_err(|_| ApiError::internal("Update failed"))?,
        ),
        None => None,
    };

    let updated = UserRepository::update_profile(
        state.db.pool(),
        user_id,
        UserUpdate {
            username: req.username,
            email: req.email,
            password_hash,
            profile_image: req.profile_image,
        },
    )
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ApiError::conflict("Username or email already taken")
        }
        _ => ApiError::db_error(e),
    })?;

    if !updated {
        return Err(ApiError::not_found("User not found").into());
    }

    Ok((StatusCode::OK, Json(ApiResponse::success(()))))
}

/// Delete a user account
///
/// DELETE /api/v1/users/{user_id}
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User to delete")),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 403, description = "Not your account"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> ApiResult<()> {
    Policy::require_self_or(
        state.db.pool(),
        claims.user_id(),
        user_id,
        Capability::ManageUsers,
    )
    .await
    .map_err(ApiError::from)?;

    let deleted = UserRepository::delete(state.db.pool(), user_id)
        .await
        .map_err(ApiError::db_error)?;

    if !deleted {
        return Err(ApiError::not_found("User not found").into());
    }

    tracing::info!(user_id, actor = claims.user_id(), "user deleted");
    Ok((StatusCode::OK, Json(ApiResponse::success(()))))
}

/// Promote a user to admin
///
/// POST /api/v1/users/{user_id}/promote
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/promote",
    params(("user_id" = i64, Path, description = "User to promote")),
    responses(
        (status = 200, description = "User promoted"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Users"
)]
pub async fn promote_user(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> ApiResult<()> {
    Policy::require(state.db.pool(), claims.user_id(), Capability::ManageUsers)
        .await
        .map_err(ApiError::from)?;

    let promoted = UserRepository::set_role(state.db.pool(), user_id, roles::ADMIN)
        .await
        .map_err(ApiError::db_error)?;

    if !promoted {
        return Err(ApiError::not_found("User not found").into());
    }

    tracing::info!(user_id, actor = claims.user_id(), "user promoted to admin");
    Ok((StatusCode::OK, Json(ApiResponse::success(()))))
}
