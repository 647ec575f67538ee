use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::db::{slate_repo, user_repo};
use crate::errors::AppError;
use crate::models::{Slate, User};
use crate::schema;
use crate::AppState;

use super::ApiResponse;

/// POST /api/users — register a user from a full, validated payload.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = schema::validate_user(&body)?;

    match user_repo::insert_user(&state.db, &user).await {
        Ok(user) => Ok(ApiResponse::ok(user)),
        Err(e) => {
            let unique_violation = e
                .downcast_ref::<sqlx::Error>()
                .and_then(|e| e.as_database_error())
                .is_some_and(|db| db.is_unique_violation());
            if unique_violation {
                Err(AppError::BadRequest("email is already registered".into()))
            } else {
                Err(AppError::Internal(e))
            }
        }
    }
}

/// GET /api/users/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = user_repo::get_user(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("user not found".into()))?;

    Ok(ApiResponse::ok(user))
}

/// GET /api/users/{id}/slates
pub async fn slates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Slate>>>, AppError> {
    let slates = slate_repo::get_slates_by_user(&state.db, id).await?;

    Ok(ApiResponse::ok(slates))
}
