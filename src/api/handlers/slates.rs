use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::db::{slate_repo, user_repo};
use crate::errors::AppError;
use crate::models::Slate;
use crate::schema;
use crate::AppState;

use super::ApiResponse;

/// POST /api/slates — create a slate from a validated request. The id and
/// timestamps are server-assigned; the value starts at zero until the
/// first valuation.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ApiResponse<Slate>>, AppError> {
    let request = schema::validate_create_slate_request(&body)?;

    // The referenced owner must exist before the row does.
    user_repo::get_user(&state.db, request.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("user not found".into()))?;

    let now = Utc::now();
    let slate = Slate {
        id: Uuid::new_v4(),
        name: request.name,
        user_id: request.user_id,
        positions: request.positions,
        total_value: Decimal::ZERO,
        created_at: now,
        updated_at: now,
    };

    let slate = slate_repo::insert_slate(&state.db, &slate).await?;

    Ok(ApiResponse::ok(slate))
}

/// GET /api/slates/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Slate>>, AppError> {
    let slate = slate_repo::get_slate(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("slate not found".into()))?;

    Ok(ApiResponse::ok(slate))
}

/// PATCH /api/slates/{id} — validated partial update. The patch is merged
/// into the current row as a pure function; only then is the result
/// written back.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Json<ApiResponse<Slate>>, AppError> {
    let patch = schema::validate_update_slate_request(&body)?;

    let current = slate_repo::get_slate(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("slate not found".into()))?;

    let merged = patch.apply(current);
    let slate = slate_repo::update_slate(&state.db, &merged).await?;

    Ok(ApiResponse::ok(slate))
}
