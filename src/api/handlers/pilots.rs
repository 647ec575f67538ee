use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::db::{pilot_repo, trade_repo};
use crate::errors::AppError;
use crate::models::{Pilot, Trade};
use crate::schema;
use crate::AppState;

use super::ApiResponse;

/// GET /api/pilots — active pilots, most followed first.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Pilot>>>, AppError> {
    let pilots = pilot_repo::get_active_pilots(&state.db).await?;

    Ok(ApiResponse::ok(pilots))
}

/// POST /api/pilots — onboard a pilot from a full, validated payload.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ApiResponse<Pilot>>, AppError> {
    let pilot = schema::validate_pilot(&body)?;
    let pilot = pilot_repo::insert_pilot(&state.db, &pilot).await?;

    Ok(ApiResponse::ok(pilot))
}

/// GET /api/pilots/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Pilot>>, AppError> {
    let pilot = pilot_repo::get_pilot(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("pilot not found".into()))?;

    Ok(ApiResponse::ok(pilot))
}

/// GET /api/pilots/{id}/trades
pub async fn trades(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Trade>>>, AppError> {
    let trades = trade_repo::get_trades_by_pilot(&state.db, id).await?;

    Ok(ApiResponse::ok(trades))
}

/// POST /api/pilots/follow — follow a pilot, bumping its follower count.
pub async fn follow(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ApiResponse<Pilot>>, AppError> {
    let request = schema::validate_follow_pilot_request(&body)?;

    let pilot = pilot_repo::increment_followers(&state.db, request.pilot_id)
        .await?
        .ok_or_else(|| AppError::NotFound("pilot not found or inactive".into()))?;

    Ok(ApiResponse::ok(pilot))
}
