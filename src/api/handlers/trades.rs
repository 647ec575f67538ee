use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::db::{fill_repo, trade_repo};
use crate::errors::AppError;
use crate::models::{Fill, Trade, WebSocketEvent};
use crate::schema;
use crate::AppState;

use super::ApiResponse;

const RECENT_TRADES_LIMIT: i64 = 100;

/// GET /api/trades — most recent trades.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Trade>>>, AppError> {
    let trades = trade_repo::get_recent_trades(&state.db, RECENT_TRADES_LIMIT).await?;

    Ok(ApiResponse::ok(trades))
}

/// POST /api/trades — record a trade from a full, validated payload.
/// Payloads without a status start out pending.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ApiResponse<Trade>>, AppError> {
    let trade = schema::validate_trade(&body)?;
    let trade = trade_repo::insert_trade(&state.db, &trade).await?;

    if state.ws_tx.send(WebSocketEvent::Trade(trade.clone())).is_ok() {
        metrics::counter!("ws_events_broadcast_total").increment(1);
    }

    Ok(ApiResponse::ok(trade))
}

/// GET /api/trades/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Trade>>, AppError> {
    let trade = trade_repo::get_trade(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("trade not found".into()))?;

    Ok(ApiResponse::ok(trade))
}

/// GET /api/trades/{id}/fills
pub async fn fills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Fill>>>, AppError> {
    let fills = fill_repo::get_fills_by_trade(&state.db, id).await?;

    Ok(ApiResponse::ok(fills))
}
