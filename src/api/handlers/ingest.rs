use axum::extract::State;
use axum::Json;
use metrics::counter;
use serde_json::Value;

use crate::db::trade_repo;
use crate::errors::AppError;
use crate::ingestion::normalize_execution;
use crate::models::{Trade, WebSocketEvent};
use crate::AppState;

use super::ApiResponse;

/// POST /api/ingest/executions — broker execution webhook. The payload is
/// normalized into a canonical trade, validated, persisted, and announced
/// to WebSocket subscribers.
pub async fn executions(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ApiResponse<Trade>>, AppError> {
    let trade = normalize_execution(&body)?;
    let trade = trade_repo::insert_trade(&state.db, &trade).await?;

    counter!("trades_ingested_total").increment(1);
    tracing::info!(
        trade_id = %trade.id,
        symbol = %trade.symbol,
        side = %trade.side,
        "Broker execution ingested"
    );

    if state.ws_tx.send(WebSocketEvent::Trade(trade.clone())).is_ok() {
        counter!("ws_events_broadcast_total").increment(1);
    }

    Ok(ApiResponse::ok(trade))
}
