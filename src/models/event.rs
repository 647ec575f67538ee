use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Fill, Trade};

/// Messages carried over the WebSocket channel, in both directions: the
/// server broadcasts them to connected clients, and inbound payloads are
/// accepted only through `schema::validate_websocket_event`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum WebSocketEvent {
    Fill(Fill),
    PnlUpdate(PnlUpdate),
    Trade(Trade),
}

/// Per-user PnL snapshot pushed alongside fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlUpdate {
    pub user_id: Uuid,
    #[serde(rename = "totalPnL")]
    pub total_pnl: Decimal,
    #[serde(rename = "dailyPnL")]
    pub daily_pnl: Decimal,
    pub timestamp: DateTime<Utc>,
}
