use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{Side, TradeStatus};

/// Database row for the trades table. A trade is created `pending` and
/// moves to exactly one of the terminal statuses; the guarded update in
/// `trade_repo` is what enforces that ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: Uuid,
    pub symbol: String,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Decimal,
    pub pilot_id: Uuid,
    pub status: TradeStatus,
    pub timestamp: DateTime<Utc>,
}
