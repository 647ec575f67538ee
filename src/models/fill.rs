use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Side;

/// Executed-trade record. `slippage` is a signed percentage against the
/// parent trade's price; `latency` is execution time in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub id: Uuid,
    pub trade_id: Uuid,
    pub symbol: String,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Decimal,
    pub slippage: Decimal,
    pub latency: i32,
    pub timestamp: DateTime<Utc>,
}
