use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One weighted entry of a slate. `weight` is a percentage in [0, 100];
/// nothing requires the weights of a slate to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlatePosition {
    pub symbol: String,
    pub weight: Decimal,
}

/// A user-defined weighted basket of symbols. `positions` is stored as a
/// jsonb column and keeps its insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Slate {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    #[sqlx(json)]
    pub positions: Vec<SlatePosition>,
    pub total_value: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
