use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A trader whose trades users can copy. `total_return` is the 30-day
/// return percentage; `followers` never goes negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Pilot {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub avatar_url: Option<String>,
    pub total_return: Decimal,
    pub followers: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
