pub mod event;
pub mod fill;
pub mod pilot;
pub mod slate;
pub mod trade;
pub mod user;

pub use event::{PnlUpdate, WebSocketEvent};
pub use fill::Fill;
pub use pilot::Pilot;
pub use slate::{Slate, SlatePosition};
pub use trade::Trade;
pub use user::User;

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "trade_side", rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Strict wire form: lowercase literals only. `"BUY"` is not a side.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(Side::Buy),
            "sell" => Some(Side::Sell),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TradeStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "trade_status", rename_all = "lowercase")]
pub enum TradeStatus {
    Pending,
    Filled,
    Cancelled,
    Rejected,
}

impl TradeStatus {
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TradeStatus::Pending),
            "filled" => Some(TradeStatus::Filled),
            "cancelled" => Some(TradeStatus::Cancelled),
            "rejected" => Some(TradeStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Pending => "pending",
            TradeStatus::Filled => "filled",
            TradeStatus::Cancelled => "cancelled",
            TradeStatus::Rejected => "rejected",
        }
    }

    /// Filled, cancelled and rejected trades never transition again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TradeStatus::Pending)
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
