use serde_json::Value;

use crate::models::Fill;

use super::error::ValidationError;
use super::fields::Fields;

/// Validate an untrusted payload into a canonical [`Fill`].
///
/// `slippage` is a signed percentage (price improvement is negative);
/// `latency` is a positive integer millisecond count. That the referenced
/// trade exists is a foreign-key concern, checked by the store.
pub fn validate_fill(input: &Value) -> Result<Fill, ValidationError> {
    let mut f = Fields::new(input)?;
    let id = f.uuid("id");
    let trade_id = f.uuid("tradeId");
    let symbol = f.non_empty_string("symbol");
    let side = f.side("side");
    let quantity = f.positive_decimal("quantity");
    let price = f.positive_decimal("price");
    let slippage = f.decimal("slippage");
    let latency = f.positive_int("latency");
    let timestamp = f.datetime("timestamp");

    match (
        id, trade_id, symbol, side, quantity, price, slippage, latency, timestamp,
    ) {
        (
            Some(id),
            Some(trade_id),
            Some(symbol),
            Some(side),
            Some(quantity),
            Some(price),
            Some(slippage),
            Some(latency),
            Some(timestamp),
        ) if !f.has_errors() => Ok(Fill {
            id,
            trade_id,
            symbol,
            side,
            quantity,
            price,
            slippage,
            latency,
            timestamp,
        }),
        _ => Err(f.into_error()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
