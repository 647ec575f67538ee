use serde_json::Value;

use crate::models::{Trade, TradeStatus};

use super::error::ValidationError;
use super::fields::Fields;

/// Validate an untrusted payload into a canonical [`Trade`].
///
/// Create payloads may omit `status`; such trades start out `pending`.
/// Only membership in the legal status set is checked here; whether the
/// *previous* status permitted the transition is the store's concern.
pub fn validate_trade(input: &Value) -> Result<Trade, ValidationError> {
    let mut f = Fields::new(input)?;
    let id = f.uuid("id");
    let symbol = f.non_empty_string("symbol");
    let side = f.side("side");
    let quantity = f.positive_decimal("quantity");
    let price = f.positive_decimal("price");
    let pilot_id = f.uuid("pilotId");
    let status = f.trade_status_or("status", TradeStatus::Pending);
    let timestamp = f.datetime("timestamp");

    match (id, symbol, side, quantity, price, pilot_id, status, timestamp) {
        (
            Some(id),
            Some(symbol),
            Some(side),
            Some(quantity),
            Some(price),
            Some(pilot_id),
            Some(status),
            Some(timestamp),
        ) if !f.has_errors() => Ok(Trade {
            id,
            symbol,
            side,
            quantity,
            price,
            pilot_id,
            status,
            timestamp,
        }),
        _ => Err(f.into_error()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;
    use crate::schema::error::ErrorKind;
    use serde_json::json;

    fn valid_trade() -> Value {
        json!({
            "id": "c3b1a2d4-5e6f-4a7b-8c9d-0e1f2a3b4c5d",
            "symbol": "AAPL",
            "side": "buy",
            "quantity": 10,
            "price": 150.25,
            "pilotId": "0d5bb6a2-8c07-4a51-b54c-2d37f8e4c7a9",
            "timestamp": "2024-01-01T00:00:00Z",
        })
    }

    #[test]
    fn missing_status_defaults_to_pending() {
        let trade = validate_trade(&valid_trade()).unwrap();
        assert_eq!(trade.status, TradeStatus::Pending);
        assert_eq!(trade.side, Side::Buy);
        assert_eq!(trade.symbol, "AAPL");
    }

    #[test]
    fn explicit_status_is_kept() {
        let mut payload = valid_trade();
        payload["status"] = json!("filled");
        let trade = validate_trade(&payload).unwrap();
        assert_eq!(trade.status, TradeStatus::Filled);
    }

    #[test]
    fn uppercase_side_is_rejected() {
        let mut payload = valid_trade();
        payload["side"] = json!("BUY");
        let err = validate_trade(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "side");
        assert_eq!(err.errors[0].kind, ErrorKind::Constraint);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut payload = valid_trade();
        payload["status"] = json!("settled");
        let err = validate_trade(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "status");
    }

    #[test]
    fn rejects_non_positive_quantity_and_price() {
        let mut payload = valid_trade();
        payload["quantity"] = json!(0);
        payload["price"] = json!(-1.5);
        let err = validate_trade(&payload).unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["quantity", "price"]);
    }

    #[test]
    fn rejects_malformed_uuid() {
        let mut payload = valid_trade();
        payload["pilotId"] = json!("not-a-uuid");
        let err = validate_trade(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "pilotId");
        assert_eq!(err.errors[0].kind, ErrorKind::Constraint);
    }
}
