use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::Trade;
use crate::schema::error::ValidationError;
use crate::schema::fields::Fields;
use crate::schema::validate_trade;

/// Normalize a broker execution webhook into a canonical [`Trade`].
///
/// Webhook shape: `{event, pilotId, order: {symbol, side}, execution:
/// {qty, price, timestamp}}`. Brokers shout their sides (`"BUY"`), so the
/// side is lowercased before validation; the id is server-assigned and the
/// status is left to default to `pending`. Everything else goes through
/// `validate_trade` untouched; normalization never bypasses validation.
pub fn normalize_execution(webhook: &Value) -> Result<Trade, ValidationError> {
    let mut f = Fields::new(webhook)?;
    let order = f.object("order");
    let execution = f.object("execution");
    let pilot_id = f.value("pilotId").cloned();

    let (Some(order), Some(execution), Some(pilot_id)) = (order, execution, pilot_id) else {
        return Err(f.into_error());
    };

    let mut candidate = Map::new();
    candidate.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
    candidate.insert("pilotId".into(), pilot_id);
    if let Some(symbol) = order.get("symbol") {
        candidate.insert("symbol".into(), symbol.clone());
    }
    if let Some(side) = order.get("side") {
        let side = match side.as_str() {
            Some(s) => Value::String(s.to_lowercase()),
            None => side.clone(),
        };
        candidate.insert("side".into(), side);
    }
    if let Some(qty) = execution.get("qty") {
        candidate.insert("quantity".into(), qty.clone());
    }
    if let Some(price) = execution.get("price") {
        candidate.insert("price".into(), price.clone());
    }
    if let Some(ts) = execution.get("timestamp") {
        candidate.insert("timestamp".into(), ts.clone());
    }

    validate_trade(&Value::Object(candidate))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Side, TradeStatus};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn webhook() -> Value {
        json!({
            "event": "fill",
            "pilotId": "0d5bb6a2-8c07-4a51-b54c-2d37f8e4c7a9",
            "order": {"symbol": "AAPL", "side": "BUY"},
            "execution": {"qty": 10, "price": 150.25, "timestamp": "2024-01-01T00:00:00Z"},
        })
    }

    #[test]
    fn shouted_side_is_lowercased_and_status_defaults() {
        let trade = normalize_execution(&webhook()).unwrap();
        assert_eq!(trade.side, Side::Buy);
        assert_eq!(trade.status, TradeStatus::Pending);
        assert_eq!(trade.quantity, Decimal::from(10));
        assert_eq!(trade.symbol, "AAPL");
    }

    #[test]
    fn each_call_assigns_a_fresh_id() {
        let a = normalize_execution(&webhook()).unwrap();
        let b = normalize_execution(&webhook()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn missing_sections_are_reported_together() {
        let err = normalize_execution(&json!({"event": "fill"})).unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["order", "execution", "pilotId"]);
    }

    #[test]
    fn bad_execution_values_fail_validation() {
        let mut payload = webhook();
        payload["execution"]["price"] = json!(-1);
        let err = normalize_execution(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "price");
    }

    #[test]
    fn unparseable_side_is_rejected_not_guessed() {
        let mut payload = webhook();
        payload["order"]["side"] = json!("short");
        let err = normalize_execution(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "side");
    }
}
