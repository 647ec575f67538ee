use serde_json::Value;

use crate::models::{PnlUpdate, WebSocketEvent};

use super::error::{ErrorKind, ValidationError};
use super::fields::Fields;
use super::fill::validate_fill;
use super::trade::validate_trade;

/// Validate a tagged WebSocket event.
///
/// The `type` discriminant is checked first: an unknown tag fails
/// immediately and `data` is never inspected. A known tag delegates to the
/// matching entity validator, with nested error paths re-rooted under
/// `data`.
pub fn validate_websocket_event(input: &Value) -> Result<WebSocketEvent, ValidationError> {
    let mut f = Fields::new(input)?;
    let tag = match f.string("type") {
        Some(t) => t.to_string(),
        None => return Err(f.into_error()),
    };

    let build: fn(&Value) -> Result<WebSocketEvent, ValidationError> = match tag.as_str() {
        "fill" => |d| validate_fill(d).map(WebSocketEvent::Fill),
        "pnl_update" => |d| validate_pnl_update(d).map(WebSocketEvent::PnlUpdate),
        "trade" => |d| validate_trade(d).map(WebSocketEvent::Trade),
        other => {
            return Err(ValidationError::single(
                "type",
                ErrorKind::UnknownDiscriminant,
                format!("\"{other}\" is not a known event type"),
            ));
        }
    };

    let data = match f.value("data") {
        Some(v) => v,
        None => return Err(f.into_error()),
    };

    build(data).map_err(|e| e.prefixed("data"))
}

/// Validate the payload of a `pnl_update` event.
pub fn validate_pnl_update(input: &Value) -> Result<PnlUpdate, ValidationError> {
    let mut f = Fields::new(input)?;
    let user_id = f.uuid("userId");
    let total_pnl = f.decimal("totalPnL");
    let daily_pnl = f.decimal("dailyPnL");
    let timestamp = f.datetime("timestamp");

    match (user_id, total_pnl, daily_pnl, timestamp) {
        (Some(user_id), Some(total_pnl), Some(daily_pnl), Some(timestamp))
            if !f.has_errors() =>
        {
            Ok(PnlUpdate {
                user_id,
                total_pnl,
                daily_pnl,
                timestamp,
            })
        }
        _ => Err(f.into_error()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_tag_fails_without_touching_data() {
        // `data` here would fail every fill rule; none of that may surface.
        let payload = json!({"type": "unknown_tag", "data": {}});
        let err = validate_websocket_event(&payload).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "type");
        assert_eq!(err.errors[0].kind, ErrorKind::UnknownDiscriminant);
    }

    #[test]
    fn known_tag_with_missing_data_is_reported() {
        let payload = json!({"type": "trade"});
        let err = validate_websocket_event(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "data");
        assert_eq!(err.errors[0].kind, ErrorKind::MissingField);
    }

    #[test]
    fn nested_errors_are_prefixed_with_data() {
        let payload = json!({
            "type": "pnl_update",
            "data": {
                "userId": "not-a-uuid",
                "totalPnL": 120.5,
                "dailyPnL": -3.2,
                "timestamp": "2024-01-01T00:00:00Z",
            },
        });
        let err = validate_websocket_event(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "data.userId");
    }

    #[test]
    fn non_object_data_is_a_shape_error_at_data() {
        let payload = json!({"type": "trade", "data": "nope"});
        let err = validate_websocket_event(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "data");
        assert_eq!(err.errors[0].kind, ErrorKind::Shape);
    }

    #[test]
    fn valid_pnl_update_event() {
        let payload = json!({
            "type": "pnl_update",
            "data": {
                "userId": "7f8a6f2e-52f0-4b1c-9d51-1f0c8a2e4b01",
                "totalPnL": 120.5,
                "dailyPnL": -3.2,
                "timestamp": "2024-01-01T00:00:00Z",
            },
        });
        let event = validate_websocket_event(&payload).unwrap();
        match event {
            WebSocketEvent::PnlUpdate(p) => {
                assert_eq!(p.total_pnl, rust_decimal::Decimal::new(1205, 1));
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn missing_type_is_reported() {
        let payload = json!({"data": {}});
        let err = validate_websocket_event(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "type");
        assert_eq!(err.errors[0].kind, ErrorKind::MissingField);
    }
}
