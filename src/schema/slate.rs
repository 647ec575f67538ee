use rust_decimal::Decimal;
use serde_json::Value;

use crate::models::{Slate, SlatePosition};

use super::error::{ErrorKind, ValidationError};
use super::fields::Fields;

/// Validate an untrusted payload into a canonical [`Slate`].
pub fn validate_slate(input: &Value) -> Result<Slate, ValidationError> {
    let mut f = Fields::new(input)?;
    let id = f.uuid("id");
    let name = f.bounded_string("name", 100);
    let user_id = f.uuid("userId");
    let positions = positions_field(&mut f, "positions", false);
    let total_value = f.positive_decimal("totalValue");
    let created_at = f.datetime("createdAt");
    let updated_at = f.datetime("updatedAt");

    match (
        id, name, user_id, positions, total_value, created_at, updated_at,
    ) {
        (
            Some(id),
            Some(name),
            Some(user_id),
            Some(positions),
            Some(total_value),
            Some(created_at),
            Some(updated_at),
        ) if !f.has_errors() => Ok(Slate {
            id,
            name,
            user_id,
            positions,
            total_value,
            created_at,
            updated_at,
        }),
        _ => Err(f.into_error()),
    }
}

/// Shared parser for a `positions` array: each element is an object with a
/// non-empty `symbol` and a `weight` percentage in [0, 100]. Bad elements
/// are reported individually (`positions[2].weight`) and do not stop the
/// scan. Nothing here requires the weights to sum to 100.
pub(super) fn positions_field(
    f: &mut Fields,
    key: &str,
    allow_empty: bool,
) -> Option<Vec<SlatePosition>> {
    let arr = f.array(key)?;
    if arr.is_empty() && !allow_empty {
        f.reject(
            key,
            ErrorKind::Constraint,
            "must contain at least one position",
        );
        return None;
    }

    let mut out = Vec::with_capacity(arr.len());
    let mut clean = true;
    for (i, item) in arr.iter().enumerate() {
        let path = f.qualify(&format!("{key}[{i}]"));
        let mut entry = match Fields::nested(item, path) {
            Ok(entry) => entry,
            Err(err) => {
                f.reject_at(err);
                clean = false;
                continue;
            }
        };
        let symbol = entry.non_empty_string("symbol");
        let weight = entry.decimal_in("weight", Decimal::ZERO, Decimal::ONE_HUNDRED);
        match (symbol, weight) {
            (Some(symbol), Some(weight)) if !entry.has_errors() => {
                out.push(SlatePosition { symbol, weight });
            }
            _ => {
                f.absorb(entry.into_errors());
                clean = false;
            }
        }
    }

    clean.then_some(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_slate() -> Value {
        json!({
            "id": "9a8b7c6d-5e4f-4a3b-8c1d-0e9f8a7b6c5d",
            "name": "My Slate",
            "userId": "7f8a6f2e-52f0-4b1c-9d51-1f0c8a2e4b01",
            "positions": [
                {"symbol": "AAPL", "weight": 30},
                {"symbol": "TSLA", "weight": 20},
            ],
            "totalValue": 4923.82,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
        })
    }

    #[test]
    fn accepts_valid_slate_and_keeps_position_order() {
        let slate = validate_slate(&valid_slate()).unwrap();
        assert_eq!(slate.positions.len(), 2);
        assert_eq!(slate.positions[0].symbol, "AAPL");
        assert_eq!(slate.positions[1].symbol, "TSLA");
    }

    #[test]
    fn weight_boundaries_are_inclusive() {
        let mut payload = valid_slate();
        payload["positions"] = json!([
            {"symbol": "AAPL", "weight": 0},
            {"symbol": "TSLA", "weight": 100},
        ]);
        assert!(validate_slate(&payload).is_ok());

        payload["positions"] = json!([
            {"symbol": "AAPL", "weight": -0.0001},
            {"symbol": "TSLA", "weight": 100.0001},
        ]);
        let err = validate_slate(&payload).unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["positions[0].weight", "positions[1].weight"]);
    }

    #[test]
    fn rejects_empty_positions() {
        let mut payload = valid_slate();
        payload["positions"] = json!([]);
        let err = validate_slate(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "positions");
        assert_eq!(err.errors[0].kind, ErrorKind::Constraint);
    }

    #[test]
    fn rejects_non_object_position_element() {
        let mut payload = valid_slate();
        payload["positions"] = json!([{"symbol": "AAPL", "weight": 30}, 42]);
        let err = validate_slate(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "positions[1]");
        assert_eq!(err.errors[0].kind, ErrorKind::Shape);
    }

    #[test]
    fn rejects_name_over_100_chars() {
        let mut payload = valid_slate();
        payload["name"] = json!("x".repeat(101));
        let err = validate_slate(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "name");
    }

    #[test]
    fn rejects_non_positive_total_value() {
        let mut payload = valid_slate();
        payload["totalValue"] = json!(0);
        let err = validate_slate(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "totalValue");
    }
}
