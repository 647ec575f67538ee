use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{Slate, SlatePosition};

use super::error::ValidationError;
use super::fields::Fields;
use super::slate::positions_field;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /api/slates`. The server assigns the id and timestamps;
/// `totalValue` starts at zero until the first valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlateRequest {
    pub name: String,
    pub user_id: Uuid,
    pub positions: Vec<SlatePosition>,
}

/// Body of `POST /api/pilots/follow`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowPilotRequest {
    pub pilot_id: Uuid,
}

/// Body of `POST /api/risk/estimate`. `time_horizon` is in days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEstimateRequest {
    pub positions: Vec<SlatePosition>,
    pub time_horizon: i32,
}

/// Partial-field merge for `PATCH /api/slates/{id}`. Absent fields keep
/// their current values; present fields are validated as strictly as on
/// create. An empty patch is a valid no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlateRequest {
    pub name: Option<String>,
    pub positions: Option<Vec<SlatePosition>>,
    pub total_value: Option<Decimal>,
}

impl UpdateSlateRequest {
    /// Merge this patch into an existing slate, returning the new state.
    /// The input slate is consumed, never mutated in place; `updated_at`
    /// is stamped by the store on write.
    pub fn apply(self, slate: Slate) -> Slate {
        Slate {
            id: slate.id,
            user_id: slate.user_id,
            name: self.name.unwrap_or(slate.name),
            positions: self.positions.unwrap_or(slate.positions),
            total_value: self.total_value.unwrap_or(slate.total_value),
            created_at: slate.created_at,
            updated_at: slate.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validate a slate-creation request. Weights are range-checked per
/// position but are *not* required to sum to 100.
pub fn validate_create_slate_request(input: &Value) -> Result<CreateSlateRequest, ValidationError> {
    let mut f = Fields::new(input)?;
    let name = f.bounded_string("name", 100);
    let user_id = f.uuid("userId");
    let positions = positions_field(&mut f, "positions", false);

    match (name, user_id, positions) {
        (Some(name), Some(user_id), Some(positions)) if !f.has_errors() => {
            Ok(CreateSlateRequest {
                name,
                user_id,
                positions,
            })
        }
        _ => Err(f.into_error()),
    }
}

pub fn validate_follow_pilot_request(input: &Value) -> Result<FollowPilotRequest, ValidationError> {
    let mut f = Fields::new(input)?;
    let pilot_id = f.uuid("pilotId");

    match pilot_id {
        Some(pilot_id) if !f.has_errors() => Ok(FollowPilotRequest { pilot_id }),
        _ => Err(f.into_error()),
    }
}

/// Validate a risk-estimation request. An empty portfolio is allowed (its
/// estimate is simply zero); the horizon is clamped to 1–30 days by
/// rejection, not by saturation.
pub fn validate_risk_estimate_request(
    input: &Value,
) -> Result<RiskEstimateRequest, ValidationError> {
    let mut f = Fields::new(input)?;
    let positions = positions_field(&mut f, "positions", true);
    let time_horizon = f.int_in("timeHorizon", 1, 30);

    match (positions, time_horizon) {
        (Some(positions), Some(time_horizon)) if !f.has_errors() => Ok(RiskEstimateRequest {
            positions,
            time_horizon,
        }),
        _ => Err(f.into_error()),
    }
}

/// Validate a slate patch. Only present fields are checked; none are
/// required.
pub fn validate_update_slate_request(input: &Value) -> Result<UpdateSlateRequest, ValidationError> {
    let mut f = Fields::new(input)?;
    let name = if f.has("name") {
        f.bounded_string("name", 100)
    } else {
        None
    };
    let positions = if f.has("positions") {
        positions_field(&mut f, "positions", false)
    } else {
        None
    };
    let total_value = if f.has("totalValue") {
        f.positive_decimal("totalValue")
    } else {
        None
    };

    if f.has_errors() {
        return Err(f.into_error());
    }
    Ok(UpdateSlateRequest {
        name,
        positions,
        total_value,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::error::ErrorKind;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn empty_name_and_empty_positions_are_both_reported() {
        let payload = json!({
            "name": "",
            "userId": "7f8a6f2e-52f0-4b1c-9d51-1f0c8a2e4b01",
            "positions": [],
        });
        let err = validate_create_slate_request(&payload).unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "positions"]);
    }

    #[test]
    fn weights_need_not_sum_to_100() {
        // Known gap kept on purpose: per-position range checks only, no
        // whole-portfolio rule. Changing this is a product decision.
        let payload = json!({
            "name": "Half Board",
            "userId": "7f8a6f2e-52f0-4b1c-9d51-1f0c8a2e4b01",
            "positions": [
                {"symbol": "AAPL", "weight": 30},
                {"symbol": "TSLA", "weight": 20},
            ],
        });
        assert!(validate_create_slate_request(&payload).is_ok());
    }

    #[test]
    fn follow_request_requires_a_uuid() {
        let err = validate_follow_pilot_request(&json!({"pilotId": "abc"})).unwrap_err();
        assert_eq!(err.errors[0].field, "pilotId");
        assert_eq!(err.errors[0].kind, ErrorKind::Constraint);

        assert!(validate_follow_pilot_request(
            &json!({"pilotId": "0d5bb6a2-8c07-4a51-b54c-2d37f8e4c7a9"})
        )
        .is_ok());
    }

    #[test]
    fn risk_request_bounds_the_horizon() {
        let base = json!({
            "positions": [{"symbol": "AAPL", "weight": 50}],
            "timeHorizon": 31,
        });
        let err = validate_risk_estimate_request(&base).unwrap_err();
        assert_eq!(err.errors[0].field, "timeHorizon");

        let ok = json!({
            "positions": [],
            "timeHorizon": 1,
        });
        let req = validate_risk_estimate_request(&ok).unwrap();
        assert!(req.positions.is_empty());
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let patch = validate_update_slate_request(&json!({})).unwrap();
        assert_eq!(patch, UpdateSlateRequest::default());
    }

    #[test]
    fn patch_validates_present_fields_only() {
        let err = validate_update_slate_request(&json!({"name": ""})).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "name");

        let patch = validate_update_slate_request(&json!({
            "positions": [{"symbol": "NVDA", "weight": 100}],
        }))
        .unwrap();
        assert!(patch.name.is_none());
        assert_eq!(patch.positions.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn apply_overwrites_present_fields_and_keeps_the_rest() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let slate = Slate {
            id: Uuid::new_v4(),
            name: "Old".into(),
            user_id: Uuid::new_v4(),
            positions: vec![SlatePosition {
                symbol: "AAPL".into(),
                weight: Decimal::from(100),
            }],
            total_value: Decimal::from(1000),
            created_at: now,
            updated_at: now,
        };

        let patch = UpdateSlateRequest {
            name: Some("New".into()),
            positions: None,
            total_value: None,
        };

        let merged = patch.apply(slate.clone());
        assert_eq!(merged.name, "New");
        assert_eq!(merged.positions, slate.positions);
        assert_eq!(merged.total_value, slate.total_value);
        assert_eq!(merged.id, slate.id);
    }
}
