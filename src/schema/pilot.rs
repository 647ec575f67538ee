use serde_json::Value;

use crate::models::Pilot;

use super::error::ValidationError;
use super::fields::Fields;

/// Validate an untrusted payload into a canonical [`Pilot`].
///
/// `description` may be empty, `avatarUrl` may be null, `totalReturn` is a
/// signed percentage; `followers` must not be negative.
pub fn validate_pilot(input: &Value) -> Result<Pilot, ValidationError> {
    let mut f = Fields::new(input)?;
    let id = f.uuid("id");
    let name = f.non_empty_string("name");
    let description = f.text("description");
    let avatar_url = f.url_or_null("avatarUrl");
    let total_return = f.decimal("totalReturn");
    let followers = f.non_negative_int("followers");
    let is_active = f.boolean("isActive");
    let created_at = f.datetime("createdAt");
    let updated_at = f.datetime("updatedAt");

    match (
        id,
        name,
        description,
        avatar_url,
        total_return,
        followers,
        is_active,
        created_at,
        updated_at,
    ) {
        (
            Some(id),
            Some(name),
            Some(description),
            Some(avatar_url),
            Some(total_return),
            Some(followers),
            Some(is_active),
            Some(created_at),
            Some(updated_at),
        ) if !f.has_errors() => Ok(Pilot {
            id,
            name,
            description,
            avatar_url,
            total_return,
            followers,
            is_active,
            created_at,
            updated_at,
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
    use crate::schema::error::ErrorKind;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn valid_pilot() -> Value {
        json!({
            "id": "0d5bb6a2-8c07-4a51-b54c-2d37f8e4c7a9",
            "name": "Tech Momentum",
            "description": "",
            "avatarUrl": null,
            "totalReturn": -3.2,
            "followers": 1280,
            "isActive": true,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
        })
    }

    #[test]
    fn accepts_valid_pilot() {
        let pilot = validate_pilot(&valid_pilot()).unwrap();
        assert_eq!(pilot.avatar_url, None);
        assert_eq!(pilot.total_return, Decimal::new(-32, 1));
        assert_eq!(pilot.followers, 1280);
    }

    #[test]
    fn accepts_avatar_url_string() {
        let mut payload = valid_pilot();
        payload["avatarUrl"] = json!("https://cdn.example.com/p.png");
        let pilot = validate_pilot(&payload).unwrap();
        assert_eq!(
            pilot.avatar_url.as_deref(),
            Some("https://cdn.example.com/p.png")
        );
    }

    #[test]
    fn rejects_malformed_avatar_url() {
        let mut payload = valid_pilot();
        payload["avatarUrl"] = json!("cdn.example.com/p.png");
        let err = validate_pilot(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "avatarUrl");
        assert_eq!(err.errors[0].kind, ErrorKind::Constraint);
    }

    #[test]
    fn rejects_negative_followers() {
        let mut payload = valid_pilot();
        payload["followers"] = json!(-1);
        let err = validate_pilot(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "followers");
        assert_eq!(err.errors[0].kind, ErrorKind::Constraint);
    }

    #[test]
    fn rejects_fractional_followers() {
        let mut payload = valid_pilot();
        payload["followers"] = json!(10.5);
        let err = validate_pilot(&payload).unwrap_err();
        assert_eq!(err.errors[0].field, "followers");
    }
}
