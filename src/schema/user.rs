use serde_json::Value;

use crate::models::User;

use super::error::ValidationError;
use super::fields::Fields;

/// Validate an untrusted payload into a canonical [`User`].
///
/// Email *format* is checked here; uniqueness is the store's job.
pub fn validate_user(input: &Value) -> Result<User, ValidationError> {
    let mut f = Fields::new(input)?;
    let id = f.uuid("id");
    let email = f.email("email");
    let name = f.non_empty_string("name");
    let created_at = f.datetime("createdAt");
    let updated_at = f.datetime("updatedAt");

    match (id, email, name, created_at, updated_at) {
        (Some(id), Some(email), Some(name), Some(created_at), Some(updated_at))
            if !f.has_errors() =>
        {
            Ok(User {
                id,
                email,
                name,
                created_at,
                updated_at,
            })
        }
        _ => Err(f.into_error()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
