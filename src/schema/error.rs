use serde::Serialize;

/// What went wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The value is not an object (or array) where one was expected.
    Shape,
    /// The field exists but has the wrong primitive type.
    Type,
    /// Right type, but a semantic rule is violated (range, format, enum
    /// membership, emptiness).
    Constraint,
    /// A required field is absent and has no default.
    MissingField,
    /// A tagged-union `type` value outside the known set.
    UnknownDiscriminant,
}

/// One failing field with a human-readable reason. `field` is a dotted /
/// indexed path (`data.symbol`, `positions[2].weight`); `$` stands for the
/// payload itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub kind: ErrorKind,
    pub reason: String,
}

/// Rejection of an untrusted payload. Carries every independent failing
/// field, not just the first, so callers (forms, API consumers) surface
/// the full list in one round trip.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid payload: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        ValidationError { errors }
    }

    pub fn single(field: impl Into<String>, kind: ErrorKind, reason: impl Into<String>) -> Self {
        ValidationError {
            errors: vec![FieldError {
                field: field.into(),
                kind,
                reason: reason.into(),
            }],
        }
    }

    /// Re-root every field path under `prefix`. Used when a nested payload
    /// (e.g. an event's `data`) is validated by a delegate validator.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        for err in &mut self.errors {
            err.field = if err.field == "$" {
                prefix.to_string()
            } else {
                format!("{prefix}.{}", err.field)
            };
        }
        self
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.reason))
        .collect::<Vec<_>>()
        .join("; ")
}
