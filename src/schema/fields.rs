use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::{Side, TradeStatus};

use super::error::{ErrorKind, FieldError, ValidationError};

/// Accumulating field reader over a JSON object.
///
/// Every extractor records a [`FieldError`] and returns `None` instead of
/// failing the whole payload, so the caller sees all bad fields at once.
/// Keys the extractors never ask for are ignored. Extractors never mutate
/// the input and never touch anything outside this struct.
pub(crate) struct Fields<'a> {
    obj: &'a Map<String, Value>,
    prefix: String,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    /// Top-level shape check: anything but a JSON object is rejected
    /// outright and nothing else is inspected.
    pub fn new(input: &'a Value) -> Result<Self, ValidationError> {
        match input.as_object() {
            Some(obj) => Ok(Fields {
                obj,
                prefix: String::new(),
                errors: Vec::new(),
            }),
            None => Err(ValidationError::single(
                "$",
                ErrorKind::Shape,
                format!("expected an object, got {}", json_type(input)),
            )),
        }
    }

    /// Reader for a nested object; `prefix` is the path of the nested value
    /// (e.g. `positions[2]`). A shape failure is reported at that path.
    pub fn nested(input: &'a Value, prefix: String) -> Result<Self, FieldError> {
        match input.as_object() {
            Some(obj) => Ok(Fields {
                obj,
                prefix,
                errors: Vec::new(),
            }),
            None => Err(FieldError {
                field: prefix,
                kind: ErrorKind::Shape,
                reason: format!("expected an object, got {}", json_type(input)),
            }),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.obj.contains_key(key)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Record a failure at `key` (qualified with the reader's prefix).
    pub fn reject(&mut self, key: &str, kind: ErrorKind, reason: impl Into<String>) {
        let field = self.qualify(key);
        self.errors.push(FieldError {
            field,
            kind,
            reason: reason.into(),
        });
    }

    /// Record a failure at an already-qualified path.
    pub fn reject_at(&mut self, err: FieldError) {
        self.errors.push(err);
    }

    pub fn absorb(&mut self, errors: Vec<FieldError>) {
        self.errors.extend(errors);
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    pub fn into_error(self) -> ValidationError {
        if self.errors.is_empty() {
            // A validator only calls this after at least one extractor came
            // back empty, so reaching here means a missing reject call.
            return ValidationError::single("$", ErrorKind::Shape, "invalid payload");
        }
        ValidationError::new(self.errors)
    }

    // -----------------------------------------------------------------------
    // Extractors: type check first, then the semantic rule.
    // -----------------------------------------------------------------------

    pub fn value(&mut self, key: &str) -> Option<&'a Value> {
        match self.obj.get(key) {
            Some(v) => Some(v),
            None => {
                self.reject(key, ErrorKind::MissingField, "required field is missing");
                None
            }
        }
    }

    pub fn string(&mut self, key: &str) -> Option<&'a str> {
        let v = self.value(key)?;
        match v.as_str() {
            Some(s) => Some(s),
            None => {
                self.reject(
                    key,
                    ErrorKind::Type,
                    format!("expected a string, got {}", json_type(v)),
                );
                None
            }
        }
    }

    pub fn non_empty_string(&mut self, key: &str) -> Option<String> {
        let s = self.string(key)?;
        if s.is_empty() {
            self.reject(key, ErrorKind::Constraint, "must not be empty");
            return None;
        }
        Some(s.to_string())
    }

    pub fn bounded_string(&mut self, key: &str, max_chars: usize) -> Option<String> {
        let s = self.non_empty_string(key)?;
        if s.chars().count() > max_chars {
            self.reject(
                key,
                ErrorKind::Constraint,
                format!("must be at most {max_chars} characters"),
            );
            return None;
        }
        Some(s)
    }

    /// Any string is allowed, including the empty one.
    pub fn text(&mut self, key: &str) -> Option<String> {
        self.string(key).map(str::to_string)
    }

    pub fn email(&mut self, key: &str) -> Option<String> {
        let s = self.string(key)?;
        if !is_email(s) {
            self.reject(key, ErrorKind::Constraint, "must be a valid email address");
            return None;
        }
        Some(s.to_string())
    }

    /// A URL string or JSON null. Absence is still an error.
    pub fn url_or_null(&mut self, key: &str) -> Option<Option<String>> {
        let v = self.value(key)?;
        if v.is_null() {
            return Some(None);
        }
        let Some(s) = v.as_str() else {
            self.reject(
                key,
                ErrorKind::Type,
                format!("expected a string or null, got {}", json_type(v)),
            );
            return None;
        };
        if !is_url(s) {
            self.reject(key, ErrorKind::Constraint, "must be a valid URL");
            return None;
        }
        Some(Some(s.to_string()))
    }

    pub fn uuid(&mut self, key: &str) -> Option<Uuid> {
        let s = self.string(key)?;
        match Uuid::parse_str(s) {
            Ok(id) => Some(id),
            Err(_) => {
                self.reject(key, ErrorKind::Constraint, "must be a UUID");
                None
            }
        }
    }

    pub fn datetime(&mut self, key: &str) -> Option<DateTime<Utc>> {
        let s = self.string(key)?;
        match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(_) => {
                self.reject(
                    key,
                    ErrorKind::Constraint,
                    "must be an RFC 3339 / ISO-8601 datetime",
                );
                None
            }
        }
    }

    pub fn boolean(&mut self, key: &str) -> Option<bool> {
        let v = self.value(key)?;
        match v.as_bool() {
            Some(b) => Some(b),
            None => {
                self.reject(
                    key,
                    ErrorKind::Type,
                    format!("expected a boolean, got {}", json_type(v)),
                );
                None
            }
        }
    }

    /// Any JSON number, converted exactly.
    pub fn decimal(&mut self, key: &str) -> Option<Decimal> {
        let v = self.value(key)?;
        let Value::Number(n) = v else {
            self.reject(
                key,
                ErrorKind::Type,
                format!("expected a number, got {}", json_type(v)),
            );
            return None;
        };
        match number_to_decimal(n) {
            Some(d) => Some(d),
            None => {
                self.reject(key, ErrorKind::Constraint, "number is out of range");
                None
            }
        }
    }

    pub fn positive_decimal(&mut self, key: &str) -> Option<Decimal> {
        let d = self.decimal(key)?;
        if d <= Decimal::ZERO {
            self.reject(key, ErrorKind::Constraint, "must be greater than 0");
            return None;
        }
        Some(d)
    }

    /// Inclusive range check; `0` and `100` are both fine for a weight,
    /// `100.0001` is not.
    pub fn decimal_in(&mut self, key: &str, min: Decimal, max: Decimal) -> Option<Decimal> {
        let d = self.decimal(key)?;
        if d < min || d > max {
            self.reject(
                key,
                ErrorKind::Constraint,
                format!("must be between {min} and {max}"),
            );
            return None;
        }
        Some(d)
    }

    fn integer(&mut self, key: &str) -> Option<i64> {
        let v = self.value(key)?;
        let Value::Number(n) = v else {
            self.reject(
                key,
                ErrorKind::Type,
                format!("expected a number, got {}", json_type(v)),
            );
            return None;
        };
        match n.as_i64() {
            Some(i) => Some(i),
            None => {
                self.reject(key, ErrorKind::Constraint, "must be an integer");
                None
            }
        }
    }

    pub fn non_negative_int(&mut self, key: &str) -> Option<i32> {
        let i = self.integer(key)?;
        if i < 0 {
            self.reject(key, ErrorKind::Constraint, "must not be negative");
            return None;
        }
        self.to_i32(key, i)
    }

    pub fn positive_int(&mut self, key: &str) -> Option<i32> {
        let i = self.integer(key)?;
        if i <= 0 {
            self.reject(key, ErrorKind::Constraint, "must be greater than 0");
            return None;
        }
        self.to_i32(key, i)
    }

    pub fn int_in(&mut self, key: &str, min: i64, max: i64) -> Option<i32> {
        let i = self.integer(key)?;
        if i < min || i > max {
            self.reject(
                key,
                ErrorKind::Constraint,
                format!("must be between {min} and {max}"),
            );
            return None;
        }
        self.to_i32(key, i)
    }

    pub fn side(&mut self, key: &str) -> Option<Side> {
        let s = self.string(key)?;
        match Side::from_wire(s) {
            Some(side) => Some(side),
            None => {
                self.reject(key, ErrorKind::Constraint, "must be one of: buy, sell");
                None
            }
        }
    }

    /// Optional status; an absent key takes the default, a present key is
    /// validated strictly.
    pub fn trade_status_or(&mut self, key: &str, default: TradeStatus) -> Option<TradeStatus> {
        if !self.has(key) {
            return Some(default);
        }
        let s = self.string(key)?;
        match TradeStatus::from_wire(s) {
            Some(status) => Some(status),
            None => {
                self.reject(
                    key,
                    ErrorKind::Constraint,
                    "must be one of: pending, filled, cancelled, rejected",
                );
                None
            }
        }
    }

    pub fn array(&mut self, key: &str) -> Option<&'a Vec<Value>> {
        let v = self.value(key)?;
        match v.as_array() {
            Some(arr) => Some(arr),
            None => {
                self.reject(
                    key,
                    ErrorKind::Shape,
                    format!("expected an array, got {}", json_type(v)),
                );
                None
            }
        }
    }

    pub fn object(&mut self, key: &str) -> Option<&'a Map<String, Value>> {
        let v = self.value(key)?;
        match v.as_object() {
            Some(obj) => Some(obj),
            None => {
                self.reject(
                    key,
                    ErrorKind::Shape,
                    format!("expected an object, got {}", json_type(v)),
                );
                None
            }
        }
    }

    pub fn qualify(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    fn to_i32(&mut self, key: &str, i: i64) -> Option<i32> {
        match i32::try_from(i) {
            Ok(v) => Some(v),
            Err(_) => {
                self.reject(key, ErrorKind::Constraint, "number is out of range");
                None
            }
        }
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Exact conversion of a JSON number. Plain decimal notation first, then
/// scientific notation for numbers serde renders with an exponent.
fn number_to_decimal(n: &serde_json::Number) -> Option<Decimal> {
    let repr = n.to_string();
    Decimal::from_str(&repr)
        .or_else(|_| Decimal::from_scientific(&repr))
        .ok()
}

fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !s.chars().any(char::is_whitespace)
}

fn is_url(s: &str) -> bool {
    let Some((scheme, rest)) = s.split_once("://") else {
        return false;
    };
    !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
}
