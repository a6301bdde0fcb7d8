//! Typed field access on parsed JSON objects
//!
//! Every field read goes through [`Field`], which separates "present with the
//! right type", "present with the wrong type" and "absent". Callers then apply
//! one of two policies:
//!
//! - required (load-bearing objects, timestamps): anything but `Present` fails
//! - optional (scalar leaves): anything but `Present` yields the zero value

use super::error::DecodeError;
use serde_json::{Map, Value};

/// A parsed JSON object
pub type JsonObject = Map<String, Value>;

/// Outcome of a typed field lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<T> {
    /// Present with the expected type
    Present(T),
    /// Present with another JSON type (named)
    Mismatched(&'static str),
    /// Not present
    Absent,
}

impl<T> Field<T> {
    /// The value if present and well-typed
    pub fn present(self) -> Option<T> {
        match self {
            Field::Present(v) => Some(v),
            Field::Mismatched(_) | Field::Absent => None,
        }
    }

    /// Require the value, failing on absence or type mismatch
    pub fn required(self, field: &'static str, expected: &'static str) -> Result<T, DecodeError> {
        match self {
            Field::Present(v) => Ok(v),
            Field::Mismatched(found) => Err(DecodeError::FieldType {
                field,
                expected,
                found,
            }),
            Field::Absent => Err(DecodeError::MissingField { field }),
        }
    }
}

impl<T: Default> Field<T> {
    /// The value, or `T::default()` on absence or type mismatch
    pub fn or_zero(self) -> T {
        self.present().unwrap_or_default()
    }
}

/// JSON type name for messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lookup<'a, T>(
    obj: &'a JsonObject,
    key: &str,
    extract: impl FnOnce(&'a Value) -> Option<T>,
) -> Field<T> {
    match obj.get(key) {
        None => Field::Absent,
        Some(v) => match extract(v) {
            Some(t) => Field::Present(t),
            None => Field::Mismatched(json_type_name(v)),
        },
    }
}

/// Look up a numeric field; integers and floats both qualify
pub fn number(obj: &JsonObject, key: &str) -> Field<f64> {
    lookup(obj, key, Value::as_f64)
}

/// Look up a string field
pub fn string<'a>(obj: &'a JsonObject, key: &str) -> Field<&'a str> {
    lookup(obj, key, Value::as_str)
}

/// Look up an object field
pub fn object<'a>(obj: &'a JsonObject, key: &str) -> Field<&'a JsonObject> {
    lookup(obj, key, Value::as_object)
}

/// Optional numeric leaf: zero unless present as a number
pub fn optional_f64(obj: &JsonObject, key: &str) -> f64 {
    number(obj, key).or_zero()
}

/// Optional string leaf: empty unless present as a string
pub fn optional_string(obj: &JsonObject, key: &str) -> String {
    string(obj, key).present().map(str::to_owned).unwrap_or_default()
}

/// Required object field
pub fn required_object<'a>(
    obj: &'a JsonObject,
    key: &'static str,
) -> Result<&'a JsonObject, DecodeError> {
    object(obj, key).required(key, "object")
}

/// Require a parsed value to be an object
pub fn expect_object(value: &Value) -> Result<&JsonObject, DecodeError> {
    value.as_object().ok_or_else(|| DecodeError::Structural {
        expected: "object",
        found: json_type_name(value).to_string(),
    })
}

/// Parse a JSON fragment into a structural value
pub fn parse_value(json: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(json).map_err(|e| DecodeError::from_json(e, "JSON value"))
}
