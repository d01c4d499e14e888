//! Mapping between JSON documents and field values.
//!
//! JSON has no timestamp or integer/float distinction, so every read is
//! guided by the declared type of the field it lands in.

use dualmodel::primitives::{Primitive, Timestamp, Value};
use serde_json::{Map, Number, Value as Json};
use thiserror::Error as ThisError;

///
/// JsonError
///

#[derive(Debug, ThisError)]
pub enum JsonError {
    #[error("field '{field}': expected {expected}, found {found}")]
    Shape {
        field: String,
        expected: Primitive,
        found: &'static str,
    },

    #[error("field '{field}': {reason}")]
    Timestamp { field: String, reason: String },

    #[error("expected a JSON object")]
    NotAnObject,
}

/// Read one JSON value into a field declared as `hint`. A JSON array is a
/// list when the field is `many`; otherwise only a `Blob` field reads it
/// as bytes.
pub fn to_value(
    field: &str,
    json: &Json,
    hint: Option<Primitive>,
    many: bool,
) -> Result<Value, JsonError> {
    let shape = |found: &'static str| JsonError::Shape {
        field: field.to_string(),
        expected: hint.unwrap_or(Primitive::Text),
        found,
    };

    let value = match (json, hint) {
        (Json::Null, _) => Value::Null,
        (Json::Bool(b), _) => Value::Bool(*b),
        (Json::Number(n), Some(Primitive::Float)) => {
            Value::Float(n.as_f64().ok_or_else(|| shape("number"))?)
        }
        (Json::Number(n), Some(Primitive::Timestamp)) => {
            Value::Timestamp(Timestamp::from_seconds(n.as_u64().ok_or_else(|| shape("number"))?))
        }
        (Json::Number(n), _) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().ok_or_else(|| shape("number"))?),
        },
        (Json::String(s), Some(Primitive::Timestamp)) => {
            let ts = Timestamp::parse_flexible(s).map_err(|reason| JsonError::Timestamp {
                field: field.to_string(),
                reason,
            })?;
            Value::Timestamp(ts)
        }
        (Json::String(s), _) => Value::Text(s.clone()),
        (Json::Array(items), _) if many => Value::List(
            items
                .iter()
                .map(|item| to_value(field, item, hint, false))
                .collect::<Result<_, _>>()?,
        ),
        (Json::Array(items), Some(Primitive::Blob)) => Value::Blob(
            items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or_else(|| shape("array"))
                })
                .collect::<Result<_, _>>()?,
        ),
        (Json::Array(items), _) => Value::List(
            items
                .iter()
                .map(|item| to_value(field, item, hint, false))
                .collect::<Result<_, _>>()?,
        ),
        (Json::Object(_), _) => return Err(shape("object")),
    };

    Ok(value)
}

/// Render a field value as JSON. Timestamps use RFC 3339.
#[must_use]
pub fn from_value(value: &Value) -> Json {
    match value {
        Value::Blob(bytes) => Json::Array(bytes.iter().map(|b| Json::from(*b)).collect()),
        Value::Bool(b) => Json::Bool(*b),
        Value::Float(f) => Number::from_f64(*f).map_or(Json::Null, Json::Number),
        Value::Int(i) => Json::from(*i),
        Value::List(items) => Json::Array(items.iter().map(from_value).collect()),
        Value::Null => Json::Null,
        Value::Text(s) => Json::String(s.clone()),
        Value::Timestamp(ts) => ts
            .to_rfc3339()
            .map_or_else(|| Json::from(ts.get()), Json::String),
    }
}

/// Render named fields as a JSON object, keeping declaration order.
pub fn object<'a>(fields: impl IntoIterator<Item = (&'a str, &'a Value)>) -> Json {
    let map: Map<String, Json> = fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), from_value(value)))
        .collect();

    Json::Object(map)
}

/// Borrow the members of a JSON object.
pub fn members(json: &Json) -> Result<&Map<String, Json>, JsonError> {
    json.as_object().ok_or(JsonError::NotAnObject)
}
