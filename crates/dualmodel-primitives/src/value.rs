use crate::{Primitive, Timestamp};
use serde::{Deserialize, Serialize};

///
/// Value
/// one field slot of an instance or patch
///
/// Null  → the field is unset (persistence) or explicitly null (validation).
/// List  → many-cardinality validation fields; never stored in a column.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float(f64),
    Int(i64),
    List(Vec<Self>),
    Null,
    Text(String),
    Timestamp(Timestamp),
}

impl Value {
    /// Scalar type of this value; `None` for `Null` and `List`.
    #[must_use]
    pub const fn primitive(&self) -> Option<Primitive> {
        match self {
            Self::Blob(_) => Some(Primitive::Blob),
            Self::Bool(_) => Some(Primitive::Bool),
            Self::Float(_) => Some(Primitive::Float),
            Self::Int(_) => Some(Primitive::Int),
            Self::Text(_) => Some(Primitive::Text),
            Self::Timestamp(_) => Some(Primitive::Timestamp),
            Self::List(_) | Self::Null => None,
        }
    }

    /// Short variant label used in error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Blob(_) => "Blob",
            Self::Bool(_) => "Bool",
            Self::Float(_) => "Float",
            Self::Int(_) => "Int",
            Self::List(_) => "List",
            Self::Null => "Null",
            Self::Text(_) => "Text",
            Self::Timestamp(_) => "Timestamp",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Length for text (chars), blobs (bytes) and lists (elements).
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.chars().count()),
            Self::Blob(b) => Some(b.len()),
            Self::List(items) => Some(items.len()),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Blob(bytes)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
