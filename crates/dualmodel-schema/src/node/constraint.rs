use crate::types::Cardinality;
use dualmodel_primitives::{Primitive, Value};
use thiserror::Error as ThisError;

///
/// Constraint
///
/// Structural limits on a validation field. `MaxLen` bounds text and blob
/// length, or the element count of a many-cardinality field. `Min` and `Max`
/// are inclusive bounds on numeric scalars.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    MaxLen(usize),
    Min(i64),
    Max(i64),
}

impl Constraint {
    /// Whether this constraint can be attached to a field of the given shape.
    #[must_use]
    pub const fn applies_to(&self, ty: Primitive, cardinality: Cardinality) -> bool {
        match self {
            Self::MaxLen(_) => matches!(cardinality, Cardinality::Many) || ty.supports_len(),
            Self::Min(_) | Self::Max(_) => {
                !matches!(cardinality, Cardinality::Many) && ty.is_numeric()
            }
        }
    }

    /// Check one value; `Null` always passes.
    #[allow(clippy::cast_precision_loss)]
    pub fn check(&self, value: &Value) -> Result<(), ConstraintViolation> {
        match (self, value) {
            (_, Value::Null) => Ok(()),
            (Self::MaxLen(max), value) => match value.len() {
                Some(len) if len > *max => Err(ConstraintViolation::TooLong { max: *max, len }),
                _ => Ok(()),
            },
            (Self::Min(min), Value::Int(n)) if n < min => Err(ConstraintViolation::BelowMin {
                min: *min,
                actual: n.to_string(),
            }),
            (Self::Min(min), Value::Float(n)) if *n < *min as f64 => {
                Err(ConstraintViolation::BelowMin {
                    min: *min,
                    actual: n.to_string(),
                })
            }
            (Self::Max(max), Value::Int(n)) if n > max => Err(ConstraintViolation::AboveMax {
                max: *max,
                actual: n.to_string(),
            }),
            (Self::Max(max), Value::Float(n)) if *n > *max as f64 => {
                Err(ConstraintViolation::AboveMax {
                    max: *max,
                    actual: n.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MaxLen(n) => write!(f, "max_len({n})"),
            Self::Min(n) => write!(f, "min({n})"),
            Self::Max(n) => write!(f, "max({n})"),
        }
    }
}

///
/// ConstraintViolation
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConstraintViolation {
    #[error("length {len} exceeds maximum {max}")]
    TooLong { max: usize, len: usize },

    #[error("{actual} is below minimum {min}")]
    BelowMin { min: i64, actual: String },

    #[error("{actual} is above maximum {max}")]
    AboveMax { max: i64, actual: String },
}
