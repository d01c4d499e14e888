use crate::{F64_SAFE_I64, Primitive, Value};
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// CoercionPolicy
///
/// Decides which declared-type pairs may be bridged when a value moves
/// between a persistence field and a validation field.
///
/// - `Strict`: declared types must be identical.
/// - `NumericWiden`: additionally an `Int` column with a `Float` field and a
///   `Bool` column with an `Int` field. Values widen towards the field and
///   narrow back only when the conversion is exact.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CoercionPolicy {
    #[default]
    Strict,
    NumericWiden,
}

impl CoercionPolicy {
    /// Whether a persistence column declared as `from` may pair with a
    /// validation field declared as `to`. Values cross a bridged pair in
    /// either direction.
    #[must_use]
    pub const fn bridges(self, from: Primitive, to: Primitive) -> bool {
        if from as u8 == to as u8 {
            return true;
        }

        match self {
            Self::Strict => false,
            Self::NumericWiden => matches!(
                (from, to),
                (Primitive::Int, Primitive::Float) | (Primitive::Bool, Primitive::Int)
            ),
        }
    }

    /// Convert a value into the `to` type, element-wise for lists.
    /// `Null` passes through unchanged. Returns `None` when the value
    /// cannot be represented without loss or the pair is not bridged
    /// either way.
    #[must_use]
    pub fn coerce(self, value: Value, to: Primitive) -> Option<Value> {
        match value {
            Value::Null => Some(Value::Null),
            Value::List(items) => items
                .into_iter()
                .map(|item| self.coerce(item, to))
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            scalar => {
                let from = scalar.primitive()?;
                if from == to {
                    return Some(scalar);
                }
                if self.bridges(from, to) {
                    widen(scalar, to)
                } else if self.bridges(to, from) {
                    narrow(scalar, to)
                } else {
                    None
                }
            }
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn widen(value: Value, to: Primitive) -> Option<Value> {
    match (value, to) {
        (Value::Int(n), Primitive::Float) if n.unsigned_abs() <= F64_SAFE_I64.unsigned_abs() => {
            Some(Value::Float(n as f64))
        }
        (Value::Bool(b), Primitive::Int) => Some(Value::Int(i64::from(b))),
        _ => None,
    }
}

// inverse of `widen`, defined only where it is exact
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn narrow(value: Value, to: Primitive) -> Option<Value> {
    match (value, to) {
        (Value::Float(f), Primitive::Int)
            if f.fract() == 0.0 && f.abs() <= F64_SAFE_I64 as f64 =>
        {
            Some(Value::Int(f as i64))
        }
        (Value::Int(0), Primitive::Bool) => Some(Value::Bool(false)),
        (Value::Int(1), Primitive::Bool) => Some(Value::Bool(true)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_only_bridges_identical_types() {
        let policy = CoercionPolicy::Strict;
        assert!(policy.bridges(Primitive::Int, Primitive::Int));
        assert!(!policy.bridges(Primitive::Int, Primitive::Float));
        assert_eq!(policy.coerce(Value::Int(1), Primitive::Float), None);
    }

    #[test]
    fn numeric_widen_pairs_are_declared_one_way() {
        let policy = CoercionPolicy::NumericWiden;
        assert!(policy.bridges(Primitive::Int, Primitive::Float));
        assert!(policy.bridges(Primitive::Bool, Primitive::Int));
        assert!(!policy.bridges(Primitive::Float, Primitive::Int));
        assert!(!policy.bridges(Primitive::Int, Primitive::Bool));
        assert_eq!(
            policy.coerce(Value::Int(2), Primitive::Float),
            Some(Value::Float(2.0))
        );
        assert_eq!(
            policy.coerce(Value::Bool(true), Primitive::Int),
            Some(Value::Int(1))
        );
    }

    #[test]
    fn numeric_widen_narrows_back_only_when_exact() {
        let policy = CoercionPolicy::NumericWiden;
        assert_eq!(
            policy.coerce(Value::Float(-2.0), Primitive::Int),
            Some(Value::Int(-2))
        );
        assert_eq!(policy.coerce(Value::Float(2.5), Primitive::Int), None);
        assert_eq!(policy.coerce(Value::Float(f64::NAN), Primitive::Int), None);
        assert_eq!(policy.coerce(Value::Float(1e300), Primitive::Int), None);

        assert_eq!(
            policy.coerce(Value::Int(0), Primitive::Bool),
            Some(Value::Bool(false))
        );
        assert_eq!(
            policy.coerce(Value::Int(1), Primitive::Bool),
            Some(Value::Bool(true))
        );
        assert_eq!(policy.coerce(Value::Int(2), Primitive::Bool), None);

        assert_eq!(CoercionPolicy::Strict.coerce(Value::Float(2.0), Primitive::Int), None);
    }

    #[test]
    fn numeric_widen_rejects_unsafe_integers() {
        let policy = CoercionPolicy::NumericWiden;
        assert_eq!(policy.coerce(Value::Int(i64::MAX), Primitive::Float), None);
    }

    #[test]
    fn lists_coerce_element_wise() {
        let policy = CoercionPolicy::NumericWiden;
        let list = Value::List(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(
            policy.coerce(list, Primitive::Float),
            Some(Value::List(vec![Value::Float(1.0), Value::Float(2.0)]))
        );
    }

    #[test]
    fn parses_from_config_spelling() {
        let policy: CoercionPolicy =
            serde_json::from_str("\"numeric_widen\"").expect("snake_case policy");
        assert_eq!(policy, CoercionPolicy::NumericWiden);
    }
}
