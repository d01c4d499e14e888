use dualmodel_primitives::{Timestamp, Value};

///
/// FieldDefault
///
/// Value a field takes when nothing is supplied for it.
/// Factories run on every use, so time-based defaults are never stale.
///

#[derive(Clone, Debug)]
pub enum FieldDefault {
    Value(Value),
    Factory(fn() -> Value),
}

impl FieldDefault {
    #[must_use]
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Current wall-clock time at the moment the default is resolved.
    #[must_use]
    pub const fn now() -> Self {
        Self::Factory(now)
    }

    #[must_use]
    pub const fn empty_list() -> Self {
        Self::Factory(empty_list)
    }

    #[must_use]
    pub fn resolve(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Factory(factory) => factory(),
        }
    }

    // only fixed values can be checked at declaration time
    #[must_use]
    pub const fn fixed(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Factory(_) => None,
        }
    }
}

fn now() -> Value {
    Value::Timestamp(Timestamp::now())
}

const fn empty_list() -> Value {
    Value::List(Vec::new())
}
