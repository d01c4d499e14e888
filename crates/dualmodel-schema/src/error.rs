use crate::{node::ConstraintViolation, types::SchemaKind};
use thiserror::Error as ThisError;

///
/// FieldError
///
/// A single value rejected by a single field descriptor.
/// Callers add the type and field name as context.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum FieldError {
    #[error("expected {expected}, found {actual}")]
    WrongType {
        expected: String,
        actual: &'static str,
    },

    #[error("null is not allowed")]
    NotNullable,

    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
}

///
/// SchemaError
///
/// Structural problems found while finalising a schema declaration.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("type '{type_name}' declares no fields")]
    NoFields { type_name: String },

    #[error("type '{type_name}' declares field '{field}' more than once")]
    DuplicateField { type_name: String, field: String },

    #[error("type '{type_name}' declares more than one primary key")]
    MultiplePrimaryKeys { type_name: String },

    #[error("field '{type_name}.{field}': {constraint} does not apply to {field_type}")]
    ConstraintPlacement {
        type_name: String,
        field: String,
        constraint: String,
        field_type: String,
    },

    #[error("field '{type_name}.{field}': default value is invalid: {source}")]
    InvalidDefault {
        type_name: String,
        field: String,
        #[source]
        source: FieldError,
    },
}

///
/// RegistryError
///
/// Failures of the declaration-time registry contract.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("{kind} type '{name}' is already registered")]
    DuplicateRegistration { kind: SchemaKind, name: String },

    #[error(
        "validation type '{name}' has no corresponding persistence type; declare persistence type '{name}' first"
    )]
    MissingPersistenceCounterpart { name: String },

    #[error("unknown {kind} type '{name}'")]
    UnknownType { kind: SchemaKind, name: String },

    #[error(transparent)]
    InvalidSchema(#[from] SchemaError),

    #[error("model registry has already been initialized")]
    AlreadyRegistered,

    #[error("model registry has not been initialized")]
    NotRegistered,
}

impl RegistryError {
    /// Type name the error is about, if any.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateRegistration { name, .. }
            | Self::MissingPersistenceCounterpart { name }
            | Self::UnknownType { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}
