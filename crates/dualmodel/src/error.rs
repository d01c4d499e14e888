use derive_more::Display;
use dualmodel_core::{TransformError, ValidateError};
use dualmodel_schema::error::{RegistryError, SchemaError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<RegistryError> for Error {
    fn from(err: RegistryError) -> Self {
        let (kind, origin) = match &err {
            RegistryError::DuplicateRegistration { .. } => {
                (ErrorKind::DuplicateRegistration, ErrorOrigin::Declaration)
            }
            RegistryError::MissingPersistenceCounterpart { .. } => {
                (ErrorKind::MissingPersistenceCounterpart, ErrorOrigin::Declaration)
            }
            RegistryError::InvalidSchema(_) => (ErrorKind::Schema, ErrorOrigin::Declaration),
            RegistryError::UnknownType { .. } => (ErrorKind::UnknownType, ErrorOrigin::Registry),
            RegistryError::AlreadyRegistered => {
                (ErrorKind::AlreadyRegistered, ErrorOrigin::Registry)
            }
            RegistryError::NotRegistered => (ErrorKind::NotRegistered, ErrorOrigin::Registry),
        };

        Self::new(kind, origin, err.to_string())
    }
}

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        Self::new(ErrorKind::Schema, ErrorOrigin::Declaration, err.to_string())
    }
}

impl From<ValidateError> for Error {
    fn from(err: ValidateError) -> Self {
        Self::new((&err).into(), ErrorOrigin::Instance, err.to_string())
    }
}

impl From<TransformError> for Error {
    fn from(err: TransformError) -> Self {
        let kind = match err.leaf() {
            TransformError::MissingField { .. } => ErrorKind::MissingField,
            TransformError::TypeMismatch { .. } | TransformError::PatchTarget { .. } => {
                ErrorKind::TypeMismatch
            }
            TransformError::Validate(inner) => inner.into(),
            TransformError::AtIndex { .. } => ErrorKind::Validation,
        };

        Self::new(kind, ErrorOrigin::Transform, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum ErrorKind {
    /// A type name was declared twice on the same side.
    DuplicateRegistration,

    /// A validation type was declared before (or without) its persistence type.
    MissingPersistenceCounterpart,

    UnknownType,

    /// A required field had neither a value nor a default.
    MissingField,

    /// Declared field types of a model pair cannot be bridged.
    TypeMismatch,

    /// A value was rejected by a field.
    Validation,

    /// A schema declaration is malformed.
    Schema,

    AlreadyRegistered,
    NotRegistered,
}

impl From<&ValidateError> for ErrorKind {
    fn from(err: &ValidateError) -> Self {
        match err {
            ValidateError::MissingField { .. } => Self::MissingField,
            ValidateError::UnknownField { .. } | ValidateError::Field { .. } => Self::Validation,
        }
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Declaration,
    Registry,
    Transform,
    Instance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualmodel_schema::types::SchemaKind;

    #[test]
    fn registry_errors_keep_their_kind() {
        let err: Error = RegistryError::MissingPersistenceCounterpart {
            name: "Comment".to_string(),
        }
        .into();

        assert_eq!(err.kind, ErrorKind::MissingPersistenceCounterpart);
        assert_eq!(err.origin, ErrorOrigin::Declaration);
        assert!(err.message.contains("Comment"));

        let err: Error = RegistryError::UnknownType {
            kind: SchemaKind::Validation,
            name: "Ghost".to_string(),
        }
        .into();
        assert_eq!(err.kind, ErrorKind::UnknownType);
        assert_eq!(err.origin, ErrorOrigin::Registry);
    }

    #[test]
    fn indexed_transform_errors_classify_by_leaf() {
        let err: Error = TransformError::MissingField {
            type_name: "Note".to_string(),
            field: "title".to_string(),
        }
        .with_index(3)
        .into();

        assert_eq!(err.kind, ErrorKind::MissingField);
        assert_eq!(err.origin, ErrorOrigin::Transform);
        assert!(err.message.starts_with("element [3]"));
    }

    #[test]
    fn validation_inside_transform_is_classified() {
        let err: Error = TransformError::Validate(ValidateError::UnknownField {
            type_name: "Note".to_string(),
            field: "body".to_string(),
        })
        .into();

        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn serializes_as_plain_data() {
        let err = Error::new(ErrorKind::NotRegistered, ErrorOrigin::Registry, "not yet");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"NotRegistered","origin":"Registry","message":"not yet"}"#
        );
    }
}
