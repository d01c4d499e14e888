use dualmodel_schema::error::FieldError;
use thiserror::Error as ThisError;

///
/// ValidateError
///
/// Construction-time failures of an instance or patch.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("unknown field '{type_name}.{field}'")]
    UnknownField { type_name: String, field: String },

    #[error("required field '{type_name}.{field}' is missing")]
    MissingField { type_name: String, field: String },

    #[error("invalid value for '{type_name}.{field}': {source}")]
    Field {
        type_name: String,
        field: String,
        #[source]
        source: FieldError,
    },
}

impl ValidateError {
    pub(crate) fn field(type_name: &str, field: &str, source: FieldError) -> Self {
        Self::Field {
            type_name: type_name.to_string(),
            field: field.to_string(),
            source,
        }
    }

    pub(crate) fn unknown(type_name: &str, field: &str) -> Self {
        Self::UnknownField {
            type_name: type_name.to_string(),
            field: field.to_string(),
        }
    }
}

///
/// TransformError
///
/// Failures reported to the immediate caller of a transformer call.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum TransformError {
    #[error("required field '{type_name}.{field}' is missing and has no default")]
    MissingField { type_name: String, field: String },

    #[error(
        "field '{type_name}.{field}': persistence type {persistence} is incompatible with validation type {validation}"
    )]
    TypeMismatch {
        type_name: String,
        field: String,
        persistence: String,
        validation: String,
    },

    #[error("patch for '{patch}' cannot be applied to an instance of '{instance}'")]
    PatchTarget { patch: String, instance: String },

    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error("element [{index}]: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<Self>,
    },
}

impl TransformError {
    /// Attach the position of the failing element in a bulk conversion.
    #[must_use]
    pub fn with_index(self, index: usize) -> Self {
        Self::AtIndex {
            index,
            source: Box::new(self),
        }
    }

    /// Return the innermost, non-positional error.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::AtIndex { source, .. } => source.leaf(),
            _ => self,
        }
    }

    pub(crate) fn missing(type_name: &str, field: &str) -> Self {
        Self::MissingField {
            type_name: type_name.to_string(),
            field: field.to_string(),
        }
    }
}
