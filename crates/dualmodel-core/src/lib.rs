//! Runtime side of a model pair: instances, patches and the transformer.
//!
//! Nothing here performs I/O, blocks, or logs. Every operation except
//! `apply_partial_update` allocates a new instance and leaves its inputs
//! untouched.

pub mod error;
pub mod instance;
pub mod patch;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::{TransformError, ValidateError};
pub use instance::{PersistenceInstance, ValidationInstance};
pub use patch::ValidationPatch;
pub use transform::{
    DumpOptions, Transformer, apply_partial_update, persistence_list_to_validation,
    persistence_to_validation, validation_to_persistence, validation_to_persistence_with,
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::{TransformError, ValidateError},
        instance::{PersistenceInstance, ValidationInstance},
        patch::ValidationPatch,
        transform::{DumpOptions, Transformer},
    };
    pub use dualmodel_primitives::{CoercionPolicy, Primitive, Timestamp, Value};
    pub use dualmodel_schema::prelude::*;
}
