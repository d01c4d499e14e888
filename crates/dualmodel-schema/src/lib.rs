pub mod build;
pub mod declare;
pub mod error;
pub mod node;
pub mod registry;
pub mod types;
pub mod validate;

/// Maximum length for type name identifiers.
pub const MAX_TYPE_NAME_LEN: usize = 64;

/// Maximum length for field name identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::{FieldError, RegistryError, SchemaError},
        node::*,
        registry::{Registry, RegistrySnapshot},
        types::{Cardinality, SchemaKind},
    };
    pub use dualmodel_primitives::{CoercionPolicy, Primitive, Timestamp, Value};
}
