//! Schema descriptors.
//!
//! A schema is an ordered list of field descriptors built once with a
//! builder and shared as `Arc` for the life of the process. Persistence
//! schemas describe storage columns; validation schemas describe the
//! boundary representation of the same record.

mod constraint;
mod default;
mod persistence;
mod validation;

pub use constraint::{Constraint, ConstraintViolation};
pub use default::FieldDefault;
pub use persistence::{PersistenceField, PersistenceSchema, PersistenceSchemaBuilder};
pub use validation::{ValidationField, ValidationSchema, ValidationSchemaBuilder};
