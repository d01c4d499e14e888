//! Declared model pairs.
//!
//! Every persistence type is declared before any validation type, so the
//! counterpart assertion in the validation hook always has something to
//! find. Projections (`NoteBasic`, `TaskBasic`) are built on demand and
//! never enter the registry.

pub mod contact;
pub mod note;
pub mod organization;
pub mod task;

use dualmodel_schema::prelude::*;
use std::sync::Arc;

/// Declare the whole catalog into `registry`.
pub fn declare(registry: &mut Registry) -> Result<(), RegistryError> {
    let persistence = [
        contact::persistence(),
        organization::persistence(),
        note::persistence(),
        task::persistence(),
    ];
    for builder in persistence {
        let schema = builder.declare(registry)?;
        log::debug!(
            "declared persistence type '{}' (ordinal {:?})",
            schema.name(),
            schema.ordinal()
        );
    }

    let validation = [
        contact::validation(),
        organization::validation(),
        note::validation(),
        task::validation(),
    ];
    for builder in validation {
        let schema = builder.declare(registry)?;
        log::debug!(
            "declared validation type '{}' (ordinal {:?})",
            schema.name(),
            schema.ordinal()
        );
    }

    Ok(())
}

///
/// Projection
/// a validation-only view read from one persistence type
///

#[derive(Clone, Debug)]
pub struct Projection {
    pub base: &'static str,
    pub schema: Arc<ValidationSchema>,
}

/// Projection by name.
pub fn projection(name: &str) -> Option<Result<Projection, SchemaError>> {
    let (base, builder) = match name {
        note::BASIC_NAME => (note::NAME, note::basic()),
        task::BASIC_NAME => (task::NAME, task::basic()),
        _ => return None,
    };

    Some(builder.build().map(|schema| Projection {
        base,
        schema: Arc::new(schema),
    }))
}

// store-assigned key, optional on the validation side
fn optional_id() -> ValidationField {
    ValidationField::new("id", Primitive::Int)
        .opt()
        .default(FieldDefault::value(Value::Null))
}

fn stamp(name: &str) -> ValidationField {
    ValidationField::new(name, Primitive::Timestamp).default(FieldDefault::now())
}

fn stamp_column(name: &str) -> PersistenceField {
    PersistenceField::new(name, Primitive::Timestamp).default(FieldDefault::now())
}

fn id_list(name: &str) -> ValidationField {
    ValidationField::new(name, Primitive::Int)
        .many()
        .default(FieldDefault::empty_list())
}
