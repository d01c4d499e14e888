//! Registry-aware conversions.
//!
//! Each helper resolves the counterpart schema by the instance's own type
//! name through the process registry, then defers to the transformer
//! installed by `register_with`.

use crate::{Error, ErrorKind, ErrorOrigin, catalog};
use dualmodel_core::prelude::*;
use std::sync::{Arc, OnceLock};

static TRANSFORMER: OnceLock<Transformer> = OnceLock::new();

// only reachable from the load phase that claimed the registry
pub(crate) fn install(transformer: Transformer) -> Result<(), Error> {
    TRANSFORMER
        .set(transformer)
        .map_err(|_| RegistryError::AlreadyRegistered.into())
}

/// The process transformer; strict until the registry is loaded.
#[must_use]
pub fn transformer() -> Transformer {
    TRANSFORMER.get().copied().unwrap_or_default()
}

/// Fresh, unset persistence instance of a registered type.
pub fn new_persistence(type_name: &str) -> Result<PersistenceInstance, Error> {
    let schema = crate::registry()?.lookup_persistence(type_name)?;

    Ok(PersistenceInstance::new(Arc::clone(schema)))
}

/// Validate input against a registered validation type.
pub fn validate<I, K, V>(type_name: &str, input: I) -> Result<ValidationInstance, Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let schema = crate::registry()?.lookup_validation(type_name)?;

    Ok(ValidationInstance::new(Arc::clone(schema), input)?)
}

/// Empty patch for a registered validation type.
pub fn new_patch(type_name: &str) -> Result<ValidationPatch, Error> {
    let schema = crate::registry()?.lookup_validation(type_name)?;

    Ok(ValidationPatch::new(Arc::clone(schema)))
}

/// Convert to the same-named validation type.
pub fn to_validation(instance: &PersistenceInstance) -> Result<ValidationInstance, Error> {
    let target = crate::registry()?.lookup_validation(instance.type_name())?;

    Ok(transformer().persistence_to_validation(instance, target)?)
}

/// Convert to a projection such as `NoteBasic`. The instance must be of
/// the projection's base type.
pub fn to_projection(
    instance: &PersistenceInstance,
    projection: &str,
) -> Result<ValidationInstance, Error> {
    let target = catalog::projection(projection).ok_or_else(|| {
        Error::from(RegistryError::UnknownType {
            kind: SchemaKind::Validation,
            name: projection.to_string(),
        })
    })??;

    if target.base != instance.type_name() {
        return Err(Error::new(
            ErrorKind::TypeMismatch,
            ErrorOrigin::Transform,
            format!(
                "projection '{projection}' reads '{}', not '{}'",
                target.base,
                instance.type_name()
            ),
        ));
    }

    Ok(transformer().persistence_to_validation(instance, &target.schema)?)
}

/// Convert a list of instances of one type, preserving order.
pub fn to_validation_list(
    type_name: &str,
    instances: &[PersistenceInstance],
) -> Result<Vec<ValidationInstance>, Error> {
    let target = crate::registry()?.lookup_validation(type_name)?;

    Ok(transformer().persistence_list_to_validation(instances, target)?)
}

/// Convert to the same-named persistence type.
pub fn to_persistence(instance: &ValidationInstance) -> Result<PersistenceInstance, Error> {
    to_persistence_with(instance, DumpOptions::default())
}

pub fn to_persistence_with(
    instance: &ValidationInstance,
    options: DumpOptions,
) -> Result<PersistenceInstance, Error> {
    let target = crate::registry()?.lookup_persistence(instance.type_name())?;

    Ok(transformer().validation_to_persistence_with(instance, target, options)?)
}

/// Apply a patch in place.
pub fn apply_update(instance: &mut PersistenceInstance, patch: &ValidationPatch) -> Result<(), Error> {
    transformer().apply_partial_update(instance, patch)?;

    Ok(())
}
