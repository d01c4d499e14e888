//! Conversion between the two halves of a model pair.


use crate::{
    error::{TransformError, ValidateError},
    instance::{PersistenceInstance, ValidationInstance},
    patch::ValidationPatch,
};
use dualmodel_primitives::{CoercionPolicy, Primitive, Value};
use dualmodel_schema::{
    error::FieldError,
    node::{PersistenceField, PersistenceSchema, ValidationField, ValidationSchema},
    types::Cardinality,
};
use std::sync::Arc;

///
/// DumpOptions
///
/// Controls which validation fields count as present when building a
/// persistence instance.
///
/// - `exclude_unset`: fields filled from defaults are treated as absent.
/// - `exclude_none`: null fields are treated as absent.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DumpOptions {
    pub exclude_unset: bool,
    pub exclude_none: bool,
}

impl DumpOptions {
    #[must_use]
    pub const fn exclude_unset() -> Self {
        Self {
            exclude_unset: true,
            exclude_none: false,
        }
    }
}

///
/// Transformer
///
/// Stateless converter carrying the coercion policy it applies.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Transformer {
    policy: CoercionPolicy,
}

impl Transformer {
    #[must_use]
    pub const fn new(policy: CoercionPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> CoercionPolicy {
        self.policy
    }

    ///
    /// persistence_to_validation
    ///
    /// Read every target field from the same-named persistence slot. A
    /// null slot is an explicit null for optional fields and absence
    /// otherwise; absent fields take their default or fail. Persistence
    /// columns the target does not declare are dropped.
    ///

    pub fn persistence_to_validation(
        &self,
        instance: &PersistenceInstance,
        target: &Arc<ValidationSchema>,
    ) -> Result<ValidationInstance, TransformError> {
        let source = instance.schema();
        let mut supplied = Vec::with_capacity(target.fields().len());

        for vfield in target.fields() {
            let slot = match source.position(&vfield.name) {
                Some(index) => {
                    let pfield = &source.fields()[index];
                    self.check_bridge(target.name(), pfield.storage, vfield)?;

                    Some(&instance.values()[index])
                }
                None => None,
            };

            match slot {
                Some(Value::Null) if vfield.cardinality == Cardinality::Opt => {
                    supplied.push((vfield.name.as_str(), Value::Null));
                }
                Some(value) if !value.is_null() => {
                    let value = self.coerce(target.name(), &vfield.name, value.clone(), vfield.ty)?;
                    supplied.push((vfield.name.as_str(), value));
                }
                _ if vfield.is_required() => {
                    return Err(TransformError::missing(target.name(), &vfield.name));
                }
                _ => {}
            }
        }

        ValidationInstance::new(Arc::clone(target), supplied).map_err(TransformError::from)
    }

    ///
    /// validation_to_persistence
    ///
    /// Build an unsaved persistence instance from every validation field.
    /// Columns that receive nothing take their default, stay unset when
    /// nullable or store-assigned, and otherwise fail.
    ///

    pub fn validation_to_persistence(
        &self,
        instance: &ValidationInstance,
        target: &Arc<PersistenceSchema>,
    ) -> Result<PersistenceInstance, TransformError> {
        self.validation_to_persistence_with(instance, target, DumpOptions::default())
    }

    /// As `validation_to_persistence`, treating fields excluded by `options`
    /// as absent.
    pub fn validation_to_persistence_with(
        &self,
        instance: &ValidationInstance,
        target: &Arc<PersistenceSchema>,
        options: DumpOptions,
    ) -> Result<PersistenceInstance, TransformError> {
        let mut values = Vec::with_capacity(target.fields().len());

        for pfield in target.fields() {
            let present = match instance.field_at(&pfield.name) {
                Some((index, vfield, value)) => {
                    self.check_bridge(target.name(), pfield.storage, vfield)?;

                    let excluded = (options.exclude_unset && !instance.is_set_at(index))
                        || (options.exclude_none && value.is_null());

                    (!excluded).then_some(value)
                }
                None => None,
            };

            // explicit null clears a nullable column; elsewhere it reads as absent
            let value = match present {
                Some(Value::Null) if pfield.accepts_null() => Value::Null,
                Some(value) if !value.is_null() => {
                    self.coerce(target.name(), &pfield.name, value.clone(), pfield.storage)?
                }
                _ => absent_column(target.name(), pfield)?,
            };

            pfield
                .check(&value)
                .map_err(|source| ValidateError::field(target.name(), &pfield.name, source))?;
            values.push(value);
        }

        Ok(PersistenceInstance::from_checked(Arc::clone(target), values))
    }

    ///
    /// persistence_list_to_validation
    ///
    /// Element-wise and order-preserving. The first failure aborts the
    /// whole conversion and carries the element's index.
    ///

    pub fn persistence_list_to_validation(
        &self,
        instances: &[PersistenceInstance],
        target: &Arc<ValidationSchema>,
    ) -> Result<Vec<ValidationInstance>, TransformError> {
        instances
            .iter()
            .enumerate()
            .map(|(index, instance)| {
                self.persistence_to_validation(instance, target)
                    .map_err(|err| err.with_index(index))
            })
            .collect()
    }

    ///
    /// apply_partial_update
    ///
    /// Write every explicitly set patch field onto the instance. Patch
    /// fields without a persistence column are skipped. All values are
    /// checked before any is written, so a failed patch leaves the
    /// instance untouched.
    ///

    pub fn apply_partial_update<'a>(
        &self,
        instance: &'a mut PersistenceInstance,
        patch: &ValidationPatch,
    ) -> Result<&'a mut PersistenceInstance, TransformError> {
        if patch.type_name() != instance.type_name() {
            return Err(TransformError::PatchTarget {
                patch: patch.type_name().to_string(),
                instance: instance.type_name().to_string(),
            });
        }

        let schema = Arc::clone(instance.schema());
        let mut staged = Vec::with_capacity(patch.len());

        for (vfield, value) in patch.entries() {
            let Some(index) = schema.position(&vfield.name) else {
                continue;
            };
            let pfield = &schema.fields()[index];
            self.check_bridge(schema.name(), pfield.storage, vfield)?;

            let value = self.coerce(schema.name(), &pfield.name, value.clone(), pfield.storage)?;
            pfield
                .check(&value)
                .map_err(|source| ValidateError::field(schema.name(), &pfield.name, source))?;
            staged.push((index, value));
        }

        for (index, value) in staged {
            instance.write_checked(index, value);
        }

        Ok(instance)
    }

    // The declared pair is checked column → field whichever way values
    // travel. List fields have no persistence column type.
    fn check_bridge(
        &self,
        type_name: &str,
        storage: Primitive,
        vfield: &ValidationField,
    ) -> Result<(), TransformError> {
        if vfield.cardinality != Cardinality::Many && self.policy.bridges(storage, vfield.ty) {
            return Ok(());
        }

        Err(TransformError::TypeMismatch {
            type_name: type_name.to_string(),
            field: vfield.name.clone(),
            persistence: storage.to_string(),
            validation: vfield.type_label(),
        })
    }

    fn coerce(
        &self,
        type_name: &str,
        field: &str,
        value: Value,
        to: Primitive,
    ) -> Result<Value, TransformError> {
        let actual = value.label();

        self.policy.coerce(value, to).ok_or_else(|| {
            ValidateError::field(
                type_name,
                field,
                FieldError::WrongType {
                    expected: to.to_string(),
                    actual,
                },
            )
            .into()
        })
    }
}

// Value for a persistence column that received nothing.
fn absent_column(type_name: &str, pfield: &PersistenceField) -> Result<Value, TransformError> {
    match &pfield.default {
        Some(default) => Ok(default.resolve()),
        None if pfield.accepts_null() => Ok(Value::Null),
        None => Err(TransformError::missing(type_name, &pfield.name)),
    }
}

///
/// Free functions
/// strict policy
///

pub fn persistence_to_validation(
    instance: &PersistenceInstance,
    target: &Arc<ValidationSchema>,
) -> Result<ValidationInstance, TransformError> {
    Transformer::default().persistence_to_validation(instance, target)
}

pub fn validation_to_persistence(
    instance: &ValidationInstance,
    target: &Arc<PersistenceSchema>,
) -> Result<PersistenceInstance, TransformError> {
    Transformer::default().validation_to_persistence(instance, target)
}

pub fn validation_to_persistence_with(
    instance: &ValidationInstance,
    target: &Arc<PersistenceSchema>,
    options: DumpOptions,
) -> Result<PersistenceInstance, TransformError> {
    Transformer::default().validation_to_persistence_with(instance, target, options)
}

pub fn persistence_list_to_validation(
    instances: &[PersistenceInstance],
    target: &Arc<ValidationSchema>,
) -> Result<Vec<ValidationInstance>, TransformError> {
    Transformer::default().persistence_list_to_validation(instances, target)
}

pub fn apply_partial_update<'a>(
    instance: &'a mut PersistenceInstance,
    patch: &ValidationPatch,
) -> Result<&'a mut PersistenceInstance, TransformError> {
    Transformer::default().apply_partial_update(instance, patch)
}
