use crate::{
    error::RegistryError,
    node::{PersistenceSchema, ValidationSchema},
    types::SchemaKind,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};

///
/// Registry
///
/// Name-keyed maps of declared persistence and validation schemas.
/// Both maps preserve insertion order and share one ordinal counter,
/// so a validation schema always carries a larger ordinal than its
/// persistence counterpart.
///

#[derive(Debug, Default)]
pub struct Registry {
    persistence: Vec<Arc<PersistenceSchema>>,
    validation: Vec<Arc<ValidationSchema>>,
    persistence_index: BTreeMap<String, usize>,
    validation_index: BTreeMap<String, usize>,
    next_ordinal: u64,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a persistence schema; never overwrites an existing name.
    pub fn register_persistence(
        &mut self,
        mut schema: PersistenceSchema,
    ) -> Result<Arc<PersistenceSchema>, RegistryError> {
        if self.persistence_index.contains_key(schema.name()) {
            return Err(RegistryError::DuplicateRegistration {
                kind: SchemaKind::Persistence,
                name: schema.name().to_string(),
            });
        }

        schema.set_ordinal(self.take_ordinal());
        let schema = Arc::new(schema);
        self.persistence_index
            .insert(schema.name().to_string(), self.persistence.len());
        self.persistence.push(Arc::clone(&schema));

        Ok(schema)
    }

    /// Insert a validation schema whose persistence counterpart is already present.
    pub fn register_validation(
        &mut self,
        mut schema: ValidationSchema,
    ) -> Result<Arc<ValidationSchema>, RegistryError> {
        if !self.persistence_index.contains_key(schema.name()) {
            return Err(RegistryError::MissingPersistenceCounterpart {
                name: schema.name().to_string(),
            });
        }
        if self.validation_index.contains_key(schema.name()) {
            return Err(RegistryError::DuplicateRegistration {
                kind: SchemaKind::Validation,
                name: schema.name().to_string(),
            });
        }

        schema.set_ordinal(self.take_ordinal());
        let schema = Arc::new(schema);
        self.validation_index
            .insert(schema.name().to_string(), self.validation.len());
        self.validation.push(Arc::clone(&schema));

        Ok(schema)
    }

    pub fn lookup_persistence(&self, name: &str) -> Result<&Arc<PersistenceSchema>, RegistryError> {
        self.persistence_index
            .get(name)
            .map(|&i| &self.persistence[i])
            .ok_or_else(|| RegistryError::UnknownType {
                kind: SchemaKind::Persistence,
                name: name.to_string(),
            })
    }

    pub fn lookup_validation(&self, name: &str) -> Result<&Arc<ValidationSchema>, RegistryError> {
        self.validation_index
            .get(name)
            .map(|&i| &self.validation[i])
            .ok_or_else(|| RegistryError::UnknownType {
                kind: SchemaKind::Validation,
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn contains_validation(&self, name: &str) -> bool {
        self.validation_index.contains_key(name)
    }

    pub fn persistence_schemas(&self) -> impl Iterator<Item = &Arc<PersistenceSchema>> {
        self.persistence.iter()
    }

    /// Names of every registered type, in registration order.
    #[must_use]
    pub fn list_registered(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            persistence: self.persistence.iter().map(|s| s.name().to_string()).collect(),
            validation: self.validation.iter().map(|s| s.name().to_string()).collect(),
        }
    }

    /// Re-check the counterpart invariant over the whole registry.
    pub fn check_parity(&self) -> Result<(), RegistryError> {
        for schema in &self.validation {
            let counterpart = self.lookup_persistence(schema.name()).map_err(|_| {
                RegistryError::MissingPersistenceCounterpart {
                    name: schema.name().to_string(),
                }
            })?;
            if counterpart.ordinal() >= schema.ordinal() {
                return Err(RegistryError::MissingPersistenceCounterpart {
                    name: schema.name().to_string(),
                });
            }
        }

        Ok(())
    }

    const fn take_ordinal(&mut self) -> u64 {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        ordinal
    }
}

///
/// RegistrySnapshot
/// introspection view of the registered names
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrySnapshot {
    pub persistence: Vec<String>,
    pub validation: Vec<String>,
}

impl RegistrySnapshot {
    /// Persistence types that have no validation counterpart (yet).
    #[must_use]
    pub fn unpaired(&self) -> Vec<&str> {
        self.persistence
            .iter()
            .filter(|name| !self.validation.contains(name))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{PersistenceField, ValidationField};
    use dualmodel_primitives::Primitive;

    fn persistence(name: &str) -> PersistenceSchema {
        PersistenceSchema::builder(name)
            .field(PersistenceField::new("id", Primitive::Int).primary_key())
            .build()
            .expect("valid persistence schema")
    }

    fn validation(name: &str) -> ValidationSchema {
        ValidationSchema::builder(name)
            .field(ValidationField::new("id", Primitive::Int))
            .build()
            .expect("valid validation schema")
    }

    #[test]
    fn duplicate_persistence_does_not_overwrite() {
        let mut registry = Registry::new();
        let first = registry
            .register_persistence(persistence("Note"))
            .expect("first registration");

        let err = registry
            .register_persistence(persistence("Note"))
            .expect_err("second registration should fail");
        assert_eq!(
            err,
            RegistryError::DuplicateRegistration {
                kind: SchemaKind::Persistence,
                name: "Note".to_string(),
            }
        );

        let current = registry.lookup_persistence("Note").expect("still registered");
        assert!(Arc::ptr_eq(current, &first));
    }

    #[test]
    fn validation_requires_counterpart() {
        let mut registry = Registry::new();
        let err = registry
            .register_validation(validation("Comment"))
            .expect_err("missing counterpart");
        assert_eq!(
            err,
            RegistryError::MissingPersistenceCounterpart {
                name: "Comment".to_string()
            }
        );
        assert!(!registry.contains_validation("Comment"));
    }

    #[test]
    fn duplicate_validation_is_rejected() {
        let mut registry = Registry::new();
        registry.register_persistence(persistence("Note")).unwrap();
        registry.register_validation(validation("Note")).unwrap();
        let err = registry
            .register_validation(validation("Note"))
            .expect_err("second validation should fail");
        assert!(matches!(
            err,
            RegistryError::DuplicateRegistration {
                kind: SchemaKind::Validation,
                ..
            }
        ));
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut registry = Registry::new();
        registry.register_persistence(persistence("Note")).unwrap();
        registry.register_persistence(persistence("note")).unwrap();
        assert!(matches!(
            registry.lookup_persistence("NOTE"),
            Err(RegistryError::UnknownType { .. })
        ));
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        let mut registry = Registry::new();
        let note = registry.register_persistence(persistence("Note")).unwrap();
        let task = registry.register_persistence(persistence("Task")).unwrap();
        let note_v = registry.register_validation(validation("Note")).unwrap();

        assert_eq!(note.ordinal(), Some(0));
        assert_eq!(task.ordinal(), Some(1));
        assert_eq!(note_v.ordinal(), Some(2));
        assert!(registry.check_parity().is_ok());
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let mut registry = Registry::new();
        for name in ["Task", "Contact", "Note"] {
            registry.register_persistence(persistence(name)).unwrap();
        }
        registry.register_validation(validation("Note")).unwrap();

        let snapshot = registry.list_registered();
        assert_eq!(snapshot.persistence, ["Task", "Contact", "Note"]);
        assert_eq!(snapshot.validation, ["Note"]);
        assert_eq!(snapshot.unpaired(), ["Task", "Contact"]);
    }

    #[test]
    fn lookup_unknown_reports_kind_and_name() {
        let registry = Registry::new();
        let err = registry.lookup_validation("Ghost").expect_err("unknown type");
        assert_eq!(err.to_string(), "unknown validation type 'Ghost'");
        assert_eq!(err.type_name(), Some("Ghost"));
    }
}
