//! Declaration hooks.
//!
//! `declare` is the single point where a finished schema enters the
//! registry. Persistence declarations only register; validation
//! declarations first assert that a same-named persistence schema exists,
//! so a counterpart-less validation type fails while loading and never
//! reaches instance construction.

use crate::{
    error::RegistryError,
    node::{
        PersistenceSchema, PersistenceSchemaBuilder, ValidationSchema, ValidationSchemaBuilder,
    },
    registry::Registry,
};
use std::sync::Arc;

impl PersistenceSchemaBuilder {
    /// Finalise the schema and register it.
    pub fn declare(self, registry: &mut Registry) -> Result<Arc<PersistenceSchema>, RegistryError> {
        let schema = self.build()?;

        registry.register_persistence(schema)
    }
}

impl ValidationSchemaBuilder {
    /// Finalise the schema, assert its persistence counterpart and register it.
    pub fn declare(self, registry: &mut Registry) -> Result<Arc<ValidationSchema>, RegistryError> {
        let schema = self.build()?;

        if registry.lookup_persistence(schema.name()).is_err() {
            return Err(RegistryError::MissingPersistenceCounterpart {
                name: schema.name().to_string(),
            });
        }

        registry.register_validation(schema)
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::SchemaError, prelude::*};

    fn declare_note_persistence(registry: &mut Registry) -> Result<(), RegistryError> {
        PersistenceSchema::builder("Note")
            .field(
                PersistenceField::new("id", Primitive::Int)
                    .primary_key()
                    .auto_increment(),
            )
            .field(PersistenceField::new("title", Primitive::Text).max_len(200))
            .field(PersistenceField::new("content", Primitive::Text))
            .declare(registry)?;

        Ok(())
    }

    #[test]
    fn note_pair_declares_in_order() {
        let mut registry = Registry::new();
        declare_note_persistence(&mut registry).expect("persistence Note");

        let note = ValidationSchema::builder("Note")
            .field(ValidationField::new("id", Primitive::Int))
            .field(ValidationField::new("title", Primitive::Text))
            .field(ValidationField::new("content", Primitive::Text))
            .declare(&mut registry)
            .expect("validation Note");

        assert_eq!(note.name(), "Note");
        assert!(registry.check_parity().is_ok());
    }

    #[test]
    fn comment_without_counterpart_fails_at_declaration() {
        let mut registry = Registry::new();
        declare_note_persistence(&mut registry).expect("persistence Note");

        let err = ValidationSchema::builder("Comment")
            .field(ValidationField::new("id", Primitive::Int))
            .field(ValidationField::new("text", Primitive::Text))
            .declare(&mut registry)
            .expect_err("Comment has no persistence counterpart");

        assert_eq!(
            err,
            RegistryError::MissingPersistenceCounterpart {
                name: "Comment".to_string()
            }
        );
        assert!(err.to_string().contains("'Comment'"));
        assert_eq!(registry.list_registered().validation, Vec::<String>::new());
    }

    #[test]
    fn validation_before_persistence_fails() {
        let mut registry = Registry::new();
        let err = ValidationSchema::builder("Note")
            .field(ValidationField::new("id", Primitive::Int))
            .declare(&mut registry)
            .expect_err("declared out of order");
        assert!(matches!(
            err,
            RegistryError::MissingPersistenceCounterpart { .. }
        ));

        // declaring the persistence side afterwards does not retroactively admit it
        declare_note_persistence(&mut registry).expect("persistence Note");
        assert!(!registry.contains_validation("Note"));
    }

    #[test]
    fn malformed_schema_surfaces_as_invalid_schema() {
        let mut registry = Registry::new();
        let err = PersistenceSchema::builder("Note")
            .declare(&mut registry)
            .expect_err("no fields");
        assert_eq!(
            err,
            RegistryError::InvalidSchema(SchemaError::NoFields {
                type_name: "Note".to_string()
            })
        );
    }
}
