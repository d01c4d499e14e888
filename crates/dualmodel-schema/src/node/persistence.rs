use crate::{
    error::{FieldError, SchemaError},
    node::FieldDefault,
    validate::naming::{validate_field_name, validate_type_name},
};
use dualmodel_primitives::{Primitive, Value};
use std::collections::BTreeSet;

///
/// PersistenceField
/// one storage column
///

#[derive(Clone, Debug)]
pub struct PersistenceField {
    pub name: String,
    pub storage: Primitive,
    pub max_len: Option<usize>,
    pub nullable: bool,
    pub unique: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub default: Option<FieldDefault>,
}

impl PersistenceField {
    #[must_use]
    pub fn new(name: impl Into<String>, storage: Primitive) -> Self {
        Self {
            name: name.into(),
            storage,
            max_len: None,
            nullable: false,
            unique: false,
            primary_key: false,
            auto_increment: false,
            default: None,
        }
    }

    #[must_use]
    pub const fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// The store assigns this column, so it may stay unset until saved.
    #[must_use]
    pub const fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    #[must_use]
    pub fn default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// Whether the column may hold (or be left at) `Null`.
    #[must_use]
    pub const fn accepts_null(&self) -> bool {
        self.nullable || self.auto_increment
    }

    /// Check a value against the column's storage type and length limit.
    pub fn check(&self, value: &Value) -> Result<(), FieldError> {
        if value.is_null() {
            return if self.accepts_null() {
                Ok(())
            } else {
                Err(FieldError::NotNullable)
            };
        }

        if value.primitive() != Some(self.storage) {
            return Err(FieldError::WrongType {
                expected: self.storage.to_string(),
                actual: value.label(),
            });
        }

        if let (Some(max), Some(len)) = (self.max_len, value.len())
            && len > max
        {
            return Err(crate::node::ConstraintViolation::TooLong { max, len }.into());
        }

        Ok(())
    }
}

///
/// PersistenceSchema
///

#[derive(Clone, Debug)]
pub struct PersistenceSchema {
    name: String,
    fields: Vec<PersistenceField>,
    ordinal: Option<u64>,
}

impl PersistenceSchema {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> PersistenceSchemaBuilder {
        PersistenceSchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[PersistenceField] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&PersistenceField> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    #[must_use]
    pub fn primary_key(&self) -> Option<&PersistenceField> {
        self.fields.iter().find(|f| f.primary_key)
    }

    /// Declaration order stamped by the registry; `None` until registered.
    #[must_use]
    pub const fn ordinal(&self) -> Option<u64> {
        self.ordinal
    }

    pub(crate) const fn set_ordinal(&mut self, ordinal: u64) {
        self.ordinal = Some(ordinal);
    }
}

///
/// PersistenceSchemaBuilder
///

#[derive(Clone, Debug)]
pub struct PersistenceSchemaBuilder {
    name: String,
    fields: Vec<PersistenceField>,
}

impl PersistenceSchemaBuilder {
    #[must_use]
    pub fn field(mut self, field: PersistenceField) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finalise the field list without registering the schema.
    pub fn build(self) -> Result<PersistenceSchema, SchemaError> {
        let type_name = self.name;
        validate_type_name(&type_name)?;

        if self.fields.is_empty() {
            return Err(SchemaError::NoFields { type_name });
        }

        let mut seen = BTreeSet::new();
        let mut primary_keys = 0usize;
        for field in &self.fields {
            validate_field_name(&field.name)?;
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    type_name: type_name.clone(),
                    field: field.name.clone(),
                });
            }
            if field.primary_key {
                primary_keys += 1;
            }
            if field.max_len.is_some() && !field.storage.supports_len() {
                return Err(SchemaError::ConstraintPlacement {
                    type_name: type_name.clone(),
                    field: field.name.clone(),
                    constraint: "max_len".to_string(),
                    field_type: field.storage.to_string(),
                });
            }
            if let Some(value) = field.default.as_ref().and_then(FieldDefault::fixed) {
                field
                    .check(value)
                    .map_err(|source| SchemaError::InvalidDefault {
                        type_name: type_name.clone(),
                        field: field.name.clone(),
                        source,
                    })?;
            }
        }

        if primary_keys > 1 {
            return Err(SchemaError::MultiplePrimaryKeys { type_name });
        }

        Ok(PersistenceSchema {
            name: type_name,
            fields: self.fields,
            ordinal: None,
        })
    }
}
