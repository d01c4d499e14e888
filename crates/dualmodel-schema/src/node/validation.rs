use crate::{
    error::{FieldError, SchemaError},
    node::{Constraint, FieldDefault},
    types::Cardinality,
    validate::naming::{validate_field_name, validate_type_name},
};
use dualmodel_primitives::{Primitive, Value};
use std::collections::BTreeSet;

///
/// ValidationField
/// one boundary-facing field
///

#[derive(Clone, Debug)]
pub struct ValidationField {
    pub name: String,
    pub ty: Primitive,
    pub cardinality: Cardinality,
    pub constraints: Vec<Constraint>,
    pub default: Option<FieldDefault>,
}

impl ValidationField {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Primitive) -> Self {
        Self {
            name: name.into(),
            ty,
            cardinality: Cardinality::One,
            constraints: Vec::new(),
            default: None,
        }
    }

    #[must_use]
    pub const fn opt(mut self) -> Self {
        self.cardinality = Cardinality::Opt;
        self
    }

    #[must_use]
    pub const fn many(mut self) -> Self {
        self.cardinality = Cardinality::Many;
        self
    }

    #[must_use]
    pub fn max_len(self, max_len: usize) -> Self {
        self.constraint(Constraint::MaxLen(max_len))
    }

    #[must_use]
    pub fn min(self, min: i64) -> Self {
        self.constraint(Constraint::Min(min))
    }

    #[must_use]
    pub fn max(self, max: i64) -> Self {
        self.constraint(Constraint::Max(max))
    }

    #[must_use]
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    #[must_use]
    pub fn default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// A field without a default must be supplied, even when it is optional.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Declared type including cardinality, e.g. `Option<Int>` or `List<Text>`.
    #[must_use]
    pub fn type_label(&self) -> String {
        match self.cardinality {
            Cardinality::One => self.ty.to_string(),
            Cardinality::Opt => format!("Option<{}>", self.ty),
            Cardinality::Many => format!("List<{}>", self.ty),
        }
    }

    /// Check a value against type, cardinality and constraints.
    pub fn check(&self, value: &Value) -> Result<(), FieldError> {
        match (self.cardinality, value) {
            (Cardinality::Opt, Value::Null) => return Ok(()),
            (_, Value::Null) => return Err(FieldError::NotNullable),
            (Cardinality::Many, Value::List(items)) => {
                if let Some(item) = items.iter().find(|item| item.primitive() != Some(self.ty)) {
                    return Err(FieldError::WrongType {
                        expected: self.ty.to_string(),
                        actual: item.label(),
                    });
                }
            }
            (Cardinality::Many, other) => {
                return Err(FieldError::WrongType {
                    expected: self.type_label(),
                    actual: other.label(),
                });
            }
            (_, other) if other.primitive() != Some(self.ty) => {
                return Err(FieldError::WrongType {
                    expected: self.ty.to_string(),
                    actual: other.label(),
                });
            }
            _ => {}
        }

        for constraint in &self.constraints {
            constraint.check(value)?;
        }

        Ok(())
    }
}

///
/// ValidationSchema
///

#[derive(Clone, Debug)]
pub struct ValidationSchema {
    name: String,
    fields: Vec<ValidationField>,
    ordinal: Option<u64>,
}

impl ValidationSchema {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ValidationSchemaBuilder {
        ValidationSchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[ValidationField] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&ValidationField> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Declaration order stamped by the registry; `None` for projections
    /// that were built but never declared.
    #[must_use]
    pub const fn ordinal(&self) -> Option<u64> {
        self.ordinal
    }

    pub(crate) const fn set_ordinal(&mut self, ordinal: u64) {
        self.ordinal = Some(ordinal);
    }
}

///
/// ValidationSchemaBuilder
///

#[derive(Clone, Debug)]
pub struct ValidationSchemaBuilder {
    name: String,
    fields: Vec<ValidationField>,
}

impl ValidationSchemaBuilder {
    #[must_use]
    pub fn field(mut self, field: ValidationField) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finalise the field list without registering the schema.
    pub fn build(self) -> Result<ValidationSchema, SchemaError> {
        let type_name = self.name;
        validate_type_name(&type_name)?;

        if self.fields.is_empty() {
            return Err(SchemaError::NoFields { type_name });
        }

        let mut seen = BTreeSet::new();
        for field in &self.fields {
            validate_field_name(&field.name)?;
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    type_name: type_name.clone(),
                    field: field.name.clone(),
                });
            }

            if let Some(constraint) = field
                .constraints
                .iter()
                .find(|c| !c.applies_to(field.ty, field.cardinality))
            {
                return Err(SchemaError::ConstraintPlacement {
                    type_name: type_name.clone(),
                    field: field.name.clone(),
                    constraint: constraint.to_string(),
                    field_type: field.type_label(),
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

        Ok(ValidationSchema {
            name: type_name,
            fields: self.fields,
            ordinal: None,
        })
    }
}
