use crate::{error::ValidateError, patch::ValidationPatch};
use dualmodel_primitives::Value;
use dualmodel_schema::node::{ValidationField, ValidationSchema};
use std::sync::Arc;

///
/// ValidationInstance
///
/// An immutable, fully validated record of a validation schema.
/// Remembers which fields the caller supplied explicitly, as opposed to
/// fields filled from declared defaults.
///

#[derive(Clone, Debug)]
pub struct ValidationInstance {
    schema: Arc<ValidationSchema>,
    values: Vec<Value>,
    explicit: Vec<bool>,
}

impl ValidationInstance {
    /// Validate `input` against the schema.
    ///
    /// Every field is checked, including defaults. Unknown names fail, and
    /// a field without a default that is not supplied fails with
    /// `MissingField`. When a name repeats, the last value wins.
    pub fn new<I, K, V>(schema: Arc<ValidationSchema>, input: I) -> Result<Self, ValidateError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut supplied: Vec<Option<Value>> = vec![None; schema.fields().len()];
        for (field, value) in input {
            let field = field.as_ref();
            let index = schema
                .position(field)
                .ok_or_else(|| ValidateError::unknown(schema.name(), field))?;
            supplied[index] = Some(value.into());
        }

        let mut values = Vec::with_capacity(supplied.len());
        let mut explicit = Vec::with_capacity(supplied.len());
        for (field, slot) in schema.fields().iter().zip(supplied) {
            let (value, was_set) = match (slot, &field.default) {
                (Some(value), _) => (value, true),
                (None, Some(default)) => (default.resolve(), false),
                (None, None) => {
                    return Err(ValidateError::MissingField {
                        type_name: schema.name().to_string(),
                        field: field.name.clone(),
                    });
                }
            };

            field
                .check(&value)
                .map_err(|source| ValidateError::field(schema.name(), &field.name, source))?;

            values.push(value);
            explicit.push(was_set);
        }

        Ok(Self {
            schema,
            values,
            explicit,
        })
    }

    #[must_use]
    pub const fn schema(&self) -> &Arc<ValidationSchema> {
        &self.schema
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        self.schema.name()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.schema.position(field).map(|i| &self.values[i])
    }

    /// Whether the field was supplied by the caller rather than defaulted.
    #[must_use]
    pub fn is_set(&self, field: &str) -> bool {
        self.schema.position(field).is_some_and(|i| self.explicit[i])
    }

    /// Names of explicitly supplied fields, in declaration order.
    pub fn fields_set(&self) -> impl Iterator<Item = &str> {
        self.schema
            .fields()
            .iter()
            .zip(&self.explicit)
            .filter(|(_, set)| **set)
            .map(|(field, _)| field.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ValidationField, &Value)> {
        self.schema.fields().iter().zip(&self.values)
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// A patch carrying only the explicitly supplied fields.
    #[must_use]
    pub fn to_patch(&self) -> ValidationPatch {
        let entries = self
            .explicit
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(|(i, _)| (i, self.values[i].clone()))
            .collect();

        ValidationPatch::from_checked(Arc::clone(&self.schema), entries)
    }

    pub(crate) fn field_at(&self, name: &str) -> Option<(usize, &ValidationField, &Value)> {
        let index = self.schema.position(name)?;

        Some((index, &self.schema.fields()[index], &self.values[index]))
    }

    pub(crate) fn is_set_at(&self, index: usize) -> bool {
        self.explicit[index]
    }
}

impl PartialEq for ValidationInstance {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name() == other.schema.name() && self.values == other.values
    }
}
