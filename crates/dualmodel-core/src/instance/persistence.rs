use crate::error::ValidateError;
use dualmodel_primitives::Value;
use dualmodel_schema::node::{PersistenceField, PersistenceSchema};
use std::sync::Arc;

///
/// PersistenceInstance
///
/// A live record of a persistence schema: one slot per declared column,
/// `Value::Null` meaning unset. Mutable field by field; every write is
/// checked against the column's storage type.
///

#[derive(Clone, Debug)]
pub struct PersistenceInstance {
    schema: Arc<PersistenceSchema>,
    values: Vec<Value>,
}

impl PersistenceInstance {
    /// A fresh instance with every column unset.
    #[must_use]
    pub fn new(schema: Arc<PersistenceSchema>) -> Self {
        let values = vec![Value::Null; schema.fields().len()];

        Self { schema, values }
    }

    /// Build an instance from `(column, value)` pairs; unnamed columns stay unset.
    pub fn from_values<I, K, V>(schema: Arc<PersistenceSchema>, values: I) -> Result<Self, ValidateError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut instance = Self::new(schema);
        for (field, value) in values {
            instance.set(field.as_ref(), value)?;
        }

        Ok(instance)
    }

    #[must_use]
    pub const fn schema(&self) -> &Arc<PersistenceSchema> {
        &self.schema
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        self.schema.name()
    }

    /// Current value of a column, or `None` if the schema has no such column.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.schema.position(field).map(|i| &self.values[i])
    }

    /// Whether the column exists and holds a non-null value.
    #[must_use]
    pub fn is_set(&self, field: &str) -> bool {
        self.get(field).is_some_and(|v| !v.is_null())
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<(), ValidateError> {
        let index = self
            .schema
            .position(field)
            .ok_or_else(|| ValidateError::unknown(self.schema.name(), field))?;
        let value = value.into();
        self.schema.fields()[index]
            .check(&value)
            .map_err(|source| ValidateError::field(self.schema.name(), field, source))?;

        self.values[index] = value;

        Ok(())
    }

    /// Columns paired with their current values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&PersistenceField, &Value)> {
        self.schema.fields().iter().zip(&self.values)
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    // Slots must already have been checked against their columns.
    pub(crate) fn from_checked(schema: Arc<PersistenceSchema>, values: Vec<Value>) -> Self {
        debug_assert_eq!(values.len(), schema.fields().len());

        Self { schema, values }
    }

    pub(crate) fn write_checked(&mut self, index: usize, value: Value) {
        self.values[index] = value;
    }
}

impl PartialEq for PersistenceInstance {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name() == other.schema.name() && self.values == other.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::note_persistence;
    use dualmodel_schema::error::FieldError;

    #[test]
    fn new_instance_is_unset() {
        let note = PersistenceInstance::new(note_persistence());
        assert!(note.values().iter().all(Value::is_null));
        assert!(!note.is_set("title"));
        assert_eq!(note.get("missing"), None);
    }

    #[test]
    fn set_checks_storage_type() {
        let mut note = PersistenceInstance::new(note_persistence());
        note.set("title", "A").expect("text into text column");

        let err = note.set("title", 5).expect_err("int into text column");
        assert!(matches!(
            err,
            ValidateError::Field {
                source: FieldError::WrongType { .. },
                ..
            }
        ));
        assert_eq!(note.get("title"), Some(&Value::from("A")));
    }

    #[test]
    fn set_unknown_column_fails() {
        let mut note = PersistenceInstance::new(note_persistence());
        let err = note.set("Title", "A").expect_err("field names are exact");
        assert_eq!(
            err,
            ValidateError::UnknownField {
                type_name: "Note".to_string(),
                field: "Title".to_string(),
            }
        );
    }

    #[test]
    fn clearing_a_required_column_fails() {
        let mut note =
            PersistenceInstance::from_values(note_persistence(), [("title", "A")]).unwrap();
        let err = note.set("title", Value::Null).expect_err("title is not nullable");
        assert!(matches!(
            err,
            ValidateError::Field {
                source: FieldError::NotNullable,
                ..
            }
        ));
    }
}
