use crate::error::ValidateError;
use dualmodel_primitives::Value;
use dualmodel_schema::node::{ValidationField, ValidationSchema};
use std::sync::Arc;

///
/// ValidationPatch
///
/// A sparse set of field changes for one validation type.
///
/// - A field listed in the patch is "explicitly set"; anything else is absent.
/// - `Value::Null` is an explicit null, distinct from absence.
/// - Entries are validated against the validation field when added.
/// - Setting the same field twice keeps only the last value.
///

#[derive(Clone, Debug)]
pub struct ValidationPatch {
    schema: Arc<ValidationSchema>,
    entries: Vec<(usize, Value)>,
}

impl ValidationPatch {
    #[must_use]
    pub const fn new(schema: Arc<ValidationSchema>) -> Self {
        Self {
            schema,
            entries: Vec::new(),
        }
    }

    pub fn from_values<I, K, V>(schema: Arc<ValidationSchema>, values: I) -> Result<Self, ValidateError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .try_fold(Self::new(schema), |patch, (field, value)| {
                patch.set(field.as_ref(), value)
            })
    }

    /// Add (or replace) one explicitly set field.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Result<Self, ValidateError> {
        let index = self
            .schema
            .position(field)
            .ok_or_else(|| ValidateError::unknown(self.schema.name(), field))?;
        let value = value.into();
        self.schema.fields()[index]
            .check(&value)
            .map_err(|source| ValidateError::field(self.schema.name(), field, source))?;

        match self.entries.iter_mut().find(|(i, _)| *i == index) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((index, value)),
        }

        Ok(self)
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
        let index = self.schema.position(field)?;

        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set fields in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(i, value)| (self.schema.fields()[*i].name.as_str(), value))
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&ValidationField, &Value)> {
        self.entries
            .iter()
            .map(|(i, value)| (&self.schema.fields()[*i], value))
    }

    // Entries must already satisfy their fields.
    pub(crate) const fn from_checked(
        schema: Arc<ValidationSchema>,
        entries: Vec<(usize, Value)>,
    ) -> Self {
        Self { schema, entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::note_validation;

    #[test]
    fn distinguishes_absent_from_null() {
        let patch = ValidationPatch::new(note_validation())
            .set("title", "C")
            .unwrap();
        assert!(patch.contains("title"));
        assert!(!patch.contains("content"));
        assert_eq!(patch.get("content"), None);
    }

    #[test]
    fn last_write_wins() {
        let patch = ValidationPatch::from_values(note_validation(), [("title", "B"), ("title", "C")])
            .unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get("title"), Some(&Value::from("C")));
    }

    #[test]
    fn rejects_invalid_values() {
        let long = "x".repeat(201);
        let err = ValidationPatch::new(note_validation())
            .set("title", long)
            .expect_err("title too long");
        assert!(matches!(err, ValidateError::Field { .. }));

        let err = ValidationPatch::new(note_validation())
            .set("title", Value::Null)
            .expect_err("title is not optional");
        assert!(matches!(err, ValidateError::Field { .. }));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = ValidationPatch::new(note_validation())
            .set("body", "x")
            .expect_err("unknown field");
        assert!(matches!(err, ValidateError::UnknownField { .. }));
    }
}
