use dualmodel_schema::prelude::*;

pub const NAME: &str = "Contact";

#[must_use]
pub fn persistence() -> PersistenceSchemaBuilder {
    PersistenceSchema::builder(NAME)
        .field(
            PersistenceField::new("id", Primitive::Int)
                .primary_key()
                .auto_increment(),
        )
        .field(PersistenceField::new("first_name", Primitive::Text).max_len(100))
        .field(PersistenceField::new("last_name", Primitive::Text).max_len(100))
}

#[must_use]
pub fn validation() -> ValidationSchemaBuilder {
    ValidationSchema::builder(NAME)
        .field(super::optional_id())
        .field(ValidationField::new("first_name", Primitive::Text).max_len(100))
        .field(ValidationField::new("last_name", Primitive::Text).max_len(100))
}
