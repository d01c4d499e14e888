use dualmodel_schema::prelude::*;

pub const NAME: &str = "Organization";

#[must_use]
pub fn persistence() -> PersistenceSchemaBuilder {
    PersistenceSchema::builder(NAME)
        .field(
            PersistenceField::new("id", Primitive::Int)
                .primary_key()
                .auto_increment(),
        )
        .field(
            PersistenceField::new("name", Primitive::Text)
                .max_len(200)
                .unique(),
        )
}

#[must_use]
pub fn validation() -> ValidationSchemaBuilder {
    ValidationSchema::builder(NAME)
        .field(super::optional_id())
        .field(ValidationField::new("name", Primitive::Text).max_len(200))
}
