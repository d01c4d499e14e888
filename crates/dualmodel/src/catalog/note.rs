use dualmodel_schema::prelude::*;

pub const NAME: &str = "Note";

/// Read-only projection without relationship ids; never declared.
pub const BASIC_NAME: &str = "NoteBasic";

#[must_use]
pub fn persistence() -> PersistenceSchemaBuilder {
    PersistenceSchema::builder(NAME)
        .field(
            PersistenceField::new("id", Primitive::Int)
                .primary_key()
                .auto_increment(),
        )
        .field(PersistenceField::new("title", Primitive::Text).max_len(200))
        .field(PersistenceField::new("content", Primitive::Text))
        .field(super::stamp_column("created_at"))
        .field(super::stamp_column("updated_at"))
}

#[must_use]
pub fn validation() -> ValidationSchemaBuilder {
    basic_fields(ValidationSchema::builder(NAME))
        .field(super::id_list("contact_ids"))
        .field(super::id_list("organization_ids"))
}

#[must_use]
pub fn basic() -> ValidationSchemaBuilder {
    basic_fields(ValidationSchema::builder(BASIC_NAME))
}

fn basic_fields(builder: ValidationSchemaBuilder) -> ValidationSchemaBuilder {
    builder
        .field(super::optional_id())
        .field(ValidationField::new("title", Primitive::Text).max_len(200))
        .field(ValidationField::new("content", Primitive::Text))
        .field(super::stamp("created_at"))
        .field(super::stamp("updated_at"))
}
