use dualmodel_schema::prelude::*;

pub const NAME: &str = "Task";

/// Read-only projection without relationship ids; never declared.
pub const BASIC_NAME: &str = "TaskBasic";

pub const MIN_IMPORTANCE: i64 = 0;
pub const MAX_IMPORTANCE: i64 = 10;

#[must_use]
pub fn persistence() -> PersistenceSchemaBuilder {
    PersistenceSchema::builder(NAME)
        .field(
            PersistenceField::new("id", Primitive::Int)
                .primary_key()
                .auto_increment(),
        )
        .field(PersistenceField::new("title", Primitive::Text).max_len(200))
        .field(PersistenceField::new("description", Primitive::Text).nullable())
        .field(PersistenceField::new("due_date", Primitive::Timestamp))
        .field(PersistenceField::new("importance", Primitive::Int).default(FieldDefault::value(0)))
        .field(
            PersistenceField::new("completed", Primitive::Bool)
                .default(FieldDefault::value(false)),
        )
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
        .field(
            ValidationField::new("description", Primitive::Text)
                .opt()
                .default(FieldDefault::value(Value::Null)),
        )
        .field(ValidationField::new("due_date", Primitive::Timestamp))
        .field(
            ValidationField::new("importance", Primitive::Int)
                .min(MIN_IMPORTANCE)
                .max(MAX_IMPORTANCE)
                .default(FieldDefault::value(MIN_IMPORTANCE)),
        )
        .field(
            ValidationField::new("completed", Primitive::Bool).default(FieldDefault::value(false)),
        )
        .field(super::stamp("created_at"))
        .field(super::stamp("updated_at"))
}
