use dualmodel_primitives::{Primitive, Value};
use dualmodel_schema::node::{
    FieldDefault, PersistenceField, PersistenceSchema, ValidationField, ValidationSchema,
};
use std::sync::Arc;

pub fn note_persistence() -> Arc<PersistenceSchema> {
    let schema = PersistenceSchema::builder("Note")
        .field(
            PersistenceField::new("id", Primitive::Int)
                .primary_key()
                .auto_increment(),
        )
        .field(PersistenceField::new("title", Primitive::Text).max_len(200))
        .field(PersistenceField::new("content", Primitive::Text))
        .build()
        .expect("note persistence schema");

    Arc::new(schema)
}

pub fn note_validation() -> Arc<ValidationSchema> {
    let schema = ValidationSchema::builder("Note")
        .field(
            ValidationField::new("id", Primitive::Int)
                .opt()
                .default(FieldDefault::value(Value::Null)),
        )
        .field(ValidationField::new("title", Primitive::Text).max_len(200))
        .field(ValidationField::new("content", Primitive::Text))
        .field(
            ValidationField::new("contact_ids", Primitive::Int)
                .many()
                .default(FieldDefault::empty_list()),
        )
        .build()
        .expect("note validation schema");

    Arc::new(schema)
}

// projection: no parity registration, drops content
pub fn note_basic() -> Arc<ValidationSchema> {
    let schema = ValidationSchema::builder("NoteBasic")
        .field(ValidationField::new("id", Primitive::Int).opt())
        .field(ValidationField::new("title", Primitive::Text).max_len(200))
        .build()
        .expect("note projection schema");

    Arc::new(schema)
}

pub fn task_persistence() -> Arc<PersistenceSchema> {
    let schema = PersistenceSchema::builder("Task")
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
        .field(PersistenceField::new("created_at", Primitive::Timestamp).default(FieldDefault::now()))
        .build()
        .expect("task persistence schema");

    Arc::new(schema)
}

pub fn task_validation() -> Arc<ValidationSchema> {
    let schema = ValidationSchema::builder("Task")
        .field(
            ValidationField::new("id", Primitive::Int)
                .opt()
                .default(FieldDefault::value(Value::Null)),
        )
        .field(ValidationField::new("title", Primitive::Text).max_len(200))
        .field(
            ValidationField::new("description", Primitive::Text)
                .opt()
                .default(FieldDefault::value(Value::Null)),
        )
        .field(ValidationField::new("due_date", Primitive::Timestamp))
        .field(
            ValidationField::new("importance", Primitive::Int)
                .min(0)
                .max(10)
                .default(FieldDefault::value(0)),
        )
        .field(
            ValidationField::new("completed", Primitive::Bool).default(FieldDefault::value(false)),
        )
        .field(
            ValidationField::new("contact_ids", Primitive::Int)
                .many()
                .default(FieldDefault::empty_list()),
        )
        .build()
        .expect("task validation schema");

    Arc::new(schema)
}
