use crate::{MAX_FIELD_NAME_LEN, MAX_TYPE_NAME_LEN, error::SchemaError};

/// Ensure type names are non-empty ASCII identifiers within the maximum length.
pub(crate) fn validate_type_name(name: &str) -> Result<(), SchemaError> {
    validate_ident(name, MAX_TYPE_NAME_LEN)
}

/// Ensure field names are non-empty ASCII identifiers within the maximum length.
pub(crate) fn validate_field_name(name: &str) -> Result<(), SchemaError> {
    validate_ident(name, MAX_FIELD_NAME_LEN)
}

fn validate_ident(ident: &str, max_len: usize) -> Result<(), SchemaError> {
    let invalid = |reason: String| SchemaError::InvalidName {
        name: ident.to_string(),
        reason,
    };

    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("name is empty".to_string()));
    };
    if ident.len() > max_len {
        return Err(invalid(format!("exceeds max length {max_len}")));
    }
    if !ident.is_ascii() {
        return Err(invalid("must be ASCII".to_string()));
    }
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid("must start with a letter or '_'".to_string()));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid(
            "may only contain letters, digits and '_'".to_string(),
        ));
    }

    Ok(())
}
