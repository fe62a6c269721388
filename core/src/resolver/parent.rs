//! # Parent Key Resolution
//!
//! Finds the parent model in the schema and maps its primary-key type to a
//! validation-type token.

use crate::resolver::values::{Resolution, UnresolvedReason};
use crate::schema::{Field, Schema};

/// Token for an `Int` primary key.
pub const INT_KEY_TOKEN: &str = "number";
/// Token for a `String` primary key.
pub const STRING_KEY_TOKEN: &str = "string";
/// Token for a `String` primary key defaulting to `uuid()`.
pub const UUID_KEY_TOKEN: &str = "string().uuid";

/// Resolves the primary-key token of the model named exactly `raw_name`.
///
/// The first matching model and the first `@id` field in it win.
pub fn resolve_parent_key_type(schema: &Schema, raw_name: &str) -> Resolution {
    let Some(model) = schema.find_model(raw_name) else {
        return Resolution::Unresolved(UnresolvedReason::ParentModelNotFound(
            raw_name.to_string(),
        ));
    };

    let Some(key) = model.primary_key() else {
        return Resolution::Unresolved(UnresolvedReason::PrimaryKeyNotFound(model.name.clone()));
    };

    key_type_token(&model.name, key)
}

/// Maps a primary-key field's declared type to a token.
pub fn key_type_token(model: &str, key: &Field) -> Resolution {
    match key.field_type.as_str() {
        "Int" => Resolution::resolved(INT_KEY_TOKEN),
        "String" if has_uuid_default(key) => Resolution::resolved(UUID_KEY_TOKEN),
        "String" => Resolution::resolved(STRING_KEY_TOKEN),
        other => Resolution::Unresolved(UnresolvedReason::UnsupportedKeyType {
            model: model.to_string(),
            field: key.name.clone(),
            field_type: other.to_string(),
        }),
    }
}

/// `@default(uuid())`, `@default(uuid(7))` or the bare `@default(uuid)` form.
fn has_uuid_default(field: &Field) -> bool {
    field
        .attributes
        .iter()
        .filter(|attr| attr.name == "default")
        .any(|attr| attr.args.iter().any(|arg| arg.value.names("uuid")))
}
