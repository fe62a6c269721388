#![deny(missing_docs)]

//! # Type Mapping
//!
//! Maps the type names users write in field arguments (`title:string`,
//! `id:uuid`) to validation-type tokens and Prisma column types.
//! Lookups are case-insensitive, so `Int` and `int` are the same entry.

use crate::error::AppResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything a template needs to know about one field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTypeEntry {
    /// Validation-type token, e.g. `number` or `string().uuid`.
    pub zod_type: String,
    /// Prisma column type, e.g. `Int`.
    pub prisma_type: String,
    /// HTML input type for generated forms.
    pub input_type: String,
    /// Form component rendering the field.
    pub component: String,
    /// Prisma default generator implied by the type (`uuid` for `uuid`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl FieldTypeEntry {
    fn new(zod_type: &str, prisma_type: &str, input_type: &str, component: &str) -> Self {
        Self {
            zod_type: zod_type.to_string(),
            prisma_type: prisma_type.to_string(),
            input_type: input_type.to_string(),
            component: component.to_string(),
            default: None,
        }
    }

    fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }
}

/// Resolves a type name to a validation-type token.
///
/// `Ok(None)` means the name is not recognised; `Err` is reserved for lookups
/// that could not be performed at all.
pub trait ValidationTypeLookup {
    /// Maps `type_name` (e.g. `Int`) to a token (e.g. `number`).
    fn resolve_validation_type(&self, type_name: &str) -> AppResult<Option<String>>;
}

/// The field type table, keyed by lower-cased type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTypeMap {
    entries: IndexMap<String, FieldTypeEntry>,
}

impl Default for FieldTypeMap {
    fn default() -> Self {
        let text = || FieldTypeEntry::new("string", "String", "text", "LabeledTextField");
        let number =
            |prisma: &str| FieldTypeEntry::new("number", prisma, "number", "LabeledTextField");

        let entries = [
            ("string", text()),
            (
                "boolean",
                FieldTypeEntry::new("boolean", "Boolean", "checkbox", "LabeledCheckboxField"),
            ),
            ("int", number("Int")),
            ("float", number("Float")),
            ("number", number("Float")),
            ("decimal", number("Decimal")),
            (
                "bigint",
                FieldTypeEntry::new("bigint", "BigInt", "number", "LabeledTextField"),
            ),
            (
                "datetime",
                FieldTypeEntry::new("date", "DateTime", "datetime-local", "LabeledTextField"),
            ),
            (
                "date",
                FieldTypeEntry::new("date", "DateTime", "date", "LabeledTextField"),
            ),
            (
                "uuid",
                FieldTypeEntry::new("string().uuid", "String", "text", "LabeledTextField")
                    .with_default("uuid"),
            ),
            (
                "json",
                FieldTypeEntry::new("any", "Json", "textarea", "LabeledTextAreaField"),
            ),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(name, entry)| (name.to_string(), entry))
                .collect(),
        }
    }
}

impl FieldTypeMap {
    /// The entry for `type_name`, ignoring case.
    pub fn get(&self, type_name: &str) -> Option<&FieldTypeEntry> {
        self.entries.get(&type_name.to_lowercase())
    }

    /// Adds or replaces entries; later entries win.
    pub fn extend(&mut self, overrides: impl IntoIterator<Item = (String, FieldTypeEntry)>) {
        for (name, entry) in overrides {
            self.entries.insert(name.to_lowercase(), entry);
        }
    }

    /// Known type names in table order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl ValidationTypeLookup for FieldTypeMap {
    fn resolve_validation_type(&self, type_name: &str) -> AppResult<Option<String>> {
        if type_name.is_empty() {
            return Ok(None);
        }
        Ok(self.get(type_name).map(|entry| entry.zod_type.clone()))
    }
}
