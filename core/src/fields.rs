#![deny(missing_docs)]

//! # Field Templates
//!
//! Turns ordinary field arguments (`title`, `price:float?`, `tags:string[]`,
//! `published:boolean:default=false`) into the per-field values a resource
//! template renders.

use crate::error::{AppError, AppResult};
use crate::type_mapping::FieldTypeMap;
use heck::{ToLowerCamelCase, ToTitleCase};
use serde::Serialize;

/// Type used when an argument names no type.
pub const DEFAULT_FIELD_TYPE: &str = "string";

/// A field argument split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as written.
    pub name: String,
    /// Type name without modifiers.
    pub type_name: String,
    /// `type?`
    pub optional: bool,
    /// `type[]`
    pub list: bool,
    /// From a trailing `default=value` segment.
    pub default_value: Option<String>,
}

impl FieldSpec {
    /// Parses `name[:type[?][[]]][:default=value]`.
    pub fn parse(arg: &str) -> AppResult<Self> {
        let mut parts = arg.split(':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(AppError::InvalidArgument(format!(
                "`{}` has no field name",
                arg
            )));
        }

        let mut type_name = parts
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_FIELD_TYPE);
        let mut optional = false;
        let mut list = false;
        loop {
            if let Some(rest) = type_name.strip_suffix('?') {
                optional = true;
                type_name = rest;
            } else if let Some(rest) = type_name.strip_suffix("[]") {
                list = true;
                type_name = rest;
            } else {
                break;
            }
        }

        let mut default_value = None;
        for modifier in parts {
            match modifier.split_once('=') {
                Some(("default", value)) => default_value = Some(value.to_string()),
                _ => {
                    return Err(AppError::InvalidArgument(format!(
                        "unknown modifier `{}` in `{}`",
                        modifier, arg
                    )))
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            optional,
            list,
            default_value,
        })
    }
}

/// The values rendered for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTemplateValue {
    /// Property name in code, e.g. `publishedAt`.
    pub attribute_name: String,
    /// Human label, e.g. `Published At`.
    pub field_name: String,
    /// Validation-type token.
    pub zod_type: String,
    /// HTML input type.
    pub input_type: String,
    /// Form component.
    #[serde(rename = "FieldComponent")]
    pub component: String,
    /// Prisma column type.
    pub prisma_type: String,
    /// Whether the field may be absent.
    pub is_optional: bool,
    /// Whether the field holds a list.
    pub is_list: bool,
    /// Default value or generator, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Builds field template values for a batch of ordinary arguments.
pub trait FieldTemplateBuilder {
    /// One value per argument, in argument order.
    ///
    /// # Errors
    ///
    /// Fails on the first argument that cannot be parsed or names an unknown type.
    fn build_field_templates(&self, args: &[String]) -> AppResult<Vec<FieldTemplateValue>>;
}

/// Builder backed by a [`FieldTypeMap`].
#[derive(Debug, Clone, Default)]
pub struct DefaultFieldBuilder {
    types: FieldTypeMap,
}

impl DefaultFieldBuilder {
    /// Builder using `types` for lookups.
    pub fn new(types: FieldTypeMap) -> Self {
        Self { types }
    }

    fn build_one(&self, arg: &str) -> AppResult<FieldTemplateValue> {
        let spec = FieldSpec::parse(arg)?;
        let entry = self
            .types
            .get(&spec.type_name)
            .ok_or_else(|| AppError::UnknownFieldType(spec.type_name.clone()))?;

        Ok(FieldTemplateValue {
            attribute_name: spec.name.to_lower_camel_case(),
            field_name: spec.name.to_title_case(),
            zod_type: entry.zod_type.clone(),
            input_type: entry.input_type.clone(),
            component: entry.component.clone(),
            prisma_type: entry.prisma_type.clone(),
            is_optional: spec.optional,
            is_list: spec.list,
            default_value: spec.default_value.or_else(|| entry.default.clone()),
        })
    }
}

impl FieldTemplateBuilder for DefaultFieldBuilder {
    fn build_field_templates(&self, args: &[String]) -> AppResult<Vec<FieldTemplateValue>> {
        args.iter().map(|arg| self.build_one(arg)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_bare_name_defaults_to_string() {
        let spec = FieldSpec::parse("title").unwrap();
        assert_eq!(
            spec,
            FieldSpec {
                name: "title".into(),
                type_name: "string".into(),
                optional: false,
                list: false,
                default_value: None,
            }
        );
    }

    #[test]
    fn test_parse_modifiers() {
        let spec = FieldSpec::parse("tags:string[]?").unwrap();
        assert!(spec.list);
        assert!(spec.optional);
        assert_eq!(spec.type_name, "string");

        let spec = FieldSpec::parse("published:boolean:default=false").unwrap();
        assert_eq!(spec.default_value.as_deref(), Some("false"));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert!(matches!(
            FieldSpec::parse(":int"),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            FieldSpec::parse("title:string:unique"),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_build_field_templates() {
        let builder = DefaultFieldBuilder::default();
        let args = vec!["published_at:datetime?".to_string(), "ref:uuid".to_string()];
        let values = builder.build_field_templates(&args).unwrap();

        assert_eq!(
            values[0],
            FieldTemplateValue {
                attribute_name: "publishedAt".into(),
                field_name: "Published At".into(),
                zod_type: "date".into(),
                input_type: "datetime-local".into(),
                component: "LabeledTextField".into(),
                prisma_type: "DateTime".into(),
                is_optional: true,
                is_list: false,
                default_value: None,
            }
        );
        assert_eq!(values[1].zod_type, "string().uuid");
        assert_eq!(values[1].default_value.as_deref(), Some("uuid"));
    }

    #[test]
    fn test_unknown_type_fails_the_batch() {
        let builder = DefaultFieldBuilder::default();
        let args = vec!["title".to_string(), "photo:blob".to_string()];
        match builder.build_field_templates(&args).unwrap_err() {
            AppError::UnknownFieldType(name) => assert_eq!(name, "blob"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_serialized_keys_match_template_names() {
        let builder = DefaultFieldBuilder::default();
        let values = builder
            .build_field_templates(&["title".to_string()])
            .unwrap();
        let json = serde_json::to_value(&values[0]).unwrap();
        assert_eq!(json["attributeName"], "title");
        assert_eq!(json["FieldComponent"], "LabeledTextField");
        assert!(json.get("defaultValue").is_none());
    }
}
