#![deny(missing_docs)]

//! # Generator Configuration
//!
//! Optional per-project settings read from `scaffold.config.{yaml,yml,json}`
//! at the project root.
//!
//! ```yaml
//! schemaPath: database/schema.prisma
//! fieldTypes:
//!   email:
//!     zodType: string().email
//!     prismaType: String
//!     inputType: email
//!     component: LabeledTextField
//! ```

use crate::error::{AppError, AppResult};
use crate::schema::SchemaLocator;
use crate::type_mapping::{FieldTypeEntry, FieldTypeMap};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names tried at the project root, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = [
    "scaffold.config.yaml",
    "scaffold.config.yml",
    "scaffold.config.json",
];

/// Project settings for the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Schema file relative to the project root; overrides the default search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<PathBuf>,

    /// Field types added to, or replacing, the built-in table.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub field_types: IndexMap<String, FieldTypeEntry>,
}

impl GeneratorConfig {
    /// Loads the first config file found under `project_root`, or the defaults
    /// when there is none.
    pub fn load(project_root: &Path) -> AppResult<Self> {
        for name in CONFIG_FILE_NAMES {
            let path = project_root.join(name);
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading generator config");
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }

    /// Loads `path`, choosing the format by extension.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::General(format!("Failed to read config {:?}: {}", path, e))
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    /// Parses YAML config text.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parses JSON config text.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The built-in field types with this config's overrides applied.
    pub fn field_type_map(&self) -> FieldTypeMap {
        let mut map = FieldTypeMap::default();
        map.extend(self.field_types.clone());
        map
    }

    /// Schema locator honouring `schemaPath`.
    pub fn schema_locator(&self) -> SchemaLocator {
        SchemaLocator {
            explicit: self.schema_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_mapping::ValidationTypeLookup;
    use tempfile::tempdir;

    const YAML: &str = r#"
schemaPath: database/schema.prisma
fieldTypes:
  email:
    zodType: string().email
    prismaType: String
    inputType: email
    component: LabeledTextField
"#;

    #[test]
    fn test_missing_config_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::load(dir.path()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.schema_locator(), SchemaLocator::default());
    }

    #[test]
    fn test_yaml_config_extends_field_types() {
        let config = GeneratorConfig::from_yaml_str(YAML).unwrap();
        assert_eq!(
            config.schema_path,
            Some(PathBuf::from("database/schema.prisma"))
        );

        let map = config.field_type_map();
        assert_eq!(
            map.resolve_validation_type("Email").unwrap().as_deref(),
            Some("string().email")
        );
        // built-ins survive
        assert_eq!(
            map.resolve_validation_type("int").unwrap().as_deref(),
            Some("number")
        );
    }

    #[test]
    fn test_json_config_is_found_on_disk() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("scaffold.config.json"),
            r#"{"schemaPath": "schema.prisma"}"#,
        )
        .unwrap();

        let config = GeneratorConfig::load(dir.path()).unwrap();
        assert_eq!(
            config.schema_locator(),
            SchemaLocator::explicit("schema.prisma")
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = GeneratorConfig::from_yaml_str("schemaFile: x.prisma\n").unwrap_err();
        assert!(matches!(err, AppError::Yaml(_)));
    }
}
