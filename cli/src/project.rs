#![deny(missing_docs)]

//! # Project Options
//!
//! Options shared by every command that reads a project.

use crate::error::CliResult;
use scaffold_core::{GeneratorConfig, TemplateValueResolver};
use std::path::PathBuf;

/// Where the project lives and where its schema is.
#[derive(clap::Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing the schema and optional `scaffold.config.*`.
    #[clap(long, env = "SCAFFOLD_PROJECT_ROOT", default_value = ".")]
    pub project_root: PathBuf,

    /// Schema file relative to the project root. Overrides config and defaults.
    #[clap(long = "schema", env = "SCAFFOLD_SCHEMA_PATH")]
    pub schema_path: Option<PathBuf>,
}

impl ProjectArgs {
    /// Project config with the command-line schema path applied on top.
    pub fn config(&self) -> CliResult<GeneratorConfig> {
        let mut config = GeneratorConfig::load(&self.project_root)?;
        if let Some(path) = &self.schema_path {
            config.schema_path = Some(path.clone());
        }
        Ok(config)
    }

    /// Resolver over this project.
    pub fn resolver(&self) -> CliResult<TemplateValueResolver> {
        let config = self.config()?;
        Ok(TemplateValueResolver::from_config(
            self.project_root.clone(),
            &config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_schema_path_overrides_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("scaffold.config.yaml"),
            "schemaPath: from-config.prisma\n",
        )
        .unwrap();

        let args = ProjectArgs {
            project_root: dir.path().to_path_buf(),
            schema_path: Some(PathBuf::from("from-cli.prisma")),
        };
        assert_eq!(
            args.config().unwrap().schema_path,
            Some(PathBuf::from("from-cli.prisma"))
        );

        let args = ProjectArgs {
            schema_path: None,
            ..args
        };
        assert_eq!(
            args.config().unwrap().schema_path,
            Some(PathBuf::from("from-config.prisma"))
        );
    }
}
