#![deny(missing_docs)]

//! # Models Command
//!
//! Lists the schema's models with their primary key and the validation type a
//! nested resource would get for it.

use crate::error::CliResult;
use crate::project::ProjectArgs;
use scaffold_core::resolver::parent::key_type_token;
use scaffold_core::Schema;

/// Arguments for the models command.
#[derive(clap::Args, Debug, Clone)]
pub struct ModelsArgs {
    #[clap(flatten)]
    pub project: ProjectArgs,
}

/// One line per model: `Name  key: Type -> token`.
pub fn describe_models(schema: &Schema) -> Vec<String> {
    schema
        .models()
        .map(|model| match model.primary_key() {
            Some(key) => {
                let token = key_type_token(&model.name, key);
                format!(
                    "{}  {}: {} -> {}",
                    model.name,
                    key.name,
                    key.field_type,
                    token.token().unwrap_or("(unsupported)")
                )
            }
            None => format!("{}  (no @id field)", model.name),
        })
        .collect()
}

/// Executes the models command.
pub fn execute(args: &ModelsArgs) -> CliResult<()> {
    let resolver = args.project.resolver()?;
    let loaded = resolver.load_schema()?;

    println!("Models in {:?}:", loaded.path);
    for line in describe_models(&loaded.schema) {
        println!("  {}", line);
    }
    Ok(())
}
