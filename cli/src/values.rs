#![deny(missing_docs)]

//! # Values Command
//!
//! Resolves the template values for one resource and prints them as JSON.

use crate::error::CliResult;
use crate::project::ProjectArgs;
use scaffold_core::{ResolutionRequest, TemplateValues};

/// Arguments for the values command.
#[derive(clap::Args, Debug, Clone)]
pub struct ValuesArgs {
    /// Resource name, in any case or number (e.g. `comment`, `BlogPosts`).
    pub model: String,

    /// Extra arguments: `id:<type>`, `belongsTo:<Model>`, or fields such as
    /// `title`, `price:float?`, `tags:string[]`, `published:boolean:default=false`.
    pub extra_args: Vec<String>,

    /// Parent model name as declared in the schema (e.g. `Post`).
    #[clap(long)]
    pub parent: Option<String>,

    /// Route context the resource lives under (e.g. `admin`).
    #[clap(long)]
    pub context: Option<String>,

    /// Print single-line JSON.
    #[clap(long)]
    pub compact: bool,

    #[clap(flatten)]
    pub project: ProjectArgs,
}

impl ValuesArgs {
    /// The resolution request these arguments describe.
    pub fn request(&self) -> ResolutionRequest {
        let mut request = ResolutionRequest::new(&self.model)
            .with_extra_args(self.extra_args.iter().cloned());
        if let Some(parent) = &self.parent {
            request = request.with_parent(parent);
        }
        if let Some(context) = &self.context {
            request = request.with_context(context);
        }
        request
    }
}

/// Resolves the values without printing them.
pub fn resolve(args: &ValuesArgs) -> CliResult<TemplateValues> {
    let resolver = args.project.resolver()?;
    Ok(resolver.resolve(&args.request())?)
}

/// Executes the values command.
pub fn execute(args: &ValuesArgs) -> CliResult<()> {
    let values = resolve(args)?;

    for (key, reason) in values.unresolved() {
        eprintln!("Warning: `{}` left unresolved: {}", key, reason);
    }

    let output = if args.compact {
        serde_json::to_string(&values)?
    } else {
        serde_json::to_string_pretty(&values)?
    };
    println!("{}", output);
    Ok(())
}
