#![deny(missing_docs)]

//! # Template Value Resolver
//!
//! Computes the values a CRUD resource template is rendered with:
//!
//! 1. Base naming values from the request.
//! 2. Classification of extra arguments into special and ordinary ones.
//! 3. The parent model's primary-key type, read from the schema.
//! 4. Field template values for the ordinary arguments.

pub mod classify;
pub mod parent;
pub mod request;
pub mod values;

pub use classify::{classify_args, split_arg, ClassifiedArgs, SpecialArg};
pub use parent::resolve_parent_key_type;
pub use request::{ParentModel, ResolutionRequest};
pub use values::{Resolution, TemplateValues, UnresolvedReason};

use crate::config::GeneratorConfig;
use crate::error::AppResult;
use crate::fields::{DefaultFieldBuilder, FieldTemplateBuilder};
use crate::schema::{load_schema, Editor, LoadedSchema, SchemaLocator};
use crate::type_mapping::{FieldTypeMap, ValidationTypeLookup};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Resolves template values for one project.
///
/// Owns the editor used to read the schema. The editor is created on first
/// use and reused by every later call.
#[derive(Debug)]
pub struct TemplateValueResolver<L = FieldTypeMap, B = DefaultFieldBuilder> {
    project_root: PathBuf,
    locator: SchemaLocator,
    editor: OnceLock<Editor>,
    type_lookup: L,
    field_builder: B,
}

impl TemplateValueResolver {
    /// Resolver for the project at `project_root`, using the field types and
    /// schema location from `config`.
    pub fn from_config(project_root: impl Into<PathBuf>, config: &GeneratorConfig) -> Self {
        let types = config.field_type_map();
        Self::new(project_root, types.clone(), DefaultFieldBuilder::new(types))
            .with_locator(config.schema_locator())
    }
}

impl<L, B> TemplateValueResolver<L, B>
where
    L: ValidationTypeLookup,
    B: FieldTemplateBuilder,
{
    /// Resolver with explicit collaborators and the default schema locations.
    pub fn new(project_root: impl Into<PathBuf>, type_lookup: L, field_builder: B) -> Self {
        Self {
            project_root: project_root.into(),
            locator: SchemaLocator::default(),
            editor: OnceLock::new(),
            type_lookup,
            field_builder,
        }
    }

    /// Replaces the schema locator.
    pub fn with_locator(mut self, locator: SchemaLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Uses `editor` instead of creating one over the project root.
    pub fn with_editor(mut self, editor: Editor) -> Self {
        self.editor = OnceLock::from(editor);
        self
    }

    /// The shared editor, created over the project root on first call.
    pub fn editor(&self) -> &Editor {
        self.editor.get_or_init(|| Editor::new(self.project_root.clone()))
    }

    /// Reads and parses the project schema through the shared editor.
    pub fn load_schema(&self) -> AppResult<LoadedSchema> {
        load_schema(self.editor(), &self.locator)
    }

    /// Resolves the template values for `request`.
    ///
    /// # Errors
    ///
    /// Fails if the type lookup or field builder fails, or if a parent is
    /// given and the schema cannot be located or parsed. A parent model or
    /// key that simply is not found is not an error: it is recorded as
    /// [`Resolution::Unresolved`] on the returned values.
    pub fn resolve(&self, request: &ResolutionRequest) -> AppResult<TemplateValues> {
        // 1. Base values
        let mut values = TemplateValues::base(request);

        // 2. Special vs ordinary arguments
        let classified = classify_args(&request.extra_args, &self.type_lookup)?;
        if let Some(zod_type) = classified.model_id_zod_type() {
            values.model_id_zod_type = zod_type.clone();
        }

        // 3. Parent key type
        if let Some(parent) = &request.parent {
            let loaded = self.load_schema()?;
            let resolution = resolve_parent_key_type(&loaded.schema, &parent.raw_name);
            match &resolution {
                Resolution::Resolved(token) => {
                    tracing::debug!(parent = %parent.raw_name, %token, "parent key resolved")
                }
                Resolution::Unresolved(reason) => tracing::warn!(
                    parent = %parent.raw_name,
                    schema = %loaded.path.display(),
                    "parent key type unresolved: {}",
                    reason
                ),
            }
            values.parent_model_id_zod_type = Some(resolution);
        }

        // 4. Field templates for whatever is left
        if !classified.ordinary.is_empty() {
            let fields = self
                .field_builder
                .build_field_templates(&classified.ordinary)?;
            values.field_template_values = Some(fields);
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::fields::FieldTemplateValue;
    use std::cell::Cell;

    const SCHEMA: &str = r#"
model Post {
  id    String @id @default(uuid())
  title String
}

model Author {
  id Int @id @default(autoincrement())
}
"#;

    fn resolver() -> TemplateValueResolver {
        TemplateValueResolver::new(
            "/nonexistent",
            FieldTypeMap::default(),
            DefaultFieldBuilder::default(),
        )
        .with_editor(Editor::in_memory().with_file("db/schema.prisma", SCHEMA))
    }

    /// Counts batches so tests can check delegation happens once.
    struct CountingBuilder {
        calls: Cell<usize>,
    }

    impl FieldTemplateBuilder for CountingBuilder {
        fn build_field_templates(&self, args: &[String]) -> AppResult<Vec<FieldTemplateValue>> {
            self.calls.set(self.calls.get() + 1);
            DefaultFieldBuilder::default().build_field_templates(args)
        }
    }

    #[test]
    fn test_no_parent_never_sets_parent_key() {
        let request = ResolutionRequest::new("post").with_extra_args(["id:Int", "title"]);
        let values = resolver().resolve(&request).unwrap();
        assert_eq!(values.parent_model_id_zod_type, None);
    }

    #[test]
    fn test_parent_uuid_key() {
        let request = ResolutionRequest::new("comment").with_parent("Post");
        let values = resolver().resolve(&request).unwrap();
        assert_eq!(
            values.parent_model_id_zod_type,
            Some(Resolution::resolved("string().uuid"))
        );
    }

    #[test]
    fn test_parent_resolved_without_extra_args() {
        let request = ResolutionRequest::new("book").with_parent("Author");
        let values = resolver().resolve(&request).unwrap();
        assert_eq!(
            values.parent_model_id_zod_type.and_then(|r| r.token().map(str::to_string)),
            Some("number".to_string())
        );
        assert_eq!(values.field_template_values, None);
    }

    #[test]
    fn test_parent_key_with_commented_schema() {
        let schema = r#"model Post { // posts
  id  String @id @default(uuid())
  loc Unsupported("circle")?
} // end of Post
"#;
        let resolver = TemplateValueResolver::new(
            "/nonexistent",
            FieldTypeMap::default(),
            DefaultFieldBuilder::default(),
        )
        .with_editor(Editor::in_memory().with_file("db/schema.prisma", schema));

        let values = resolver
            .resolve(&ResolutionRequest::new("comment").with_parent("Post"))
            .unwrap();
        assert_eq!(
            values.parent_model_id_zod_type,
            Some(Resolution::resolved("string().uuid"))
        );
    }

    #[test]
    fn test_missing_parent_is_unresolved_not_an_error() {
        let request = ResolutionRequest::new("reply").with_parent("Comment");
        let values = resolver().resolve(&request).unwrap();
        assert_eq!(
            values.parent_model_id_zod_type,
            Some(Resolution::Unresolved(UnresolvedReason::ParentModelNotFound(
                "Comment".into()
            )))
        );
    }

    #[test]
    fn test_missing_schema_is_an_error_only_with_parent() {
        let resolver = TemplateValueResolver::new(
            "/nonexistent",
            FieldTypeMap::default(),
            DefaultFieldBuilder::default(),
        )
        .with_editor(Editor::in_memory());

        assert!(resolver.resolve(&ResolutionRequest::new("post")).is_ok());
        let err = resolver
            .resolve(&ResolutionRequest::new("comment").with_parent("Post"))
            .unwrap_err();
        assert!(matches!(err, AppError::SchemaNotFound(_)));
    }

    #[test]
    fn test_ordinary_args_delegated_in_one_batch() {
        let resolver = TemplateValueResolver::new(
            "/nonexistent",
            FieldTypeMap::default(),
            CountingBuilder {
                calls: Cell::new(0),
            },
        );
        let request =
            ResolutionRequest::new("post").with_extra_args(["id:Int", "title", "body:string?"]);
        let values = resolver.resolve(&request).unwrap();

        assert_eq!(resolver.field_builder.calls.get(), 1);
        let names: Vec<String> = values
            .field_template_values
            .unwrap()
            .into_iter()
            .map(|f| f.attribute_name)
            .collect();
        assert_eq!(names, vec!["title", "body"]);
    }

    #[test]
    fn test_field_builder_failure_aborts() {
        let request = ResolutionRequest::new("post").with_extra_args(["photo:blob"]);
        let err = resolver().resolve(&request).unwrap_err();
        assert!(matches!(err, AppError::UnknownFieldType(_)));
    }

    #[test]
    fn test_editor_is_created_once() {
        let resolver = TemplateValueResolver::new(
            "/nonexistent",
            FieldTypeMap::default(),
            DefaultFieldBuilder::default(),
        );
        let first: *const Editor = resolver.editor();
        let second: *const Editor = resolver.editor();
        assert_eq!(first, second);
        assert_eq!(
            resolver.editor().root(),
            Some(std::path::Path::new("/nonexistent"))
        );
    }
}
