//! # Schema Store
//!
//! The virtual-filesystem handle used to read project files, and the lookup
//! that decides which file holds the Prisma schema.

use crate::error::{AppError, AppResult};
use crate::schema::ast::Schema;
use crate::schema::parser::parse_schema;
use std::collections::HashMap;
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Schema locations tried when nothing else is configured, in order.
pub const DEFAULT_SCHEMA_PATHS: [&str; 2] = ["db/schema.prisma", "prisma/schema.prisma"];

/// Read-through, in-memory view of a project directory.
///
/// Files are read from disk once and then served from memory. An editor
/// without a root serves only the files seeded with [`Editor::with_file`].
#[derive(Debug, Default)]
pub struct Editor {
    root: Option<PathBuf>,
    files: Mutex<HashMap<PathBuf, Arc<str>>>,
}

impl Editor {
    /// Editor backed by the directory `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            files: Mutex::default(),
        }
    }

    /// Editor with no backing directory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Seeds `path` with `contents`, shadowing anything on disk.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let contents: String = contents.into();
        self.lock().insert(path.into(), Arc::from(contents));
        self
    }

    /// The backing directory, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Whether `path` (relative to the root) is known to the editor or exists on disk.
    pub fn exists(&self, path: &Path) -> bool {
        if self.lock().contains_key(path) {
            return true;
        }
        self.root
            .as_ref()
            .is_some_and(|root| root.join(path).is_file())
    }

    /// Contents of `path`, relative to the root.
    pub fn read(&self, path: &Path) -> AppResult<Arc<str>> {
        if let Some(cached) = self.lock().get(path) {
            return Ok(Arc::clone(cached));
        }

        let root = self.root.as_ref().ok_or_else(|| {
            AppError::Io(Error::new(
                ErrorKind::NotFound,
                format!("{} is not in the in-memory store", path.display()),
            ))
        })?;
        let contents: Arc<str> = Arc::from(fs::read_to_string(root.join(path))?.as_str());

        self.lock().insert(path.to_path_buf(), Arc::clone(&contents));
        Ok(contents)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Arc<str>>> {
        // The map stays consistent even if a holder panicked mid-insert.
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Decides where the schema file lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaLocator {
    /// An explicitly configured path; when set, no other location is tried.
    pub explicit: Option<PathBuf>,
}

impl SchemaLocator {
    /// Locator that only accepts `path`.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit: Some(path.into()),
        }
    }

    /// Candidate paths in priority order: explicit path, then `prisma.schema`
    /// from `package.json`, then the default locations.
    pub fn candidates(&self, editor: &Editor) -> AppResult<Vec<PathBuf>> {
        if let Some(path) = &self.explicit {
            return Ok(vec![path.clone()]);
        }

        let mut candidates = Vec::new();
        let manifest = Path::new("package.json");
        if editor.exists(manifest) {
            let json: serde_json::Value = serde_json::from_str(&editor.read(manifest)?)?;
            if let Some(path) = json
                .get("prisma")
                .and_then(|prisma| prisma.get("schema"))
                .and_then(serde_json::Value::as_str)
            {
                candidates.push(PathBuf::from(path));
            }
        }
        candidates.extend(DEFAULT_SCHEMA_PATHS.iter().map(PathBuf::from));
        Ok(candidates)
    }

    /// The first candidate that exists.
    pub fn locate(&self, editor: &Editor) -> AppResult<PathBuf> {
        let candidates = self.candidates(editor)?;
        candidates
            .iter()
            .find(|path| editor.exists(path))
            .cloned()
            .ok_or_else(|| {
                let searched: Vec<String> = candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                AppError::SchemaNotFound(searched.join(", "))
            })
    }
}

/// A parsed schema together with the path it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSchema {
    /// Where the schema was found, relative to the editor root.
    pub path: PathBuf,
    /// The parsed declarations.
    pub schema: Schema,
}

/// Locates, reads and parses the project's schema.
pub fn load_schema(editor: &Editor, locator: &SchemaLocator) -> AppResult<LoadedSchema> {
    let path = locator.locate(editor)?;
    tracing::debug!(path = %path.display(), "loading schema");

    let source = editor.read(&path)?;
    let schema = parse_schema(&source)?;
    tracing::debug!(
        declarations = schema.list.len(),
        models = schema.models().count(),
        "schema parsed"
    );

    Ok(LoadedSchema { path, schema })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    const SCHEMA: &str = "model Post {\n  id Int @id @default(autoincrement())\n}\n";

    #[test]
    fn test_in_memory_editor_serves_seeded_files() {
        let editor = Editor::in_memory().with_file("db/schema.prisma", SCHEMA);
        assert!(editor.exists(Path::new("db/schema.prisma")));
        assert!(!editor.exists(Path::new("prisma/schema.prisma")));
        assert_eq!(&*editor.read(Path::new("db/schema.prisma")).unwrap(), SCHEMA);
        assert!(matches!(
            editor.read(Path::new("missing.prisma")),
            Err(AppError::Io(_))
        ));
    }

    #[test]
    fn test_disk_editor_caches_reads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.prisma");
        File::create(&path)
            .unwrap()
            .write_all(SCHEMA.as_bytes())
            .unwrap();

        let editor = Editor::new(dir.path());
        let first = editor.read(Path::new("schema.prisma")).unwrap();

        // Served from memory after the first read
        fs::remove_file(&path).unwrap();
        let second = editor.read(Path::new("schema.prisma")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_locator_prefers_package_json() {
        let editor = Editor::in_memory()
            .with_file(
                "package.json",
                r#"{"name": "app", "prisma": {"schema": "custom/app.prisma"}}"#,
            )
            .with_file("custom/app.prisma", SCHEMA)
            .with_file("db/schema.prisma", SCHEMA);

        let path = SchemaLocator::default().locate(&editor).unwrap();
        assert_eq!(path, PathBuf::from("custom/app.prisma"));
    }

    #[test]
    fn test_locator_falls_back_to_defaults() {
        let editor = Editor::in_memory()
            .with_file("package.json", r#"{"name": "app"}"#)
            .with_file("prisma/schema.prisma", SCHEMA);

        let path = SchemaLocator::default().locate(&editor).unwrap();
        assert_eq!(path, PathBuf::from("prisma/schema.prisma"));
    }

    #[test]
    fn test_explicit_path_is_exclusive() {
        let editor = Editor::in_memory().with_file("db/schema.prisma", SCHEMA);
        let err = SchemaLocator::explicit("other.prisma")
            .locate(&editor)
            .unwrap_err();
        match err {
            AppError::SchemaNotFound(searched) => assert_eq!(searched, "other.prisma"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_schema_parses_located_file() {
        let editor = Editor::in_memory().with_file("db/schema.prisma", SCHEMA);
        let loaded = load_schema(&editor, &SchemaLocator::default()).unwrap();
        assert_eq!(loaded.path, PathBuf::from("db/schema.prisma"));
        assert!(loaded.schema.find_model("Post").is_some());
    }
}
