//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON (de)serialization errors (config, `package.json`).
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Wrapper for YAML config errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// The schema file could not be parsed.
    #[from(ignore)]
    #[display("Schema syntax error on line {line}: {message}")]
    SchemaSyntax {
        /// 1-based line number in the schema file.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// No schema file exists at any of the searched locations.
    #[from(ignore)]
    #[display("Schema file not found (searched: {_0})")]
    SchemaNotFound(String),

    /// A field argument named a type the field type table does not know.
    #[from(ignore)]
    #[display("Unknown field type: {_0}")]
    UnknownFieldType(String),

    /// A command-line argument token could not be interpreted.
    #[from(ignore)]
    #[display("Invalid argument: {_0}")]
    InvalidArgument(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
