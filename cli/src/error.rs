#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use scaffold_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Failure inside the resolution library.
    #[display("{}", _0)]
    Core(AppError),

    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Output serialization failure.
    #[display("Output Error: {}", _0)]
    Json(serde_json::Error),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_display_unchanged() {
        let err: CliError = AppError::UnknownFieldType("blob".into()).into();
        assert_eq!(err.to_string(), "Unknown field type: blob");
    }
}
