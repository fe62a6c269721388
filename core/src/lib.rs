#![deny(missing_docs)]

//! # Scaffold Core
//!
//! Resolves the values a CRUD resource template needs: naming variants,
//! field metadata and, for nested resources, the parent's primary-key type
//! read from the project's Prisma schema.

/// Shared error types.
pub mod error;

/// Generator configuration.
pub mod config;

/// Naming and inflection helpers.
pub mod naming;

/// Type mapping logic (type name -> validation token).
pub mod type_mapping;

/// Field template values.
pub mod fields;

/// Prisma schema reading.
pub mod schema;

/// Template value resolution.
pub mod resolver;

pub use config::GeneratorConfig;
pub use error::{AppError, AppResult};
pub use fields::{DefaultFieldBuilder, FieldSpec, FieldTemplateBuilder, FieldTemplateValue};
pub use naming::ModelNames;
pub use resolver::{
    Resolution, ResolutionRequest, TemplateValueResolver, TemplateValues, UnresolvedReason,
};
pub use schema::{load_schema, parse_schema, Editor, LoadedSchema, Schema, SchemaLocator};
pub use type_mapping::{FieldTypeEntry, FieldTypeMap, ValidationTypeLookup};
