#![deny(missing_docs)]

//! # Schema Module
//!
//! Reads the project's Prisma schema: locating the file through an [`Editor`],
//! parsing it, and exposing the declarations as a small AST.

pub mod ast;
pub mod parser;
pub mod store;

pub use ast::{
    Attribute, AttributeArg, ConfigBlock, Declaration, EnumDecl, Field, Model, Property, Schema,
    Value,
};
pub use parser::parse_schema;
pub use store::{load_schema, Editor, LoadedSchema, SchemaLocator, DEFAULT_SCHEMA_PATHS};
