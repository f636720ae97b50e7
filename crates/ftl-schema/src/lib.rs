//! ftl-schema - Schema model for FTL stub generation
//!
//! This crate provides the read-only schema snapshot consumed by the stub generator:
//! - [`Schema`], [`Module`], [`Decl`] and friends describing modules, verbs and data
//! - [`Type`], the closed set of nine schema type kinds
//! - [`SchemaPath`] for locating a node inside a schema
//! - [`SchemaError`] for the structured errors raised while decoding or generating
//! - [`Schema::from_json`] for decoding the JSON wire form

mod error;
mod model;
mod path;
mod wire;

pub use error::{ErrorKind, SchemaError, SchemaResult};
pub use model::{
    DataDecl, Decl, DeclKind, Field, Metadata, MetadataCalls, MetadataIngress, Module, Ref, Schema,
    Type, VerbDecl,
};
pub use path::{PathSegment, SchemaPath};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DataDecl, Decl, DeclKind, Field, Metadata, MetadataCalls, MetadataIngress, Module, Ref,
        Schema, SchemaError, SchemaPath, SchemaResult, Type, VerbDecl,
    };
}
