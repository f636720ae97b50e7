//! ftl-stubgen - Kotlin stubs for foreign FTL modules
//!
//! Given a [`Schema`] and the name of the "home" module, the generator emits
//! one Kotlin source unit per *other* module, holding a data class per data
//! declaration and an unimplemented stub per verb, so the home module can call
//! foreign verbs with full type information at compile time.
//!
//! # Architecture
//!
//! ```text
//! Schema
//!     ↓
//!  [ModuleGenerator]   one unit per foreign module, schema order
//!     ↓
//!  [emit_data / emit_verb]   records and stubs, target neutral
//!     ↓                       (types via map_type)
//!  [render_module]     Kotlin source text
//!     ↓
//!  GeneratedUnit { path, source, referenced_types }
//! ```
//!
//! Generation performs no I/O; writing units to disk is the caller's job.
//!
//! # Usage
//!
//! ```
//! use ftl_stubgen::prelude::*;
//!
//! let schema = Schema::new(vec![
//!     Module::new("payments")
//!         .with_decl(DataDecl::new("Receipt").with_field("amount", Type::Int)),
//!     Module::new("orders"),
//! ]);
//!
//! let units = generate(&schema, "orders").unwrap();
//!
//! assert_eq!(units.len(), 1);
//! assert!(units[0].source.contains("public val amount: Long,"));
//! ```

pub mod config;
pub mod emit;
pub mod generator;
pub mod kotlin;
pub mod kotlin_types;
pub mod naming;
pub mod types;

pub use config::{GeneratorConfig, ReferencePolicy};
pub use generator::{GeneratedUnit, ModuleGenerator, ModuleSource, generate, source_digest};
pub use types::{TypeExpr, map_type, map_type_at};

pub use ftl_schema::{ErrorKind, Schema, SchemaError, SchemaPath, SchemaResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GeneratedUnit, GeneratorConfig, ModuleGenerator, ReferencePolicy, generate,
    };
    pub use ftl_schema::prelude::*;
}
