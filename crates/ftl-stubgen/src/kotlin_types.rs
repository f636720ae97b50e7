//! Kotlin class names used by generated stubs.
//!
//! This is the mapping table from schema leaf and container kinds to Kotlin
//! classes, plus the FTL runtime classes that stubs are annotated with.
//!
//! # Type Mappings
//!
//! | Schema | Kotlin |
//! |--------|--------|
//! | `Int` | `kotlin.Long` |
//! | `Float` | `kotlin.Float` |
//! | `String` | `kotlin.String` |
//! | `Bool` | `kotlin.Boolean` |
//! | `Time` | `java.time.OffsetDateTime` |
//! | `[T]` | `kotlin.collections.ArrayList<T>` |
//! | `{K: V}` | `kotlin.collections.Map<K, V>` |

use std::fmt;

/// A fully qualified Kotlin class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassName {
    /// Package, e.g. `kotlin.collections`.
    pub package: &'static str,
    /// Simple name, e.g. `Map`.
    pub simple: &'static str,
}

impl ClassName {
    pub const fn new(package: &'static str, simple: &'static str) -> Self {
        Self { package, simple }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.simple)
    }
}

pub const LONG: ClassName = ClassName::new("kotlin", "Long");
pub const FLOAT: ClassName = ClassName::new("kotlin", "Float");
pub const STRING: ClassName = ClassName::new("kotlin", "String");
pub const BOOLEAN: ClassName = ClassName::new("kotlin", "Boolean");
pub const UNIT: ClassName = ClassName::new("kotlin", "Unit");
pub const NOT_IMPLEMENTED_ERROR: ClassName = ClassName::new("kotlin", "NotImplementedError");
pub const OFFSET_DATE_TIME: ClassName = ClassName::new("java.time", "OffsetDateTime");
pub const ARRAY_LIST: ClassName = ClassName::new("kotlin.collections", "ArrayList");
pub const MAP: ClassName = ClassName::new("kotlin.collections", "Map");
pub const KFUNCTION: ClassName = ClassName::new("kotlin.reflect", "KFunction");

// FTL runtime
pub const CONTEXT: ClassName = ClassName::new("xyz.block.ftl", "Context");
pub const IGNORE: ClassName = ClassName::new("xyz.block.ftl", "Ignore");
pub const VERB: ClassName = ClassName::new("xyz.block.ftl", "Verb");
pub const INGRESS: ClassName = ClassName::new("xyz.block.ftl", "Ingress");
pub const METHOD: ClassName = ClassName::new("xyz.block.ftl", "Method");
pub const CALLS: ClassName = ClassName::new("xyz.block.ftl", "Calls");

/// Packages Kotlin imports implicitly into every file.
const DEFAULT_IMPORTS: &[&str] = &[
    "kotlin",
    "kotlin.annotation",
    "kotlin.collections",
    "kotlin.comparisons",
    "kotlin.io",
    "kotlin.ranges",
    "kotlin.sequences",
    "kotlin.text",
    "java.lang",
];

/// Whether classes in `package` are visible without an import.
pub fn is_default_import(package: &str) -> bool {
    DEFAULT_IMPORTS.contains(&package)
}
