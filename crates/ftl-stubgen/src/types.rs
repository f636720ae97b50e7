//! Type mapping from schema types to Kotlin type expressions.
//!
//! [`map_type`] is a pure function over the closed [`Type`] enum. Leaf kinds
//! map to fixed classes from [`kotlin_types`](crate::kotlin_types), containers
//! recurse into their children, and references become qualified references
//! to the record or stub generated for the foreign module. Foreign shapes are
//! never inlined.

use crate::kotlin_types::{self, ClassName};
use ftl_schema::{PathSegment, Ref, SchemaError, SchemaPath, SchemaResult, Type};

/// A target type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// A fixed class, e.g. `kotlin.Long`.
    Class(ClassName),

    /// A generic class applied to type arguments, e.g. `Map<String, Long>`.
    Generic { raw: ClassName, args: Vec<TypeExpr> },

    /// The record generated for a data declaration.
    Data(Ref),

    /// The stub generated for a verb.
    Verb(Ref),
}

impl TypeExpr {
    /// Every data or verb reference in this expression, depth first.
    pub fn references(&self) -> Vec<&Ref> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    /// Only the verb references in this expression, depth first.
    ///
    /// Verb references all render as the same function type, so callers use
    /// this to keep the referenced stub visible in the output.
    pub fn verb_references(&self) -> Vec<&Ref> {
        let mut out = Vec::new();
        self.collect_verb_references(&mut out);
        out
    }

    fn collect_verb_references<'a>(&'a self, out: &mut Vec<&'a Ref>) {
        match self {
            TypeExpr::Class(_) | TypeExpr::Data(_) => {}
            TypeExpr::Generic { args, .. } => {
                for arg in args {
                    arg.collect_verb_references(out);
                }
            }
            TypeExpr::Verb(reference) => out.push(reference),
        }
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a Ref>) {
        match self {
            TypeExpr::Class(_) => {}
            TypeExpr::Generic { args, .. } => {
                for arg in args {
                    arg.collect_references(out);
                }
            }
            TypeExpr::Data(reference) | TypeExpr::Verb(reference) => out.push(reference),
        }
    }
}

/// Map a schema type to a type expression.
///
/// Errors carry the root path; use [`map_type_at`] to report a location.
pub fn map_type(ty: &Type) -> SchemaResult<TypeExpr> {
    map_type_at(ty, &SchemaPath::root())
}

/// Map a schema type found at `path` to a type expression.
pub fn map_type_at(ty: &Type, path: &SchemaPath) -> SchemaResult<TypeExpr> {
    let expr = match ty {
        Type::Int => TypeExpr::Class(kotlin_types::LONG),
        Type::Float => TypeExpr::Class(kotlin_types::FLOAT),
        Type::String => TypeExpr::Class(kotlin_types::STRING),
        Type::Bool => TypeExpr::Class(kotlin_types::BOOLEAN),
        Type::Time => TypeExpr::Class(kotlin_types::OFFSET_DATE_TIME),
        Type::Array { element } => {
            let element = element
                .as_deref()
                .ok_or_else(|| SchemaError::MissingArrayElement { path: path.clone() })?;
            TypeExpr::Generic {
                raw: kotlin_types::ARRAY_LIST,
                args: vec![map_type_at(
                    element,
                    &path.join(PathSegment::ArrayElement),
                )?],
            }
        }
        Type::Map { key, value } => {
            let key = key
                .as_deref()
                .ok_or_else(|| SchemaError::MissingMapKey { path: path.clone() })?;
            let value = value
                .as_deref()
                .ok_or_else(|| SchemaError::MissingMapValue { path: path.clone() })?;
            TypeExpr::Generic {
                raw: kotlin_types::MAP,
                args: vec![
                    map_type_at(key, &path.join(PathSegment::MapKey))?,
                    map_type_at(value, &path.join(PathSegment::MapValue))?,
                ],
            }
        }
        Type::VerbRef(reference) => TypeExpr::Verb(reference.clone()),
        Type::DataRef(reference) => TypeExpr::Data(reference.clone()),
    };
    Ok(expr)
}

#[cfg(test)]
#[path = "types/types_tests.rs"]
mod types_tests;
