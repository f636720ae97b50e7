//! Error types for schema decoding and stub generation

use crate::path::SchemaPath;
use std::fmt;
use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error type for schema decoding and stub generation
///
/// Every variant except [`SchemaError::Decode`] carries the path of the
/// offending node so the schema author can locate the defect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// An array type has no element type
    #[error("{path}: array type is missing its element type")]
    MissingArrayElement { path: SchemaPath },

    /// A map type has no key type
    #[error("{path}: map type is missing its key type")]
    MissingMapKey { path: SchemaPath },

    /// A map type has no value type
    #[error("{path}: map type is missing its value type")]
    MissingMapValue { path: SchemaPath },

    /// A type does not match exactly one known kind
    #[error("{path}: type has {populated} kinds populated, expected exactly one")]
    UnknownTypeShape { path: SchemaPath, populated: usize },

    /// A declaration is neither data nor verb, or both
    #[error("{path}: declaration has {populated} kinds populated, expected exactly one")]
    UnknownDeclarationShape { path: SchemaPath, populated: usize },

    /// A metadata entry does not match exactly one known kind
    #[error("{path}: metadata has {populated} kinds populated, expected exactly one")]
    UnknownMetadataShape { path: SchemaPath, populated: usize },

    /// A reference names a module or declaration not in the schema
    #[error("{path}: reference to unknown {kind} {reference:?}")]
    UnresolvedReference {
        path: SchemaPath,
        kind: crate::DeclKind,
        reference: String,
    },

    /// Two declarations in one module share a name
    #[error("{path}: duplicate declaration {name:?}")]
    DuplicateDeclarationName { path: SchemaPath, name: String },

    /// Two fields in one data structure share a name
    #[error("{path}: duplicate field {name:?}")]
    DuplicateFieldName { path: SchemaPath, name: String },

    /// A name cannot be written as a Kotlin identifier, even backticked
    #[error("{path}: {name:?} cannot be used as a Kotlin identifier")]
    InvalidIdentifier { path: SchemaPath, name: String },

    /// The wire form could not be parsed at all
    #[error("decode error: {message}")]
    Decode { message: String },
}

/// Discriminant of a [`SchemaError`], stable across paths and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingArrayElement,
    MissingMapKey,
    MissingMapValue,
    UnknownTypeShape,
    UnknownDeclarationShape,
    UnknownMetadataShape,
    UnresolvedReference,
    DuplicateDeclarationName,
    DuplicateFieldName,
    InvalidIdentifier,
    Decode,
}

impl SchemaError {
    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchemaError::MissingArrayElement { .. } => ErrorKind::MissingArrayElement,
            SchemaError::MissingMapKey { .. } => ErrorKind::MissingMapKey,
            SchemaError::MissingMapValue { .. } => ErrorKind::MissingMapValue,
            SchemaError::UnknownTypeShape { .. } => ErrorKind::UnknownTypeShape,
            SchemaError::UnknownDeclarationShape { .. } => ErrorKind::UnknownDeclarationShape,
            SchemaError::UnknownMetadataShape { .. } => ErrorKind::UnknownMetadataShape,
            SchemaError::UnresolvedReference { .. } => ErrorKind::UnresolvedReference,
            SchemaError::DuplicateDeclarationName { .. } => ErrorKind::DuplicateDeclarationName,
            SchemaError::DuplicateFieldName { .. } => ErrorKind::DuplicateFieldName,
            SchemaError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            SchemaError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// The location of the offending node, if the error has one
    pub fn path(&self) -> Option<&SchemaPath> {
        match self {
            SchemaError::MissingArrayElement { path }
            | SchemaError::MissingMapKey { path }
            | SchemaError::MissingMapValue { path }
            | SchemaError::UnknownTypeShape { path, .. }
            | SchemaError::UnknownDeclarationShape { path, .. }
            | SchemaError::UnknownMetadataShape { path, .. }
            | SchemaError::UnresolvedReference { path, .. }
            | SchemaError::DuplicateDeclarationName { path, .. }
            | SchemaError::DuplicateFieldName { path, .. }
            | SchemaError::InvalidIdentifier { path, .. } => Some(path),
            SchemaError::Decode { .. } => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::MissingArrayElement => "MissingArrayElement",
            ErrorKind::MissingMapKey => "MissingMapKey",
            ErrorKind::MissingMapValue => "MissingMapValue",
            ErrorKind::UnknownTypeShape => "UnknownTypeShape",
            ErrorKind::UnknownDeclarationShape => "UnknownDeclarationShape",
            ErrorKind::UnknownMetadataShape => "UnknownMetadataShape",
            ErrorKind::UnresolvedReference => "UnresolvedReference",
            ErrorKind::DuplicateDeclarationName => "DuplicateDeclarationName",
            ErrorKind::DuplicateFieldName => "DuplicateFieldName",
            ErrorKind::InvalidIdentifier => "InvalidIdentifier",
            ErrorKind::Decode => "Decode",
        };
        write!(f, "{name}")
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Decode {
            message: err.to_string(),
        }
    }
}
