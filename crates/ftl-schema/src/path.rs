//! Locations inside a schema, used to report where an error occurred.

use std::fmt;

/// One step on the way from the schema root to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Module(String),
    Data(String),
    Verb(String),
    /// A declaration whose kind could not be determined, by index.
    Decl(usize),
    Field(String),
    Request,
    Response,
    Metadata(usize),
    Call(usize),
    ArrayElement,
    MapKey,
    MapValue,
}

/// A path from the schema root to a node, e.g.
/// `module payments / verb charge / request`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SchemaPath {
    segments: Vec<PathSegment>,
}

impl SchemaPath {
    /// The empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a module.
    pub fn module(name: impl Into<String>) -> Self {
        Self::root().join(PathSegment::Module(name.into()))
    }

    /// A new path with `segment` appended.
    pub fn join(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Module(name) => write!(f, "module {name}"),
            PathSegment::Data(name) => write!(f, "data {name}"),
            PathSegment::Verb(name) => write!(f, "verb {name}"),
            PathSegment::Decl(index) => write!(f, "decl #{index}"),
            PathSegment::Field(name) => write!(f, "field {name}"),
            PathSegment::Request => write!(f, "request"),
            PathSegment::Response => write!(f, "response"),
            PathSegment::Metadata(index) => write!(f, "metadata #{index}"),
            PathSegment::Call(index) => write!(f, "call #{index}"),
            PathSegment::ArrayElement => write!(f, "array element"),
            PathSegment::MapKey => write!(f, "map key"),
            PathSegment::MapValue => write!(f, "map value"),
        }
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "<schema>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " / ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "path/path_tests.rs"]
mod path_tests;
