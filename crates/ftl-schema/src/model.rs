//! Schema model: modules, declarations, types and call metadata.
//!
//! Everything here is plain immutable data. Cross-module references are
//! `(module, name)` pairs resolved by lookup against the [`Schema`], never
//! pointers into another module's declarations.

use std::fmt;

/// A complete schema: every module known to the platform, in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Modules in schema order. Output ordering follows this order.
    pub modules: Vec<Module>,
}

/// A module and its declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    /// Module name, unique and case-sensitive.
    pub name: String,

    /// Documentation comment lines.
    pub comments: Vec<String>,

    /// Declarations in schema order.
    pub decls: Vec<Decl>,
}

/// A declaration inside a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// A data structure.
    Data(DataDecl),

    /// A callable verb.
    Verb(VerbDecl),
}

/// Which kind of declaration a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Data,
    Verb,
}

/// A data structure declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataDecl {
    pub name: String,
    pub comments: Vec<String>,
    pub fields: Vec<Field>,
}

/// A verb declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbDecl {
    pub name: String,
    pub comments: Vec<String>,

    /// Request type. `None` means the verb takes no input.
    pub request: Option<Type>,

    /// Response type. `None` means the verb produces no output.
    pub response: Option<Type>,

    /// Out-of-band call metadata, in schema order.
    pub metadata: Vec<Metadata>,
}

/// A field of a data structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub comments: Vec<String>,
    pub ty: Type,
}

/// A schema type.
///
/// Container children are optional so that a structurally incomplete
/// container can be represented and rejected when it is mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
    String,
    Bool,
    Time,
    Array { element: Option<Box<Type>> },
    Map {
        key: Option<Box<Type>>,
        value: Option<Box<Type>>,
    },
    VerbRef(Ref),
    DataRef(Ref),
}

/// A reference to a declaration in some module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ref {
    pub module: String,
    pub name: String,
}

/// Call metadata attached to a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metadata {
    /// HTTP ingress binding.
    Ingress(MetadataIngress),

    /// Verbs called by this verb.
    Calls(MetadataCalls),
}

/// An HTTP ingress binding. Both fields are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataIngress {
    pub method: String,
    pub path: String,
}

/// The set of verbs a verb calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataCalls {
    pub calls: Vec<Ref>,
}

impl Schema {
    /// Create a schema from modules in order.
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// Find a module by name.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Resolve a reference to a declaration of the given kind.
    pub fn resolve(&self, kind: DeclKind, reference: &Ref) -> Option<&Decl> {
        self.module(&reference.module)?
            .decls
            .iter()
            .find(|decl| decl.kind() == kind && decl.name() == reference.name)
    }
}

impl Module {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add documentation lines.
    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }

    /// Append a declaration.
    pub fn with_decl(mut self, decl: impl Into<Decl>) -> Self {
        self.decls.push(decl.into());
        self
    }

    /// Data declarations in schema order.
    pub fn data(&self) -> impl Iterator<Item = &DataDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Data(data) => Some(data),
            Decl::Verb(_) => None,
        })
    }

    /// Verb declarations in schema order.
    pub fn verbs(&self) -> impl Iterator<Item = &VerbDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Verb(verb) => Some(verb),
            Decl::Data(_) => None,
        })
    }
}

impl Decl {
    /// The declaration's name.
    pub fn name(&self) -> &str {
        match self {
            Decl::Data(data) => &data.name,
            Decl::Verb(verb) => &verb.name,
        }
    }

    /// The declaration's kind.
    pub fn kind(&self) -> DeclKind {
        match self {
            Decl::Data(_) => DeclKind::Data,
            Decl::Verb(_) => DeclKind::Verb,
        }
    }
}

impl From<DataDecl> for Decl {
    fn from(data: DataDecl) -> Self {
        Decl::Data(data)
    }
}

impl From<VerbDecl> for Decl {
    fn from(verb: VerbDecl) -> Self {
        Decl::Verb(verb)
    }
}

impl DataDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }

    /// Append a field with no documentation.
    pub fn with_field(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    /// Append a fully specified field.
    pub fn push_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

impl VerbDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_request(mut self, ty: Type) -> Self {
        self.request = Some(ty);
        self
    }

    pub fn with_response(mut self, ty: Type) -> Self {
        self.response = Some(ty);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata.push(metadata);
        self
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            ty,
        }
    }

    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }
}

impl Type {
    /// An array of `element`.
    pub fn array(element: Type) -> Self {
        Type::Array {
            element: Some(Box::new(element)),
        }
    }

    /// A map from `key` to `value`.
    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Some(Box::new(key)),
            value: Some(Box::new(value)),
        }
    }

    /// A reference to a data structure.
    pub fn data_ref(module: impl Into<String>, name: impl Into<String>) -> Self {
        Type::DataRef(Ref::new(module, name))
    }

    /// A reference to a verb.
    pub fn verb_ref(module: impl Into<String>, name: impl Into<String>) -> Self {
        Type::VerbRef(Ref::new(module, name))
    }

    /// Short kind name as it appears in the schema language.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Int => "Int",
            Type::Float => "Float",
            Type::String => "String",
            Type::Bool => "Bool",
            Type::Time => "Time",
            Type::Array { .. } => "Array",
            Type::Map { .. } => "Map",
            Type::VerbRef(_) => "VerbRef",
            Type::DataRef(_) => "DataRef",
        }
    }
}

impl Ref {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.name)
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclKind::Data => write!(f, "data"),
            DeclKind::Verb => write!(f, "verb"),
        }
    }
}

impl MetadataIngress {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl Metadata {
    /// An HTTP ingress binding.
    pub fn ingress(method: impl Into<String>, path: impl Into<String>) -> Self {
        Metadata::Ingress(MetadataIngress::new(method, path))
    }

    /// A calls list.
    pub fn calls(calls: Vec<Ref>) -> Self {
        Metadata::Calls(MetadataCalls { calls })
    }
}
