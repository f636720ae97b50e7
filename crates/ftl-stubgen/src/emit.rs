//! Declaration emission.
//!
//! Projects schema declarations into target-neutral source descriptions:
//! [`RecordSource`] for data and [`StubSource`] for verbs. Types are mapped
//! through [`map_type_at`], call metadata becomes [`Annotation`] records, and
//! no Kotlin syntax is produced here; that is the renderer's job.

use crate::kotlin_types::{self, ClassName};
use crate::naming::is_quotable_identifier;
use crate::types::{TypeExpr, map_type_at};
use ftl_schema::{
    DataDecl, Metadata, PathSegment, SchemaError, SchemaPath, SchemaResult, VerbDecl,
};
use std::collections::HashSet;

/// Name of the implicit call-context parameter.
pub const CONTEXT_PARAM: &str = "context";

/// Name of the request parameter.
pub const REQUEST_PARAM: &str = "req";

/// A record generated for a data declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSource {
    pub name: String,
    pub docs: Vec<String>,

    /// Properties in schema field order.
    pub properties: Vec<PropertySource>,
}

impl RecordSource {
    /// Kotlin data classes need at least one property; an empty record gets a placeholder.
    pub fn needs_placeholder(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A record property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    pub name: String,
    pub docs: Vec<String>,
    pub ty: TypeExpr,
}

/// A callable stub generated for a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubSource {
    pub name: String,
    pub docs: Vec<String>,

    /// `@Verb` followed by one annotation per metadata entry.
    pub annotations: Vec<Annotation>,

    /// The call context, then the request if the verb takes one.
    pub params: Vec<Parameter>,

    /// Mapped response type, `None` for verbs with no output.
    pub returns: Option<TypeExpr>,

    pub body: UnimplementedMarker,
}

/// A stub parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeExpr,
}

/// A structured annotation attached to a stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub class: ClassName,
    pub args: Vec<AnnotationArg>,
}

/// An annotation argument, carried verbatim from the metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationArg {
    /// A constant of an enum class, e.g. `Method.POST`.
    EnumConstant { class: ClassName, constant: String },

    /// A string literal.
    Str(String),

    /// An array of string literals.
    StrArray(Vec<String>),
}

/// The fixed body of every stub: fail loudly and point at the call-routing indirection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnimplementedMarker {
    pub module: String,
    pub verb: String,
}

impl UnimplementedMarker {
    /// `module.verb`, the reference callers should route through.
    pub fn reference(&self) -> String {
        format!("{}.{}", self.module, self.verb)
    }

    /// Message of the error thrown by the stub.
    pub fn message(&self) -> String {
        format!(
            "Verb stubs should not be called directly, instead use context.call({}, ...)",
            self.reference()
        )
    }
}

/// Emit the record for a data declaration.
///
/// `path` is the location of the declaration itself.
pub fn emit_data(data: &DataDecl, path: &SchemaPath) -> SchemaResult<RecordSource> {
    check_identifier(&data.name, path)?;

    let mut seen = HashSet::new();
    let mut properties = Vec::with_capacity(data.fields.len());

    for field in &data.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateFieldName {
                path: path.clone(),
                name: field.name.clone(),
            });
        }
        let field_path = path.join(PathSegment::Field(field.name.clone()));
        check_identifier(&field.name, &field_path)?;
        properties.push(PropertySource {
            name: field.name.clone(),
            docs: field.comments.clone(),
            ty: map_type_at(&field.ty, &field_path)?,
        });
    }

    Ok(RecordSource {
        name: data.name.clone(),
        docs: data.comments.clone(),
        properties,
    })
}

/// Emit the stub for a verb belonging to `home_module`.
///
/// `path` is the location of the declaration itself.
pub fn emit_verb(home_module: &str, verb: &VerbDecl, path: &SchemaPath) -> SchemaResult<StubSource> {
    check_identifier(&verb.name, path)?;

    let mut params = vec![Parameter {
        name: CONTEXT_PARAM.to_string(),
        ty: TypeExpr::Class(kotlin_types::CONTEXT),
    }];
    if let Some(request) = &verb.request {
        params.push(Parameter {
            name: REQUEST_PARAM.to_string(),
            ty: map_type_at(request, &path.join(PathSegment::Request))?,
        });
    }

    let returns = verb
        .response
        .as_ref()
        .map(|response| map_type_at(response, &path.join(PathSegment::Response)))
        .transpose()?;

    let mut annotations = Vec::with_capacity(verb.metadata.len() + 1);
    annotations.push(Annotation {
        class: kotlin_types::VERB,
        args: Vec::new(),
    });
    annotations.extend(verb.metadata.iter().map(metadata_annotation));

    Ok(StubSource {
        name: verb.name.clone(),
        docs: verb.comments.clone(),
        annotations,
        params,
        returns,
        body: UnimplementedMarker {
            module: home_module.to_string(),
            verb: verb.name.clone(),
        },
    })
}

/// Fail with [`SchemaError::InvalidIdentifier`] unless `name` can be rendered.
pub(crate) fn check_identifier(name: &str, path: &SchemaPath) -> SchemaResult<()> {
    if is_quotable_identifier(name) {
        Ok(())
    } else {
        Err(SchemaError::InvalidIdentifier {
            path: path.clone(),
            name: name.to_string(),
        })
    }
}

/// Transcribe one metadata entry into one annotation.
fn metadata_annotation(metadata: &Metadata) -> Annotation {
    match metadata {
        Metadata::Ingress(ingress) => Annotation {
            class: kotlin_types::INGRESS,
            args: vec![
                AnnotationArg::EnumConstant {
                    class: kotlin_types::METHOD,
                    constant: ingress.method.clone(),
                },
                AnnotationArg::Str(ingress.path.clone()),
            ],
        },
        Metadata::Calls(calls) => Annotation {
            class: kotlin_types::CALLS,
            args: vec![AnnotationArg::StrArray(
                calls.calls.iter().map(ToString::to_string).collect(),
            )],
        },
    }
}
