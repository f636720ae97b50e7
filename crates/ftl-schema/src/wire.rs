//! JSON wire form of the schema.
//!
//! The wire form mirrors the protobuf schema: types, declarations and
//! metadata are one-of objects with one key per kind, for example
//! `{"array": {"element": {"string": {}}}}`. A decoded one-of with zero or
//! several keys populated is rejected here with the path of the node, so the
//! model never holds an ambiguous value.

use crate::error::{SchemaError, SchemaResult};
use crate::model::{
    DataDecl, Decl, Field, Metadata, MetadataCalls, MetadataIngress, Module, Ref, Schema, Type,
    VerbDecl,
};
use crate::path::{PathSegment, SchemaPath};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WireSchema {
    #[serde(default)]
    modules: Vec<WireModule>,
}

#[derive(Debug, Deserialize)]
struct WireModule {
    name: String,

    #[serde(default)]
    comments: Vec<String>,

    #[serde(default)]
    decls: Vec<WireDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDecl {
    #[serde(default)]
    data: Option<WireData>,

    #[serde(default)]
    verb: Option<WireVerb>,
}

#[derive(Debug, Deserialize)]
struct WireData {
    name: String,

    #[serde(default)]
    comments: Vec<String>,

    #[serde(default)]
    fields: Vec<WireField>,
}

#[derive(Debug, Deserialize)]
struct WireVerb {
    name: String,

    #[serde(default)]
    comments: Vec<String>,

    #[serde(default)]
    request: Option<WireType>,

    #[serde(default)]
    response: Option<WireType>,

    #[serde(default)]
    metadata: Vec<WireMetadata>,
}

#[derive(Debug, Deserialize)]
struct WireField {
    name: String,

    #[serde(default)]
    comments: Vec<String>,

    #[serde(rename = "type")]
    ty: WireType,
}

/// Marker for kinds that carry no payload, e.g. `{"int": {}}`.
#[derive(Debug, Deserialize)]
struct WireUnit {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireType {
    #[serde(default)]
    int: Option<WireUnit>,
    #[serde(default)]
    float: Option<WireUnit>,
    #[serde(default)]
    string: Option<WireUnit>,
    #[serde(default)]
    bool: Option<WireUnit>,
    #[serde(default)]
    time: Option<WireUnit>,
    #[serde(default)]
    array: Option<WireArray>,
    #[serde(default)]
    map: Option<WireMap>,
    #[serde(default)]
    verb_ref: Option<WireRef>,
    #[serde(default)]
    data_ref: Option<WireRef>,
}

#[derive(Debug, Deserialize)]
struct WireArray {
    #[serde(default)]
    element: Option<Box<WireType>>,
}

#[derive(Debug, Deserialize)]
struct WireMap {
    #[serde(default)]
    key: Option<Box<WireType>>,

    #[serde(default)]
    value: Option<Box<WireType>>,
}

#[derive(Debug, Deserialize)]
struct WireRef {
    module: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct WireMetadata {
    #[serde(default)]
    ingress: Option<WireIngress>,

    #[serde(default)]
    calls: Option<WireCalls>,
}

#[derive(Debug, Deserialize)]
struct WireIngress {
    method: String,
    path: String,
}

#[derive(Debug, Deserialize)]
struct WireCalls {
    #[serde(default)]
    calls: Vec<WireRef>,
}

impl Schema {
    /// Decode a schema from its JSON wire form.
    pub fn from_json(bytes: &[u8]) -> SchemaResult<Self> {
        let wire: WireSchema = serde_json::from_slice(bytes)?;
        wire.into_model()
    }

    /// Decode a schema from a JSON string.
    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        Self::from_json(json.as_bytes())
    }
}

impl WireSchema {
    fn into_model(self) -> SchemaResult<Schema> {
        let modules = self
            .modules
            .into_iter()
            .map(WireModule::into_model)
            .collect::<SchemaResult<Vec<_>>>()?;

        Ok(Schema { modules })
    }
}

impl WireModule {
    fn into_model(self) -> SchemaResult<Module> {
        let path = SchemaPath::module(&self.name);
        let decls = self
            .decls
            .into_iter()
            .enumerate()
            .map(|(index, decl)| decl.into_model(&path, index))
            .collect::<SchemaResult<Vec<_>>>()?;

        Ok(Module {
            name: self.name,
            comments: self.comments,
            decls,
        })
    }
}

impl WireDecl {
    fn into_model(self, module_path: &SchemaPath, index: usize) -> SchemaResult<Decl> {
        match (self.data, self.verb) {
            (Some(data), None) => data.into_model(module_path).map(Decl::Data),
            (None, Some(verb)) => verb.into_model(module_path).map(Decl::Verb),
            (data, verb) => Err(SchemaError::UnknownDeclarationShape {
                path: module_path.join(PathSegment::Decl(index)),
                populated: usize::from(data.is_some()) + usize::from(verb.is_some()),
            }),
        }
    }
}

impl WireData {
    fn into_model(self, module_path: &SchemaPath) -> SchemaResult<DataDecl> {
        let path = module_path.join(PathSegment::Data(self.name.clone()));
        let fields = self
            .fields
            .into_iter()
            .map(|field| {
                let field_path = path.join(PathSegment::Field(field.name.clone()));
                Ok(Field {
                    ty: field.ty.into_model(&field_path)?,
                    name: field.name,
                    comments: field.comments,
                })
            })
            .collect::<SchemaResult<Vec<_>>>()?;

        Ok(DataDecl {
            name: self.name,
            comments: self.comments,
            fields,
        })
    }
}

impl WireVerb {
    fn into_model(self, module_path: &SchemaPath) -> SchemaResult<VerbDecl> {
        let path = module_path.join(PathSegment::Verb(self.name.clone()));

        let request = self
            .request
            .map(|ty| ty.into_model(&path.join(PathSegment::Request)))
            .transpose()?;
        let response = self
            .response
            .map(|ty| ty.into_model(&path.join(PathSegment::Response)))
            .transpose()?;
        let metadata = self
            .metadata
            .into_iter()
            .enumerate()
            .map(|(index, md)| md.into_model(&path.join(PathSegment::Metadata(index))))
            .collect::<SchemaResult<Vec<_>>>()?;

        Ok(VerbDecl {
            name: self.name,
            comments: self.comments,
            request,
            response,
            metadata,
        })
    }
}

impl WireMetadata {
    fn into_model(self, path: &SchemaPath) -> SchemaResult<Metadata> {
        match (self.ingress, self.calls) {
            (Some(ingress), None) => Ok(Metadata::Ingress(MetadataIngress {
                method: ingress.method,
                path: ingress.path,
            })),
            (None, Some(calls)) => Ok(Metadata::Calls(MetadataCalls {
                calls: calls.calls.into_iter().map(WireRef::into_model).collect(),
            })),
            (ingress, calls) => Err(SchemaError::UnknownMetadataShape {
                path: path.clone(),
                populated: usize::from(ingress.is_some()) + usize::from(calls.is_some()),
            }),
        }
    }
}

impl WireRef {
    fn into_model(self) -> Ref {
        Ref {
            module: self.module,
            name: self.name,
        }
    }
}

impl WireType {
    fn populated(&self) -> usize {
        [
            self.int.is_some(),
            self.float.is_some(),
            self.string.is_some(),
            self.bool.is_some(),
            self.time.is_some(),
            self.array.is_some(),
            self.map.is_some(),
            self.verb_ref.is_some(),
            self.data_ref.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    fn into_model(self, path: &SchemaPath) -> SchemaResult<Type> {
        let populated = self.populated();
        if populated != 1 {
            return Err(SchemaError::UnknownTypeShape {
                path: path.clone(),
                populated,
            });
        }

        let WireType {
            int,
            float,
            string,
            bool,
            time,
            array,
            map,
            verb_ref,
            data_ref,
        } = self;

        if let Some(array) = array {
            let element = array
                .element
                .map(|element| element.into_model(&path.join(PathSegment::ArrayElement)))
                .transpose()?
                .map(Box::new);
            return Ok(Type::Array { element });
        }
        if let Some(map) = map {
            let key = map
                .key
                .map(|key| key.into_model(&path.join(PathSegment::MapKey)))
                .transpose()?
                .map(Box::new);
            let value = map
                .value
                .map(|value| value.into_model(&path.join(PathSegment::MapValue)))
                .transpose()?
                .map(Box::new);
            return Ok(Type::Map { key, value });
        }
        if let Some(reference) = verb_ref {
            return Ok(Type::VerbRef(reference.into_model()));
        }
        if let Some(reference) = data_ref {
            return Ok(Type::DataRef(reference.into_model()));
        }

        let leaf = if int.is_some() {
            Type::Int
        } else if float.is_some() {
            Type::Float
        } else if string.is_some() {
            Type::String
        } else if bool.is_some() {
            Type::Bool
        } else if time.is_some() {
            Type::Time
        } else {
            return Err(SchemaError::UnknownTypeShape {
                path: path.clone(),
                populated: 0,
            });
        };
        Ok(leaf)
    }
}
