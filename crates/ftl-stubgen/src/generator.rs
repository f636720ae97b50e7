//! Module generation: one unit of stubs per foreign module.
//!
//! [`ModuleGenerator::generate`] walks the schema in order, skips the home
//! module, emits every other module's records and stubs, and renders each
//! into a [`GeneratedUnit`]. Generation is a pure function of the schema, the
//! home module name and the [`GeneratorConfig`]; it performs no I/O.

use crate::config::{GeneratorConfig, ReferencePolicy};
use crate::emit::{RecordSource, StubSource, check_identifier, emit_data, emit_verb};
use crate::kotlin::render_module;
use crate::naming::capitalize;
use ftl_schema::{
    Decl, DeclKind, Metadata, Module, PathSegment, Ref, Schema, SchemaError, SchemaPath,
    SchemaResult, Type,
};
use sha2::{Digest, Sha256};
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

/// Target-neutral description of one module's generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSource {
    /// Schema module name.
    pub module: String,

    /// Package the unit lives in, e.g. `ftl.payments`.
    pub package: String,

    /// Header comment lines: provenance, then module documentation.
    pub header: Vec<String>,

    /// Name of the container holding the stubs, e.g. `Payments`.
    pub class_name: String,

    /// Records in schema order.
    pub records: Vec<RecordSource>,

    /// Stubs in schema order.
    pub stubs: Vec<StubSource>,
}

/// One generated source file for a foreign module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Schema module name.
    pub module: String,

    /// Output path relative to the caller's output directory.
    pub path: PathBuf,

    /// Generated source text.
    pub source: String,

    /// Declarations of other modules this unit references, as `module.Name`, sorted.
    pub referenced_types: Vec<String>,
}

impl GeneratedUnit {
    /// SHA-256 of the source text, hex encoded.
    pub fn digest(&self) -> String {
        source_digest(&self.source)
    }
}

/// SHA-256 of a source text, hex encoded.
///
/// Callers compare this against files already on disk to skip rewriting
/// unchanged units.
pub fn source_digest(source: &str) -> String {
    hex::encode(Sha256::digest(source.as_bytes()))
}

/// Generates stubs for foreign modules.
#[derive(Debug, Clone, Default)]
pub struct ModuleGenerator {
    config: GeneratorConfig,
}

impl ModuleGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one unit for every module except `home_module`, in schema order.
    ///
    /// A `home_module` that names no module is not an error; every module is
    /// then foreign and generated.
    pub fn generate(&self, schema: &Schema, home_module: &str) -> SchemaResult<Vec<GeneratedUnit>> {
        let units = schema
            .modules
            .iter()
            .filter(|module| module.name != home_module)
            .map(|module| self.generate_module(schema, module))
            .collect::<SchemaResult<Vec<_>>>()?;

        tracing::debug!(home_module, units = units.len(), "Generated stubs");
        Ok(units)
    }

    /// Generate the unit for a single module.
    pub fn generate_module(&self, schema: &Schema, module: &Module) -> SchemaResult<GeneratedUnit> {
        let source = self.emit_module(schema, module)?;
        let text = render_module(&source, &self.config);

        let mut referenced = BTreeSet::new();
        let types = source
            .records
            .iter()
            .flat_map(|record| record.properties.iter().map(|p| &p.ty))
            .chain(source.stubs.iter().flat_map(|stub| {
                stub.params
                    .iter()
                    .map(|param| &param.ty)
                    .chain(stub.returns.iter())
            }));
        for ty in types {
            for reference in ty.references() {
                if reference.module != module.name {
                    referenced.insert(reference.to_string());
                }
            }
        }

        let path = source
            .package
            .split('.')
            .collect::<PathBuf>()
            .join(format!("{}.kt", source.class_name));

        tracing::debug!(
            module = %module.name,
            records = source.records.len(),
            stubs = source.stubs.len(),
            path = %path.display(),
            "Generated module"
        );

        Ok(GeneratedUnit {
            module: module.name.clone(),
            path,
            source: text,
            referenced_types: referenced.into_iter().collect(),
        })
    }

    /// Emit the target-neutral description of a module without rendering it.
    pub fn emit_module(&self, schema: &Schema, module: &Module) -> SchemaResult<ModuleSource> {
        let module_path = SchemaPath::module(&module.name);
        let class_name = capitalize(&module.name);

        check_identifier(&module.name, &module_path)?;
        check_unique_names(module, &class_name, &module_path)?;
        if self.config.reference_policy == ReferencePolicy::Validate {
            check_references(schema, module, &module_path)?;
        }

        let mut records = Vec::new();
        let mut stubs = Vec::new();
        for decl in &module.decls {
            match decl {
                Decl::Data(data) => {
                    let path = module_path.join(PathSegment::Data(data.name.clone()));
                    records.push(emit_data(data, &path)?);
                }
                Decl::Verb(verb) => {
                    let path = module_path.join(PathSegment::Verb(verb.name.clone()));
                    stubs.push(emit_verb(&module.name, verb, &path)?);
                }
            }
        }

        let mut header: Vec<String> = self.config.header.lines().map(str::to_string).collect();
        if !module.comments.is_empty() {
            if !header.is_empty() {
                header.push(String::new());
            }
            header.extend(
                module
                    .comments
                    .iter()
                    .flat_map(|comment| comment.split('\n'))
                    .map(str::to_string),
            );
        }

        Ok(ModuleSource {
            module: module.name.clone(),
            package: self.config.package_for(&module.name),
            header,
            class_name,
            records,
            stubs,
        })
    }
}

/// Generate stubs with the default configuration.
pub fn generate(schema: &Schema, home_module: &str) -> SchemaResult<Vec<GeneratedUnit>> {
    ModuleGenerator::default().generate(schema, home_module)
}

/// Declaration names must be unique within a module, and no record may take
/// the name of the module's stub container.
fn check_unique_names(module: &Module, class_name: &str, path: &SchemaPath) -> SchemaResult<()> {
    let mut seen = HashSet::new();
    for decl in &module.decls {
        let name = decl.name();
        if !seen.insert(name) {
            return Err(SchemaError::DuplicateDeclarationName {
                path: path.clone(),
                name: name.to_string(),
            });
        }
        if decl.kind() == DeclKind::Data && name == class_name {
            return Err(SchemaError::DuplicateDeclarationName {
                path: path.clone(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Every reference in the module must resolve to a declaration of the right kind.
fn check_references(schema: &Schema, module: &Module, module_path: &SchemaPath) -> SchemaResult<()> {
    for decl in &module.decls {
        match decl {
            Decl::Data(data) => {
                let path = module_path.join(PathSegment::Data(data.name.clone()));
                for field in &data.fields {
                    let field_path = path.join(PathSegment::Field(field.name.clone()));
                    check_type_references(schema, &field.ty, &field_path)?;
                }
            }
            Decl::Verb(verb) => {
                let path = module_path.join(PathSegment::Verb(verb.name.clone()));
                if let Some(request) = &verb.request {
                    check_type_references(schema, request, &path.join(PathSegment::Request))?;
                }
                if let Some(response) = &verb.response {
                    check_type_references(schema, response, &path.join(PathSegment::Response))?;
                }
                for (index, metadata) in verb.metadata.iter().enumerate() {
                    match metadata {
                        Metadata::Ingress(_) => {}
                        Metadata::Calls(calls) => {
                            let metadata_path = path.join(PathSegment::Metadata(index));
                            for (call_index, call) in calls.calls.iter().enumerate() {
                                check_reference(
                                    schema,
                                    DeclKind::Verb,
                                    call,
                                    &metadata_path.join(PathSegment::Call(call_index)),
                                )?;
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn check_type_references(schema: &Schema, ty: &Type, path: &SchemaPath) -> SchemaResult<()> {
    match ty {
        Type::Int | Type::Float | Type::String | Type::Bool | Type::Time => Ok(()),
        Type::Array { element } => match element {
            Some(element) => {
                check_type_references(schema, element, &path.join(PathSegment::ArrayElement))
            }
            None => Ok(()),
        },
        Type::Map { key, value } => {
            if let Some(key) = key {
                check_type_references(schema, key, &path.join(PathSegment::MapKey))?;
            }
            if let Some(value) = value {
                check_type_references(schema, value, &path.join(PathSegment::MapValue))?;
            }
            Ok(())
        }
        Type::VerbRef(reference) => check_reference(schema, DeclKind::Verb, reference, path),
        Type::DataRef(reference) => check_reference(schema, DeclKind::Data, reference, path),
    }
}

fn check_reference(
    schema: &Schema,
    kind: DeclKind,
    reference: &Ref,
    path: &SchemaPath,
) -> SchemaResult<()> {
    match schema.resolve(kind, reference) {
        Some(_) => Ok(()),
        None => Err(SchemaError::UnresolvedReference {
            path: path.clone(),
            kind,
            reference: reference.to_string(),
        }),
    }
}
