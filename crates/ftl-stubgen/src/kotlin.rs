//! Kotlin rendering of a module's stubs.
//!
//! The renderer is the only place Kotlin syntax is produced. It resolves
//! every class the unit mentions to either a simple name (with an import when
//! the package is not imported by default) or a fully qualified name when two
//! classes, or a class and a local declaration, share a simple name. Imports
//! are kept in a sorted set so the output never depends on iteration order.

use crate::config::GeneratorConfig;
use crate::emit::{Annotation, AnnotationArg, RecordSource, StubSource};
use crate::generator::ModuleSource;
use crate::kotlin_types::{self, ClassName};
use crate::naming::{escape_dotted, escape_identifier, kdoc_line, string_literal};
use crate::types::TypeExpr;
use std::collections::{BTreeMap, BTreeSet};

const INDENT: &str = "  ";

/// Name of the placeholder property of an empty record.
pub const EMPTY_PLACEHOLDER: &str = "_empty";

/// A class as seen by the renderer: constant classes and generated records alike.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Qualified {
    package: String,
    simple: String,
}

impl Qualified {
    fn escaped(&self) -> String {
        format!(
            "{}.{}",
            escape_dotted(&self.package),
            escape_identifier(&self.simple)
        )
    }
}

impl From<ClassName> for Qualified {
    fn from(class: ClassName) -> Self {
        Self {
            package: class.package.to_string(),
            simple: class.simple.to_string(),
        }
    }
}

/// Name resolution for one unit.
struct Names<'a> {
    config: &'a GeneratorConfig,
    package: String,
    ambiguous: BTreeSet<String>,
    imports: BTreeSet<Qualified>,
}

impl<'a> Names<'a> {
    fn collect(source: &ModuleSource, config: &'a GeneratorConfig) -> Self {
        let mut used: Vec<Qualified> = vec![kotlin_types::IGNORE.into()];
        let local = |simple: &str| Qualified {
            package: source.package.clone(),
            simple: simple.to_string(),
        };

        let mut locals = vec![local(&source.class_name)];
        for record in &source.records {
            locals.push(local(&record.name));
            for property in &record.properties {
                visit_type(&property.ty, config, &mut used);
            }
            if record.needs_placeholder() {
                used.push(kotlin_types::UNIT.into());
            }
        }
        for stub in &source.stubs {
            for param in &stub.params {
                visit_type(&param.ty, config, &mut used);
            }
            if let Some(returns) = &stub.returns {
                visit_type(returns, config, &mut used);
            }
            for annotation in &stub.annotations {
                used.push(annotation.class.into());
                for arg in &annotation.args {
                    if let AnnotationArg::EnumConstant { class, .. } = arg {
                        used.push((*class).into());
                    }
                }
            }
            used.push(kotlin_types::NOT_IMPLEMENTED_ERROR.into());
        }

        let mut packages_by_simple: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for name in used.iter().chain(locals.iter()) {
            packages_by_simple
                .entry(name.simple.as_str())
                .or_default()
                .insert(name.package.as_str());
        }
        let ambiguous: BTreeSet<String> = packages_by_simple
            .into_iter()
            .filter(|(_, packages)| packages.len() > 1)
            .map(|(simple, _)| simple.to_string())
            .collect();

        let imports = used
            .into_iter()
            .filter(|name| {
                name.package != source.package
                    && !ambiguous.contains(&name.simple)
                    && !kotlin_types::is_default_import(&name.package)
            })
            .collect();

        Self {
            config,
            package: source.package.clone(),
            ambiguous,
            imports,
        }
    }

    fn name(&self, name: &Qualified) -> String {
        if name.package != self.package && self.ambiguous.contains(&name.simple) {
            name.escaped()
        } else {
            escape_identifier(&name.simple)
        }
    }

    fn class(&self, class: ClassName) -> String {
        self.name(&class.into())
    }

    fn type_name(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Class(class) => self.class(*class),
            TypeExpr::Generic { raw, args } => {
                let args: Vec<String> = args.iter().map(|arg| self.type_name(arg)).collect();
                format!("{}<{}>", self.class(*raw), args.join(", "))
            }
            TypeExpr::Data(reference) => self.name(&Qualified {
                package: self.config.package_for(&reference.module),
                simple: reference.name.clone(),
            }),
            TypeExpr::Verb(_) => format!("{}<*>", self.class(kotlin_types::KFUNCTION)),
        }
    }

    fn annotation(&self, annotation: &Annotation) -> String {
        let name = self.class(annotation.class);
        if annotation.args.is_empty() {
            return format!("@{name}");
        }
        let args: Vec<String> = annotation
            .args
            .iter()
            .map(|arg| match arg {
                AnnotationArg::EnumConstant { class, constant } => {
                    format!("{}.{}", self.class(*class), escape_identifier(constant))
                }
                AnnotationArg::Str(value) => string_literal(value),
                AnnotationArg::StrArray(values) => {
                    let values: Vec<String> = values.iter().map(|v| string_literal(v)).collect();
                    format!("[{}]", values.join(", "))
                }
            })
            .collect();
        format!("@{name}({})", args.join(", "))
    }
}

/// Collect the classes a type expression names.
fn visit_type(ty: &TypeExpr, config: &GeneratorConfig, out: &mut Vec<Qualified>) {
    match ty {
        TypeExpr::Class(class) => out.push((*class).into()),
        TypeExpr::Generic { raw, args } => {
            out.push((*raw).into());
            for arg in args {
                visit_type(arg, config, out);
            }
        }
        TypeExpr::Data(reference) => out.push(Qualified {
            package: config.package_for(&reference.module),
            simple: reference.name.clone(),
        }),
        TypeExpr::Verb(_) => out.push(kotlin_types::KFUNCTION.into()),
    }
}

/// Render a module's stubs as a Kotlin source file.
pub fn render_module(source: &ModuleSource, config: &GeneratorConfig) -> String {
    let names = Names::collect(source, config);
    let mut code = String::new();

    // Provenance header
    for line in &source.header {
        if line.is_empty() {
            code.push_str("//\n");
        } else {
            code.push_str(&format!("// {line}\n"));
        }
    }
    if !source.header.is_empty() {
        code.push('\n');
    }

    code.push_str(&format!("package {}\n\n", escape_dotted(&source.package)));

    if !names.imports.is_empty() {
        for import in &names.imports {
            code.push_str(&format!("import {}\n", import.escaped()));
        }
        code.push('\n');
    }

    for record in &source.records {
        render_record(&mut code, record, &names);
        code.push('\n');
    }

    render_module_class(&mut code, source, &names);

    code
}

fn render_record(code: &mut String, record: &RecordSource, names: &Names<'_>) {
    render_kdoc(code, "", &record.docs);
    code.push_str(&format!(
        "public data class {}(\n",
        escape_identifier(&record.name)
    ));

    for property in &record.properties {
        let docs = with_verb_notes(&property.docs, [&property.ty]);
        render_kdoc(code, INDENT, &docs);
        code.push_str(&format!(
            "{INDENT}public val {}: {},\n",
            escape_identifier(&property.name),
            names.type_name(&property.ty)
        ));
    }

    if record.needs_placeholder() {
        let unit = names.class(kotlin_types::UNIT);
        code.push_str(&format!(
            "{INDENT}public val {EMPTY_PLACEHOLDER}: {unit} = {unit},\n"
        ));
    }

    code.push_str(")\n");
}

fn render_module_class(code: &mut String, source: &ModuleSource, names: &Names<'_>) {
    code.push_str(&format!("@{}\n", names.class(kotlin_types::IGNORE)));

    let class_name = escape_identifier(&source.class_name);
    if source.stubs.is_empty() {
        code.push_str(&format!("public class {class_name}\n"));
        return;
    }

    code.push_str(&format!("public class {class_name} {{\n"));
    for (i, stub) in source.stubs.iter().enumerate() {
        if i > 0 {
            code.push('\n');
        }
        render_stub(code, stub, names);
    }
    code.push_str("}\n");
}

fn render_stub(code: &mut String, stub: &StubSource, names: &Names<'_>) {
    let types = stub.params.iter().map(|param| &param.ty).chain(stub.returns.iter());
    let docs = with_verb_notes(&stub.docs, types);
    render_kdoc(code, INDENT, &docs);

    for annotation in &stub.annotations {
        code.push_str(&format!("{INDENT}{}\n", names.annotation(annotation)));
    }

    let params: Vec<String> = stub
        .params
        .iter()
        .map(|param| {
            format!(
                "{}: {}",
                escape_identifier(&param.name),
                names.type_name(&param.ty)
            )
        })
        .collect();
    let returns = stub
        .returns
        .as_ref()
        .map(|ty| format!(": {}", names.type_name(ty)))
        .unwrap_or_default();

    code.push_str(&format!(
        "{INDENT}public fun {}({}){returns} {{\n",
        escape_identifier(&stub.name),
        params.join(", ")
    ));
    code.push_str(&format!(
        "{INDENT}{INDENT}throw {}({})\n",
        names.class(kotlin_types::NOT_IMPLEMENTED_ERROR),
        string_literal(&stub.body.message())
    ));
    code.push_str(&format!("{INDENT}}}\n"));
}

/// Append one note per distinct verb referenced by `types`; the rendered
/// function type alone does not say which stub it stands for.
fn with_verb_notes<'a>(
    docs: &[String],
    types: impl IntoIterator<Item = &'a TypeExpr>,
) -> Vec<String> {
    let mut notes: Vec<String> = Vec::new();
    for ty in types {
        for reference in ty.verb_references() {
            let note = format!("Refers to verb `{reference}`.");
            if !notes.contains(&note) {
                notes.push(note);
            }
        }
    }

    let mut out = docs.to_vec();
    if !out.is_empty() && !notes.is_empty() {
        out.push(String::new());
    }
    out.extend(notes);
    out
}

fn render_kdoc(code: &mut String, indent: &str, docs: &[String]) {
    if docs.is_empty() {
        return;
    }
    code.push_str(&format!("{indent}/**\n"));
    for line in docs.iter().flat_map(|doc| doc.split('\n')) {
        if line.is_empty() {
            code.push_str(&format!("{indent} *\n"));
        } else {
            code.push_str(&format!("{indent} * {}\n", kdoc_line(line)));
        }
    }
    code.push_str(&format!("{indent} */\n"));
}
