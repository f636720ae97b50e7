//! Generate and check commands

use crate::config::StubgenConfig;
use anyhow::{Context, Result};
use ftl_schema::Schema;
use ftl_stubgen::{GeneratedUnit, ModuleGenerator, ReferencePolicy, source_digest};
use std::path::{Path, PathBuf};

/// Arguments of the generate command.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub schema: PathBuf,
    pub module: String,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub validate_references: bool,
}

/// What happened to one unit on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Generate command implementation
pub fn run(args: GenerateArgs) -> Result<Vec<(PathBuf, WriteOutcome)>> {
    let mut config = match &args.config {
        Some(path) => StubgenConfig::from_file(path)?,
        None => StubgenConfig::default(),
    };
    if args.validate_references {
        config.generator.reference_policy = ReferencePolicy::Validate;
    }
    if let Some(output) = args.output {
        config.output.directory = Some(output);
    }
    config.validate()?;

    let output_dir = config
        .output
        .directory
        .clone()
        .context("No output directory: pass --output or set [output] directory")?;

    let schema = read_schema(&args.schema)?;
    let generator = ModuleGenerator::new(config.generator.clone());
    let units = generator
        .generate(&schema, &args.module)
        .with_context(|| format!("Failed to generate stubs for home module '{}'", args.module))?;

    let mut outcomes = Vec::with_capacity(units.len());
    for unit in &units {
        let path = output_dir.join(&unit.path);
        let outcome = write_unit(&path, unit, config.output.skip_unchanged)?;
        match outcome {
            WriteOutcome::Written => tracing::info!("Generated module: {}", path.display()),
            WriteOutcome::Unchanged => {
                tracing::debug!(path = %path.display(), "Unchanged, skipped")
            }
        }
        outcomes.push((path, outcome));
    }

    tracing::info!(
        units = units.len(),
        output = %output_dir.display(),
        "Stub generation complete"
    );
    Ok(outcomes)
}

/// Check command implementation
///
/// Decodes the schema and generates with reference validation, writing nothing.
pub fn check(schema_path: &Path, home_module: Option<&str>) -> Result<usize> {
    let schema = read_schema(schema_path)?;

    let config = StubgenConfig::default();
    let generator = ModuleGenerator::new(
        config
            .generator
            .with_reference_policy(ReferencePolicy::Validate),
    );
    let units = generator
        .generate(&schema, home_module.unwrap_or_default())
        .context("Schema check failed")?;

    println!("Checking schema: {}", schema_path.display());
    println!("✓ Modules: {}", schema.modules.len());
    println!("✓ Units: {}", units.len());
    println!("\nSchema is valid!");

    Ok(units.len())
}

fn read_schema(path: &Path) -> Result<Schema> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read schema: {:?}", path))?;
    Schema::from_json(&bytes).with_context(|| format!("Failed to decode schema: {:?}", path))
}

/// Write a unit, creating parent directories. With `skip_unchanged`, a file
/// whose current content has the same digest is left untouched.
fn write_unit(path: &Path, unit: &GeneratedUnit, skip_unchanged: bool) -> Result<WriteOutcome> {
    if skip_unchanged && existing_digest(path).as_deref() == Some(unit.digest().as_str()) {
        return Ok(WriteOutcome::Unchanged);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    std::fs::write(path, &unit.source)
        .with_context(|| format!("Failed to write generated unit: {:?}", path))?;

    Ok(WriteOutcome::Written)
}

fn existing_digest(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|source| source_digest(&source))
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
