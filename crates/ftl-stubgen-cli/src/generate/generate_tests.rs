#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

const SCHEMA: &str = r#"{
    "modules": [
        {
            "name": "payments",
            "decls": [
                {"data": {"name": "Receipt", "fields": [{"name": "amount", "type": {"int": {}}}]}},
                {"verb": {"name": "charge", "response": {"dataRef": {"module": "payments", "name": "Receipt"}}}}
            ]
        },
        {
            "name": "orders",
            "decls": [
                {"data": {"name": "Order", "fields": [
                    {"name": "receipt", "type": {"dataRef": {"module": "payments", "name": "Receipt"}}}
                ]}}
            ]
        }
    ]
}"#;

const DANGLING_SCHEMA: &str = r#"{
    "modules": [
        {
            "name": "orders",
            "decls": [
                {"data": {"name": "Order", "fields": [
                    {"name": "ghost", "type": {"dataRef": {"module": "nowhere", "name": "Ghost"}}}
                ]}}
            ]
        }
    ]
}"#;

fn write_schema(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("schema.json");
    std::fs::write(&path, json).unwrap();
    path
}

fn args(schema: PathBuf, output: PathBuf) -> GenerateArgs {
    GenerateArgs {
        schema,
        module: "orders".into(),
        output: Some(output),
        config: None,
        validate_references: false,
    }
}

#[test]
fn run___writes_one_file_per_foreign_module() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);
    let out = dir.path().join("out");

    let outcomes = run(args(schema, out.clone())).unwrap();

    let expected = out.join("ftl").join("payments").join("Payments.kt");
    assert_eq!(outcomes, vec![(expected.clone(), WriteOutcome::Written)]);
    let source = std::fs::read_to_string(expected).unwrap();
    assert!(source.starts_with("// Code generated by FTL-Plugin, do not edit.\n"));
    assert!(source.contains("public fun charge(context: Context): Receipt {"));
    assert!(!out.join("ftl").join("orders").exists());
}

#[test]
fn run___second_run___skips_unchanged_files() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);
    let out = dir.path().join("out");
    run(args(schema.clone(), out.clone())).unwrap();

    let outcomes = run(args(schema, out)).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].1, WriteOutcome::Unchanged);
}

#[test]
fn run___modified_file___is_rewritten() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);
    let out = dir.path().join("out");
    let outcomes = run(args(schema.clone(), out.clone())).unwrap();
    std::fs::write(&outcomes[0].0, "// edited by hand\n").unwrap();

    let outcomes = run(args(schema, out)).unwrap();

    assert_eq!(outcomes[0].1, WriteOutcome::Written);
    let source = std::fs::read_to_string(&outcomes[0].0).unwrap();
    assert!(source.contains("public data class Receipt("));
}

#[test]
fn run___skip_unchanged_disabled___always_writes() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);
    let out = dir.path().join("out");
    let config = dir.path().join("stubgen.toml");
    std::fs::write(&config, "[output]\nskip_unchanged = false\n").unwrap();
    run(args(schema.clone(), out.clone())).unwrap();

    let outcomes = run(GenerateArgs {
        config: Some(config),
        ..args(schema, out)
    })
    .unwrap();

    assert_eq!(outcomes[0].1, WriteOutcome::Written);
}

#[test]
fn run___config_file___sets_package_prefix_and_output() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);
    let out = dir.path().join("generated");
    let config = dir.path().join("stubgen.toml");
    std::fs::write(
        &config,
        format!(
            "[generator]\npackage_prefix = \"com.example\"\n\n[output]\ndirectory = {:?}\n",
            out.to_string_lossy()
        ),
    )
    .unwrap();

    let outcomes = run(GenerateArgs {
        schema,
        module: "orders".into(),
        output: None,
        config: Some(config),
        validate_references: false,
    })
    .unwrap();

    assert_eq!(
        outcomes[0].0,
        out.join("com").join("example").join("payments").join("Payments.kt")
    );
}

#[test]
fn run___no_output_directory___fails() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);

    let err = run(GenerateArgs {
        output: None,
        ..args(schema, PathBuf::new())
    })
    .unwrap_err();

    assert!(err.to_string().contains("No output directory"));
}

#[test]
fn run___validate_references___dangling_reference_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, DANGLING_SCHEMA);
    let out = dir.path().join("out");

    let err = run(GenerateArgs {
        module: "home".into(),
        validate_references: true,
        ..args(schema, out.clone())
    })
    .unwrap_err();

    let chain = format!("{err:#}");
    assert!(chain.contains("reference to unknown data \"nowhere.Ghost\""));
    assert!(!out.exists());
}

#[test]
fn run___trust_policy___dangling_reference_generates() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, DANGLING_SCHEMA);

    let outcomes = run(GenerateArgs {
        module: "home".into(),
        ..args(schema, dir.path().join("out"))
    })
    .unwrap();

    assert_eq!(outcomes.len(), 1);
}

#[test]
fn run___missing_schema___error_mentions_path() {
    let dir = TempDir::new().unwrap();

    let err = run(args(dir.path().join("missing.json"), dir.path().join("out"))).unwrap_err();

    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn run___malformed_schema___decode_error() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, "{\"modules\": [");

    let err = run(args(schema, dir.path().join("out"))).unwrap_err();

    assert!(format!("{err:#}").contains("decode error"));
}

#[test]
fn check___valid_schema___counts_units() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);

    let units = check(&schema, Some("orders")).unwrap();

    assert_eq!(units, 1);
}

#[test]
fn check___no_home_module___checks_every_module() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);

    let units = check(&schema, None).unwrap();

    assert_eq!(units, 2);
}

#[test]
fn check___dangling_reference___fails() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, DANGLING_SCHEMA);

    let err = check(&schema, None).unwrap_err();

    assert!(format!("{err:#}").contains("module orders / data Order / field ghost"));
}
