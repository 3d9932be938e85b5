//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn report_schema() -> schemars::Schema {
    schema_for!(declguard_types::DeclguardReport)
}

fn config_schema() -> schemars::Schema {
    schema_for!(declguard_settings::DeclguardConfigV1)
}

fn manifest_schema() -> schemars::Schema {
    schema_for!(declguard_app::DeclarationManifest)
}

/// `(schema id, generator)`; each lands in `schemas/<id>.json`.
const SCHEMAS: &[(&str, fn() -> schemars::Schema)] = &[
    ("declguard.report.v1", report_schema),
    ("declguard.config.v1", config_schema),
    ("declguard.declarations.v1", manifest_schema),
];

fn schema_path(id: &str) -> PathBuf {
    project_root().join("schemas").join(format!("{id}.json"))
}

/// Pretty JSON with a trailing newline, so committed files diff cleanly.
fn render_schema(generate: fn() -> schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(&generate()).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    for (id, generate) in SCHEMAS {
        let path = schema_path(id);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        fs::write(&path, render_schema(*generate)?)
            .with_context(|| format!("write {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn validate_schemas() -> anyhow::Result<()> {
    let mut stale = Vec::new();
    for (id, generate) in SCHEMAS {
        let path = schema_path(id);
        let reason = match fs::read_to_string(&path) {
            Err(_) => Some("missing"),
            Ok(actual) if actual != render_schema(*generate)? => Some("out of date"),
            Ok(_) => None,
        };
        if let Some(reason) = reason {
            stale.push(format!("{id}: {reason}"));
        }
    }

    if stale.is_empty() {
        println!("schemas up to date ({})", SCHEMAS.len());
        return Ok(());
    }
    for line in &stale {
        eprintln!("  - {line}");
    }
    bail!("{} schema(s) stale; run `cargo xtask emit-schemas`", stale.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Write JSON schemas for reports, config and manifests to schemas/");
    eprintln!("  validate-schemas  Fail when schemas/ differs from the generated output");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture manifests and expected reports against schemas");
    eprintln!("  explain-coverage  Validate all rule IDs and message keys have explanations");
}

/// Relative, forward-slash, no parent segments, no drive letter.
fn is_clean_path(path: &str) -> bool {
    let has_drive = path.as_bytes().get(1) == Some(&b':');
    !(path.starts_with('/') || path.contains("..") || path.contains('\\') || has_drive)
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    jsonschema::validator_for(schema.as_value())
        .map_err(|e| anyhow::anyhow!("compile schema: {e}"))
}

/// Golden reports carry placeholder timestamps; give them a real RFC 3339 value.
fn pin_timestamps(report: &mut Value) {
    if let Some(obj) = report.as_object_mut() {
        for key in ["started_at", "finished_at"] {
            if obj.contains_key(key) {
                obj.insert(key.to_string(), Value::from("2024-01-01T00:00:00Z"));
            }
        }
    }
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))
}

struct Validators {
    manifest: jsonschema::Validator,
    report: jsonschema::Validator,
}

fn count(value: &Value, pointer: &str) -> u64 {
    value.pointer(pointer).and_then(Value::as_u64).unwrap_or(0)
}

/// Problems found in one fixture directory.
fn conform_fixture(name: &str, dir: &Path, v: &Validators) -> anyhow::Result<Vec<String>> {
    let mut problems = Vec::new();

    let manifest_path = dir.join("declarations.json");
    if !manifest_path.exists() {
        problems.push(format!("{name}: missing declarations.json"));
        return Ok(problems);
    }
    let manifest = read_json(&manifest_path)?;
    problems.extend(
        v.manifest
            .iter_errors(&manifest)
            .map(|e| format!("{name}/declarations.json: {e}")),
    );

    let report_path = dir.join("expected.report.json");
    if !report_path.exists() {
        return Ok(problems);
    }
    let mut report = read_json(&report_path)?;
    pin_timestamps(&mut report);
    problems.extend(
        v.report
            .iter_errors(&report)
            .map(|e| format!("{name}/expected.report.json: {e}")),
    );

    let files = manifest
        .get("files")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let declarations: usize = files
        .iter()
        .filter_map(|f| f.get("declarations").and_then(Value::as_array))
        .map(Vec::len)
        .sum();
    if count(&report, "/data/files_scanned") != files.len() as u64 {
        problems.push(format!("{name}: files_scanned does not match the manifest"));
    }
    if count(&report, "/data/declarations_scanned") != declarations as u64 {
        problems.push(format!("{name}: declarations_scanned does not match the manifest"));
    }

    let known_check_ids = declguard_types::explain::all_check_ids();
    let known_codes = declguard_types::explain::all_codes();
    let findings = report
        .get("findings")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for (i, finding) in findings.iter().enumerate() {
        let field = |key: &str| finding.get(key).and_then(Value::as_str);
        if !field("check_id").is_some_and(|id| known_check_ids.contains(&id)) {
            problems.push(format!("{name}: finding[{i}] has unknown check_id"));
        }
        if !field("code").is_some_and(|c| known_codes.contains(&c)) {
            problems.push(format!("{name}: finding[{i}] has unknown code"));
        }
        if let Some(path) = finding.pointer("/location/path").and_then(Value::as_str)
            && !is_clean_path(path)
        {
            problems.push(format!("{name}: finding[{i}] path '{path}' is not clean"));
        }
    }

    Ok(problems)
}

fn conform() -> anyhow::Result<()> {
    let validators = Validators {
        manifest: compile(&manifest_schema())?,
        report: compile(&report_schema())?,
    };
    let fixtures = project_root().join("tests").join("fixtures");

    let mut dirs: Vec<PathBuf> = fs::read_dir(&fixtures)
        .with_context(|| format!("read {}", fixtures.display()))?
        .map(|e| e.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    dirs.retain(|p| p.is_dir());
    dirs.sort();

    if dirs.is_empty() {
        bail!("no fixtures found in {}", fixtures.display());
    }

    let mut problems = Vec::new();
    for dir in &dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let found = conform_fixture(&name, dir, &validators)?;
        println!("  {} {}", if found.is_empty() { "✓" } else { "✗" }, name);
        problems.extend(found);
    }

    if !problems.is_empty() {
        eprintln!("\nConformance errors:");
        for p in &problems {
            eprintln!("  - {p}");
        }
        bail!("conformance failed with {} errors", problems.len());
    }

    println!("\n✓ {} fixtures conform", dirs.len());
    Ok(())
}

/// Validate that all rule IDs and message keys have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = declguard_types::explain::all_check_ids();
    let codes = declguard_types::explain::all_codes();

    let mut errors = Vec::new();
    for id in check_ids.iter().chain(codes) {
        let Some(exp) = declguard_types::explain::lookup_explanation(id) else {
            errors.push(format!("'{id}' has no explanation"));
            continue;
        };
        for (field, text) in [
            ("title", exp.title),
            ("description", exp.description),
            ("remediation", exp.remediation),
        ] {
            if text.is_empty() {
                errors.push(format!("'{id}' has empty {field}"));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} rule IDs have explanations", check_ids.len());
        println!("✓ {} message keys have explanations", codes.len());
        return Ok(());
    }

    for error in &errors {
        eprintln!("  - {error}");
    }
    bail!("explain coverage failed with {} errors", errors.len())
}

fn main() -> anyhow::Result<()> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());

    match cmd.as_str() {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for (id, _) in SCHEMAS {
                println!("{id}");
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
