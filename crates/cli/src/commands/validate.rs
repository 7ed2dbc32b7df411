use std::path::Path;
use std::process;

use super::{load_or_exit, report_warnings, warnings_json};
use crate::{report_error, OutputFormat};

static ELEMENT_SCHEMA_STR: &str = include_str!("../../../../schema/input-elements-schema.json");

pub(crate) fn cmd_validate(
    file: &Path,
    strict: bool,
    check_schema: bool,
    output: OutputFormat,
    quiet: bool,
) {
    // Parse failures exit inside the loader
    let card = load_or_exit(file, output, quiet);

    let mut errors: Vec<String> = Vec::new();

    if strict {
        errors.extend(
            card.warnings
                .iter()
                .map(|w| format!("strict: {}", w)),
        );
    }

    if check_schema {
        let schema: serde_json::Value = match serde_json::from_str(ELEMENT_SCHEMA_STR) {
            Ok(s) => s,
            Err(e) => {
                let msg = format!("internal error: failed to parse embedded element schema: {}", e);
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        };
        let validator = match jsonschema::validator_for(&schema) {
            Ok(v) => v,
            Err(e) => {
                let msg = format!("internal error: failed to compile schema: {}", e);
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        };

        for element in &card.elements {
            let instance = element.serialize_to_json_value();
            errors.extend(validator.iter_errors(&instance).map(|e| {
                if element.id().is_empty() {
                    format!("schema: {}: {}", element.type_string(), e)
                } else {
                    format!("schema: {} '{}': {}", element.type_string(), element.id(), e)
                }
            }));
        }
    }

    if errors.is_empty() {
        report_warnings(&card.warnings, output, quiet);
        if !quiet {
            match output {
                OutputFormat::Text => println!("valid ({} elements)", card.elements.len()),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({
                        "valid": true,
                        "elements": card.elements.len(),
                        "warnings": warnings_json(&card.warnings),
                    })
                ),
            }
        }
    } else {
        match output {
            OutputFormat::Text => {
                if !quiet {
                    eprintln!("invalid");
                    for err in &errors {
                        eprintln!("  - {}", err);
                    }
                }
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "valid": false,
                    "errors": errors,
                    "warnings": warnings_json(&card.warnings),
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&json).unwrap_or_default()
                );
            }
        }
        process::exit(1);
    }
}
