use std::path::Path;

use serde_json::json;

use super::{load_or_exit, print_json, report_warnings, warnings_json};
use crate::OutputFormat;

pub(crate) fn cmd_parse(file: &Path, output: OutputFormat, quiet: bool) {
    let card = load_or_exit(file, output, quiet);

    match output {
        OutputFormat::Text => {
            for element in &card.elements {
                if element.id().is_empty() {
                    println!("{}", element.type_string());
                } else {
                    println!("{} id={}", element.type_string(), element.id());
                }
            }
        }
        OutputFormat::Json => {
            let elements: Vec<_> = card
                .elements
                .iter()
                .map(|e| e.serialize_to_json_value())
                .collect();
            print_json(&json!({
                "elements": elements,
                "warnings": warnings_json(&card.warnings),
            }));
        }
    }

    report_warnings(&card.warnings, output, quiet);
}
