//! Validates serialized output of every positive fixture against
//! schema/input-elements-schema.json.

use std::path::Path;

use adaptivecards::{
    ChoiceSetInput, DateInput, NumberInput, ParseContext, TextInput, TimeInput, ToggleInput,
};
use serde_json::Value;

fn validator() -> jsonschema::Validator {
    let schema_path =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../schema/input-elements-schema.json");
    let schema_src = std::fs::read_to_string(&schema_path)
        .unwrap_or_else(|e| panic!("Failed to read schema at {}: {}", schema_path.display(), e));
    let schema_value: Value = serde_json::from_str(&schema_src).unwrap();
    jsonschema::validator_for(&schema_value)
        .unwrap_or_else(|e| panic!("Failed to compile schema: {}", e))
}

#[test]
fn serialized_positive_fixtures_match_schema() {
    let validator = validator();
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/positive");

    let mut paths: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map_or(false, |e| e == "json"))
        .collect();
    paths.sort();

    let mut tested = 0usize;
    let mut failures = Vec::new();
    for path in &paths {
        let json: Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        let mut ctx = ParseContext::new();
        for element in ctx.parse_elements(&json).unwrap() {
            let instance = element.serialize_to_json_value();
            if let Err(error) = validator.validate(&instance) {
                failures.push(format!("{} ({}): {}", path.display(), element.id(), error));
            }
            tested += 1;
        }
    }

    assert!(tested > 0, "No positive fixtures found -- check paths");
    assert!(
        failures.is_empty(),
        "Schema validation failed for {} of {} elements:\n{}",
        failures.len(),
        tested,
        failures.join("\n")
    );
}

#[test]
fn freshly_constructed_elements_match_schema() {
    let validator = validator();
    let mut toggle = ToggleInput::new("agree", "I agree");
    toggle.value = "true".to_string();

    let elements = [
        DateInput::new("date").serialize_to_json_value(),
        TimeInput::new("time").serialize_to_json_value(),
        NumberInput::new("number").serialize_to_json_value(),
        TextInput::new("text").serialize_to_json_value(),
        toggle.serialize_to_json_value(),
        ChoiceSetInput::new("choice").serialize_to_json_value(),
    ];
    for instance in &elements {
        assert!(validator.is_valid(instance), "invalid: {}", instance);
    }
}

#[test]
fn schema_rejects_input_without_id() {
    let validator = validator();
    assert!(!validator.is_valid(&serde_json::json!({"type": "Input.Date"})));
    assert!(!validator.is_valid(&serde_json::json!({
        "type": "Input.Text",
        "id": "t",
        "inlineAction": {"type": "Action.OpenUrl", "title": "no url"}
    })));
}
