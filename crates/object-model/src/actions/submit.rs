//! `Action.Submit`: gathers input values and hands them to the host.

use serde_json::{Map, Value};

use crate::actions::{Action, BaseActionElement};
use crate::enums::{ActionType, AssociatedInputs};
use crate::error::ParseError;
use crate::parse_util::{expect_type_string, get_enum};
use crate::registration::{ActionParser, ParseContext};
use crate::schema_key::SchemaKey;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitAction {
    pub base: BaseActionElement,
    /// Extra payload merged with the input values; any JSON.
    pub data: Option<Value>,
    pub associated_inputs: AssociatedInputs,
}

impl SubmitAction {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] =
        &[SchemaKey::Data, SchemaKey::AssociatedInputs];

    pub fn new() -> Self {
        SubmitAction {
            base: BaseActionElement::new(ActionType::Submit),
            data: None,
            associated_inputs: AssociatedInputs::Auto,
        }
    }

    pub fn from_json(ctx: &mut ParseContext, json: &Value) -> Result<Self, ParseError> {
        expect_type_string(json, ActionType::Submit.as_str())?;
        Ok(SubmitAction {
            base: BaseActionElement::deserialize(json, ActionType::Submit, Self::KNOWN_PROPERTIES)?,
            data: json
                .get(SchemaKey::Data.as_str())
                .filter(|v| !v.is_null())
                .cloned(),
            associated_inputs: get_enum(
                ctx,
                json,
                SchemaKey::AssociatedInputs,
                AssociatedInputs::Auto,
            )?,
        })
    }

    pub fn serialize_to_json_value(&self) -> Value {
        let mut root = Map::new();
        self.base.serialize_into(&mut root);
        if let Some(data) = &self.data {
            root.insert(SchemaKey::Data.as_str().to_string(), data.clone());
        }
        if self.associated_inputs != AssociatedInputs::Auto {
            root.insert(
                SchemaKey::AssociatedInputs.as_str().to_string(),
                Value::String(self.associated_inputs.to_string()),
            );
        }
        Value::Object(root)
    }
}

impl Default for SubmitAction {
    fn default() -> Self {
        SubmitAction::new()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SubmitActionParser;

impl ActionParser for SubmitActionParser {
    fn deserialize(&self, ctx: &mut ParseContext, json: &Value) -> Result<Action, ParseError> {
        SubmitAction::from_json(ctx, json).map(Action::Submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_data_kept() {
        let mut ctx = ParseContext::new();
        let json = json!({"type": "Action.Submit", "title": "OK", "data": "approve", "associatedInputs": "none"});
        let submit = SubmitAction::from_json(&mut ctx, &json).unwrap();
        assert_eq!(submit.data, Some(json!("approve")));
        assert_eq!(submit.associated_inputs, AssociatedInputs::None);
        assert_eq!(submit.serialize_to_json_value(), json);
    }

    #[test]
    fn test_null_data_is_absent() {
        let mut ctx = ParseContext::new();
        let submit =
            SubmitAction::from_json(&mut ctx, &json!({"type": "Action.Submit", "data": null}))
                .unwrap();
        assert!(submit.data.is_none());
        assert_eq!(
            submit.serialize_to_json_value(),
            json!({"type": "Action.Submit"})
        );
    }
}
