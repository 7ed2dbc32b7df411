//! `Input.Toggle`: a checkbox whose submitted value is one of two strings.

use serde_json::{Map, Value};

use crate::card_element::CardElement;
use crate::enums::CardElementType;
use crate::error::ParseError;
use crate::input::{input_known_properties, BaseInputElement};
use crate::parse_util::{expect_type_string, get_bool, get_string, insert_non_empty};
use crate::registration::{ElementParser, ParseContext};
use crate::schema_key::SchemaKey;

pub const DEFAULT_VALUE_ON: &str = "true";
pub const DEFAULT_VALUE_OFF: &str = "false";

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleInput {
    pub input: BaseInputElement,
    pub title: String,
    pub value: String,
    pub value_on: String,
    pub value_off: String,
    pub wrap: bool,
}

impl ToggleInput {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[
        SchemaKey::Title,
        SchemaKey::Value,
        SchemaKey::ValueOn,
        SchemaKey::ValueOff,
        SchemaKey::Wrap,
    ];

    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        ToggleInput {
            input: BaseInputElement::new(CardElementType::ToggleInput, id),
            title: title.into(),
            value: String::new(),
            value_on: DEFAULT_VALUE_ON.to_string(),
            value_off: DEFAULT_VALUE_OFF.to_string(),
            wrap: false,
        }
    }

    pub fn known_properties() -> Vec<SchemaKey> {
        input_known_properties(Self::KNOWN_PROPERTIES)
    }

    /// Whether the current value equals `value_on`.
    pub fn is_on(&self) -> bool {
        self.value == self.value_on
    }

    pub fn from_json(ctx: &mut ParseContext, json: &Value) -> Result<Self, ParseError> {
        expect_type_string(json, CardElementType::ToggleInput.as_str())?;

        let input = BaseInputElement::deserialize(
            ctx,
            json,
            CardElementType::ToggleInput,
            Self::KNOWN_PROPERTIES,
        )?;

        Ok(ToggleInput {
            input,
            title: get_string(json, SchemaKey::Title, true)?,
            value: get_string(json, SchemaKey::Value, false)?,
            value_on: get_string_or(json, SchemaKey::ValueOn, DEFAULT_VALUE_ON)?,
            value_off: get_string_or(json, SchemaKey::ValueOff, DEFAULT_VALUE_OFF)?,
            wrap: get_bool(json, SchemaKey::Wrap, false, false)?,
        })
    }

    pub fn serialize_to_json_value(&self) -> Value {
        let mut root = Map::new();
        self.input.serialize_into(&mut root);
        insert_non_empty(&mut root, SchemaKey::Title, &self.title);
        insert_non_empty(&mut root, SchemaKey::Value, &self.value);
        if self.value_on != DEFAULT_VALUE_ON {
            root.insert(
                SchemaKey::ValueOn.as_str().to_string(),
                Value::String(self.value_on.clone()),
            );
        }
        if self.value_off != DEFAULT_VALUE_OFF {
            root.insert(
                SchemaKey::ValueOff.as_str().to_string(),
                Value::String(self.value_off.clone()),
            );
        }
        if self.wrap {
            root.insert(SchemaKey::Wrap.as_str().to_string(), Value::Bool(true));
        }
        Value::Object(root)
    }

    pub fn serialize(&self) -> String {
        self.serialize_to_json_value().to_string()
    }
}

/// `default` stands in only for an absent or `null` property; an authored
/// empty string is kept.
fn get_string_or(json: &Value, key: SchemaKey, default: &str) -> Result<String, ParseError> {
    match json.get(key.as_str()) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(_) => get_string(json, key, false),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ToggleInputParser;

impl ElementParser for ToggleInputParser {
    fn deserialize(&self, ctx: &mut ParseContext, json: &Value) -> Result<CardElement, ParseError> {
        ToggleInput::from_json(ctx, json).map(CardElement::ToggleInput)
    }
}
