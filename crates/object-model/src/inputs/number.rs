//! `Input.Number`.

use serde_json::{Map, Number, Value};

use crate::card_element::CardElement;
use crate::enums::CardElementType;
use crate::error::ParseError;
use crate::input::{input_known_properties, BaseInputElement};
use crate::parse_util::{expect_type_string, get_optional_f64, get_string, insert_non_empty};
use crate::registration::{ElementParser, ParseContext};
use crate::schema_key::SchemaKey;

#[derive(Debug, Clone, PartialEq)]
pub struct NumberInput {
    pub input: BaseInputElement,
    pub placeholder: String,
    pub value: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberInput {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[
        SchemaKey::Placeholder,
        SchemaKey::Value,
        SchemaKey::Min,
        SchemaKey::Max,
    ];

    pub fn new(id: impl Into<String>) -> Self {
        NumberInput {
            input: BaseInputElement::new(CardElementType::NumberInput, id),
            placeholder: String::new(),
            value: None,
            min: None,
            max: None,
        }
    }

    pub fn known_properties() -> Vec<SchemaKey> {
        input_known_properties(Self::KNOWN_PROPERTIES)
    }

    pub fn from_json(ctx: &mut ParseContext, json: &Value) -> Result<Self, ParseError> {
        expect_type_string(json, CardElementType::NumberInput.as_str())?;

        let input = BaseInputElement::deserialize(
            ctx,
            json,
            CardElementType::NumberInput,
            Self::KNOWN_PROPERTIES,
        )?;

        Ok(NumberInput {
            input,
            placeholder: get_string(json, SchemaKey::Placeholder, false)?,
            value: get_optional_f64(json, SchemaKey::Value)?,
            min: get_optional_f64(json, SchemaKey::Min)?,
            max: get_optional_f64(json, SchemaKey::Max)?,
        })
    }

    pub fn serialize_to_json_value(&self) -> Value {
        let mut root = Map::new();
        self.input.serialize_into(&mut root);
        insert_non_empty(&mut root, SchemaKey::Placeholder, &self.placeholder);
        for (key, number) in [
            (SchemaKey::Value, self.value),
            (SchemaKey::Min, self.min),
            (SchemaKey::Max, self.max),
        ] {
            if let Some(n) = number.and_then(number_value) {
                root.insert(key.as_str().to_string(), n);
            }
        }
        Value::Object(root)
    }

    pub fn serialize(&self) -> String {
        self.serialize_to_json_value().to_string()
    }
}

/// Whole numbers are written as JSON integers so `5` does not come back
/// as `5.0`. Non-finite values have no JSON form and are dropped.
fn number_value(n: f64) -> Option<Value> {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        return Some(Value::Number(Number::from(n as i64)));
    }
    Number::from_f64(n).map(Value::Number)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NumberInputParser;

impl ElementParser for NumberInputParser {
    fn deserialize(&self, ctx: &mut ParseContext, json: &Value) -> Result<CardElement, ParseError> {
        NumberInput::from_json(ctx, json).map(CardElement::NumberInput)
    }
}
