//! `Input.Time`: a clock time picker using `HH:MM` strings.

use serde_json::{Map, Value};
use time::macros::format_description;
use time::Time;

use crate::card_element::CardElement;
use crate::enums::CardElementType;
use crate::error::{ParseError, WarningStatusCode};
use crate::input::{input_known_properties, BaseInputElement};
use crate::parse_util::{expect_type_string, get_string, insert_non_empty};
use crate::registration::{ElementParser, ParseContext};
use crate::schema_key::SchemaKey;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeInput {
    pub input: BaseInputElement,
    pub max: String,
    pub min: String,
    pub placeholder: String,
    pub value: String,
}

impl TimeInput {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[
        SchemaKey::Max,
        SchemaKey::Min,
        SchemaKey::Value,
        SchemaKey::Placeholder,
    ];

    pub fn new(id: impl Into<String>) -> Self {
        TimeInput {
            input: BaseInputElement::new(CardElementType::TimeInput, id),
            max: String::new(),
            min: String::new(),
            placeholder: String::new(),
            value: String::new(),
        }
    }

    pub fn known_properties() -> Vec<SchemaKey> {
        input_known_properties(Self::KNOWN_PROPERTIES)
    }

    pub fn value_time(&self) -> Option<Time> {
        parse_time(&self.value)
    }

    pub fn min_time(&self) -> Option<Time> {
        parse_time(&self.min)
    }

    pub fn max_time(&self) -> Option<Time> {
        parse_time(&self.max)
    }

    pub fn set_value_time(&mut self, time: Time) {
        self.value = format!("{:02}:{:02}", time.hour(), time.minute());
    }

    pub fn from_json(ctx: &mut ParseContext, json: &Value) -> Result<Self, ParseError> {
        expect_type_string(json, CardElementType::TimeInput.as_str())?;

        let input = BaseInputElement::deserialize(
            ctx,
            json,
            CardElementType::TimeInput,
            Self::KNOWN_PROPERTIES,
        )?;

        let time_input = TimeInput {
            input,
            max: get_string(json, SchemaKey::Max, false)?,
            min: get_string(json, SchemaKey::Min, false)?,
            placeholder: get_string(json, SchemaKey::Placeholder, false)?,
            value: get_string(json, SchemaKey::Value, false)?,
        };

        for (key, text) in [
            (SchemaKey::Max, &time_input.max),
            (SchemaKey::Min, &time_input.min),
            (SchemaKey::Value, &time_input.value),
        ] {
            if !text.is_empty() && parse_time(text).is_none() {
                ctx.warn(
                    WarningStatusCode::InvalidValue,
                    format!(
                        "Input.Time '{}' has {} '{}' which is not an HH:MM time",
                        time_input.input.id(),
                        key,
                        text
                    ),
                );
            }
        }

        Ok(time_input)
    }

    pub fn serialize_to_json_value(&self) -> Value {
        let mut root = Map::new();
        self.input.serialize_into(&mut root);
        insert_non_empty(&mut root, SchemaKey::Max, &self.max);
        insert_non_empty(&mut root, SchemaKey::Min, &self.min);
        insert_non_empty(&mut root, SchemaKey::Placeholder, &self.placeholder);
        insert_non_empty(&mut root, SchemaKey::Value, &self.value);
        Value::Object(root)
    }

    pub fn serialize(&self) -> String {
        self.serialize_to_json_value().to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TimeInputParser;

impl ElementParser for TimeInputParser {
    fn deserialize(&self, ctx: &mut ParseContext, json: &Value) -> Result<CardElement, ParseError> {
        TimeInput::from_json(ctx, json).map(CardElement::TimeInput)
    }
}

fn parse_time(text: &str) -> Option<Time> {
    Time::parse(text, format_description!("[hour]:[minute]")).ok()
}
