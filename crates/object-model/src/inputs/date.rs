//! `Input.Date`: a calendar date picker.
//!
//! Dates travel as `YYYY-MM-DD` strings. The strings are kept exactly as
//! authored; [`DateInput::value_date`] and friends give a typed view when
//! the text is a valid date.

use serde_json::{Map, Value};
use time::macros::format_description;
use time::Date;

use crate::card_element::CardElement;
use crate::enums::CardElementType;
use crate::error::{ErrorStatusCode, ParseError, WarningStatusCode};
use crate::input::{input_known_properties, BaseInputElement};
use crate::parse_util::{expect_type_string, get_string, insert_non_empty};
use crate::registration::{ElementParser, ParseContext};
use crate::schema_key::SchemaKey;

#[derive(Debug, Clone, PartialEq)]
pub struct DateInput {
    pub input: BaseInputElement,
    pub max: String,
    pub min: String,
    pub placeholder: String,
    pub value: String,
}

impl DateInput {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[
        SchemaKey::Max,
        SchemaKey::Min,
        SchemaKey::Value,
        SchemaKey::Placeholder,
    ];

    pub fn new(id: impl Into<String>) -> Self {
        DateInput {
            input: BaseInputElement::new(CardElementType::DateInput, id),
            max: String::new(),
            min: String::new(),
            placeholder: String::new(),
            value: String::new(),
        }
    }

    pub fn known_properties() -> Vec<SchemaKey> {
        input_known_properties(Self::KNOWN_PROPERTIES)
    }

    pub fn value_date(&self) -> Option<Date> {
        parse_date(&self.value)
    }

    pub fn min_date(&self) -> Option<Date> {
        parse_date(&self.min)
    }

    pub fn max_date(&self) -> Option<Date> {
        parse_date(&self.max)
    }

    /// Years outside `0000..=9999` have no `YYYY-MM-DD` form and are
    /// rejected, leaving `value` untouched.
    pub fn set_value_date(&mut self, date: Date) -> Result<(), ParseError> {
        self.value = format_date(date)?;
        Ok(())
    }

    pub fn from_json(ctx: &mut ParseContext, json: &Value) -> Result<Self, ParseError> {
        expect_type_string(json, CardElementType::DateInput.as_str())?;

        let input = BaseInputElement::deserialize(
            ctx,
            json,
            CardElementType::DateInput,
            Self::KNOWN_PROPERTIES,
        )?;

        let date_input = DateInput {
            input,
            max: get_string(json, SchemaKey::Max, false)?,
            min: get_string(json, SchemaKey::Min, false)?,
            placeholder: get_string(json, SchemaKey::Placeholder, false)?,
            value: get_string(json, SchemaKey::Value, false)?,
        };

        for (key, text) in [
            (SchemaKey::Max, &date_input.max),
            (SchemaKey::Min, &date_input.min),
            (SchemaKey::Value, &date_input.value),
        ] {
            if !text.is_empty() && parse_date(text).is_none() {
                ctx.warn(
                    WarningStatusCode::InvalidValue,
                    format!(
                        "Input.Date '{}' has {} '{}' which is not a YYYY-MM-DD date",
                        date_input.input.id(),
                        key,
                        text
                    ),
                );
            }
        }

        Ok(date_input)
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

    /// Compact JSON text.
    pub fn serialize(&self) -> String {
        self.serialize_to_json_value().to_string()
    }
}

/// Parser registered for `Input.Date`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateInputParser;

impl ElementParser for DateInputParser {
    fn deserialize(&self, ctx: &mut ParseContext, json: &Value) -> Result<CardElement, ParseError> {
        DateInput::from_json(ctx, json).map(CardElement::DateInput)
    }
}

/// Strictly `YYYY-MM-DD`: exactly four year digits, no sign.
fn parse_date(text: &str) -> Option<Date> {
    if text.len() != 10 || !text.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }
    Date::parse(text, format_description!("[year]-[month]-[day]")).ok()
}

fn format_date(date: Date) -> Result<String, ParseError> {
    if !(0..=9999).contains(&date.year()) {
        return Err(ParseError::new(
            ErrorStatusCode::InvalidPropertyValue,
            format!("Date {} has no YYYY-MM-DD form", date),
        ));
    }
    date.format(format_description!("[year]-[month]-[day]")).map_err(|e| {
        ParseError::new(
            ErrorStatusCode::InvalidPropertyValue,
            format!("Could not format date {}: {}", date, e),
        )
    })
}
