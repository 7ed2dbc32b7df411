//! `Input.ChoiceSet`: pick one or many values from a fixed list.

use serde_json::{Map, Value};

use crate::card_element::CardElement;
use crate::enums::{CardElementType, ChoiceSetStyle};
use crate::error::ParseError;
use crate::input::{input_known_properties, BaseInputElement};
use crate::parse_util::{
    additional_properties, expect_type_string, get_array, get_bool, get_enum, get_string,
    insert_non_empty,
};
use crate::registration::{ElementParser, ParseContext};
use crate::schema_key::SchemaKey;

/// One selectable entry. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub title: String,
    pub value: String,
    pub additional_properties: Map<String, Value>,
}

impl Choice {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[SchemaKey::Title, SchemaKey::Value];

    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Choice {
            title: title.into(),
            value: value.into(),
            additional_properties: Map::new(),
        }
    }

    pub fn from_json(json: &Value) -> Result<Self, ParseError> {
        Ok(Choice {
            title: get_string(json, SchemaKey::Title, true)?,
            value: get_string(json, SchemaKey::Value, true)?,
            additional_properties: additional_properties(json, Self::KNOWN_PROPERTIES),
        })
    }

    pub fn serialize_to_json_value(&self) -> Value {
        let mut root = self.additional_properties.clone();
        root.insert(
            SchemaKey::Title.as_str().to_string(),
            Value::String(self.title.clone()),
        );
        root.insert(
            SchemaKey::Value.as_str().to_string(),
            Value::String(self.value.clone()),
        );
        Value::Object(root)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSetInput {
    pub input: BaseInputElement,
    pub choices: Vec<Choice>,
    pub is_multi_select: bool,
    pub style: ChoiceSetStyle,
    /// Selected value(s); multi-select joins values with commas.
    pub value: String,
    pub placeholder: String,
    pub wrap: bool,
}

impl ChoiceSetInput {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[
        SchemaKey::Choices,
        SchemaKey::IsMultiSelect,
        SchemaKey::Style,
        SchemaKey::Value,
        SchemaKey::Placeholder,
        SchemaKey::Wrap,
    ];

    pub fn new(id: impl Into<String>) -> Self {
        ChoiceSetInput {
            input: BaseInputElement::new(CardElementType::ChoiceSetInput, id),
            choices: Vec::new(),
            is_multi_select: false,
            style: ChoiceSetStyle::Compact,
            value: String::new(),
            placeholder: String::new(),
            wrap: false,
        }
    }

    pub fn known_properties() -> Vec<SchemaKey> {
        input_known_properties(Self::KNOWN_PROPERTIES)
    }

    /// The individual selected values.
    pub fn selected_values(&self) -> Vec<&str> {
        if self.value.is_empty() {
            return Vec::new();
        }
        if self.is_multi_select {
            self.value.split(',').map(str::trim).collect()
        } else {
            vec![self.value.as_str()]
        }
    }

    pub fn from_json(ctx: &mut ParseContext, json: &Value) -> Result<Self, ParseError> {
        expect_type_string(json, CardElementType::ChoiceSetInput.as_str())?;

        let input = BaseInputElement::deserialize(
            ctx,
            json,
            CardElementType::ChoiceSetInput,
            Self::KNOWN_PROPERTIES,
        )?;

        let choices = get_array(json, SchemaKey::Choices)?
            .iter()
            .map(Choice::from_json)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ChoiceSetInput {
            input,
            choices,
            is_multi_select: get_bool(json, SchemaKey::IsMultiSelect, false, false)?,
            style: get_enum(ctx, json, SchemaKey::Style, ChoiceSetStyle::Compact)?,
            value: get_string(json, SchemaKey::Value, false)?,
            placeholder: get_string(json, SchemaKey::Placeholder, false)?,
            wrap: get_bool(json, SchemaKey::Wrap, false, false)?,
        })
    }

    pub fn serialize_to_json_value(&self) -> Value {
        let mut root = Map::new();
        self.input.serialize_into(&mut root);
        root.insert(
            SchemaKey::Choices.as_str().to_string(),
            Value::Array(
                self.choices
                    .iter()
                    .map(Choice::serialize_to_json_value)
                    .collect(),
            ),
        );
        if self.is_multi_select {
            root.insert(SchemaKey::IsMultiSelect.as_str().to_string(), Value::Bool(true));
        }
        if self.style != ChoiceSetStyle::Compact {
            root.insert(
                SchemaKey::Style.as_str().to_string(),
                Value::String(self.style.to_string()),
            );
        }
        insert_non_empty(&mut root, SchemaKey::Value, &self.value);
        insert_non_empty(&mut root, SchemaKey::Placeholder, &self.placeholder);
        if self.wrap {
            root.insert(SchemaKey::Wrap.as_str().to_string(), Value::Bool(true));
        }
        Value::Object(root)
    }

    pub fn serialize(&self) -> String {
        self.serialize_to_json_value().to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChoiceSetInputParser;

impl ElementParser for ChoiceSetInputParser {
    fn deserialize(&self, ctx: &mut ParseContext, json: &Value) -> Result<CardElement, ParseError> {
        ChoiceSetInput::from_json(ctx, json).map(CardElement::ChoiceSetInput)
    }
}
