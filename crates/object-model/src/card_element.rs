//! The closed set of element values a parse can produce.

use serde_json::{Map, Value};

use crate::element::BaseCardElement;
use crate::enums::CardElementType;
use crate::input::BaseInputElement;
use crate::inputs::{
    ChoiceSetInput, DateInput, NumberInput, TextInput, TimeInput, ToggleInput,
};
use crate::schema_key::SchemaKey;

/// An element whose `"type"` has no registered parser. The authored
/// object is kept and written back unchanged; `base` is a read-only view
/// of whatever shared properties it happens to carry.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownElement {
    pub base: BaseCardElement,
    pub type_string: String,
    pub json: Map<String, Value>,
}

impl UnknownElement {
    pub fn from_json(json: &Value, type_string: String) -> Self {
        UnknownElement {
            base: BaseCardElement::read_lenient(json, CardElementType::Unknown),
            type_string,
            json: json.as_object().cloned().unwrap_or_default(),
        }
    }

    pub fn serialize_to_json_value(&self) -> Value {
        let mut root = self.json.clone();
        root.insert(
            SchemaKey::Type.as_str().to_string(),
            Value::String(self.type_string.clone()),
        );
        Value::Object(root)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardElement {
    ChoiceSetInput(ChoiceSetInput),
    DateInput(DateInput),
    NumberInput(NumberInput),
    TextInput(TextInput),
    TimeInput(TimeInput),
    ToggleInput(ToggleInput),
    Unknown(UnknownElement),
}

impl CardElement {
    pub fn element_type(&self) -> CardElementType {
        self.base().element_type()
    }

    /// The JSON `"type"` string, including unregistered ones.
    pub fn type_string(&self) -> &str {
        match self {
            CardElement::Unknown(e) => &e.type_string,
            other => other.element_type().as_str(),
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn base(&self) -> &BaseCardElement {
        match self {
            CardElement::ChoiceSetInput(e) => &e.input.base,
            CardElement::DateInput(e) => &e.input.base,
            CardElement::NumberInput(e) => &e.input.base,
            CardElement::TextInput(e) => &e.input.base,
            CardElement::TimeInput(e) => &e.input.base,
            CardElement::ToggleInput(e) => &e.input.base,
            CardElement::Unknown(e) => &e.base,
        }
    }

    pub fn as_input(&self) -> Option<&BaseInputElement> {
        match self {
            CardElement::ChoiceSetInput(e) => Some(&e.input),
            CardElement::DateInput(e) => Some(&e.input),
            CardElement::NumberInput(e) => Some(&e.input),
            CardElement::TextInput(e) => Some(&e.input),
            CardElement::TimeInput(e) => Some(&e.input),
            CardElement::ToggleInput(e) => Some(&e.input),
            CardElement::Unknown(_) => None,
        }
    }

    pub fn as_input_mut(&mut self) -> Option<&mut BaseInputElement> {
        match self {
            CardElement::ChoiceSetInput(e) => Some(&mut e.input),
            CardElement::DateInput(e) => Some(&mut e.input),
            CardElement::NumberInput(e) => Some(&mut e.input),
            CardElement::TextInput(e) => Some(&mut e.input),
            CardElement::TimeInput(e) => Some(&mut e.input),
            CardElement::ToggleInput(e) => Some(&mut e.input),
            CardElement::Unknown(_) => None,
        }
    }

    pub fn serialize_to_json_value(&self) -> Value {
        match self {
            CardElement::ChoiceSetInput(e) => e.serialize_to_json_value(),
            CardElement::DateInput(e) => e.serialize_to_json_value(),
            CardElement::NumberInput(e) => e.serialize_to_json_value(),
            CardElement::TextInput(e) => e.serialize_to_json_value(),
            CardElement::TimeInput(e) => e.serialize_to_json_value(),
            CardElement::ToggleInput(e) => e.serialize_to_json_value(),
            CardElement::Unknown(e) => e.serialize_to_json_value(),
        }
    }

    /// Compact JSON text.
    pub fn serialize(&self) -> String {
        self.serialize_to_json_value().to_string()
    }
}
