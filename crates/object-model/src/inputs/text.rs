//! `Input.Text`: free-form text entry, optionally with an inline action.

use serde_json::{Map, Value};

use crate::actions::Action;
use crate::card_element::CardElement;
use crate::enums::{CardElementType, TextInputStyle};
use crate::error::ParseError;
use crate::input::{input_known_properties, BaseInputElement};
use crate::parse_util::{
    expect_type_string, get_bool, get_enum, get_object, get_optional_u32, get_string,
    insert_non_empty,
};
use crate::registration::{ElementParser, ParseContext};
use crate::schema_key::SchemaKey;

#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    pub input: BaseInputElement,
    pub placeholder: String,
    pub value: String,
    pub is_multiline: bool,
    pub max_length: Option<u32>,
    pub style: TextInputStyle,
    /// Action rendered beside the text box, e.g. a send button.
    pub inline_action: Option<Action>,
    /// Pattern the entered text must match before submission.
    pub regex: String,
}

impl TextInput {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[
        SchemaKey::Placeholder,
        SchemaKey::Value,
        SchemaKey::IsMultiline,
        SchemaKey::MaxLength,
        SchemaKey::Style,
        SchemaKey::InlineAction,
        SchemaKey::Regex,
    ];

    pub fn new(id: impl Into<String>) -> Self {
        TextInput {
            input: BaseInputElement::new(CardElementType::TextInput, id),
            placeholder: String::new(),
            value: String::new(),
            is_multiline: false,
            max_length: None,
            style: TextInputStyle::Text,
            inline_action: None,
            regex: String::new(),
        }
    }

    pub fn known_properties() -> Vec<SchemaKey> {
        input_known_properties(Self::KNOWN_PROPERTIES)
    }

    pub fn from_json(ctx: &mut ParseContext, json: &Value) -> Result<Self, ParseError> {
        expect_type_string(json, CardElementType::TextInput.as_str())?;

        let input = BaseInputElement::deserialize(
            ctx,
            json,
            CardElementType::TextInput,
            Self::KNOWN_PROPERTIES,
        )?;

        let inline_action = match get_object(json, SchemaKey::InlineAction)? {
            Some(action_json) => Some(ctx.parse_action(action_json)?),
            None => None,
        };

        Ok(TextInput {
            input,
            placeholder: get_string(json, SchemaKey::Placeholder, false)?,
            value: get_string(json, SchemaKey::Value, false)?,
            is_multiline: get_bool(json, SchemaKey::IsMultiline, false, false)?,
            max_length: get_optional_u32(json, SchemaKey::MaxLength)?,
            style: get_enum(ctx, json, SchemaKey::Style, TextInputStyle::Text)?,
            inline_action,
            regex: get_string(json, SchemaKey::Regex, false)?,
        })
    }

    pub fn serialize_to_json_value(&self) -> Value {
        let mut root = Map::new();
        self.input.serialize_into(&mut root);
        insert_non_empty(&mut root, SchemaKey::Placeholder, &self.placeholder);
        insert_non_empty(&mut root, SchemaKey::Value, &self.value);
        if self.is_multiline {
            root.insert(SchemaKey::IsMultiline.as_str().to_string(), Value::Bool(true));
        }
        if let Some(max_length) = self.max_length {
            root.insert(
                SchemaKey::MaxLength.as_str().to_string(),
                Value::from(max_length),
            );
        }
        if self.style != TextInputStyle::Text {
            root.insert(
                SchemaKey::Style.as_str().to_string(),
                Value::String(self.style.to_string()),
            );
        }
        if let Some(action) = &self.inline_action {
            root.insert(
                SchemaKey::InlineAction.as_str().to_string(),
                action.serialize_to_json_value(),
            );
        }
        insert_non_empty(&mut root, SchemaKey::Regex, &self.regex);
        Value::Object(root)
    }

    pub fn serialize(&self) -> String {
        self.serialize_to_json_value().to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextInputParser;

impl ElementParser for TextInputParser {
    fn deserialize(&self, ctx: &mut ParseContext, json: &Value) -> Result<CardElement, ParseError> {
        TextInput::from_json(ctx, json).map(CardElement::TextInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ActionType;
    use crate::error::{ErrorStatusCode, WarningStatusCode};
    use serde_json::json;

    #[test]
    fn test_parse_text_input_with_inline_action() {
        let mut ctx = ParseContext::new();
        let json = json!({
            "type": "Input.Text",
            "id": "comment",
            "label": "Comment",
            "placeholder": "Say something",
            "isMultiline": true,
            "maxLength": 500,
            "style": "email",
            "regex": "^\\S+@\\S+$",
            "inlineAction": {
                "type": "Action.Submit",
                "title": "Send",
                "data": {"reply": true}
            }
        });

        let text = TextInput::from_json(&mut ctx, &json).unwrap();
        assert!(text.is_multiline);
        assert_eq!(text.max_length, Some(500));
        assert_eq!(text.style, TextInputStyle::Email);
        let action = text.inline_action.as_ref().unwrap();
        assert_eq!(action.action_type(), ActionType::Submit);
        assert_eq!(action.base().title, "Send");
        assert!(ctx.warnings().is_empty());
        assert_eq!(text.serialize_to_json_value(), json);
    }

    #[test]
    fn test_unknown_style_falls_back() {
        let mut ctx = ParseContext::new();
        let text = TextInput::from_json(
            &mut ctx,
            &json!({"type": "Input.Text", "id": "t", "style": "phone"}),
        )
        .unwrap();
        assert_eq!(text.style, TextInputStyle::Text);
        assert_eq!(ctx.warnings()[0].status_code, WarningStatusCode::UnknownEnumValue);
    }

    #[test]
    fn test_inline_action_must_be_object() {
        let mut ctx = ParseContext::new();
        let err = TextInput::from_json(
            &mut ctx,
            &json!({"type": "Input.Text", "id": "t", "inlineAction": "Action.Submit"}),
        )
        .unwrap_err();
        assert_eq!(err.status_code(), ErrorStatusCode::InvalidPropertyValue);
    }

    #[test]
    fn test_unknown_inline_action_preserved() {
        let mut ctx = ParseContext::new();
        let json = json!({
            "type": "Input.Text",
            "id": "t",
            "inlineAction": {"type": "Action.Future", "title": "Go", "extra": [1, 2]}
        });
        let text = TextInput::from_json(&mut ctx, &json).unwrap();
        assert_eq!(
            text.inline_action.as_ref().map(Action::action_type),
            Some(ActionType::Unknown)
        );
        assert_eq!(
            ctx.warnings()[0].status_code,
            WarningStatusCode::UnknownActionElementType
        );
        assert_eq!(text.serialize_to_json_value(), json);
    }
}
