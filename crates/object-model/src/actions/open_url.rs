//! `Action.OpenUrl`.

use serde_json::{Map, Value};

use crate::actions::{Action, BaseActionElement};
use crate::enums::ActionType;
use crate::error::ParseError;
use crate::parse_util::{expect_type_string, get_string};
use crate::registration::{ActionParser, ParseContext};
use crate::schema_key::SchemaKey;

#[derive(Debug, Clone, PartialEq)]
pub struct OpenUrlAction {
    pub base: BaseActionElement,
    pub url: String,
}

impl OpenUrlAction {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[SchemaKey::Url];

    pub fn new(url: impl Into<String>) -> Self {
        OpenUrlAction {
            base: BaseActionElement::new(ActionType::OpenUrl),
            url: url.into(),
        }
    }

    pub fn from_json(json: &Value) -> Result<Self, ParseError> {
        expect_type_string(json, ActionType::OpenUrl.as_str())?;
        Ok(OpenUrlAction {
            base: BaseActionElement::deserialize(json, ActionType::OpenUrl, Self::KNOWN_PROPERTIES)?,
            url: get_string(json, SchemaKey::Url, true)?,
        })
    }

    pub fn serialize_to_json_value(&self) -> Value {
        let mut root = Map::new();
        self.base.serialize_into(&mut root);
        root.insert(
            SchemaKey::Url.as_str().to_string(),
            Value::String(self.url.clone()),
        );
        Value::Object(root)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OpenUrlActionParser;

impl ActionParser for OpenUrlActionParser {
    fn deserialize(&self, _ctx: &mut ParseContext, json: &Value) -> Result<Action, ParseError> {
        OpenUrlAction::from_json(json).map(Action::OpenUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorStatusCode;
    use serde_json::json;

    #[test]
    fn test_url_required() {
        let err = OpenUrlAction::from_json(&json!({"type": "Action.OpenUrl", "title": "Docs"}))
            .unwrap_err();
        assert_eq!(err.status_code(), ErrorStatusCode::RequiredPropertyMissing);
    }

    #[test]
    fn test_disabled_action_round_trip() {
        let json = json!({
            "type": "Action.OpenUrl",
            "title": "Docs",
            "tooltip": "Open documentation",
            "isEnabled": false,
            "url": "https://adaptivecards.io"
        });
        let action = OpenUrlAction::from_json(&json).unwrap();
        assert!(!action.base.is_enabled);
        assert_eq!(action.serialize_to_json_value(), json);
    }
}
