//! Card actions. Only the kinds an input can embed are modelled here.

pub mod open_url;
pub mod submit;

use serde_json::{Map, Value};

use crate::enums::ActionType;
use crate::error::ParseError;
use crate::parse_util::{additional_properties, get_bool, get_string, insert_non_empty};
use crate::schema_key::SchemaKey;

pub use self::open_url::{OpenUrlAction, OpenUrlActionParser};
pub use self::submit::{SubmitAction, SubmitActionParser};

/// Properties shared by every action.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseActionElement {
    action_type: ActionType,
    pub id: String,
    pub title: String,
    pub icon_url: String,
    pub tooltip: String,
    pub is_enabled: bool,
    pub additional_properties: Map<String, Value>,
}

impl BaseActionElement {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[
        SchemaKey::Type,
        SchemaKey::Id,
        SchemaKey::Title,
        SchemaKey::IconUrl,
        SchemaKey::Tooltip,
        SchemaKey::IsEnabled,
    ];

    pub fn new(action_type: ActionType) -> Self {
        BaseActionElement {
            action_type,
            id: String::new(),
            title: String::new(),
            icon_url: String::new(),
            tooltip: String::new(),
            is_enabled: true,
            additional_properties: Map::new(),
        }
    }

    pub fn action_type(&self) -> ActionType {
        self.action_type
    }

    pub(crate) fn deserialize(
        json: &Value,
        action_type: ActionType,
        known: &[SchemaKey],
    ) -> Result<Self, ParseError> {
        let all_known = [BaseActionElement::KNOWN_PROPERTIES, known].concat();
        Ok(BaseActionElement {
            action_type,
            id: get_string(json, SchemaKey::Id, false)?,
            title: get_string(json, SchemaKey::Title, false)?,
            icon_url: get_string(json, SchemaKey::IconUrl, false)?,
            tooltip: get_string(json, SchemaKey::Tooltip, false)?,
            is_enabled: get_bool(json, SchemaKey::IsEnabled, true, false)?,
            additional_properties: additional_properties(json, &all_known),
        })
    }

    /// Best-effort read for actions nothing is registered for. Values of
    /// the wrong kind read as the default.
    pub(crate) fn read_lenient(json: &Value, action_type: ActionType) -> Self {
        let str_of = |key: SchemaKey| {
            json.get(key.as_str())
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        BaseActionElement {
            action_type,
            id: str_of(SchemaKey::Id),
            title: str_of(SchemaKey::Title),
            icon_url: str_of(SchemaKey::IconUrl),
            tooltip: str_of(SchemaKey::Tooltip),
            is_enabled: json
                .get(SchemaKey::IsEnabled.as_str())
                .and_then(Value::as_bool)
                .unwrap_or(true),
            additional_properties: additional_properties(json, BaseActionElement::KNOWN_PROPERTIES),
        }
    }

    pub(crate) fn serialize_into(&self, map: &mut Map<String, Value>) {
        for (name, value) in &self.additional_properties {
            map.insert(name.clone(), value.clone());
        }
        map.insert(
            SchemaKey::Type.as_str().to_string(),
            Value::String(self.action_type.as_str().to_string()),
        );
        insert_non_empty(map, SchemaKey::Id, &self.id);
        insert_non_empty(map, SchemaKey::Title, &self.title);
        insert_non_empty(map, SchemaKey::IconUrl, &self.icon_url);
        insert_non_empty(map, SchemaKey::Tooltip, &self.tooltip);
        if !self.is_enabled {
            map.insert(SchemaKey::IsEnabled.as_str().to_string(), Value::Bool(false));
        }
    }
}

/// An action whose `"type"` has no registered parser. The original JSON
/// is kept so it survives a round trip untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownAction {
    pub base: BaseActionElement,
    pub type_string: String,
    pub json: Map<String, Value>,
}

impl UnknownAction {
    pub fn from_json(json: &Value, type_string: String) -> Self {
        UnknownAction {
            base: BaseActionElement::read_lenient(json, ActionType::Unknown),
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
pub enum Action {
    Submit(SubmitAction),
    OpenUrl(OpenUrlAction),
    Unknown(UnknownAction),
}

impl Action {
    pub fn action_type(&self) -> ActionType {
        self.base().action_type()
    }

    pub fn base(&self) -> &BaseActionElement {
        match self {
            Action::Submit(a) => &a.base,
            Action::OpenUrl(a) => &a.base,
            Action::Unknown(a) => &a.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseActionElement {
        match self {
            Action::Submit(a) => &mut a.base,
            Action::OpenUrl(a) => &mut a.base,
            Action::Unknown(a) => &mut a.base,
        }
    }

    /// The JSON `"type"` string, including unregistered ones.
    pub fn type_string(&self) -> &str {
        match self {
            Action::Unknown(a) => &a.type_string,
            other => other.action_type().as_str(),
        }
    }

    pub fn serialize_to_json_value(&self) -> Value {
        match self {
            Action::Submit(a) => a.serialize_to_json_value(),
            Action::OpenUrl(a) => a.serialize_to_json_value(),
            Action::Unknown(a) => a.serialize_to_json_value(),
        }
    }

    pub fn serialize(&self) -> String {
        self.serialize_to_json_value().to_string()
    }
}
