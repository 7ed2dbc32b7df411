//! Properties shared by every card element.

use serde_json::{Map, Value};

use crate::enums::{CardElementType, HeightType, SchemaEnum, Spacing};
use crate::error::ParseError;
use crate::parse_util::{additional_properties, get_bool, get_enum, get_string};
use crate::registration::ParseContext;
use crate::schema_key::SchemaKey;

/// Common element state: identity, spacing and visibility, plus any JSON
/// properties the typed model does not know about.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseCardElement {
    element_type: CardElementType,
    pub id: String,
    pub spacing: Spacing,
    pub separator: bool,
    pub is_visible: bool,
    pub height: HeightType,
    /// Unrecognized properties, written back verbatim on serialization.
    pub additional_properties: Map<String, Value>,
}

impl BaseCardElement {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[
        SchemaKey::Type,
        SchemaKey::Id,
        SchemaKey::Spacing,
        SchemaKey::Separator,
        SchemaKey::IsVisible,
        SchemaKey::Height,
    ];

    pub fn new(element_type: CardElementType) -> Self {
        BaseCardElement {
            element_type,
            id: String::new(),
            spacing: Spacing::Default,
            separator: false,
            is_visible: true,
            height: HeightType::Auto,
            additional_properties: Map::new(),
        }
    }

    pub fn element_type(&self) -> CardElementType {
        self.element_type
    }

    /// Read the shared properties. `known` lists every property the
    /// concrete element reads itself; anything outside it and the base set
    /// lands in `additional_properties`.
    pub(crate) fn deserialize(
        ctx: &mut ParseContext,
        json: &Value,
        element_type: CardElementType,
        known: &[SchemaKey],
    ) -> Result<Self, ParseError> {
        let mut all_known = BaseCardElement::KNOWN_PROPERTIES.to_vec();
        all_known.extend_from_slice(known);

        Ok(BaseCardElement {
            element_type,
            id: get_string(json, SchemaKey::Id, false)?,
            spacing: get_enum(ctx, json, SchemaKey::Spacing, Spacing::Default)?,
            separator: get_bool(json, SchemaKey::Separator, false, false)?,
            is_visible: get_bool(json, SchemaKey::IsVisible, true, false)?,
            height: get_enum(ctx, json, SchemaKey::Height, HeightType::Auto)?,
            additional_properties: additional_properties(json, &all_known),
        })
    }

    /// Best-effort read for elements nothing is registered for. A value of
    /// the wrong kind or an unrecognized enum falls back to the default
    /// without an error or a warning.
    pub(crate) fn read_lenient(json: &Value, element_type: CardElementType) -> Self {
        let str_of = |key: SchemaKey| json.get(key.as_str()).and_then(Value::as_str);
        let bool_of = |key: SchemaKey, default: bool| {
            json.get(key.as_str()).and_then(Value::as_bool).unwrap_or(default)
        };

        BaseCardElement {
            element_type,
            id: str_of(SchemaKey::Id).unwrap_or_default().to_string(),
            spacing: str_of(SchemaKey::Spacing)
                .and_then(Spacing::from_json_str)
                .unwrap_or(Spacing::Default),
            separator: bool_of(SchemaKey::Separator, false),
            is_visible: bool_of(SchemaKey::IsVisible, true),
            height: str_of(SchemaKey::Height)
                .and_then(HeightType::from_json_str)
                .unwrap_or(HeightType::Auto),
            additional_properties: additional_properties(json, BaseCardElement::KNOWN_PROPERTIES),
        }
    }

    /// Start a serialized object. Additional properties go in first so
    /// typed properties written afterwards take precedence.
    pub(crate) fn serialize_into(&self, map: &mut Map<String, Value>) {
        for (name, value) in &self.additional_properties {
            map.insert(name.clone(), value.clone());
        }

        map.insert(
            SchemaKey::Type.as_str().to_string(),
            Value::String(self.element_type.as_str().to_string()),
        );
        if !self.id.is_empty() {
            map.insert(SchemaKey::Id.as_str().to_string(), Value::String(self.id.clone()));
        }
        if self.spacing != Spacing::Default {
            map.insert(
                SchemaKey::Spacing.as_str().to_string(),
                Value::String(self.spacing.to_string()),
            );
        }
        if self.separator {
            map.insert(SchemaKey::Separator.as_str().to_string(), Value::Bool(true));
        }
        if !self.is_visible {
            map.insert(SchemaKey::IsVisible.as_str().to_string(), Value::Bool(false));
        }
        if self.height != HeightType::Auto {
            map.insert(
                SchemaKey::Height.as_str().to_string(),
                Value::String(self.height.to_string()),
            );
        }
    }
}
