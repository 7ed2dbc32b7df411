//! Properties shared by every `Input.*` element.

use serde_json::{Map, Value};

use crate::element::BaseCardElement;
use crate::enums::CardElementType;
use crate::error::{ParseError, WarningStatusCode};
use crate::parse_util::{get_bool, get_string, insert_non_empty};
use crate::registration::ParseContext;
use crate::schema_key::SchemaKey;

#[derive(Debug, Clone, PartialEq)]
pub struct BaseInputElement {
    pub base: BaseCardElement,
    pub is_required: bool,
    pub error_message: String,
    pub label: String,
}

impl BaseInputElement {
    pub const KNOWN_PROPERTIES: &'static [SchemaKey] = &[
        SchemaKey::IsRequired,
        SchemaKey::ErrorMessage,
        SchemaKey::Label,
    ];

    pub fn new(element_type: CardElementType, id: impl Into<String>) -> Self {
        let mut base = BaseCardElement::new(element_type);
        base.id = id.into();
        BaseInputElement {
            base,
            is_required: false,
            error_message: String::new(),
            label: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.base.id
    }

    /// Inputs are addressed by id when a card is submitted, so an input
    /// without one is rejected.
    pub(crate) fn deserialize(
        ctx: &mut ParseContext,
        json: &Value,
        element_type: CardElementType,
        known: &[SchemaKey],
    ) -> Result<Self, ParseError> {
        let base = BaseCardElement::deserialize(
            ctx,
            json,
            element_type,
            &[BaseInputElement::KNOWN_PROPERTIES, known].concat(),
        )?;
        if base.id.is_empty() {
            return Err(ParseError::required_property_missing(SchemaKey::Id.as_str()));
        }

        let input = BaseInputElement {
            base,
            is_required: get_bool(json, SchemaKey::IsRequired, false, false)?,
            error_message: get_string(json, SchemaKey::ErrorMessage, false)?,
            label: get_string(json, SchemaKey::Label, false)?,
        };

        if input.is_required && input.label.is_empty() {
            ctx.warn(
                WarningStatusCode::EmptyLabelInRequiredInput,
                format!(
                    "Input '{}' is required but has no label",
                    input.base.id
                ),
            );
        }

        Ok(input)
    }

    pub(crate) fn serialize_into(&self, map: &mut Map<String, Value>) {
        self.base.serialize_into(map);
        if self.is_required {
            map.insert(SchemaKey::IsRequired.as_str().to_string(), Value::Bool(true));
        }
        insert_non_empty(map, SchemaKey::ErrorMessage, &self.error_message);
        insert_non_empty(map, SchemaKey::Label, &self.label);
    }
}

/// The full known-properties set of an input type: element base, input
/// base, then the type's own properties.
pub(crate) fn input_known_properties(own: &[SchemaKey]) -> Vec<SchemaKey> {
    [
        BaseCardElement::KNOWN_PROPERTIES,
        BaseInputElement::KNOWN_PROPERTIES,
        own,
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorStatusCode;
    use serde_json::json;

    #[test]
    fn missing_id_is_fatal() {
        let mut ctx = ParseContext::new();
        let err = BaseInputElement::deserialize(
            &mut ctx,
            &json!({"type": "Input.Date"}),
            CardElementType::DateInput,
            &[],
        )
        .unwrap_err();
        assert_eq!(err.status_code(), ErrorStatusCode::RequiredPropertyMissing);
    }

    #[test]
    fn required_without_label_warns() {
        let mut ctx = ParseContext::new();
        let input = BaseInputElement::deserialize(
            &mut ctx,
            &json!({"type": "Input.Date", "id": "d", "isRequired": true, "errorMessage": "pick one"}),
            CardElementType::DateInput,
            &[],
        )
        .unwrap();
        assert!(input.is_required);
        assert_eq!(input.error_message, "pick one");
        assert_eq!(ctx.warnings().len(), 1);
        assert_eq!(
            ctx.warnings()[0].status_code,
            WarningStatusCode::EmptyLabelInRequiredInput
        );
    }

    #[test]
    fn input_properties_are_not_additional() {
        let mut ctx = ParseContext::new();
        let input = BaseInputElement::deserialize(
            &mut ctx,
            &json!({"type": "Input.Date", "id": "d", "label": "When", "max": "2030-01-01"}),
            CardElementType::DateInput,
            &[SchemaKey::Max],
        )
        .unwrap();
        assert!(input.base.additional_properties.is_empty());
    }
}
