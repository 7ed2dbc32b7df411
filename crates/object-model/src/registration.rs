//! Parser traits, the type-string registries and the parse context that
//! threads them through a parse.
//!
//! Built-in parsers are registered when a registry is constructed and are
//! fixed: hosts may add parsers for their own types but cannot replace or
//! remove the built-in ones.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::actions::{Action, OpenUrlActionParser, SubmitActionParser, UnknownAction};
use crate::card_element::{CardElement, UnknownElement};
use crate::enums::{ActionType, CardElementType};
use crate::error::{ErrorStatusCode, ParseError, ParseWarning, WarningStatusCode};
use crate::inputs::{
    ChoiceSetInputParser, DateInputParser, NumberInputParser, TextInputParser, TimeInputParser,
    ToggleInputParser,
};
use crate::parse_util::{get_type_string, json_from_str};

/// Turns the JSON of one element into a [`CardElement`].
pub trait ElementParser: Send + Sync {
    fn deserialize(&self, ctx: &mut ParseContext, json: &Value) -> Result<CardElement, ParseError>;

    fn deserialize_from_str(
        &self,
        ctx: &mut ParseContext,
        text: &str,
    ) -> Result<CardElement, ParseError> {
        let json = json_from_str(text)?;
        self.deserialize(ctx, &json)
    }
}

/// Turns the JSON of one action into an [`Action`].
pub trait ActionParser: Send + Sync {
    fn deserialize(&self, ctx: &mut ParseContext, json: &Value) -> Result<Action, ParseError>;

    fn deserialize_from_str(&self, ctx: &mut ParseContext, text: &str) -> Result<Action, ParseError> {
        let json = json_from_str(text)?;
        self.deserialize(ctx, &json)
    }
}

fn override_error(kind: &str, type_string: &str) -> ParseError {
    ParseError::new(
        ErrorStatusCode::UnsupportedParserOverride,
        format!("Overriding known {} parsers is unsupported ({})", kind, type_string),
    )
}

/// Maps element `"type"` strings to parsers.
#[derive(Clone)]
pub struct ElementParserRegistration {
    parsers: BTreeMap<String, Arc<dyn ElementParser>>,
}

impl ElementParserRegistration {
    pub fn new() -> Self {
        let mut parsers: BTreeMap<String, Arc<dyn ElementParser>> = BTreeMap::new();
        parsers.insert(
            CardElementType::ChoiceSetInput.as_str().to_string(),
            Arc::new(ChoiceSetInputParser),
        );
        parsers.insert(
            CardElementType::DateInput.as_str().to_string(),
            Arc::new(DateInputParser),
        );
        parsers.insert(
            CardElementType::NumberInput.as_str().to_string(),
            Arc::new(NumberInputParser),
        );
        parsers.insert(
            CardElementType::TextInput.as_str().to_string(),
            Arc::new(TextInputParser),
        );
        parsers.insert(
            CardElementType::TimeInput.as_str().to_string(),
            Arc::new(TimeInputParser),
        );
        parsers.insert(
            CardElementType::ToggleInput.as_str().to_string(),
            Arc::new(ToggleInputParser),
        );
        ElementParserRegistration { parsers }
    }

    /// Register (or replace) the parser for a host-defined type.
    pub fn add_parser(
        &mut self,
        type_string: impl Into<String>,
        parser: Arc<dyn ElementParser>,
    ) -> Result<(), ParseError> {
        let type_string = type_string.into();
        if CardElementType::from_type_str(&type_string) != CardElementType::Unknown {
            return Err(override_error("element", &type_string));
        }
        self.parsers.insert(type_string, parser);
        Ok(())
    }

    /// Built-in types are silently kept.
    pub fn remove_parser(&mut self, type_string: &str) {
        if CardElementType::from_type_str(type_string) == CardElementType::Unknown {
            self.parsers.remove(type_string);
        }
    }

    pub fn get_parser(&self, type_string: &str) -> Option<Arc<dyn ElementParser>> {
        self.parsers.get(type_string).cloned()
    }

    pub fn type_strings(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }
}

impl Default for ElementParserRegistration {
    fn default() -> Self {
        ElementParserRegistration::new()
    }
}

impl fmt::Debug for ElementParserRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.parsers.keys()).finish()
    }
}

/// Maps action `"type"` strings to parsers.
#[derive(Clone)]
pub struct ActionParserRegistration {
    parsers: BTreeMap<String, Arc<dyn ActionParser>>,
}

impl ActionParserRegistration {
    pub fn new() -> Self {
        let mut parsers: BTreeMap<String, Arc<dyn ActionParser>> = BTreeMap::new();
        parsers.insert(
            ActionType::Submit.as_str().to_string(),
            Arc::new(SubmitActionParser),
        );
        parsers.insert(
            ActionType::OpenUrl.as_str().to_string(),
            Arc::new(OpenUrlActionParser),
        );
        ActionParserRegistration { parsers }
    }

    pub fn add_parser(
        &mut self,
        type_string: impl Into<String>,
        parser: Arc<dyn ActionParser>,
    ) -> Result<(), ParseError> {
        let type_string = type_string.into();
        if ActionType::from_type_str(&type_string) != ActionType::Unknown {
            return Err(override_error("action", &type_string));
        }
        self.parsers.insert(type_string, parser);
        Ok(())
    }

    pub fn remove_parser(&mut self, type_string: &str) {
        if ActionType::from_type_str(type_string) == ActionType::Unknown {
            self.parsers.remove(type_string);
        }
    }

    pub fn get_parser(&self, type_string: &str) -> Option<Arc<dyn ActionParser>> {
        self.parsers.get(type_string).cloned()
    }

    pub fn type_strings(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }
}

impl Default for ActionParserRegistration {
    fn default() -> Self {
        ActionParserRegistration::new()
    }
}

impl fmt::Debug for ActionParserRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.parsers.keys()).finish()
    }
}

/// State carried through one parse: the registries to dispatch with and
/// the warnings collected so far.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    element_parsers: Arc<ElementParserRegistration>,
    action_parsers: Arc<ActionParserRegistration>,
    warnings: Vec<ParseWarning>,
}

impl ParseContext {
    pub fn new() -> Self {
        ParseContext::default()
    }

    pub fn with_registrations(
        element_parsers: Arc<ElementParserRegistration>,
        action_parsers: Arc<ActionParserRegistration>,
    ) -> Self {
        ParseContext {
            element_parsers,
            action_parsers,
            warnings: Vec::new(),
        }
    }

    pub fn element_parser_registration(&self) -> &Arc<ElementParserRegistration> {
        &self.element_parsers
    }

    pub fn action_parser_registration(&self) -> &Arc<ActionParserRegistration> {
        &self.action_parsers
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<ParseWarning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn warn(&mut self, status_code: WarningStatusCode, reason: impl Into<String>) {
        let warning = ParseWarning::new(status_code, reason);
        tracing::debug!(status = ?warning.status_code, reason = %warning.reason, "parse warning");
        self.warnings.push(warning);
    }

    /// Dispatch on `"type"`. Unregistered types become
    /// [`CardElement::Unknown`] with an `UnknownElementType` warning.
    pub fn parse_element(&mut self, json: &Value) -> Result<CardElement, ParseError> {
        let type_string = get_type_string(json)?;
        let parser = self.element_parsers.get_parser(&type_string);
        match parser {
            Some(parser) => {
                tracing::debug!(element_type = %type_string, "parsing element");
                parser.deserialize(self, json)
            }
            None => {
                self.warn(
                    WarningStatusCode::UnknownElementType,
                    format!("Unknown element type '{}'", type_string),
                );
                Ok(CardElement::Unknown(UnknownElement::from_json(json, type_string)))
            }
        }
    }

    pub fn parse_element_from_str(&mut self, text: &str) -> Result<CardElement, ParseError> {
        let json = json_from_str(text)?;
        self.parse_element(&json)
    }

    /// Dispatch on `"type"`. Unregistered types become
    /// [`Action::Unknown`] with an `UnknownActionElementType` warning.
    pub fn parse_action(&mut self, json: &Value) -> Result<Action, ParseError> {
        let type_string = get_type_string(json)?;
        let parser = self.action_parsers.get_parser(&type_string);
        match parser {
            Some(parser) => {
                tracing::debug!(action_type = %type_string, "parsing action");
                parser.deserialize(self, json)
            }
            None => {
                self.warn(
                    WarningStatusCode::UnknownActionElementType,
                    format!("Unknown action type '{}'", type_string),
                );
                Ok(Action::Unknown(UnknownAction::from_json(json, type_string)))
            }
        }
    }

    /// Parse either a single element object or an array of them.
    pub fn parse_elements(&mut self, json: &Value) -> Result<Vec<CardElement>, ParseError> {
        match json {
            Value::Array(items) => items.iter().map(|item| self.parse_element(item)).collect(),
            other => Ok(vec![self.parse_element(other)?]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Host parser that reads only the id of a `Rating` element.
    struct RatingParser;

    impl ElementParser for RatingParser {
        fn deserialize(
            &self,
            _ctx: &mut ParseContext,
            json: &Value,
        ) -> Result<CardElement, ParseError> {
            let mut unknown = UnknownElement::from_json(json, "Rating".to_string());
            unknown.base.additional_properties.remove("stars");
            Ok(CardElement::Unknown(unknown))
        }
    }

    #[test]
    fn test_built_ins_registered() {
        let reg = ElementParserRegistration::new();
        for t in CardElementType::BUILT_IN {
            assert!(reg.get_parser(t.as_str()).is_some(), "missing {}", t);
        }
        assert_eq!(reg.type_strings().count(), CardElementType::BUILT_IN.len());

        let actions = ActionParserRegistration::new();
        assert!(actions.get_parser("Action.Submit").is_some());
        assert!(actions.get_parser("Action.OpenUrl").is_some());
    }

    #[test]
    fn test_override_of_built_in_rejected() {
        let mut reg = ElementParserRegistration::new();
        let err = reg
            .add_parser("Input.Date", Arc::new(RatingParser))
            .unwrap_err();
        assert_eq!(err.status_code(), ErrorStatusCode::UnsupportedParserOverride);

        reg.remove_parser("Input.Date");
        assert!(reg.get_parser("Input.Date").is_some());
    }

    #[test]
    fn test_host_parser_add_and_remove() {
        let mut reg = ElementParserRegistration::new();
        reg.add_parser("Rating", Arc::new(RatingParser)).unwrap();

        let mut ctx = ParseContext::with_registrations(
            Arc::new(reg.clone()),
            Arc::new(ActionParserRegistration::new()),
        );
        let element = ctx
            .parse_element(&json!({"type": "Rating", "id": "r", "stars": 4}))
            .unwrap();
        assert!(ctx.warnings().is_empty());
        assert!(element.base().additional_properties.is_empty());

        reg.remove_parser("Rating");
        assert!(reg.get_parser("Rating").is_none());
    }

    #[test]
    fn test_unknown_element_warns() {
        let mut ctx = ParseContext::new();
        let element = ctx
            .parse_element_from_str(r#"{"type": "Media", "sources": []}"#)
            .unwrap();
        assert_eq!(element.type_string(), "Media");
        let warnings = ctx.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].status_code, WarningStatusCode::UnknownElementType);
        assert!(ctx.warnings().is_empty());
    }

    #[test]
    fn test_unknown_types_tolerate_wrong_kind_base_properties() {
        let mut ctx = ParseContext::new();
        let element_json = json!({"type": "Media", "separator": "yes", "spacing": 3});
        let element = ctx.parse_element(&element_json).unwrap();
        assert_eq!(element.serialize_to_json_value(), element_json);

        let action_json = json!({"type": "Action.Future", "title": 7, "isEnabled": "no"});
        let action = ctx.parse_action(&action_json).unwrap();
        assert_eq!(action.type_string(), "Action.Future");
        assert!(action.base().title.is_empty());
        assert_eq!(action.serialize_to_json_value(), action_json);

        let codes: Vec<_> = ctx.warnings().iter().map(|w| w.status_code).collect();
        assert_eq!(
            codes,
            vec![
                WarningStatusCode::UnknownElementType,
                WarningStatusCode::UnknownActionElementType
            ]
        );
    }

    #[test]
    fn test_missing_type_is_fatal() {
        let mut ctx = ParseContext::new();
        let err = ctx.parse_element(&json!({"id": "x"})).unwrap_err();
        assert_eq!(err.status_code(), ErrorStatusCode::RequiredPropertyMissing);
    }

    #[test]
    fn test_parse_elements_accepts_array_or_object() {
        let mut ctx = ParseContext::new();
        let many = ctx
            .parse_elements(&json!([
                {"type": "Input.Date", "id": "a"},
                {"type": "Input.Time", "id": "b"}
            ]))
            .unwrap();
        assert_eq!(many.len(), 2);
        let one = ctx
            .parse_elements(&json!({"type": "Input.Number", "id": "c"}))
            .unwrap();
        assert_eq!(one[0].element_type(), CardElementType::NumberInput);
    }
}
