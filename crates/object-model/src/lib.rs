//! adaptivecards: typed object model for Adaptive Card elements.
//!
//! Parses the JSON of individual card elements (the `Input.*` family and
//! the actions they embed) into typed structs and serializes them back.
//! Every element type has a known-properties set; JSON properties outside
//! it are preserved in `additional_properties` so a parse/serialize cycle
//! loses nothing. Dispatch on the JSON `"type"` goes through a
//! [`ParseContext`], which also collects non-fatal [`ParseWarning`]s.
//!
//! ```
//! use adaptivecards::{CardElement, ParseContext};
//!
//! let mut ctx = ParseContext::new();
//! let element = ctx
//!     .parse_element_from_str(r#"{"type": "Input.Date", "id": "due", "min": "2024-01-01"}"#)
//!     .unwrap();
//! match &element {
//!     CardElement::DateInput(date) => assert_eq!(date.min, "2024-01-01"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert!(ctx.warnings().is_empty());
//! ```

pub mod actions;
pub mod card_element;
pub mod element;
pub mod enums;
pub mod error;
pub mod input;
pub mod inputs;
pub mod parse_util;
pub mod registration;
pub mod schema_key;

pub use actions::{Action, BaseActionElement, OpenUrlAction, SubmitAction, UnknownAction};
pub use card_element::{CardElement, UnknownElement};
pub use element::BaseCardElement;
pub use enums::{
    ActionType, AssociatedInputs, CardElementType, ChoiceSetStyle, HeightType, SchemaEnum,
    Spacing, TextInputStyle,
};
pub use error::{ErrorStatusCode, ParseError, ParseWarning, WarningStatusCode};
pub use input::BaseInputElement;
pub use inputs::{
    Choice, ChoiceSetInput, ChoiceSetInputParser, DateInput, DateInputParser, NumberInput,
    NumberInputParser, TextInput, TextInputParser, TimeInput, TimeInputParser, ToggleInput,
    ToggleInputParser,
};
pub use registration::{
    ActionParser, ActionParserRegistration, ElementParser, ElementParserRegistration,
    ParseContext,
};
pub use schema_key::SchemaKey;
