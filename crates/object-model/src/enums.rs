//! Typed enumerations for element types and enumerated property values.

use serde::{Serialize, Serializer};

/// An enumerated property value with a canonical JSON spelling.
pub trait SchemaEnum: Sized + Copy + 'static {
    /// Human-readable name used in warning messages.
    const NAME: &'static str;

    fn as_str(self) -> &'static str;

    /// Case-insensitive lookup of a JSON string.
    fn from_json_str(text: &str) -> Option<Self>;
}

macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl SchemaEnum for $name {
            const NAME: &'static str = $label;

            fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }

            fn from_json_str(text: &str) -> Option<Self> {
                $(
                    if text.eq_ignore_ascii_case($text) {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

schema_enum! {
    /// Vertical gap placed before an element.
    Spacing as "spacing" {
        #[default]
        Default => "default",
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
        Padding => "padding",
    }
}

schema_enum! {
    HeightType as "height" {
        #[default]
        Auto => "auto",
        Stretch => "stretch",
    }
}

schema_enum! {
    /// Keyboard/validation hint for `Input.Text`.
    TextInputStyle as "text input style" {
        #[default]
        Text => "text",
        Tel => "tel",
        Url => "url",
        Email => "email",
        Password => "password",
    }
}

schema_enum! {
    ChoiceSetStyle as "choice set style" {
        #[default]
        Compact => "compact",
        Expanded => "expanded",
        Filtered => "filtered",
    }
}

schema_enum! {
    /// Which inputs an `Action.Submit` gathers.
    AssociatedInputs as "associated inputs" {
        #[default]
        Auto => "auto",
        None => "none",
    }
}

/// The element kinds this object model understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardElementType {
    ChoiceSetInput,
    DateInput,
    NumberInput,
    TextInput,
    TimeInput,
    ToggleInput,
    /// Any `"type"` without a registered parser.
    Unknown,
}

impl CardElementType {
    pub const BUILT_IN: [CardElementType; 6] = [
        CardElementType::ChoiceSetInput,
        CardElementType::DateInput,
        CardElementType::NumberInput,
        CardElementType::TextInput,
        CardElementType::TimeInput,
        CardElementType::ToggleInput,
    ];

    /// JSON `"type"` string. `Unknown` has none.
    pub fn as_str(self) -> &'static str {
        match self {
            CardElementType::ChoiceSetInput => "Input.ChoiceSet",
            CardElementType::DateInput => "Input.Date",
            CardElementType::NumberInput => "Input.Number",
            CardElementType::TextInput => "Input.Text",
            CardElementType::TimeInput => "Input.Time",
            CardElementType::ToggleInput => "Input.Toggle",
            CardElementType::Unknown => "Unknown",
        }
    }

    pub fn from_type_str(text: &str) -> CardElementType {
        CardElementType::BUILT_IN
            .into_iter()
            .find(|t| t.as_str() == text)
            .unwrap_or(CardElementType::Unknown)
    }
}

impl std::fmt::Display for CardElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The action kinds this object model understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionType {
    Submit,
    OpenUrl,
    Unknown,
}

impl ActionType {
    pub const BUILT_IN: [ActionType; 2] = [ActionType::Submit, ActionType::OpenUrl];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Submit => "Action.Submit",
            ActionType::OpenUrl => "Action.OpenUrl",
            ActionType::Unknown => "Unknown",
        }
    }

    pub fn from_type_str(text: &str) -> ActionType {
        ActionType::BUILT_IN
            .into_iter()
            .find(|t| t.as_str() == text)
            .unwrap_or(ActionType::Unknown)
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
