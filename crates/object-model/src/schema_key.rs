//! Property names used in Adaptive Card JSON.

/// Every JSON property the object model reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKey {
    AssociatedInputs,
    Choices,
    Data,
    ErrorMessage,
    Height,
    IconUrl,
    Id,
    InlineAction,
    IsEnabled,
    IsMultiSelect,
    IsMultiline,
    IsRequired,
    IsVisible,
    Label,
    Max,
    MaxLength,
    Min,
    Placeholder,
    Regex,
    Separator,
    Spacing,
    Style,
    Title,
    Tooltip,
    Type,
    Url,
    Value,
    ValueOff,
    ValueOn,
    Wrap,
}

impl SchemaKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKey::AssociatedInputs => "associatedInputs",
            SchemaKey::Choices => "choices",
            SchemaKey::Data => "data",
            SchemaKey::ErrorMessage => "errorMessage",
            SchemaKey::Height => "height",
            SchemaKey::IconUrl => "iconUrl",
            SchemaKey::Id => "id",
            SchemaKey::InlineAction => "inlineAction",
            SchemaKey::IsEnabled => "isEnabled",
            SchemaKey::IsMultiSelect => "isMultiSelect",
            SchemaKey::IsMultiline => "isMultiline",
            SchemaKey::IsRequired => "isRequired",
            SchemaKey::IsVisible => "isVisible",
            SchemaKey::Label => "label",
            SchemaKey::Max => "max",
            SchemaKey::MaxLength => "maxLength",
            SchemaKey::Min => "min",
            SchemaKey::Placeholder => "placeholder",
            SchemaKey::Regex => "regex",
            SchemaKey::Separator => "separator",
            SchemaKey::Spacing => "spacing",
            SchemaKey::Style => "style",
            SchemaKey::Title => "title",
            SchemaKey::Tooltip => "tooltip",
            SchemaKey::Type => "type",
            SchemaKey::Url => "url",
            SchemaKey::Value => "value",
            SchemaKey::ValueOff => "valueOff",
            SchemaKey::ValueOn => "valueOn",
            SchemaKey::Wrap => "wrap",
        }
    }
}

impl std::fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
