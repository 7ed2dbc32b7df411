//! Parse failures and non-fatal parse warnings.

use serde::Serialize;

/// Classifies a fatal parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorStatusCode {
    /// The input text is not well-formed JSON.
    InvalidJson,
    /// A property the element cannot exist without is absent or empty.
    RequiredPropertyMissing,
    /// A property is present but holds a value of the wrong JSON kind.
    InvalidPropertyValue,
    /// A host tried to replace or register over a built-in parser.
    UnsupportedParserOverride,
    /// Raised by host-supplied parsers.
    CustomError,
}

/// Classifies a recoverable problem found while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WarningStatusCode {
    UnknownElementType,
    UnknownActionElementType,
    UnknownEnumValue,
    InvalidValue,
    EmptyLabelInRequiredInput,
    CustomWarning,
}

/// A fatal error raised while turning card JSON into typed elements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    status_code: ErrorStatusCode,
    message: String,
}

impl ParseError {
    pub fn new(status_code: ErrorStatusCode, message: impl Into<String>) -> Self {
        ParseError {
            status_code,
            message: message.into(),
        }
    }

    pub fn required_property_missing(property: &str) -> Self {
        ParseError::new(
            ErrorStatusCode::RequiredPropertyMissing,
            format!("Property is required but was found empty: {}", property),
        )
    }

    pub fn invalid_property_value(property: &str, expected: &str) -> Self {
        ParseError::new(
            ErrorStatusCode::InvalidPropertyValue,
            format!(
                "Value for property {} was invalid. Expected type {}.",
                property, expected
            ),
        )
    }

    pub fn status_code(&self) -> ErrorStatusCode {
        self.status_code
    }

    pub fn reason(&self) -> &str {
        &self.message
    }

    /// Render as `{"statusCode": ..., "reason": ...}` for tooling output.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "statusCode": self.status_code,
            "reason": self.message,
        })
    }
}

/// A recoverable problem recorded during parsing. The affected property
/// falls back to its default and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseWarning {
    pub status_code: WarningStatusCode,
    pub reason: String,
}

impl ParseWarning {
    pub fn new(status_code: WarningStatusCode, reason: impl Into<String>) -> Self {
        ParseWarning {
            status_code,
            reason: reason.into(),
        }
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "statusCode": self.status_code,
            "reason": self.reason,
        })
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_reason() {
        let err = ParseError::required_property_missing("id");
        assert_eq!(err.status_code(), ErrorStatusCode::RequiredPropertyMissing);
        assert_eq!(err.to_string(), err.reason());
        assert!(err.reason().contains("id"));
    }

    #[test]
    fn status_codes_render_camel_case() {
        let err = ParseError::new(ErrorStatusCode::InvalidJson, "bad");
        assert_eq!(
            err.to_json_value(),
            serde_json::json!({"statusCode": "invalidJson", "reason": "bad"})
        );

        let warning = ParseWarning::new(WarningStatusCode::UnknownEnumValue, "nope");
        assert_eq!(warning.to_json_value()["statusCode"], "unknownEnumValue");
    }
}
