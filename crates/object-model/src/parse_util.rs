//! Field extraction helpers shared by every element and action parser.
//!
//! Each helper reads one property, applies the schema default when the
//! property is absent or `null`, and fails with
//! [`ErrorStatusCode::InvalidPropertyValue`] when the JSON kind is wrong.

use serde_json::{Map, Value};

use crate::enums::SchemaEnum;
use crate::error::{ErrorStatusCode, ParseError, WarningStatusCode};
use crate::registration::ParseContext;
use crate::schema_key::SchemaKey;

pub fn json_from_str(text: &str) -> Result<Value, ParseError> {
    serde_json::from_str(text).map_err(|e| {
        ParseError::new(
            ErrorStatusCode::InvalidJson,
            format!("Expected JSON Object: {}", e),
        )
    })
}

/// Read the `"type"` property.
pub fn get_type_string(json: &Value) -> Result<String, ParseError> {
    match json.get(SchemaKey::Type.as_str()) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(ParseError::required_property_missing(SchemaKey::Type.as_str())),
    }
}

/// Fail unless `"type"` names exactly `expected`. Only an absent `"type"`
/// counts as missing; any other mismatch is an invalid value.
pub fn expect_type_string(json: &Value, expected: &str) -> Result<(), ParseError> {
    match json.get(SchemaKey::Type.as_str()) {
        None => Err(ParseError::required_property_missing(SchemaKey::Type.as_str())),
        Some(Value::String(actual)) if actual == expected => Ok(()),
        Some(actual) => Err(ParseError::new(
            ErrorStatusCode::InvalidPropertyValue,
            format!(
                "The JSON element did not have the expected type '{}'. Actual type: {}",
                expected, actual
            ),
        )),
    }
}

pub fn get_string(json: &Value, key: SchemaKey, required: bool) -> Result<String, ParseError> {
    match json.get(key.as_str()) {
        None | Some(Value::Null) => {
            if required {
                Err(ParseError::required_property_missing(key.as_str()))
            } else {
                Ok(String::new())
            }
        }
        Some(Value::String(s)) => {
            if required && s.is_empty() {
                Err(ParseError::required_property_missing(key.as_str()))
            } else {
                Ok(s.clone())
            }
        }
        Some(_) => Err(ParseError::invalid_property_value(key.as_str(), "string")),
    }
}

pub fn get_bool(
    json: &Value,
    key: SchemaKey,
    default: bool,
    required: bool,
) -> Result<bool, ParseError> {
    match json.get(key.as_str()) {
        None | Some(Value::Null) => {
            if required {
                Err(ParseError::required_property_missing(key.as_str()))
            } else {
                Ok(default)
            }
        }
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ParseError::invalid_property_value(key.as_str(), "bool")),
    }
}

pub fn get_optional_f64(json: &Value, key: SchemaKey) -> Result<Option<f64>, ParseError> {
    match json.get(key.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(_) => Err(ParseError::invalid_property_value(key.as_str(), "number")),
    }
}

pub fn get_optional_u32(json: &Value, key: SchemaKey) -> Result<Option<u32>, ParseError> {
    match json.get(key.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| ParseError::invalid_property_value(key.as_str(), "unsigned integer")),
        Some(_) => Err(ParseError::invalid_property_value(
            key.as_str(),
            "unsigned integer",
        )),
    }
}

/// Read an enumerated property. An unrecognized value is not fatal: the
/// default is used and an `UnknownEnumValue` warning is recorded.
pub fn get_enum<E: SchemaEnum>(
    ctx: &mut ParseContext,
    json: &Value,
    key: SchemaKey,
    default: E,
) -> Result<E, ParseError> {
    match json.get(key.as_str()) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::String(s)) => match E::from_json_str(s) {
            Some(v) => Ok(v),
            None => {
                ctx.warn(
                    WarningStatusCode::UnknownEnumValue,
                    format!(
                        "Unknown {} value '{}'. Falling back to '{}'.",
                        E::NAME,
                        s,
                        default.as_str()
                    ),
                );
                Ok(default)
            }
        },
        Some(_) => Err(ParseError::invalid_property_value(key.as_str(), "string")),
    }
}

/// A nested object, or `None` when absent or `null`.
pub fn get_object(json: &Value, key: SchemaKey) -> Result<Option<&Value>, ParseError> {
    match json.get(key.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(v @ Value::Object(_)) => Ok(Some(v)),
        Some(_) => Err(ParseError::invalid_property_value(key.as_str(), "object")),
    }
}

/// A nested array; absent or `null` reads as empty.
pub fn get_array(json: &Value, key: SchemaKey) -> Result<&[Value], ParseError> {
    match json.get(key.as_str()) {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(ParseError::invalid_property_value(key.as_str(), "array")),
    }
}

/// Properties of `json` that are not in `known`, kept verbatim.
pub fn additional_properties(json: &Value, known: &[SchemaKey]) -> Map<String, Value> {
    let Some(obj) = json.as_object() else {
        return Map::new();
    };
    obj.iter()
        .filter(|(name, _)| !known.iter().any(|k| k.as_str() == name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Insert `value` under `key` unless it is empty.
pub(crate) fn insert_non_empty(map: &mut Map<String, Value>, key: SchemaKey, value: &str) {
    if !value.is_empty() {
        map.insert(key.as_str().to_string(), Value::String(value.to_string()));
    }
}
