use crate::{config::PasswordConfig, error::PasswordRequestError};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::{Value, value::RawValue};
use std::{borrow::Cow, collections::HashMap};

/// Parameters provided in the request body
#[derive(Debug, Default, Clone)]
pub struct PasswordParameters {
    /// Requested length exactly as written in the body, validated by
    /// [PasswordParameters::effective_length]
    pub length: Option<Box<RawValue>>,
}

impl PasswordParameters {
    /// Parse the parameters from the request `body`
    ///
    /// A missing, empty, undecodable or malformed body is treated as
    /// providing no parameters. A body that is valid JSON but not an
    /// object is rejected.
    pub fn from_body(body: Option<&str>, is_base64: bool) -> Result<Self, PasswordRequestError> {
        let body = match body {
            Some(body) if !body.is_empty() => body,
            _ => return Ok(Self::default()),
        };

        let body: Cow<'_, str> = if is_base64 {
            match decode_base64_body(body) {
                Some(value) => Cow::Owned(value),
                None => return Ok(Self::default()),
            }
        } else {
            Cow::Borrowed(body)
        };

        let mut fields: HashMap<String, Box<RawValue>> = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(error) => {
                // Valid JSON that isn't an object is rejected rather than defaulted
                if let Ok(value) = serde_json::from_str::<Value>(&body) {
                    return Err(PasswordRequestError::BodyNotObject(json_kind(&value)));
                }

                tracing::debug!(?error, "request body was not valid json, using defaults");
                return Ok(Self::default());
            }
        };

        Ok(Self {
            length: fields.remove("length"),
        })
    }

    /// Determine the length to generate, falling back to the configured
    /// default when no length was requested
    pub fn effective_length(&self, config: &PasswordConfig) -> Result<usize, PasswordRequestError> {
        match &self.length {
            Some(length) => parse_length(length.get(), config.max_length),
            None => Ok(config.default_length),
        }
    }
}

/// Parse a raw JSON length literal, only integer literals are accepted
fn parse_length(literal: &str, max_length: usize) -> Result<usize, PasswordRequestError> {
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, literal),
    };

    if digits.is_empty() || !digits.bytes().all(|value| value.is_ascii_digit()) {
        return Err(PasswordRequestError::InvalidLength(literal_kind(literal)));
    }

    if negative {
        // -0 is still zero
        if digits.bytes().all(|value| value == b'0') {
            return Ok(0);
        }

        return Err(PasswordRequestError::NegativeLength(literal.to_string()));
    }

    digits
        .parse::<usize>()
        .ok()
        .filter(|length| *length <= max_length)
        .ok_or_else(|| PasswordRequestError::LengthTooLarge {
            length: literal.to_string(),
            max: max_length,
        })
}

/// Name of the kind of JSON value a raw non integer literal holds
fn literal_kind(literal: &str) -> &'static str {
    match literal.as_bytes().first() {
        Some(b'n') => "null",
        Some(b't' | b'f') => "boolean",
        Some(b'"') => "string",
        Some(b'[') => "array",
        Some(b'{') => "object",
        _ => "float",
    }
}

/// Decode a base64 encoded body into text
fn decode_base64_body(body: &str) -> Option<String> {
    let bytes = match STANDARD.decode(body.trim()) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(?error, "request body was not valid base64, using defaults");
            return None;
        }
    };

    match String::from_utf8(bytes) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!(?error, "request body was not valid utf8, using defaults");
            None
        }
    }
}

/// Name of the kind of JSON value for error messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod test {
    use super::{decode_base64_body, json_kind, literal_kind, parse_length};
    use crate::error::PasswordRequestError;
    use serde_json::json;

    #[test]
    fn test_decode_base64_body() {
        assert_eq!(
            decode_base64_body("eyJsZW5ndGgiOiA4fQ=="),
            Some(r#"{"length": 8}"#.to_string())
        );
    }

    #[test]
    fn test_decode_invalid_base64_body() {
        assert_eq!(decode_base64_body("!!!not_base64!!!"), None);
    }

    #[test]
    fn test_decode_non_utf8_body() {
        // 0xFF 0xFE
        assert_eq!(decode_base64_body("//4="), None);
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(1.5)), "float");
        assert_eq!(json_kind(&json!(3)), "number");
        assert_eq!(json_kind(&json!("abc")), "string");
        assert_eq!(json_kind(&json!([1])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }

    #[test]
    fn test_literal_kind() {
        assert_eq!(literal_kind("null"), "null");
        assert_eq!(literal_kind("false"), "boolean");
        assert_eq!(literal_kind("1.5"), "float");
        assert_eq!(literal_kind("1e3"), "float");
        assert_eq!(literal_kind(r#""12""#), "string");
        assert_eq!(literal_kind("[12]"), "array");
        assert_eq!(literal_kind("{}"), "object");
    }

    #[test]
    fn test_parse_length_integers() {
        assert_eq!(parse_length("0", 10).unwrap(), 0);
        assert_eq!(parse_length("-0", 10).unwrap(), 0);
        assert_eq!(parse_length("10", 10).unwrap(), 10);
    }

    #[test]
    fn test_parse_length_out_of_range() {
        assert!(matches!(
            parse_length("11", 10),
            Err(PasswordRequestError::LengthTooLarge { max: 10, .. })
        ));
        assert!(matches!(
            parse_length("-100000000000000000000000", 10),
            Err(PasswordRequestError::NegativeLength(_))
        ));
    }

    #[test]
    fn test_parse_length_non_integers() {
        assert!(matches!(
            parse_length("0.0", 10),
            Err(PasswordRequestError::InvalidLength("float"))
        ));
        assert!(matches!(
            parse_length("-1.5", 10),
            Err(PasswordRequestError::InvalidLength("float"))
        ));
    }
}
