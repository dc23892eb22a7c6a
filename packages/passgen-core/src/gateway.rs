use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

/// Header name for the response content type
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Header name for the CORS allowed origin
pub const ALLOW_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";

/// Incoming API gateway proxy event
///
/// Only the fields used by the handler are read, everything else in the
/// event is ignored
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    /// Raw request body text
    #[serde(default)]
    pub body: Option<String>,

    /// Whether the gateway delivered the body base64 encoded
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayRequest {
    /// Create a request with a plain text body
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            is_base64_encoded: false,
        }
    }
}

/// API gateway proxy response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON encoded response body
    pub body: String,
}

/// Body of a successful response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PasswordResponse {
    /// The generated password
    pub password: String,
    /// Length used to generate the password
    pub length: usize,
}

/// Body of a failed response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    /// Description of the failure
    pub error: String,
}

/// Headers present on every response
pub fn standard_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            CONTENT_TYPE_HEADER.to_string(),
            mime::APPLICATION_JSON.essence_str().to_string(),
        ),
        (ALLOW_ORIGIN_HEADER.to_string(), "*".to_string()),
    ])
}

impl GatewayResponse {
    fn new(status: StatusCode, body: String) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: standard_headers(),
            body,
        }
    }

    /// Create a 200 response carrying the generated password
    pub fn success(response: &PasswordResponse) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(response)?;
        Ok(Self::new(StatusCode::OK, body))
    }

    /// Create a 500 response describing the failure
    pub fn error(message: impl Into<String>) -> Self {
        let body = json!({ "error": message.into() }).to_string();
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, body)
    }
}
