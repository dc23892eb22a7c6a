use passgen_core::{
    config::PasswordConfig,
    gateway::{ErrorResponse, GatewayRequest, GatewayResponse, PasswordResponse},
    handle,
};

/// Handle a request using the default configuration
pub fn handle_default(request: GatewayRequest) -> GatewayResponse {
    handle(&PasswordConfig::default(), &request)
}

/// Handle a request with the provided plain JSON body
pub fn handle_body(body: &str) -> GatewayResponse {
    handle_default(GatewayRequest::with_body(body))
}

/// Assert the response was successful and parse its body
pub fn success_body(response: &GatewayResponse) -> PasswordResponse {
    assert_eq!(response.status_code, 200, "unexpected response: {response:?}");
    serde_json::from_str(&response.body).unwrap()
}

/// Assert the response was an error and parse its body
pub fn error_body(response: &GatewayResponse) -> ErrorResponse {
    assert_eq!(response.status_code, 500, "unexpected response: {response:?}");
    serde_json::from_str(&response.body).unwrap()
}
